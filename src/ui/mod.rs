//! Server-rendered markup.
//!
//! Every page is built from askama templates (`templates/`) per request; the
//! browser-side behavior (navbar state, reveal on scroll) is layered on by
//! web components in `static/js/site.js`.
//!
//! # Structure
//!
//! - [`document`]: Root shell, chat widget loader and page composition
//! - [`navbar`]: Scroll-aware navigation bar and its state
//! - [`sections`]: Hero, services, about, testimonials, contact and footer
//! - [`particles`]: Randomized hero particles
//! - [`components`]: Reusable markup pieces
//! - [`html`]: Script literal and style helpers

pub mod components;
pub mod document;
pub mod html;
pub mod navbar;
pub mod particles;
pub mod sections;

pub use document::{render_landing, render_not_found};
