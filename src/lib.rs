//! CloudNext landing site
//!
//! Server-rendered marketing page for a business-automation consultancy:
//! hero, services, about, testimonials, contact and footer behind a fixed,
//! scroll-aware navigation bar.
//!
//! # Architecture
//!
//! - **Server**: Axum router serving the rendered page, static assets and a health probe
//! - **UI**: HTML rendered per request + Web Components for browser-side state
//! - **Config**: Layered defaults, YAML file, environment and CLI flags
//!
//! # Modules
//!
//! - [`config`]: Application configuration
//! - [`content`]: Typed page copy
//! - [`server`]: Router and listener
//! - [`ui`]: Markup rendering

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod content;
pub mod error;
pub mod server;
pub mod ui;

use crate::config::AppConfig;
use crate::content::SiteContent;

use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Copy rendered on the landing page.
    pub content: Arc<SiteContent>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            content: Arc::new(SiteContent::cloudnext()),
        }
    }
}
