//! Landing page sections, top to bottom.
//!
//! Each section is a template built from the
//! [`SiteContent`](crate::content::SiteContent) that renders one `<section>`
//! (or the `<footer>`). Anchored sections carry the ids the navigation links
//! point at.

mod about;
mod contact;
mod footer;
mod hero;
mod services;
mod testimonials;

pub use about::AboutSection;
pub use contact::{ContactForm, ContactSection};
pub use footer::Footer;
pub use hero::HeroSection;
pub use services::{ServiceCard, ServicesSection};
pub use testimonials::{StarRating, TestimonialCard, TestimonialsSection};
