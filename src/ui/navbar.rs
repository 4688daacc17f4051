//! Fixed navigation bar.
//!
//! The bar has two pieces of state: the page scroll offset and whether the
//! mobile menu is open. [`NavState`] models both; the server renders the
//! initial state and `static/js/site.js` (`<site-navbar>`) applies the same
//! transitions in the browser by toggling the classes produced here.

use askama::Template;

use crate::content::{NavLink, SiteContent};
use crate::ui::components::{ButtonSize, ButtonVariant, LinkButton};
use crate::ui::html::stagger;

/// Scroll offset, in pixels, past which the bar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Class added to the header once scrolled past [`SCROLL_THRESHOLD`].
pub const SCROLLED_CLASS: &str = "is-scrolled";
/// Class added to the header while the mobile menu is open.
pub const OPEN_CLASS: &str = "is-open";

/// Navbar UI state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavState {
    pub scroll_y: f64,
    pub menu_open: bool,
}

impl NavState {
    /// True strictly above the threshold.
    pub fn is_scrolled(&self) -> bool {
        self.scroll_y > SCROLL_THRESHOLD
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a mobile link closes the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn header_class(&self) -> String {
        let mut class = String::from("navbar");
        if self.is_scrolled() {
            class.push(' ');
            class.push_str(SCROLLED_CLASS);
        }
        if self.menu_open {
            class.push(' ');
            class.push_str(OPEN_CLASS);
        }
        class
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open { "true" } else { "false" }
    }
}

/// Link with its entrance delay resolved.
#[derive(Debug, Clone)]
pub struct NavItem<'a> {
    pub href: &'a str,
    pub label: &'a str,
    pub style: String,
}

impl<'a> NavItem<'a> {
    fn staggered(links: &'a [NavLink], base: f64) -> Vec<Self> {
        links
            .iter()
            .enumerate()
            .map(|(index, link)| Self {
                href: link.href,
                label: link.label,
                style: stagger(base, 0.1, index),
            })
            .collect()
    }
}

/// The navbar rendered in a given [`NavState`].
#[derive(Template, Debug, Clone)]
#[template(path = "navbar.html")]
pub struct Navbar<'a> {
    content: &'a SiteContent,
    threshold: f64,
    header_class: String,
    aria_expanded: &'static str,
    desktop_links: Vec<NavItem<'a>>,
    desktop_cta: LinkButton<'a>,
    mobile_links: Vec<NavItem<'a>>,
}

impl<'a> Navbar<'a> {
    pub fn new(content: &'a SiteContent, state: &NavState) -> Self {
        Self {
            content,
            threshold: SCROLL_THRESHOLD,
            header_class: state.header_class(),
            aria_expanded: state.aria_expanded(),
            desktop_links: NavItem::staggered(content.nav_links, 0.1),
            desktop_cta: LinkButton::new(
                ButtonVariant::Primary,
                ButtonSize::Pill,
                "#contact",
                content.nav_cta,
            ),
            mobile_links: NavItem::staggered(content.mobile_nav_links, 0.0),
        }
    }
}
