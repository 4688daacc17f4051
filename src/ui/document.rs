//! Root document shell and page composition.

use askama::Template;
use rand::Rng;

use crate::config::{ChatWidgetConfig, SiteConfig};
use crate::content::SiteContent;
use crate::ui::components::{ButtonSize, ButtonVariant, LinkButton};
use crate::ui::html::js_string;
use crate::ui::navbar::{NavState, Navbar};
use crate::ui::particles::{PARTICLE_COUNT, Particle, generate_particles};
use crate::ui::sections::{
    AboutSection, ContactSection, Footer, HeroSection, ServicesSection, TestimonialsSection,
};

/// Title of the 404 page.
pub const NOT_FOUND_TITLE: &str = "Página no encontrada";

/// Loader for the customer-chat widget.
///
/// The SDK is fetched asynchronously once the window has loaded and started
/// with the configured site token. Values are pre-encoded as JavaScript
/// string literals.
#[derive(Template, Debug, Clone)]
#[template(path = "chat_widget.html")]
pub struct ChatWidgetLoader {
    base_url: String,
    sdk_url: String,
    token: String,
}

impl ChatWidgetLoader {
    /// `None` when the widget is inactive.
    pub fn from_config(widget: &ChatWidgetConfig) -> Option<Self> {
        widget.is_active().then(|| Self {
            base_url: js_string(widget.base_url.trim_end_matches('/')),
            sdk_url: js_string(&widget.sdk_url()),
            token: js_string(&widget.website_token),
        })
    }
}

#[derive(Template, Debug, Clone)]
#[template(path = "document.html")]
struct Document<'a> {
    lang: &'a str,
    title: String,
    description: &'a str,
    keywords: String,
    chat_widget: Option<ChatWidgetLoader>,
    body: &'a str,
}

/// Wrap `body` in the full HTML document.
pub fn render_document(
    site: &SiteConfig,
    widget: &ChatWidgetConfig,
    page_title: Option<&str>,
    body: &str,
) -> askama::Result<String> {
    Document {
        lang: &site.lang,
        title: site.page_title(page_title),
        description: &site.description,
        keywords: site.keywords.join(", "),
        chat_widget: ChatWidgetLoader::from_config(widget),
        body,
    }
    .render()
}

/// Body of the landing page: navbar, every section, footer.
#[derive(Template, Debug, Clone)]
#[template(path = "landing.html")]
struct LandingBody<'a> {
    navbar: Navbar<'a>,
    hero: HeroSection<'a>,
    services: ServicesSection<'a>,
    about: AboutSection<'a>,
    testimonials: TestimonialsSection<'a>,
    contact: ContactSection<'a>,
    footer: Footer<'a>,
}

impl<'a> LandingBody<'a> {
    fn new(content: &'a SiteContent, particles: &'a [Particle], year: i32) -> Self {
        Self {
            navbar: Navbar::new(content, &NavState::default()),
            hero: HeroSection::new(content, particles),
            services: ServicesSection::new(content),
            about: AboutSection::new(content),
            testimonials: TestimonialsSection::new(content),
            contact: ContactSection::new(content),
            footer: Footer {
                brand: content.brand,
                year,
            },
        }
    }
}

/// Landing body with a fresh particle set drawn from `rng`.
pub fn render_landing_body<R: Rng>(
    content: &SiteContent,
    rng: &mut R,
    year: i32,
) -> askama::Result<String> {
    let particles = generate_particles(rng, PARTICLE_COUNT);
    LandingBody::new(content, &particles, year).render()
}

/// Complete landing page document.
pub fn render_landing<R: Rng>(
    site: &SiteConfig,
    widget: &ChatWidgetConfig,
    content: &SiteContent,
    rng: &mut R,
    year: i32,
) -> askama::Result<String> {
    let body = render_landing_body(content, rng, year)?;
    render_document(site, widget, None, &body)
}

#[derive(Template, Debug, Clone)]
#[template(path = "not_found.html")]
struct NotFoundBody<'a> {
    navbar: Navbar<'a>,
    message: &'static str,
    home: LinkButton<'static>,
}

/// 404 page rendered in the same shell.
pub fn render_not_found(
    site: &SiteConfig,
    widget: &ChatWidgetConfig,
    content: &SiteContent,
) -> askama::Result<String> {
    let body = NotFoundBody {
        navbar: Navbar::new(content, &NavState::default()),
        message: NOT_FOUND_TITLE,
        home: LinkButton::new(ButtonVariant::Primary, ButtonSize::Lg, "/", "Volver al inicio"),
    }
    .render()?;
    render_document(site, widget, Some(NOT_FOUND_TITLE), &body)
}
