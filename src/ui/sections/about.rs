//! About section.

use askama::Template;

use crate::content::SiteContent;
use crate::ui::components::{ButtonSize, ButtonVariant, LinkButton, StatFigure, StatSize};

#[derive(Template, Debug, Clone)]
#[template(path = "sections/about.html")]
pub struct AboutSection<'a> {
    content: &'a SiteContent,
    cta: LinkButton<'static>,
    stats: Vec<StatFigure<'a>>,
}

impl<'a> AboutSection<'a> {
    pub fn new(content: &'a SiteContent) -> Self {
        Self {
            content,
            cta: LinkButton::new(
                ButtonVariant::Secondary,
                ButtonSize::Md,
                "#services",
                "Conoce más",
            ),
            stats: StatFigure::all(content.about_stats, StatSize::Lg),
        }
    }
}
