//! Hero section.

use askama::Template;

use crate::content::SiteContent;
use crate::ui::components::{ButtonSize, ButtonVariant, LinkButton, StatFigure, StatSize};
use crate::ui::particles::{Particle, ParticleField};

/// Full-height hero with background image, decorations, headline, CTAs and stats.
#[derive(Template, Debug, Clone)]
#[template(path = "sections/hero.html")]
pub struct HeroSection<'a> {
    content: &'a SiteContent,
    particles: ParticleField<'a>,
    pillars: String,
    primary_cta: LinkButton<'a>,
    secondary_cta: LinkButton<'a>,
    stats: Vec<StatFigure<'a>>,
}

impl<'a> HeroSection<'a> {
    pub fn new(content: &'a SiteContent, particles: &'a [Particle]) -> Self {
        Self {
            content,
            particles: ParticleField { particles },
            pillars: content.pillars.join(" • "),
            primary_cta: LinkButton::new(
                ButtonVariant::Primary,
                ButtonSize::Lg,
                "#contact",
                content.primary_cta,
            )
            .with_class("btn-glow"),
            secondary_cta: LinkButton::new(
                ButtonVariant::Outline,
                ButtonSize::Lg,
                "#contact",
                content.secondary_cta,
            ),
            stats: StatFigure::all(content.hero_stats, StatSize::Sm),
        }
    }
}
