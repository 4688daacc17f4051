//! Decorative hero particles.
//!
//! A fresh set is generated for every render. The page is rendered once on
//! the server and never hydrated, so the markup a visitor receives is the
//! only render of a given particle set.

use askama::Template;
use rand::Rng;
use std::ops::Range;

/// Particles drawn in the hero.
pub const PARTICLE_COUNT: usize = 20;

/// Horizontal and vertical position, in percent of the hero.
pub const POSITION_RANGE: Range<f64> = 0.0..100.0;
/// Animation start delay, in seconds.
pub const DELAY_RANGE: Range<f64> = 0.0..2.0;
/// Length of one float cycle, in seconds.
pub const DURATION_RANGE: Range<f64> = 3.0..5.0;

/// One floating dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(POSITION_RANGE),
            top: rng.gen_range(POSITION_RANGE),
            delay: rng.gen_range(DELAY_RANGE),
            duration: rng.gen_range(DURATION_RANGE),
        }
    }

    /// CSS custom properties consumed by the `.particle` rule.
    pub fn style(&self) -> String {
        format!(
            "--left: {:.3}%; --top: {:.3}%; --delay: {:.3}s; --duration: {:.3}s",
            self.left, self.top, self.delay, self.duration
        )
    }
}

pub fn generate_particles<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

/// Absolutely positioned container holding one `<span>` per particle.
#[derive(Template, Debug, Clone, Copy)]
#[template(
    source = r#"<div class="particle-field" aria-hidden="true">{% for particle in particles %}<span class="particle" style="{{ particle.style() }}"></span>{% endfor %}</div>"#,
    ext = "html"
)]
pub struct ParticleField<'a> {
    pub particles: &'a [Particle],
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field(particles: &[Particle]) -> String {
        ParticleField { particles }.render().unwrap()
    }

    #[test]
    fn test_particles_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate_particles(&mut rng, 500);
        assert_eq!(particles.len(), 500);

        for p in &particles {
            assert!(POSITION_RANGE.contains(&p.left));
            assert!(POSITION_RANGE.contains(&p.top));
            assert!(DELAY_RANGE.contains(&p.delay));
            assert!(DURATION_RANGE.contains(&p.duration));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_particles(&mut StdRng::seed_from_u64(42), PARTICLE_COUNT);
        let b = generate_particles(&mut StdRng::seed_from_u64(42), PARTICLE_COUNT);
        assert_eq!(a, b);
        assert_eq!(field(&a), field(&b));
    }

    #[test]
    fn test_field_renders_one_span_per_particle() {
        let particles = generate_particles(&mut StdRng::seed_from_u64(1), PARTICLE_COUNT);
        let html = field(&particles);
        assert_eq!(html.matches(r#"class="particle""#).count(), PARTICLE_COUNT);
    }

    #[test]
    fn test_empty_field() {
        assert_eq!(
            field(&[]),
            r#"<div class="particle-field" aria-hidden="true"></div>"#
        );
    }

    #[test]
    fn test_style_format() {
        let p = Particle {
            left: 12.5,
            top: 50.0,
            delay: 1.25,
            duration: 3.5,
        };
        assert_eq!(
            p.style(),
            "--left: 12.500%; --top: 50.000%; --delay: 1.250s; --duration: 3.500s"
        );
    }
}
