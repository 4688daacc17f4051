//! Customer testimonials.

use askama::Template;

use crate::content::{SiteContent, Testimonial};
use crate::ui::components::SectionHeading;
use crate::ui::html::stagger;

/// Star row for a rating.
#[derive(Template, Debug, Clone, Copy)]
#[template(
    source = r#"<div class="stars" aria-label="{{ count }} / {{ max }}">{% for _star in 0..count %}<span class="star">⭐</span>{% endfor %}</div>"#,
    ext = "html"
)]
pub struct StarRating {
    pub count: usize,
    pub max: u8,
}

impl StarRating {
    pub fn of(testimonial: &Testimonial) -> Self {
        Self {
            count: testimonial.stars(),
            max: Testimonial::MAX_RATING,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestimonialCard<'a> {
    pub testimonial: &'a Testimonial,
    pub rating: StarRating,
    pub style: String,
}

#[derive(Template, Debug, Clone)]
#[template(path = "sections/testimonials.html")]
pub struct TestimonialsSection<'a> {
    heading: SectionHeading<'static>,
    cards: Vec<TestimonialCard<'a>>,
}

impl<'a> TestimonialsSection<'a> {
    pub fn new(content: &'a SiteContent) -> Self {
        let cards = content
            .testimonials
            .iter()
            .enumerate()
            .map(|(index, testimonial)| TestimonialCard {
                testimonial,
                rating: StarRating::of(testimonial),
                style: stagger(0.0, 0.1, index),
            })
            .collect();

        Self {
            heading: SectionHeading {
                title: "Lo que dicen nuestros clientes",
                subtitle: "Testimonios reales de empresas que han transformado su negocio con nosotros",
            },
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_count_follows_rating() {
        let t = Testimonial {
            name: "Ana",
            company: "Acme",
            text: "Bien",
            rating: 3,
        };
        let html = StarRating::of(&t).render().unwrap();
        assert_eq!(html.matches(r#"class="star""#).count(), 3);
        assert!(html.contains(r#"aria-label="3 / 5""#));
    }

    #[test]
    fn test_out_of_range_rating_is_clamped() {
        let t = Testimonial {
            name: "Ana",
            company: "Acme",
            text: "Bien",
            rating: 0,
        };
        let html = StarRating::of(&t).render().unwrap();
        assert_eq!(html.matches(r#"class="star""#).count(), 1);
    }

    #[test]
    fn test_all_testimonials_rendered() {
        let content = SiteContent::cloudnext();
        let html = TestimonialsSection::new(&content).render().unwrap();

        assert!(html.contains(r#"id="testimonials""#));
        assert_eq!(html.matches("testimonial-card").count(), 3);
        assert_eq!(html.matches(r#"class="star""#).count(), 15);
        assert!(html.contains("María González"));
        assert!(html.contains("Innovate Corp"));
    }
}
