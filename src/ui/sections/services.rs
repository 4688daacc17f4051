//! Services grid.

use askama::Template;

use crate::content::{Service, SiteContent};
use crate::ui::components::SectionHeading;
use crate::ui::html::stagger;

/// Service with its reveal delay.
#[derive(Debug, Clone)]
pub struct ServiceCard<'a> {
    pub service: &'a Service,
    pub style: String,
}

#[derive(Template, Debug, Clone)]
#[template(path = "sections/services.html")]
pub struct ServicesSection<'a> {
    heading: SectionHeading<'static>,
    cards: Vec<ServiceCard<'a>>,
}

impl<'a> ServicesSection<'a> {
    pub fn new(content: &'a SiteContent) -> Self {
        let cards = content
            .services
            .iter()
            .enumerate()
            .map(|(index, service)| ServiceCard {
                service,
                style: stagger(0.0, 0.1, index),
            })
            .collect();

        Self {
            heading: SectionHeading {
                title: "Nuestros Servicios",
                subtitle: "Soluciones completas para impulsar tu negocio al siguiente nivel",
            },
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_service_rendered() {
        let content = SiteContent::cloudnext();
        let html = ServicesSection::new(&content).render().unwrap();

        assert!(html.contains(r#"id="services""#));
        assert_eq!(html.matches("service-card").count(), content.services.len());
        for service in content.services {
            assert!(html.contains(&service.title.replace('&', "&amp;")));
        }
        assert!(html.contains("SEO &amp; Posicionamiento"));
        assert!(!html.contains("SEO & Posicionamiento"));
    }

    #[test]
    fn test_cards_are_staggered() {
        let html = ServicesSection::new(&SiteContent::cloudnext()).render().unwrap();
        assert!(html.contains("--delay: 0.00s"));
        assert!(html.contains("--delay: 0.50s"));
    }
}
