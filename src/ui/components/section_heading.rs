//! Section heading.

use askama::Template;

/// Centered gradient `<h2>` with a muted subtitle, revealed when scrolled into view.
#[derive(Template, Debug, Clone)]
#[template(
    source = r#"<div class="section-heading" data-reveal="up"><h2 class="section-title gradient-text">{{ title }}</h2><p class="section-subtitle">{{ subtitle }}</p></div>"#,
    ext = "html"
)]
pub struct SectionHeading<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
}
