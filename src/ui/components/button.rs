//! Button component with variants and sizes.

use askama::Template;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Blue-to-purple gradient call to action.
    #[default]
    Primary,
    /// Purple-to-blue gradient, used in the about section.
    Secondary,
    /// Transparent button with a light border.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Outline => "btn-outline",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Compact pill used in the navbar.
    Pill,
    /// Medium button (default).
    #[default]
    Md,
    /// Large hero button.
    Lg,
    /// Stretches to the container width.
    Block,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Pill => "btn-pill",
            Self::Md => "btn-md",
            Self::Lg => "btn-lg",
            Self::Block => "btn-block",
        }
    }
}

fn classes(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("btn {} {}", variant.classes(), size.classes())
}

/// `<button>` element.
///
/// # Example
///
/// ```rust,ignore
/// Button::new(ButtonVariant::Primary, ButtonSize::Block, "submit", "Enviar mensaje")
/// ```
#[derive(Template, Debug, Clone)]
#[template(
    source = r#"<button type="{{ button_type }}" class="{{ class }}">{{ label }}</button>"#,
    ext = "html"
)]
pub struct Button<'a> {
    button_type: &'a str,
    label: &'a str,
    class: String,
}

impl<'a> Button<'a> {
    pub fn new(
        variant: ButtonVariant,
        size: ButtonSize,
        button_type: &'a str,
        label: &'a str,
    ) -> Self {
        Self {
            button_type,
            label,
            class: classes(variant, size),
        }
    }
}

/// Anchor styled as a button.
#[derive(Template, Debug, Clone)]
#[template(
    source = r#"<a href="{{ href }}" class="{{ class }}">{{ label }}</a>"#,
    ext = "html"
)]
pub struct LinkButton<'a> {
    href: &'a str,
    label: &'a str,
    class: String,
}

impl<'a> LinkButton<'a> {
    pub fn new(variant: ButtonVariant, size: ButtonSize, href: &'a str, label: &'a str) -> Self {
        Self {
            href,
            label,
            class: classes(variant, size),
        }
    }

    /// Append an extra class (e.g. `btn-glow`).
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.class.push(' ');
        self.class.push_str(class);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_markup() {
        let html = Button::new(ButtonVariant::Primary, ButtonSize::Block, "submit", "Enviar")
            .render()
            .unwrap();
        assert_eq!(
            html,
            r#"<button type="submit" class="btn btn-primary btn-block">Enviar</button>"#
        );
    }

    #[test]
    fn test_link_button_extra_class() {
        let html = LinkButton::new(ButtonVariant::Outline, ButtonSize::Lg, "#contact", "Hola")
            .with_class("glass")
            .render()
            .unwrap();
        assert_eq!(
            html,
            r##"<a href="#contact" class="btn btn-outline btn-lg glass">Hola</a>"##
        );
    }

    #[test]
    fn test_label_is_escaped() {
        let html = LinkButton::new(ButtonVariant::Primary, ButtonSize::Md, "/", "<b>Hola</b>")
            .render()
            .unwrap();
        assert!(html.contains("&lt;b&gt;Hola&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
