//! Stat figure.

use askama::Template;

use crate::content::Stat;

/// Stat size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatSize {
    /// Compact figure under the hero copy.
    #[default]
    Sm,
    /// Larger figure in the about panel.
    Lg,
}

impl StatSize {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "stat",
            Self::Lg => "stat stat-lg",
        }
    }
}

#[derive(Template, Debug, Clone)]
#[template(
    source = r#"<div class="{{ size.classes() }}"><div class="stat-value {{ stat.accent.class() }}">{{ stat.value }}</div><div class="stat-label">{{ stat.label }}</div></div>"#,
    ext = "html"
)]
pub struct StatFigure<'a> {
    pub stat: &'a Stat,
    pub size: StatSize,
}

impl<'a> StatFigure<'a> {
    /// One figure per stat, all in `size`.
    pub fn all(stats: &'a [Stat], size: StatSize) -> Vec<Self> {
        stats.iter().map(|stat| Self { stat, size }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Accent;

    #[test]
    fn test_stat_markup() {
        let s = Stat {
            value: "98%",
            label: "Satisfacción",
            accent: Accent::Purple,
        };
        let html = StatFigure {
            stat: &s,
            size: StatSize::Lg,
        }
        .render()
        .unwrap();
        assert!(html.contains(r#"class="stat stat-lg""#));
        assert!(html.contains(r#"<div class="stat-value accent-purple">98%</div>"#));
        assert!(html.contains("Satisfacción"));
    }
}
