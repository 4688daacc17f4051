//! Form fields.

use askama::Template;

/// Single-line text input.
#[derive(Template, Debug, Clone)]
#[template(
    source = r#"<input type="{{ input_type }}" name="{{ name }}" placeholder="{{ placeholder }}" class="field" autocomplete="off">"#,
    ext = "html"
)]
pub struct TextInput<'a> {
    pub input_type: &'a str,
    pub name: &'a str,
    pub placeholder: &'a str,
}

/// Multi-line text input.
#[derive(Template, Debug, Clone)]
#[template(
    source = r#"<textarea name="{{ name }}" placeholder="{{ placeholder }}" rows="{{ rows }}" class="field field-textarea"></textarea>"#,
    ext = "html"
)]
pub struct TextArea<'a> {
    pub name: &'a str,
    pub placeholder: &'a str,
    pub rows: u32,
}
