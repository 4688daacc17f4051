//! Page footer.

use askama::Template;

/// Copyright line for `year`.
#[derive(Template, Debug, Clone, Copy)]
#[template(
    source = r#"<footer class="footer"><div class="container container-wide"><p>© {{ year }} {{ brand }}. Todos los derechos reservados.</p></div></footer>"#,
    ext = "html"
)]
pub struct Footer<'a> {
    pub brand: &'a str,
    pub year: i32,
}
