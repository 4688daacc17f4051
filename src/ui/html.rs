//! Helpers for values inlined into templates.
//!
//! Text and attribute values are escaped by the templates themselves; these
//! cover the two places that are not plain HTML text: inline `<script>`
//! literals and animation-delay styles.

/// Encode a value as a JavaScript string literal safe to inline in `<script>`.
pub fn js_string(input: &str) -> String {
    serde_json::Value::String(input.to_string())
        .to_string()
        .replace("</", "<\\/")
}

/// Inline style setting the entrance animation delay.
pub fn delay(seconds: f64) -> String {
    format!("--delay: {seconds:.2}s")
}

/// Stagger delay for the `index`-th child of a revealed group.
#[allow(clippy::cast_precision_loss)]
pub fn stagger(base: f64, step: f64, index: usize) -> String {
    delay(base + step * index as f64)
}
