//! Ready-made expanders for common shorthand shapes.

use super::value::{format_number, StyleValue};
use crate::computed::ComputedStyle;

/// Multiplies numeric values by `factor` and appends `unit`.
///
/// Text values are passed through untouched, so `"auto"` still works.
///
/// ```rust
/// use varstyle::{scaled, PropertyExpanders};
///
/// let expanders = PropertyExpanders::new().add("p", scaled("padding", 4.0, "px"));
/// assert_eq!(expanders.expand("p", &2.into()).get("padding"), Some("8px"));
/// ```
pub fn scaled(
    property: &str,
    factor: f64,
    unit: &str,
) -> impl Fn(&StyleValue) -> ComputedStyle + Send + Sync + 'static {
    let property = property.to_string();
    let unit = unit.to_string();
    move |value: &StyleValue| {
        let css = match value {
            StyleValue::Number(n) => format!("{}{}", format_number(n * factor), unit),
            StyleValue::Text(s) => s.clone(),
        };
        ComputedStyle::new().with(property.as_str(), css)
    }
}

/// Assigns the same value to every listed property.
///
/// ```rust
/// use varstyle::{multi, PropertyExpanders};
///
/// let expanders = PropertyExpanders::new().add("mx", multi(&["margin-left", "margin-right"]));
/// assert_eq!(expanders.expand("mx", &"auto".into()).len(), 2);
/// ```
pub fn multi(properties: &[&str]) -> impl Fn(&StyleValue) -> ComputedStyle + Send + Sync + 'static {
    let properties: Vec<String> = properties.iter().map(|p| p.to_string()).collect();
    move |value: &StyleValue| {
        let css = value.to_css();
        properties
            .iter()
            .map(|p| (p.clone(), css.clone()))
            .collect::<ComputedStyle>()
    }
}
