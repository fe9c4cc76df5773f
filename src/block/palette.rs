//! Category colours.

use std::collections::HashMap;

use serde::Deserialize;

/// Fixed 20-colour category palette, assigned by index of first appearance.
pub const PALETTE: [&str; 20] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
    "#aec7e8", "#ffbb78", "#98df8a", "#ff9896", "#c5b0d5",
    "#c49c94", "#f7b6d2", "#c7c7c7", "#dbdb8d", "#9edae5",
];

/// Opacity used when no override is supplied.
pub const DEFAULT_OPACITY: f64 = 0.7;

/// Caller override for one category value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CategoryStyle {
    pub color: Option<String>,
    pub opacity: Option<f64>,
}

/// Per-category overrides keyed by category value.
pub type CustomColors = HashMap<String, CategoryStyle, ahash::RandomState>;

/// Palette colour for the category at `index`, cycling.
#[inline]
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Resolve colour and opacity for the category at `index` with value `value`.
pub(crate) fn category_style(index: usize, value: &str, custom: Option<&CustomColors>) -> (String, f64) {
    let style = custom.and_then(|c| c.get(value));
    let color = style.and_then(|s| s.color.clone()).unwrap_or_else(|| palette_color(index).to_string());
    let opacity = style.and_then(|s| s.opacity).unwrap_or(DEFAULT_OPACITY);
    (color, opacity)
}
