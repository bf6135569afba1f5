//! Shape-attribute normalization.
//!
//! Fills in stroke presentation attributes on drawable shapes where the
//! authored table left them out. Authored per-element values always win.

use crate::config::ResolvedAttrs;
use crate::types::{fmt_num, IconElement};

/// Authored tables target a 24-unit viewBox; stroke widths scale against it.
const STROKE_SCALE_BASE: f64 = 24.0;

/// Effective stroke width for one render: scaled by `size / 24` unless the
/// caller asked for an absolute width.
pub fn effective_stroke_width(resolved: &ResolvedAttrs) -> f64 {
    if resolved.absolute_stroke_width {
        resolved.stroke_width
    } else {
        resolved.stroke_width * (resolved.size / STROKE_SCALE_BASE)
    }
}

/// The full ordered attribute list for one element: authored attributes in
/// authoring order, then stroke defaults for any key the author did not set.
/// Non-shape tags get their authored attributes only.
pub fn normalized_attrs(element: &IconElement, resolved: &ResolvedAttrs) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = element
        .attrs
        .iter()
        .map(|(key, value)| (key.clone(), value.to_attr_string()))
        .collect();

    if !element.tag.is_shape() {
        return out;
    }

    let defaults = [
        ("stroke", resolved.color.clone()),
        ("fill", "none".to_string()),
        ("stroke-width", fmt_num(effective_stroke_width(resolved))),
        ("stroke-linecap", "round".to_string()),
        ("stroke-linejoin", "round".to_string()),
    ];
    for (key, value) in defaults {
        if !element.has_attr(key) {
            out.push((key.to_string(), value));
        }
    }
    out
}
