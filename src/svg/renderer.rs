//! Icon renderer - converts an icon data table into an SVG string.
//!
//! Pure string building, no DOM manipulation. Visits each table entry in
//! authoring order, applies shape normalization, recurses into children.

use super::normalize::normalized_attrs;
use crate::config::{self, resolve, IconConfig, RenderOptions, ResolvedAttrs};
use crate::types::{fmt_num, Icon, IconElement, IconNode};

/// Render an icon against the process-wide config.
pub fn render_icon(icon: &Icon, opts: &RenderOptions) -> String {
    render_icon_with_config(icon, opts, &config::config())
}

/// Render an icon against an explicit config.
///
/// Deterministic: identical inputs yield an identical output string.
pub fn render_icon_with_config(icon: &Icon, opts: &RenderOptions, config: &IconConfig) -> String {
    let resolved = resolve(opts, config, icon);
    let mut out = svg_open_tag(icon, opts, &resolved);
    for element in &icon.elements {
        out.push_str(&render_element(element, &resolved));
    }
    out.push_str("</svg>");
    out
}

fn svg_open_tag(icon: &Icon, opts: &RenderOptions, resolved: &ResolvedAttrs) -> String {
    let size = fmt_num(resolved.size);
    let mut tag = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" width="{}" height="{}" fill="none""#,
        escape_xml(&icon.view_box),
        size,
        size
    );
    if let Some(ref class) = opts.class {
        tag.push_str(&format!(r#" class="{}""#, escape_xml(class)));
    }
    for (key, value) in &opts.attrs {
        tag.push_str(&format!(r#" {}="{}""#, key, escape_xml(value)));
    }
    tag.push('>');
    tag
}

fn render_element(element: &IconElement, resolved: &ResolvedAttrs) -> String {
    let tag = element.tag.as_str();
    let mut out = format!("<{}", tag);
    for (key, value) in normalized_attrs(element, resolved) {
        out.push_str(&format!(r#" {}="{}""#, key, escape_xml(&value)));
    }
    if element.children.is_empty() {
        out.push_str(" />");
        return out;
    }
    out.push('>');
    for child in &element.children {
        match child {
            IconNode::Element(el) => out.push_str(&render_element(el, resolved)),
            IconNode::Text(text) => out.push_str(&escape_xml(text)),
        }
    }
    out.push_str(&format!("</{}>", tag));
    out
}

/// Escape special XML characters in attribute values and text content.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
