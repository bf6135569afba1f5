//! strokekit - a stroke-style SVG icon catalog and renderer
//!
//! Every icon is an authored data table of SVG primitives. Rendering merges
//! caller overrides with a library-wide default configuration and the icon's
//! own literal defaults, normalizes stroke attributes on each shape, and
//! produces an SVG string.
//!
//! # Example
//!
//! ```rust
//! use strokekit::RenderOptions;
//!
//! let svg = strokekit::render("activity-2", &RenderOptions::default()).unwrap();
//! assert!(svg.contains(r#"width="24""#));
//! assert!(svg.contains(r#"stroke-width="2""#));
//!
//! let large = strokekit::render("activity-2", &RenderOptions {
//!     size: Some(48.0),
//!     ..Default::default()
//! }).unwrap();
//! // stroke width scales with size: 2 * (48 / 24)
//! assert!(large.contains(r#"stroke-width="4""#));
//! ```

pub mod config;
pub mod icons;
pub mod svg;
pub mod types;

pub use config::{config, set_config, IconConfig, RenderOptions};
pub use svg::{render_icon, render_icon_with_config};
pub use types::{AttrValue, Icon, IconElement, IconNode, Tag};

/// Render a catalog icon by kebab-case name against the process-wide config.
///
/// # Example
/// ```rust
/// let svg = strokekit::render("check", &strokekit::RenderOptions::default()).unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn render(name: &str, opts: &RenderOptions) -> Result<String, String> {
    match icons::lookup(name) {
        Some(icon) => Ok(render_icon(&icon, opts)),
        None => Err(format!("unknown icon: {}", name)),
    }
}
