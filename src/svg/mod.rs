//! SVG renderer - converts icon data tables into SVG strings.
//!
//! Pure string building, no DOM manipulation. Output ordering mirrors
//! authoring order exactly.

mod normalize;
mod renderer;

pub use renderer::{escape_xml, render_icon, render_icon_with_config};
