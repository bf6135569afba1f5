//! Library-wide default configuration and the per-call override surface.
//!
//! Effective render values are computed by left-to-right coalescing:
//! call-site override, then library config, then the icon's literal
//! defaults. Absent values always resolve; there are no error conditions.

use crate::types::Icon;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Process-wide defaults, consumed (never mutated) by every render.
/// Unset fields defer to the per-icon literal fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    #[serde(rename = "defaultSize")]
    pub default_size: Option<f64>,
    #[serde(rename = "defaultColor")]
    pub default_color: Option<String>,
    #[serde(rename = "defaultStrokeWidth")]
    pub default_stroke_width: Option<f64>,
    #[serde(rename = "defaultAbsoluteStrokeWidth")]
    pub default_absolute_stroke_width: Option<bool>,
}

lazy_static! {
    static ref CONFIG: RwLock<IconConfig> = RwLock::new(IconConfig::default());
}

/// Snapshot of the process-wide config.
pub fn config() -> IconConfig {
    CONFIG.read().expect("config lock poisoned").clone()
}

/// Replace the process-wide config.
pub fn set_config(config: IconConfig) {
    *CONFIG.write().expect("config lock poisoned") = config;
}

/// Per-call overrides. Unset fields coalesce through the library config
/// down to the icon's literal defaults.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub size: Option<f64>,
    pub color: Option<String>,
    pub stroke_width: Option<f64>,
    /// When set, the effective stroke width is not scaled by size.
    pub absolute_stroke_width: Option<bool>,
    /// `class` attribute for the root svg element.
    pub class: Option<String>,
    /// Extra attributes passed through to the root svg element.
    pub attrs: Vec<(String, String)>,
}

/// Fully-populated effective values for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttrs {
    pub size: f64,
    pub color: String,
    pub stroke_width: f64,
    pub absolute_stroke_width: bool,
}

/// Coalesce call-site overrides, library defaults and icon literals,
/// in that precedence order.
pub fn resolve(opts: &RenderOptions, config: &IconConfig, icon: &Icon) -> ResolvedAttrs {
    ResolvedAttrs {
        size: opts.size.or(config.default_size).unwrap_or(icon.default_size),
        color: opts
            .color
            .clone()
            .or_else(|| config.default_color.clone())
            .unwrap_or_else(|| "currentColor".to_string()),
        stroke_width: opts
            .stroke_width
            .or(config.default_stroke_width)
            .unwrap_or(icon.default_stroke_width),
        absolute_stroke_width: opts
            .absolute_stroke_width
            .or(config.default_absolute_stroke_width)
            .unwrap_or(false),
    }
}
