//! The authored icon catalog.
//!
//! Every icon is one data-table function built with the `icon!`/`shape!`
//! macros so each file reads as literal data. Grouped by category:
//! - arrows (stroke 2)
//! - interface (stroke 2)
//! - media (stroke 2)
//! - objects (stroke 1.5)
//! - status (stroke 3)
//! - mini (16px, stroke 1.8)

use crate::types::{Icon, IconElement, IconNode, Tag};
use lazy_static::lazy_static;

/// Authored attribute list, preserving authoring order.
macro_rules! icon_attrs {
    ($($key:literal : $val:expr),* $(,)?) => {
        vec![$(($key.to_string(), $crate::types::AttrValue::from($val))),*]
    };
}

/// One icon data-table entry, optionally with nested children.
macro_rules! shape {
    ($tag:ident { $($attrs:tt)* }) => {
        $crate::types::IconElement {
            tag: $crate::types::Tag::$tag,
            attrs: icon_attrs!($($attrs)*),
            children: Vec::new(),
        }
    };
    ($tag:ident { $($attrs:tt)* } [ $($child:expr),* $(,)? ]) => {
        $crate::types::IconElement {
            tag: $crate::types::Tag::$tag,
            attrs: icon_attrs!($($attrs)*),
            children: vec![$($crate::types::IconNode::Element($child)),*],
        }
    };
}

/// A complete icon: name, literal defaults, data table.
macro_rules! icon {
    ($name:literal, size: $size:expr, stroke: $sw:expr, [ $($element:expr),* $(,)? ]) => {
        $crate::types::Icon {
            name: $name.to_string(),
            view_box: "0 0 24 24".to_string(),
            default_size: $size,
            default_stroke_width: $sw,
            elements: vec![$($element),*],
        }
    };
}

pub mod arrows;
pub mod interface;
pub mod media;
pub mod mini;
pub mod objects;
pub mod status;

/// Accessible-title element with literal text content.
pub(crate) fn title(text: &str) -> IconElement {
    IconElement {
        tag: Tag::Title,
        attrs: Vec::new(),
        children: vec![IconNode::Text(text.to_string())],
    }
}

type IconFn = fn() -> Icon;

lazy_static! {
    /// Catalog-order name table; lookup is by kebab-case icon name.
    static ref REGISTRY: Vec<(&'static str, IconFn)> = vec![
        ("arrow-up", arrows::arrow_up as IconFn),
        ("arrow-down", arrows::arrow_down),
        ("arrow-left", arrows::arrow_left),
        ("arrow-right", arrows::arrow_right),
        ("arrow-up-down", arrows::arrow_up_down),
        ("arrow-up-left", arrows::arrow_up_left),
        ("arrow-up-right", arrows::arrow_up_right),
        ("arrow-down-left", arrows::arrow_down_left),
        ("arrow-down-right", arrows::arrow_down_right),
        ("chevron-up", arrows::chevron_up),
        ("chevron-down", arrows::chevron_down),
        ("chevron-left", arrows::chevron_left),
        ("chevron-right", arrows::chevron_right),
        ("refresh-cw", arrows::refresh_cw),
        ("rotate-cw", arrows::rotate_cw),
        ("activity", interface::activity),
        ("activity-2", interface::activity_2),
        ("check", interface::check),
        ("x", interface::x),
        ("plus", interface::plus),
        ("minus", interface::minus),
        ("menu", interface::menu),
        ("search", interface::search),
        ("settings", interface::settings),
        ("info", interface::info),
        ("circle-alert", interface::circle_alert),
        ("triangle-alert", interface::triangle_alert),
        ("external-link", interface::external_link),
        ("copy", interface::copy),
        ("trash", interface::trash),
        ("download", interface::download),
        ("upload", interface::upload),
        ("link", interface::link),
        ("list", interface::list),
        ("eye", interface::eye),
        ("play", media::play),
        ("pause", media::pause),
        ("camera", media::camera),
        ("image", media::image),
        ("film", media::film),
        ("music", media::music),
        ("mic", media::mic),
        ("video", media::video),
        ("skip-forward", media::skip_forward),
        ("monitor", media::monitor),
        ("folder", objects::folder),
        ("file", objects::file),
        ("mail", objects::mail),
        ("lock", objects::lock),
        ("calendar", objects::calendar),
        ("clock", objects::clock),
        ("bell", objects::bell),
        ("bookmark", objects::bookmark),
        ("heart", objects::heart),
        ("star", objects::star),
        ("house", objects::house),
        ("globe", objects::globe),
        ("map-pin", objects::map_pin),
        ("database", objects::database),
        ("server", objects::server),
        ("package", objects::package),
        ("zap", status::zap),
        ("flame", status::flame),
        ("sun", status::sun),
        ("moon", status::moon),
        ("cloud", status::cloud),
        ("wifi", status::wifi),
        ("signal", status::signal),
        ("target", status::target),
        ("dot", status::dot),
        ("square", mini::square),
        ("circle", mini::circle),
        ("terminal", mini::terminal),
        ("hash", mini::hash),
        ("timer", mini::timer),
    ];
}

/// Look up a catalog icon by kebab-case name.
pub fn lookup(name: &str) -> Option<Icon> {
    REGISTRY
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, build)| build())
}

/// All catalog icon names, in catalog order.
pub fn names() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}
