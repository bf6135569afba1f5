//! Everyday-object glyphs. This family is drawn with a lighter 1.5 stroke.

use super::title;
use crate::types::Icon;

/// folder
pub fn folder() -> Icon {
    icon!("folder", size: 24.0, stroke: 1.5, [
        shape!(Path { "d": "M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z" }),
    ])
}

/// file
pub fn file() -> Icon {
    icon!("file", size: 24.0, stroke: 1.5, [
        shape!(Path { "d": "M6 22a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h8a2.4 2.4 0 0 1 1.704.706l3.588 3.588A2.4 2.4 0 0 1 20 8v12a2 2 0 0 1-2 2z" }),
        shape!(Path { "d": "M14 2v5a1 1 0 0 0 1 1h5" }),
    ])
}

/// mail
pub fn mail() -> Icon {
    icon!("mail", size: 24.0, stroke: 1.5, [
        shape!(Path { "d": "m22 7-8.991 5.727a2 2 0 0 1-2.009 0L2 7" }),
        shape!(Rect { "x": 2, "y": 4, "width": 20, "height": 16, "rx": 2 }),
    ])
}

/// lock
pub fn lock() -> Icon {
    icon!("lock", size: 24.0, stroke: 1.5, [
        shape!(Rect { "x": 3, "y": 11, "width": 18, "height": 11, "rx": 2, "ry": 2 }),
        shape!(Path { "d": "M7 11V7a5 5 0 0 1 10 0v4" }),
    ])
}

/// calendar
pub fn calendar() -> Icon {
    icon!("calendar", size: 24.0, stroke: 1.5, [
        shape!(Path { "d": "M8 2v4" }),
        shape!(Path { "d": "M16 2v4" }),
        shape!(Rect { "x": 3, "y": 4, "width": 18, "height": 18, "rx": 2 }),
        shape!(Path { "d": "M3 10h18" }),
    ])
}

/// clock
pub fn clock() -> Icon {
    icon!("clock", size: 24.0, stroke: 1.5, [
        shape!(Path { "d": "M12 6v6l4 2" }),
        shape!(Circle { "cx": 12, "cy": 12, "r": 10 }),
    ])
}

/// bell
pub fn bell() -> Icon {
    icon!("bell", size: 24.0, stroke: 1.5, [
        shape!(Path { "d": "M10.268 21a2 2 0 0 0 3.464 0" }),
        shape!(Path { "d": "M3.262 15.326A1 1 0 0 0 4 17h16a1 1 0 0 0 .74-1.673C19.41 13.956 18 12.499 18 8A6 6 0 0 0 6 8c0 4.499-1.411 5.956-2.738 7.326" }),
    ])
}

/// bookmark
pub fn bookmark() -> Icon {
    icon!("bookmark", size: 24.0, stroke: 1.5, [
        shape!(Path { "d": "m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z" }),
    ])
}

/// heart, with an accessible title child
pub fn heart() -> Icon {
    icon!("heart", size: 24.0, stroke: 1.5, [
        title("heart"),
        shape!(Path { "d": "M2 9.5a5.5 5.5 0 0 1 9.591-3.676.56.56 0 0 0 .818 0A5.49 5.49 0 0 1 22 9.5c0 2.29-1.5 4-3 5.5l-5.492 5.313a2 2 0 0 1-3 .019L5 15c-1.5-1.5-3-3.2-3-5.5" }),
    ])
}

/// star
pub fn star() -> Icon {
    icon!("star", size: 24.0, stroke: 1.5, [
        shape!(Path { "d": "M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.123 2.123 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.123 2.123 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.122 2.122 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.122 2.122 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.122 2.122 0 0 0 1.597-1.16z" }),
    ])
}

/// house
pub fn house() -> Icon {
    icon!("house", size: 24.0, stroke: 1.5, [
        shape!(Path { "d": "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" }),
        shape!(Path { "d": "M3 10a2 2 0 0 1 .709-1.528l7-6a2 2 0 0 1 2.582 0l7 6A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }),
    ])
}

/// globe
pub fn globe() -> Icon {
    icon!("globe", size: 24.0, stroke: 1.5, [
        shape!(Circle { "cx": 12, "cy": 12, "r": 10 }),
        shape!(Path { "d": "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }),
        shape!(Path { "d": "M2 12h20" }),
    ])
}

/// map-pin
pub fn map_pin() -> Icon {
    icon!("map-pin", size: 24.0, stroke: 1.5, [
        shape!(Path { "d": "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0" }),
        shape!(Circle { "cx": 12, "cy": 10, "r": 3 }),
    ])
}

/// database
pub fn database() -> Icon {
    icon!("database", size: 24.0, stroke: 1.5, [
        shape!(Ellipse { "cx": 12, "cy": 5, "rx": 9, "ry": 3 }),
        shape!(Path { "d": "M3 5V19A9 3 0 0 0 21 19V5" }),
        shape!(Path { "d": "M3 12A9 3 0 0 0 21 12" }),
    ])
}

/// server
pub fn server() -> Icon {
    icon!("server", size: 24.0, stroke: 1.5, [
        shape!(Rect { "x": 2, "y": 2, "width": 20, "height": 8, "rx": 2, "ry": 2 }),
        shape!(Rect { "x": 2, "y": 14, "width": 20, "height": 8, "rx": 2, "ry": 2 }),
        shape!(Line { "x1": 6, "y1": 6, "x2": 6.01, "y2": 6 }),
        shape!(Line { "x1": 6, "y1": 18, "x2": 6.01, "y2": 18 }),
    ])
}

/// package
pub fn package() -> Icon {
    icon!("package", size: 24.0, stroke: 1.5, [
        shape!(Path { "d": "M11 21.73a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73z" }),
        shape!(Path { "d": "M12 22V12" }),
        shape!(Polyline { "points": "3.29 7 12 12 20.71 7" }),
        shape!(Path { "d": "m7.5 4.27 9 5.15" }),
    ])
}
