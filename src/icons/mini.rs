//! Compact 16px glyphs with a 1.8 stroke, for dense UI chrome.
//! The tables still target the shared 24-unit viewBox; only the default
//! render size differs.

use crate::types::Icon;

/// square
pub fn square() -> Icon {
    icon!("square", size: 16.0, stroke: 1.8, [
        shape!(Rect { "x": 3, "y": 3, "width": 18, "height": 18, "rx": 2 }),
    ])
}

/// circle
pub fn circle() -> Icon {
    icon!("circle", size: 16.0, stroke: 1.8, [
        shape!(Circle { "cx": 12, "cy": 12, "r": 10 }),
    ])
}

/// terminal
pub fn terminal() -> Icon {
    icon!("terminal", size: 16.0, stroke: 1.8, [
        shape!(Path { "d": "M12 19h8" }),
        shape!(Path { "d": "m4 17 6-6-6-6" }),
    ])
}

/// hash
pub fn hash() -> Icon {
    icon!("hash", size: 16.0, stroke: 1.8, [
        shape!(Line { "x1": 4, "y1": 9, "x2": 20, "y2": 9 }),
        shape!(Line { "x1": 4, "y1": 15, "x2": 20, "y2": 15 }),
        shape!(Line { "x1": 10, "y1": 3, "x2": 8, "y2": 21 }),
        shape!(Line { "x1": 16, "y1": 3, "x2": 14, "y2": 21 }),
    ])
}

/// timer
pub fn timer() -> Icon {
    icon!("timer", size: 16.0, stroke: 1.8, [
        shape!(Line { "x1": 10, "y1": 2, "x2": 14, "y2": 2 }),
        shape!(Line { "x1": 12, "y1": 14, "x2": 15, "y2": 11 }),
        shape!(Circle { "cx": 12, "cy": 14, "r": 8 }),
    ])
}
