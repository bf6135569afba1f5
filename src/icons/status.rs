//! Status and weather glyphs, drawn with a heavy 3.0 stroke.

use crate::types::Icon;

/// zap
pub fn zap() -> Icon {
    icon!("zap", size: 24.0, stroke: 3.0, [
        shape!(Path { "d": "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z" }),
    ])
}

/// flame
pub fn flame() -> Icon {
    icon!("flame", size: 24.0, stroke: 3.0, [
        shape!(Path { "d": "M12 3q1 4 4 6.5t3 5.5a1 1 0 0 1-14 0 5 5 0 0 1 1-3 1 1 0 0 0 5 0c0-2-1.5-3-1.5-5q0-2 2.5-4" }),
    ])
}

/// sun, rays grouped under a container
pub fn sun() -> Icon {
    icon!("sun", size: 24.0, stroke: 3.0, [
        shape!(Circle { "cx": 12, "cy": 12, "r": 4 }),
        shape!(G {} [
            shape!(Path { "d": "M12 2v2" }),
            shape!(Path { "d": "M12 20v2" }),
            shape!(Path { "d": "m4.93 4.93 1.41 1.41" }),
            shape!(Path { "d": "m17.66 17.66 1.41 1.41" }),
            shape!(Path { "d": "M2 12h2" }),
            shape!(Path { "d": "M20 12h2" }),
            shape!(Path { "d": "m6.34 17.66-1.41 1.41" }),
            shape!(Path { "d": "m19.07 4.93-1.41 1.41" }),
        ]),
    ])
}

/// moon
pub fn moon() -> Icon {
    icon!("moon", size: 24.0, stroke: 3.0, [
        shape!(Path { "d": "M20.985 12.486a9 9 0 1 1-9.473-9.472c.405-.022.617.46.402.803a6 6 0 0 0 8.268 8.268c.344-.215.825-.004.803.401" }),
    ])
}

/// cloud
pub fn cloud() -> Icon {
    icon!("cloud", size: 24.0, stroke: 3.0, [
        shape!(Path { "d": "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" }),
    ])
}

/// wifi
pub fn wifi() -> Icon {
    icon!("wifi", size: 24.0, stroke: 3.0, [
        shape!(Path { "d": "M12 20h.01" }),
        shape!(Path { "d": "M2 8.82a15 15 0 0 1 20 0" }),
        shape!(Path { "d": "M5 12.859a10 10 0 0 1 14 0" }),
        shape!(Path { "d": "M8.5 16.429a5 5 0 0 1 7 0" }),
    ])
}

/// signal
pub fn signal() -> Icon {
    icon!("signal", size: 24.0, stroke: 3.0, [
        shape!(Path { "d": "M2 20h.01" }),
        shape!(Path { "d": "M7 20v-4" }),
        shape!(Path { "d": "M12 20v-8" }),
        shape!(Path { "d": "M17 20V8" }),
        shape!(Path { "d": "M22 4v16" }),
    ])
}

/// target
pub fn target() -> Icon {
    icon!("target", size: 24.0, stroke: 3.0, [
        shape!(Circle { "cx": 12, "cy": 12, "r": 10 }),
        shape!(Circle { "cx": 12, "cy": 12, "r": 6 }),
        shape!(Circle { "cx": 12, "cy": 12, "r": 2 }),
    ])
}

/// dot, authored as a filled shape (per-element fill/stroke override the
/// normalizer defaults)
pub fn dot() -> Icon {
    icon!("dot", size: 24.0, stroke: 3.0, [
        shape!(Circle { "cx": 12.1, "cy": 12.1, "r": 1, "fill": "currentColor", "stroke": "none" }),
    ])
}
