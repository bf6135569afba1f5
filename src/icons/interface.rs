//! General interface glyphs.

use crate::types::Icon;

/// activity
pub fn activity() -> Icon {
    icon!("activity", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M22 12h-2.48a2 2 0 0 0-1.93 1.46l-2.35 8.36a.25.25 0 0 1-.48 0L9.24 2.18a.25.25 0 0 0-.48 0l-2.35 8.36A2 2 0 0 1 4.49 12H2" }),
    ])
}

/// activity-2
pub fn activity_2() -> Icon {
    icon!("activity-2", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M22 12h-4l-3 9L9 3l-3 9H2" }),
    ])
}

/// check
pub fn check() -> Icon {
    icon!("check", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M20 6 9 17l-5-5" }),
    ])
}

/// x
pub fn x() -> Icon {
    icon!("x", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M18 6 6 18" }),
        shape!(Path { "d": "m6 6 12 12" }),
    ])
}

/// plus
pub fn plus() -> Icon {
    icon!("plus", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M5 12h14" }),
        shape!(Path { "d": "M12 5v14" }),
    ])
}

/// minus
pub fn minus() -> Icon {
    icon!("minus", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M5 12h14" }),
    ])
}

/// menu
pub fn menu() -> Icon {
    icon!("menu", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M4 5h16" }),
        shape!(Path { "d": "M4 12h16" }),
        shape!(Path { "d": "M4 19h16" }),
    ])
}

/// search
pub fn search() -> Icon {
    icon!("search", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "m21 21-4.34-4.34" }),
        shape!(Circle { "cx": 11, "cy": 11, "r": 8 }),
    ])
}

/// settings
pub fn settings() -> Icon {
    icon!("settings", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M9.671 4.136a2.34 2.34 0 0 1 4.659 0 2.34 2.34 0 0 0 3.319 1.915 2.34 2.34 0 0 1 2.33 4.033 2.34 2.34 0 0 0 0 3.831 2.34 2.34 0 0 1-2.33 4.033 2.34 2.34 0 0 0-3.319 1.915 2.34 2.34 0 0 1-4.659 0 2.34 2.34 0 0 0-3.32-1.915 2.34 2.34 0 0 1-2.33-4.033 2.34 2.34 0 0 0 0-3.831A2.34 2.34 0 0 1 6.35 6.051a2.34 2.34 0 0 0 3.319-1.915" }),
        shape!(Circle { "cx": 12, "cy": 12, "r": 3 }),
    ])
}

/// info
pub fn info() -> Icon {
    icon!("info", size: 24.0, stroke: 2.0, [
        shape!(Circle { "cx": 12, "cy": 12, "r": 10 }),
        shape!(Path { "d": "M12 16v-4" }),
        shape!(Path { "d": "M12 8h.01" }),
    ])
}

/// circle-alert
pub fn circle_alert() -> Icon {
    icon!("circle-alert", size: 24.0, stroke: 2.0, [
        shape!(Circle { "cx": 12, "cy": 12, "r": 10 }),
        shape!(Line { "x1": 12, "y1": 8, "x2": 12, "y2": 12 }),
        shape!(Line { "x1": 12, "y1": 16, "x2": 12.01, "y2": 16 }),
    ])
}

/// triangle-alert
pub fn triangle_alert() -> Icon {
    icon!("triangle-alert", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" }),
        shape!(Path { "d": "M12 9v4" }),
        shape!(Path { "d": "M12 17h.01" }),
    ])
}

/// external-link
pub fn external_link() -> Icon {
    icon!("external-link", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M15 3h6v6" }),
        shape!(Path { "d": "M10 14 21 3" }),
        shape!(Path { "d": "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }),
    ])
}

/// copy
pub fn copy() -> Icon {
    icon!("copy", size: 24.0, stroke: 2.0, [
        shape!(Rect { "x": 8, "y": 8, "width": 14, "height": 14, "rx": 2, "ry": 2 }),
        shape!(Path { "d": "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" }),
    ])
}

/// trash
pub fn trash() -> Icon {
    icon!("trash", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6" }),
        shape!(Path { "d": "M3 6h18" }),
        shape!(Path { "d": "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }),
    ])
}

/// download
pub fn download() -> Icon {
    icon!("download", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M12 15V3" }),
        shape!(Path { "d": "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }),
        shape!(Path { "d": "m7 10 5 5 5-5" }),
    ])
}

/// upload
pub fn upload() -> Icon {
    icon!("upload", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M12 3v12" }),
        shape!(Path { "d": "m17 8-5-5-5 5" }),
        shape!(Path { "d": "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }),
    ])
}

/// link
pub fn link() -> Icon {
    icon!("link", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" }),
        shape!(Path { "d": "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" }),
    ])
}

/// list
pub fn list() -> Icon {
    icon!("list", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M3 5h.01" }),
        shape!(Path { "d": "M3 12h.01" }),
        shape!(Path { "d": "M3 19h.01" }),
        shape!(Path { "d": "M8 5h13" }),
        shape!(Path { "d": "M8 12h13" }),
        shape!(Path { "d": "M8 19h13" }),
    ])
}

/// eye
pub fn eye() -> Icon {
    icon!("eye", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0" }),
        shape!(Circle { "cx": 12, "cy": 12, "r": 3 }),
    ])
}
