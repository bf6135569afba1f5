//! Audio, video and image glyphs.

use crate::types::Icon;

/// play
pub fn play() -> Icon {
    icon!("play", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M5 5a2 2 0 0 1 3.008-1.728l11.997 6.998a2 2 0 0 1 .003 3.458l-12 7A2 2 0 0 1 5 19z" }),
    ])
}

/// pause
pub fn pause() -> Icon {
    icon!("pause", size: 24.0, stroke: 2.0, [
        shape!(Rect { "x": 14, "y": 3, "width": 5, "height": 18, "rx": 1 }),
        shape!(Rect { "x": 5, "y": 3, "width": 5, "height": 18, "rx": 1 }),
    ])
}

/// camera
pub fn camera() -> Icon {
    icon!("camera", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M13.997 4a2 2 0 0 1 1.76 1.05l.486.9A2 2 0 0 0 18.003 7H20a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2h1.997a2 2 0 0 0 1.759-1.048l.489-.904A2 2 0 0 1 10.004 4z" }),
        shape!(Circle { "cx": 12, "cy": 13, "r": 3 }),
    ])
}

/// image
pub fn image() -> Icon {
    icon!("image", size: 24.0, stroke: 2.0, [
        shape!(Rect { "x": 3, "y": 3, "width": 18, "height": 18, "rx": 2, "ry": 2 }),
        shape!(Circle { "cx": 9, "cy": 9, "r": 2 }),
        shape!(Path { "d": "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" }),
    ])
}

/// film
pub fn film() -> Icon {
    icon!("film", size: 24.0, stroke: 2.0, [
        shape!(Rect { "x": 3, "y": 3, "width": 18, "height": 18, "rx": 2 }),
        shape!(Path { "d": "M7 3v18" }),
        shape!(Path { "d": "M3 7.5h4" }),
        shape!(Path { "d": "M3 12h18" }),
        shape!(Path { "d": "M3 16.5h4" }),
        shape!(Path { "d": "M17 3v18" }),
        shape!(Path { "d": "M17 7.5h4" }),
        shape!(Path { "d": "M17 16.5h4" }),
    ])
}

/// music
pub fn music() -> Icon {
    icon!("music", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M9 18V5l12-2v13" }),
        shape!(Circle { "cx": 6, "cy": 18, "r": 3 }),
        shape!(Circle { "cx": 18, "cy": 16, "r": 3 }),
    ])
}

/// mic
pub fn mic() -> Icon {
    icon!("mic", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M12 19v3" }),
        shape!(Path { "d": "M19 10v2a7 7 0 0 1-14 0v-2" }),
        shape!(Rect { "x": 9, "y": 2, "width": 6, "height": 13, "rx": 3 }),
    ])
}

/// video
pub fn video() -> Icon {
    icon!("video", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5" }),
        shape!(Rect { "x": 2, "y": 6, "width": 14, "height": 12, "rx": 2 }),
    ])
}

/// skip-forward
pub fn skip_forward() -> Icon {
    icon!("skip-forward", size: 24.0, stroke: 2.0, [
        shape!(Polygon { "points": "5 4 15 12 5 20 5 4" }),
        shape!(Line { "x1": 19, "y1": 5, "x2": 19, "y2": 19 }),
    ])
}

/// monitor
pub fn monitor() -> Icon {
    icon!("monitor", size: 24.0, stroke: 2.0, [
        shape!(Rect { "x": 2, "y": 3, "width": 20, "height": 14, "rx": 2 }),
        shape!(Line { "x1": 8, "y1": 21, "x2": 16, "y2": 21 }),
        shape!(Line { "x1": 12, "y1": 17, "x2": 12, "y2": 21 }),
    ])
}
