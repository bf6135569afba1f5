//! Directional arrows and chevrons.

use crate::types::Icon;

/// arrow-up
pub fn arrow_up() -> Icon {
    icon!("arrow-up", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "m5 12 7-7 7 7" }),
        shape!(Path { "d": "M12 19V5" }),
    ])
}

/// arrow-down
pub fn arrow_down() -> Icon {
    icon!("arrow-down", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M12 5v14" }),
        shape!(Path { "d": "m19 12-7 7-7-7" }),
    ])
}

/// arrow-left
pub fn arrow_left() -> Icon {
    icon!("arrow-left", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "m12 19-7-7 7-7" }),
        shape!(Path { "d": "M19 12H5" }),
    ])
}

/// arrow-right
pub fn arrow_right() -> Icon {
    icon!("arrow-right", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M5 12h14" }),
        shape!(Path { "d": "m12 5 7 7-7 7" }),
    ])
}

/// arrow-up-down
pub fn arrow_up_down() -> Icon {
    icon!("arrow-up-down", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "m21 16-4 4-4-4" }),
        shape!(Path { "d": "M17 20V4" }),
        shape!(Path { "d": "m3 8 4-4 4 4" }),
        shape!(Path { "d": "M7 4v16" }),
    ])
}

/// arrow-up-left
pub fn arrow_up_left() -> Icon {
    icon!("arrow-up-left", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M7 17V7h10" }),
        shape!(Path { "d": "M17 17 7 7" }),
    ])
}

/// arrow-up-right
pub fn arrow_up_right() -> Icon {
    icon!("arrow-up-right", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M7 7h10v10" }),
        shape!(Path { "d": "M7 17 17 7" }),
    ])
}

/// arrow-down-left
pub fn arrow_down_left() -> Icon {
    icon!("arrow-down-left", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M17 7 7 17" }),
        shape!(Path { "d": "M17 17H7V7" }),
    ])
}

/// arrow-down-right
pub fn arrow_down_right() -> Icon {
    icon!("arrow-down-right", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "m7 7 10 10" }),
        shape!(Path { "d": "M17 7v10H7" }),
    ])
}

/// chevron-up
pub fn chevron_up() -> Icon {
    icon!("chevron-up", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "m18 15-6-6-6 6" }),
    ])
}

/// chevron-down
pub fn chevron_down() -> Icon {
    icon!("chevron-down", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "m6 9 6 6 6-6" }),
    ])
}

/// chevron-left
pub fn chevron_left() -> Icon {
    icon!("chevron-left", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "m15 18-6-6 6-6" }),
    ])
}

/// chevron-right
pub fn chevron_right() -> Icon {
    icon!("chevron-right", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "m9 18 6-6-6-6" }),
    ])
}

/// refresh-cw
pub fn refresh_cw() -> Icon {
    icon!("refresh-cw", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }),
        shape!(Path { "d": "M21 3v5h-5" }),
        shape!(Path { "d": "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }),
        shape!(Path { "d": "M8 16H3v5" }),
    ])
}

/// rotate-cw
pub fn rotate_cw() -> Icon {
    icon!("rotate-cw", size: 24.0, stroke: 2.0, [
        shape!(Path { "d": "M21 12a9 9 0 1 1-9-9c2.52 0 4.93 1 6.74 2.74L21 8" }),
        shape!(Path { "d": "M21 3v5h-5" }),
    ])
}
