use lovenest_shared::config::{GOLD, ROSE};

/// Window size used before the first resize event arrives.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

/// Scene units are far larger than Bevy's metre-based light falloff expects.
pub const POINT_LIGHT_LUMENS: f32 = 4_000_000.0;
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;
pub const EMISSIVE_STRENGTH: f32 = 0.2;

pub const GOLD_LIGHT_POS: [f32; 3] = [10.0, 10.0, 10.0];
pub const ROSE_LIGHT_POS: [f32; 3] = [-10.0, -10.0, 10.0];

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const PAGE_BG: u32 = 0x1a0b14;
    pub const GOLD: u32 = GOLD;
    pub const ROSE: u32 = ROSE;
    pub const INK: u32 = 0xfdf2f6;
    pub const INK_DIM: u32 = 0xb9a3ad;
    pub const CARD: u32 = 0x2a1220;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}
