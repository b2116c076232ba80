//! Small per-frame visual effects in window space (pixels, origin top-left, y down).

use std::f64::consts::TAU;

use rand::Rng;

use crate::scene::Accent;

pub const BURST_COUNT: usize = 5;
/// Pixels per frame
pub const BURST_SPEED: f64 = 3.0;
/// Opacity lost per frame
pub const BURST_FADE: f64 = 0.02;
pub const BURST_SIZE: f64 = 10.0;

pub const RAIN_HEARTS: u32 = 50;
pub const RAIN_INTERVAL_SECS: f64 = 0.1;
pub const RAIN_START_Y: f64 = -50.0;
pub const RAIN_MIN_SPEED: f64 = 2.0;
pub const RAIN_MAX_SPEED: f64 = 5.0;

/// Ring that trails the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorFollower {
    pub x: f64,
    pub y: f64,
}

impl CursorFollower {
    pub fn step(&mut self, mouse_x: f64, mouse_y: f64, smoothing: f64) {
        self.x += (mouse_x - self.x) * smoothing;
        self.y += (mouse_y - self.y) * smoothing;
    }
}

/// Cursor scale while hovering something clickable.
pub fn cursor_scale(hovering: bool, hover_scale: f64) -> f64 {
    if hovering {
        hover_scale
    } else {
        1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstParticle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub opacity: f64,
    pub accent: Accent,
}

impl BurstParticle {
    /// Fade and move one frame. Returns false once fully transparent.
    pub fn step(&mut self) -> bool {
        self.opacity -= BURST_FADE;
        self.x += self.vx;
        self.y += self.vy;
        self.opacity > 0.0
    }
}

/// Evenly spaced ring of particles around a click.
pub fn spawn_burst(x: f64, y: f64, rng: &mut impl Rng) -> Vec<BurstParticle> {
    (0..BURST_COUNT)
        .map(|i| {
            let angle = TAU * i as f64 / BURST_COUNT as f64;
            BurstParticle {
                x,
                y,
                vx: angle.cos() * BURST_SPEED,
                vy: angle.sin() * BURST_SPEED,
                opacity: 1.0,
                accent: Accent::pick(rng),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingHeart {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
}

impl FallingHeart {
    /// Fall one frame. Returns false once past the bottom edge.
    pub fn step(&mut self, viewport_height: f64) -> bool {
        self.y += self.speed;
        self.y < viewport_height
    }

    /// The heart spins as it falls: one degree per pixel.
    pub fn rotation_degrees(&self) -> f64 {
        self.y
    }
}

/// Staggered release of falling hearts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeartRain {
    pending: u32,
    next_in: f64,
}

impl HeartRain {
    /// Queue another full shower. The first heart drops on the next advance.
    pub fn trigger(&mut self) {
        if self.pending == 0 {
            self.next_in = 0.0;
        }
        self.pending += RAIN_HEARTS;
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }

    /// Release the hearts that are due after `dt` seconds.
    pub fn advance(&mut self, dt: f64, viewport_width: f64, rng: &mut impl Rng) -> Vec<FallingHeart> {
        let mut released = Vec::new();
        if self.pending == 0 {
            return released;
        }
        self.next_in -= dt;
        while self.next_in <= 0.0 && self.pending > 0 {
            released.push(FallingHeart {
                x: rng.gen::<f64>() * viewport_width.max(0.0),
                y: RAIN_START_Y,
                speed: rng.gen_range(RAIN_MIN_SPEED..RAIN_MAX_SPEED),
            });
            self.pending -= 1;
            self.next_in += RAIN_INTERVAL_SECS;
        }
        released
    }
}
