//! Engine-free logic for the Lovenest page.
//!
//! The Bevy client renders and schedules; everything it animates or decides
//! lives here so it can be stepped deterministically in tests.

pub mod api;
pub mod config;
pub mod counter;
pub mod effects;
pub mod gallery;
pub mod heart;
pub mod konami;
pub mod scene;
pub mod toast;
pub mod vec3;
pub mod wall;
