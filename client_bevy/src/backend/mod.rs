//! HTTP backend collaborator: requests, the shared fallback policy, and the
//! channel bridge that hands results back to the frame loop.

mod fallback;
mod photos;
mod requests;
mod transport;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

pub use photos::{LoadedPhoto, PhotoPixels};
pub use transport::{Backend, BackendCommand, BackendEvent};
