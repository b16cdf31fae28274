mod analysis;
pub mod client;
mod intake;
mod profile;
mod questions;
mod quiz;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
