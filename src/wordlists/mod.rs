//! Word lists backing the dictionary store
//!
//! Provides embedded word lists compiled into the binary plus a file loader
//! for host-supplied overrides.

mod embedded;
pub mod loader;

pub use embedded::{ENABLE, ENABLE_COUNT, TWL06, TWL06_COUNT};
