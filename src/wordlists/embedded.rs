//! Embedded word lists
//!
//! Dictionary sources compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/twl06.rs"));
include!(concat!(env!("OUT_DIR"), "/enable.rs"));
