//! # Data Models
//!
//! Payload types returned inside response envelopes.

mod health;

pub use health::*;
