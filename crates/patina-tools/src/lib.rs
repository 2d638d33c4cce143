//! Process instrumentation helpers for patina.
//!
//! Solve dispatch logs resident-set-size figures around each engine call;
//! this crate provides the sampling primitive it uses.

pub mod memory;

pub use memory::{RssSample, SampleError};
