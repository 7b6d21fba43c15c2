//! Headless hosts for the match loop.
//!
//! The loop's collaborators are traits here — renderer, input source, frame
//! clock — so a windowed app and a test harness can drive the exact same
//! simulation. The [`Driver`] implements the cooperative contract: wait for
//! the next frame, sample input, tick, render, repeat.

pub mod driver;
pub mod hosts;

pub use driver::*;
pub use hosts::*;
