//! Calculator logic: decimal arithmetic helpers and the button reducer.

pub mod common;
pub mod reducer;

pub use reducer::{calculate, press, press_all};
