pub mod calculations;
pub mod models;

pub use calculations::{calculate, press, press_all};
pub use models::*;
