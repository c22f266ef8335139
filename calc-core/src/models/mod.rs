mod button;
mod operation;
mod patch;
mod state;

pub use button::{Button, Digit, ParseButtonError};
pub use operation::Operation;
pub use patch::{Field, StatePatch};
pub use state::{CalculatorState, Deferred};
