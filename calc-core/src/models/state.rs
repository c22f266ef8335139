use serde::{Deserialize, Serialize};

use super::{Operation, StatePatch};

/// An additive left-hand side (`a +` or `a -`) parked while a
/// multiplicative run is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deferred {
    pub total: String,
    pub operation: Operation,
}

/// The calculator's display/operation state.
///
/// `total` and `next` hold decimal strings exactly as they are displayed.
/// The default value is the empty state a fresh calculator (or `AC`) starts
/// from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Result of the most recently completed operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    /// Operand currently being entered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Operator waiting for its second operand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,

    /// Only present while `operation` is `x` or `÷` and an additive
    /// left-hand side is waiting to be folded back in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deferred: Option<Deferred>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state produced by merging `patch` into this one.
    ///
    /// `self` is left untouched.
    pub fn apply(
        &self,
        patch: StatePatch,
    ) -> Self {
        Self {
            total: patch.total.merge(self.total.clone()),
            next: patch.next.merge(self.next.clone()),
            operation: patch.operation.merge(self.operation),
            deferred: patch.deferred.merge(self.deferred.clone()),
        }
    }

    /// The value a keypad display shows: `next`, else `total`, else `"0"`.
    pub fn display(&self) -> &str {
        self.next
            .as_deref()
            .or(self.total.as_deref())
            .unwrap_or("0")
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
