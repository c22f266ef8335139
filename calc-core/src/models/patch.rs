use super::{Deferred, Operation};

/// A single field of a [`StatePatch`].
///
/// Distinguishes a field the transition left alone from one it cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Unchanged,
    Cleared,
    Set(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<T> Field<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Merges this field into the current value.
    pub fn merge(
        self,
        current: Option<T>,
    ) -> Option<T> {
        match self {
            Self::Unchanged => current,
            Self::Cleared => None,
            Self::Set(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `Some` sets the field, `None` clears it.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Set(value),
            None => Self::Cleared,
        }
    }
}

/// The partial update a button press produces.
///
/// Only the fields named here change; [`Field::Unchanged`] fields keep their
/// prior value when the patch is merged with
/// [`CalculatorState::apply`](super::CalculatorState::apply).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatePatch {
    pub total: Field<String>,
    pub next: Field<String>,
    pub operation: Field<Operation>,
    pub deferred: Field<Deferred>,
}

impl StatePatch {
    /// A patch that changes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// A patch that clears every field.
    pub fn clear_all() -> Self {
        Self {
            total: Field::Cleared,
            next: Field::Cleared,
            operation: Field::Cleared,
            deferred: Field::Cleared,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_unchanged()
            && self.next.is_unchanged()
            && self.operation.is_unchanged()
            && self.deferred.is_unchanged()
    }
}
