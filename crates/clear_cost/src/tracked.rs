//! Change-tracked values that notify a bound handler only on real changes.

use crate::error::ClearCostError;

/// Holds a value and calls its handler exactly once per distinct transition.
///
/// The handler is bound at construction; the receiver it acts on (usually a
/// display sink) is passed to each [`set`](Self::set), so the cell never
/// aliases state it does not own.
pub struct ChangeTrackedCell<T, C: ?Sized> {
    name: &'static str,
    current: Option<T>,
    on_change: fn(&mut C, &T),
}

impl<T: PartialEq, C: ?Sized> ChangeTrackedCell<T, C> {
    pub fn new(name: &'static str, on_change: fn(&mut C, &T)) -> Self {
        Self {
            name,
            current: None,
            on_change,
        }
    }

    /// Store `value`, notifying `receiver` first if it differs from the
    /// stored value (or if nothing was stored yet). Returns whether the
    /// handler fired.
    pub fn set(&mut self, value: T, receiver: &mut C) -> bool {
        if self.current.as_ref() == Some(&value) {
            return false;
        }
        (self.on_change)(receiver, &value);
        self.current = Some(value);
        true
    }

    /// Last stored value.
    pub fn get(&self) -> Result<&T, ClearCostError> {
        self.current
            .as_ref()
            .ok_or(ClearCostError::UninitializedState(self.name))
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}

impl<T: std::fmt::Debug, C: ?Sized> std::fmt::Debug for ChangeTrackedCell<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeTrackedCell")
            .field("name", &self.name)
            .field("current", &self.current)
            .finish()
    }
}
