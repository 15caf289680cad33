//! Line quantities

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::validation::ValidationError;

/// A strictly positive item count that fits a Postgres `INTEGER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    /// Largest quantity representable in storage.
    pub const MAX: u32 = i32::MAX.unsigned_abs();

    /// Validate a client-supplied quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotPositive`] for zero or negative values and
    /// [`ValidationError::OutOfRange`] for values above [`Quantity::MAX`].
    pub fn parse(field: &'static str, value: i64) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::NotPositive { field });
        }

        u32::try_from(value)
            .ok()
            .filter(|value| *value <= Self::MAX)
            .map(Self)
            .ok_or(ValidationError::OutOfRange { field })
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Quantity as the `INTEGER` bind value.
    #[must_use]
    pub fn to_i32(self) -> i32 {
        i32::try_from(self.0).unwrap_or(i32::MAX)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}
