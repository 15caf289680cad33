//! Product Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;

use crate::domain::validation::ValidationError;

/// Product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i64);

impl ProductId {
    /// Wrap an identifier read back from storage.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Validate a client-supplied product identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotPositive`] when `id` is below one.
    pub fn parse(id: i64) -> Result<Self, ValidationError> {
        if id < 1 {
            return Err(ValidationError::NotPositive { field: "productId" });
        }

        Ok(Self(id))
    }

    /// Parse a comma separated list such as `"3,7,12"`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the list is empty or any entry is not
    /// a positive integer.
    pub fn parse_list(ids: &str) -> Result<Vec<Self>, ValidationError> {
        let ids = ids
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::parse::<Self>)
            .collect::<Result<Vec<_>, _>>()?;

        if ids.is_empty() {
            return Err(ValidationError::Missing { field: "ids" });
        }

        Ok(ids)
    }

    #[must_use]
    pub const fn into_i64(self) -> i64 {
        self.0
    }
}

impl FromStr for ProductId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let id = value
            .parse::<i64>()
            .map_err(|_ignored| ValidationError::Malformed { field: "productId" })?;

        Self::parse(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in minor currency units.
    pub price: u64,
    pub image: String,
    pub quantity_in_stock: u32,
    pub added_at: Timestamp,
}

/// Stock level snapshot for a single product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductStock {
    pub id: ProductId,
    pub name: String,
    pub quantity_in_stock: u32,
}
