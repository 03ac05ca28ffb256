//! Money value object.
//!
//! All monetary values are integer cents (never floats), following the
//! convention used throughout the persistence layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Monetary amount in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    /// Creates an amount from a cent count.
    pub fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Zero amount (used for cancellation transactions).
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the raw cent count.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}
