use std::fmt::{Display, Formatter};

use rust_decimal::RoundingStrategy;

use crate::quantity::Quantity;

/// Amount in euro.
pub type Cost = Quantity<0, 1>;

impl Cost {
    /// Round to whole cents, midpoints away from zero, always keeping two decimal places.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        let mut value = self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(2);
        Self(value)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €", self.0)
    }
}
