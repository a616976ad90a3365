use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::quantity::Quantity;

/// Euro per kilowatt-hour.
pub type KilowattHourRate = Quantity<-1, 1>;

impl KilowattHourRate {
    /// Tariffs quote the unit price («Arbeitspreis») in cents.
    pub fn from_cents(cents: Decimal) -> Self {
        Self(cents / Decimal::ONE_HUNDRED)
    }

    pub fn to_cents(self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} ct/kWh", self.to_cents())
    }
}
