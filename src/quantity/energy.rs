use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, rate::KilowattHourRate};

pub type KilowattHours = Quantity<1, 0>;

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kWh", self.0)
    }
}

impl KilowattHours {
    /// Cost of the energy at the rate, or `None` when it does not fit into a decimal.
    pub fn checked_cost(self, rate: KilowattHourRate) -> Option<Cost> {
        self.0.checked_mul(rate.0).map(Cost::from)
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Cost::from(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_mul_rate() {
        let cost = KilowattHours::from(dec!(3500)) * KilowattHourRate::from_cents(dec!(28.5));
        assert_eq!(cost, Cost::from(dec!(997.5)));
    }

    #[test]
    fn test_checked_cost() {
        let rate = KilowattHourRate::from_cents(dec!(28.5));
        assert_eq!(KilowattHours::from(dec!(3500)).checked_cost(rate), Some(Cost::from(dec!(997.5))));
        assert_eq!(
            KilowattHours::from(rust_decimal::Decimal::MAX)
                .checked_cost(KilowattHourRate::from_cents(dec!(200))),
            None
        );
    }
}
