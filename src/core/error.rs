use crate::quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate};

/// Input rejected before any cost is computed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("payments per year must be one of 1, 2, 4, 6, 11, 12 or 13, got {0}")]
    PaymentsPerYear(i64),

    #[error("annual consumption must not be negative, got {0}")]
    NegativeConsumption(KilowattHours),

    #[error("monthly payment must not be negative, got {0}")]
    NegativeMonthlyPayment(Cost),

    #[error("tariff `{name}`: unit price must not be negative, got {unit_price}")]
    NegativeUnitPrice { name: String, unit_price: KilowattHourRate },

    #[error("tariff `{name}`: base price must not be negative, got {base_price}")]
    NegativeBasePrice { name: String, base_price: Cost },

    #[error("amount paid is too large to compute")]
    AmountPaidOverflow,

    #[error("tariff `{name}`: annual cost is too large to compute")]
    TotalCostOverflow { name: String },

    #[error("at most {max} tariffs can be compared, got {count}")]
    TooManyTariffs { count: usize, max: usize },
}
