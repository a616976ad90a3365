use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    core::error::InvalidInputError,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// How many advance payments («Abschläge») are made per year.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(into = "u32")]
pub enum PaymentSchedule {
    Yearly,
    HalfYearly,
    Quarterly,
    BiMonthly,
    ElevenInstallments,
    #[default]
    Monthly,
    MonthlyWithSettlement,
}

impl PaymentSchedule {
    pub const ALL: [Self; 7] = [
        Self::Yearly,
        Self::HalfYearly,
        Self::Quarterly,
        Self::BiMonthly,
        Self::ElevenInstallments,
        Self::Monthly,
        Self::MonthlyWithSettlement,
    ];

    #[must_use]
    pub const fn payments_per_year(self) -> u32 {
        match self {
            Self::Yearly => 1,
            Self::HalfYearly => 2,
            Self::Quarterly => 4,
            Self::BiMonthly => 6,
            Self::ElevenInstallments => 11,
            Self::Monthly => 12,
            Self::MonthlyWithSettlement => 13,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yearly => "Jährlich (1)",
            Self::HalfYearly => "Halbjährlich (2)",
            Self::Quarterly => "Vierteljährlich (4)",
            Self::BiMonthly => "Alle 2 Monate (6)",
            Self::ElevenInstallments => "Monatlich mit Abschlag (11)",
            Self::Monthly => "Monatlich (12)",
            Self::MonthlyWithSettlement => "Monatlich + Jahresabschluss (13)",
        }
    }
}

impl TryFrom<i64> for PaymentSchedule {
    type Error = InvalidInputError;

    fn try_from(payments_per_year: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|schedule| i64::from(schedule.payments_per_year()) == payments_per_year)
            .ok_or(InvalidInputError::PaymentsPerYear(payments_per_year))
    }
}

impl From<PaymentSchedule> for u32 {
    fn from(schedule: PaymentSchedule) -> Self {
        schedule.payments_per_year()
    }
}

impl From<PaymentSchedule> for Decimal {
    fn from(schedule: PaymentSchedule) -> Self {
        Self::from(schedule.payments_per_year())
    }
}

impl Display for PaymentSchedule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Household consumption and what is being paid for it so far.
#[must_use]
#[derive(Copy, Clone, Debug, bon::Builder)]
pub struct ConsumptionProfile {
    pub annual_consumption: KilowattHours,

    #[builder(default)]
    pub payment_schedule: PaymentSchedule,

    /// Advance payment per installment.
    pub monthly_payment: Cost,
}

impl ConsumptionProfile {
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if self.annual_consumption.is_sign_negative() {
            return Err(InvalidInputError::NegativeConsumption(self.annual_consumption));
        }
        if self.monthly_payment.is_sign_negative() {
            return Err(InvalidInputError::NegativeMonthlyPayment(self.monthly_payment));
        }
        Ok(())
    }

    /// Total of all advance payments over the year.
    pub fn amount_paid(&self) -> Result<Cost, InvalidInputError> {
        self.monthly_payment
            .checked_mul(Decimal::from(self.payment_schedule))
            .map(Cost::round_to_cents)
            .ok_or(InvalidInputError::AmountPaidOverflow)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_try_from_listed() {
        for schedule in PaymentSchedule::ALL {
            let n = i64::from(schedule.payments_per_year());
            assert_eq!(PaymentSchedule::try_from(n), Ok(schedule));
        }
    }

    #[test]
    fn test_try_from_rejects_zero_negative_and_unlisted() {
        for n in [0_i64, -12, 3, 14] {
            assert_eq!(PaymentSchedule::try_from(n), Err(InvalidInputError::PaymentsPerYear(n)));
        }
    }

    #[test]
    fn test_default_is_monthly() {
        assert_eq!(PaymentSchedule::default().payments_per_year(), 12);
        assert_eq!(PaymentSchedule::default().to_string(), "Monatlich (12)");
    }

    #[test]
    fn test_amount_paid() {
        let profile = ConsumptionProfile::builder()
            .annual_consumption(KilowattHours::from(dec!(3500)))
            .payment_schedule(PaymentSchedule::Monthly)
            .monthly_payment(Cost::from(dec!(80)))
            .build();
        assert_eq!(profile.amount_paid(), Ok(Cost::from(dec!(960.00))));
    }

    #[test]
    fn test_amount_paid_overflow() {
        let profile = ConsumptionProfile::builder()
            .annual_consumption(KilowattHours::ZERO)
            .payment_schedule(PaymentSchedule::MonthlyWithSettlement)
            .monthly_payment(Cost::from(Decimal::MAX / dec!(2)))
            .build();
        assert_eq!(profile.validate(), Ok(()));
        assert_eq!(profile.amount_paid(), Err(InvalidInputError::AmountPaidOverflow));
    }

    #[test]
    fn test_validate_rejects_negative_values() {
        let profile = ConsumptionProfile::builder()
            .annual_consumption(KilowattHours::from(dec!(-1)))
            .monthly_payment(Cost::ZERO)
            .build();
        assert_eq!(
            profile.validate(),
            Err(InvalidInputError::NegativeConsumption(KilowattHours::from(dec!(-1))))
        );

        let profile = ConsumptionProfile::builder()
            .annual_consumption(KilowattHours::ZERO)
            .monthly_payment(Cost::from(dec!(-0.01)))
            .build();
        assert_eq!(
            profile.validate(),
            Err(InvalidInputError::NegativeMonthlyPayment(Cost::from(dec!(-0.01))))
        );
    }
}
