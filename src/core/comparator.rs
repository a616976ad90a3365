use rust_decimal::Decimal;

use crate::{
    core::{
        comparison::{Comparison, ComparisonResult},
        error::InvalidInputError,
        profile::ConsumptionProfile,
        tariff::{MAX_TARIFFS, TariffOffer},
    },
    prelude::*,
};

/// Compute annual cost, amount paid, difference and ideal advance payment for every offer.
///
/// All amounts are rounded to cents, midpoints away from zero. The total cost is rounded first,
/// and the difference and ideal payment are derived from the rounded total.
///
/// The whole input is validated and every total is computed before any result is built: either
/// every offer gets a result, or an error is returned. An empty offer list yields an empty
/// comparison.
#[instrument(skip_all, fields(n_offers = offers.len()))]
pub fn compare(
    profile: &ConsumptionProfile,
    offers: &[TariffOffer],
) -> Result<Comparison, InvalidInputError> {
    profile.validate()?;
    if offers.len() > MAX_TARIFFS {
        return Err(InvalidInputError::TooManyTariffs { count: offers.len(), max: MAX_TARIFFS });
    }
    for (position, offer) in offers.iter().enumerate() {
        offer.validate(position)?;
    }

    let amount_paid = profile.amount_paid()?;
    let payments_per_year = Decimal::from(profile.payment_schedule);
    debug!(%amount_paid, schedule = %profile.payment_schedule, "paid so far");

    let total_costs = offers
        .iter()
        .enumerate()
        .map(|(position, offer)| offer.total_cost(profile.annual_consumption, position))
        .collect::<Result<Vec<_>, _>>()?;

    let results = offers
        .iter()
        .zip(total_costs)
        .enumerate()
        .map(|(position, (offer, total_cost))| {
            let result = ComparisonResult {
                name: offer.display_name(position),
                total_cost,
                amount_paid,
                // Both sides are non-negative, so the subtraction cannot overflow.
                difference: (amount_paid - total_cost).round_to_cents(),
                ideal_payment: (total_cost / payments_per_year).round_to_cents(),
            };
            debug!(
                name = %result.name,
                total_cost = %result.total_cost,
                difference = %result.difference,
                ideal_payment = %result.ideal_payment,
                "computed"
            );
            result
        })
        .collect();

    Ok(Comparison { amount_paid, results })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rust_decimal::dec;

    use super::*;
    use crate::{
        core::profile::PaymentSchedule,
        quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    };

    fn profile(consumption: Decimal, monthly_payment: Decimal) -> ConsumptionProfile {
        ConsumptionProfile::builder()
            .annual_consumption(KilowattHours::from(consumption))
            .payment_schedule(PaymentSchedule::Monthly)
            .monthly_payment(Cost::from(monthly_payment))
            .build()
    }

    fn offer(name: &str, cents_per_kwh: Decimal, base_price: Decimal) -> TariffOffer {
        TariffOffer::builder()
            .name(name)
            .unit_price(KilowattHourRate::from_cents(cents_per_kwh))
            .base_price(Cost::from(base_price))
            .build()
    }

    #[test]
    fn test_example() {
        let comparison =
            compare(&profile(dec!(3500), dec!(80)), &[offer("A", dec!(28.50), dec!(120))]).unwrap();
        assert_eq!(comparison.amount_paid, Cost::from(dec!(960.00)));
        assert_eq!(
            comparison.results,
            [ComparisonResult {
                name: "A".to_string(),
                total_cost: Cost::from(dec!(1117.50)),
                amount_paid: Cost::from(dec!(960.00)),
                difference: Cost::from(dec!(-157.50)),
                ideal_payment: Cost::from(dec!(93.13)),
            }]
        );
    }

    #[test]
    fn test_one_result_per_offer_in_input_order() {
        let offers = [
            offer("teuer", dec!(40), dec!(200)),
            offer("", dec!(25), dec!(100)),
            offer("mittel", dec!(30), dec!(150)),
        ];
        let comparison = compare(&profile(dec!(2500), dec!(70)), &offers).unwrap();
        let names = comparison.results.iter().map(|result| result.name.as_str()).collect_vec();
        assert_eq!(names, ["teuer", "Tarif 2", "mittel"]);
        assert!(comparison.results.iter().all(|result| result.amount_paid == Cost::from(dec!(840))));
        assert_eq!(comparison.cheapest_position(), Some(1));
    }

    #[test]
    fn test_cheapest_is_not_more_expensive_than_any_other() {
        let offers = [
            offer("A", dec!(31.9), dec!(99)),
            offer("B", dec!(27.45), dec!(189.6)),
            offer("C", dec!(29.99), dec!(120)),
            offer("D", dec!(35), dec!(0)),
        ];
        let comparison = compare(&profile(dec!(4200), dec!(100)), &offers).unwrap();
        let cheapest = comparison.cheapest().unwrap();
        assert!(comparison.results.iter().all(|result| cheapest.total_cost <= result.total_cost));
    }

    #[test]
    fn test_tie_goes_to_first_offer() {
        let offers = [offer("A", dec!(30), dec!(100)), offer("B", dec!(30), dec!(100))];
        let comparison = compare(&profile(dec!(1000), dec!(0)), &offers).unwrap();
        assert_eq!(comparison.cheapest().unwrap().name, "A");
    }

    #[test]
    fn test_total_cost_is_monotonic() {
        let profile = profile(dec!(3500), dec!(80));
        let offers = [
            offer("base", dec!(28.5), dec!(120)),
            offer("higher unit price", dec!(28.51), dec!(120)),
            offer("higher base price", dec!(28.5), dec!(120.01)),
        ];
        let results = compare(&profile, &offers).unwrap().results;
        assert!(results[0].total_cost <= results[1].total_cost);
        assert!(results[0].total_cost <= results[2].total_cost);
    }

    #[test]
    fn test_idempotent() {
        let profile = profile(dec!(1234), dec!(45.67));
        let offers = [offer("A", dec!(33.33), dec!(111.11)), offer("B", dec!(29.9), dec!(150))];
        assert_eq!(compare(&profile, &offers).unwrap(), compare(&profile, &offers).unwrap());
    }

    #[test]
    fn test_zero_offers() {
        let comparison = compare(&profile(dec!(3500), dec!(80)), &[]).unwrap();
        assert!(comparison.is_empty());
        assert_eq!(comparison.cheapest(), None);
    }

    #[test]
    fn test_zero_consumption() {
        let comparison =
            compare(&profile(dec!(0), dec!(10)), &[offer("A", dec!(30), dec!(130))]).unwrap();
        let result = &comparison.results[0];
        assert_eq!(result.total_cost, Cost::from(dec!(130)));
        assert_eq!(result.difference, Cost::from(dec!(-10)));
        assert_eq!(result.ideal_payment, Cost::from(dec!(10.83)));
    }

    #[test]
    fn test_yearly_schedule() {
        let profile = ConsumptionProfile::builder()
            .annual_consumption(KilowattHours::from(dec!(2000)))
            .payment_schedule(PaymentSchedule::Yearly)
            .monthly_payment(Cost::from(dec!(700)))
            .build();
        let comparison = compare(&profile, &[offer("A", dec!(30), dec!(100))]).unwrap();
        let result = &comparison.results[0];
        assert_eq!(result.amount_paid, Cost::from(dec!(700)));
        assert_eq!(result.total_cost, Cost::from(dec!(700)));
        assert_eq!(result.difference, Cost::ZERO);
        assert_eq!(result.ideal_payment, Cost::from(dec!(700)));
    }

    #[test]
    fn test_rejects_negative_offer_before_computing() {
        let offers = [offer("A", dec!(30), dec!(100)), offer("B", dec!(30), dec!(-1))];
        assert!(matches!(
            compare(&profile(dec!(1000), dec!(50)), &offers),
            Err(InvalidInputError::NegativeBasePrice { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_consumption() {
        assert!(matches!(
            compare(&profile(dec!(-1), dec!(50)), &[offer("A", dec!(30), dec!(100))]),
            Err(InvalidInputError::NegativeConsumption(_))
        ));
    }

    #[test]
    fn test_rejects_total_cost_overflow() {
        let profile = profile(Decimal::MAX, dec!(50));
        let offers = [offer("A", dec!(0), dec!(100)), offer("B", dec!(200), dec!(0))];
        assert_eq!(
            compare(&profile, &offers),
            Err(InvalidInputError::TotalCostOverflow { name: "B".to_string() })
        );
    }

    #[test]
    fn test_rejects_amount_paid_overflow() {
        let profile = ConsumptionProfile::builder()
            .annual_consumption(KilowattHours::ZERO)
            .payment_schedule(PaymentSchedule::MonthlyWithSettlement)
            .monthly_payment(Cost::from(Decimal::MAX / dec!(2)))
            .build();
        assert_eq!(compare(&profile, &[]), Err(InvalidInputError::AmountPaidOverflow));
    }

    #[test]
    fn test_rejects_too_many_offers() {
        let offers = (0..=MAX_TARIFFS).map(|_| offer("", dec!(30), dec!(100))).collect_vec();
        assert_eq!(
            compare(&profile(dec!(1000), dec!(50)), &offers),
            Err(InvalidInputError::TooManyTariffs { count: 11, max: 10 })
        );
    }
}
