use itertools::Itertools;
use serde::Serialize;

use crate::quantity::cost::Cost;

/// Outcome for a single tariff offer.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub name: String,

    /// «Gesamtkosten»: what the tariff costs over the year.
    pub total_cost: Cost,

    /// «Gezahlt»: sum of the advance payments.
    pub amount_paid: Cost,

    /// Positive when the advance payments exceed the cost (refund), negative when money is due.
    pub difference: Cost,

    /// «Idealer Abschlag»: advance payment that would exactly cover the cost.
    pub ideal_payment: Cost,
}

/// All results of one comparison run, in the order the offers were given.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub amount_paid: Cost,
    pub results: Vec<ComparisonResult>,
}

impl Comparison {
    pub const fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Position of the cheapest result, the first one wins a tie.
    #[must_use]
    pub fn cheapest_position(&self) -> Option<usize> {
        self.results.iter().position_min_by_key(|result| result.total_cost)
    }

    #[must_use]
    pub fn cheapest(&self) -> Option<&ComparisonResult> {
        self.cheapest_position().map(|position| &self.results[position])
    }

    /// Results ordered by total cost, ties keep the input order.
    pub fn ranked(&self) -> impl Iterator<Item = &ComparisonResult> {
        self.results.iter().sorted_by_key(|result| result.total_cost)
    }
}
