use crate::{
    core::error::InvalidInputError,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

/// Maximum number of offers compared in one run.
pub const MAX_TARIFFS: usize = 10;

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, bon::Builder)]
pub struct TariffOffer {
    #[builder(default, into)]
    pub name: String,

    /// «Arbeitspreis».
    pub unit_price: KilowattHourRate,

    /// «Grundpreis» per year.
    pub base_price: Cost,
}

impl TariffOffer {
    /// Name used when the offer was left unnamed, `position` is zero-based.
    pub fn default_name(position: usize) -> String {
        format!("Tarif {}", position + 1)
    }

    /// Offer name, falling back to [`TariffOffer::default_name`] for blank ones.
    pub fn display_name(&self, position: usize) -> String {
        let name = self.name.trim();
        if name.is_empty() { Self::default_name(position) } else { name.to_string() }
    }

    /// Annual cost for the consumption, rounded to cents.
    pub fn total_cost(
        &self,
        annual_consumption: KilowattHours,
        position: usize,
    ) -> Result<Cost, InvalidInputError> {
        annual_consumption
            .checked_cost(self.unit_price)
            .and_then(|energy_cost| energy_cost.checked_add(self.base_price))
            .map(Cost::round_to_cents)
            .ok_or_else(|| InvalidInputError::TotalCostOverflow {
                name: self.display_name(position),
            })
    }

    pub fn validate(&self, position: usize) -> Result<(), InvalidInputError> {
        if self.unit_price.is_sign_negative() {
            return Err(InvalidInputError::NegativeUnitPrice {
                name: self.display_name(position),
                unit_price: self.unit_price,
            });
        }
        if self.base_price.is_sign_negative() {
            return Err(InvalidInputError::NegativeBasePrice {
                name: self.display_name(position),
                base_price: self.base_price,
            });
        }
        Ok(())
    }
}
