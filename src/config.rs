use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    core::tariff::TariffOffer,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

/// Comparison inputs stored in a TOML file, every field may be overridden on the command line.
#[must_use]
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonConfig {
    #[serde(rename = "annual_consumption_kwh")]
    pub annual_consumption: Option<KilowattHours>,

    pub payments_per_year: Option<i64>,

    #[serde(rename = "monthly_payment_euro")]
    pub monthly_payment: Option<Cost>,

    #[serde(default, rename = "tariff")]
    pub tariffs: Vec<TariffEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TariffEntry {
    #[serde(default)]
    pub name: String,

    pub unit_price_cents_per_kwh: Decimal,

    pub base_price_euro_per_year: Decimal,
}

impl From<TariffEntry> for TariffOffer {
    fn from(entry: TariffEntry) -> Self {
        Self::builder()
            .name(entry.name)
            .unit_price(KilowattHourRate::from_cents(entry.unit_price_cents_per_kwh))
            .base_price(Cost::from(entry.base_price_euro_per_year))
            .build()
    }
}

impl ComparisonConfig {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        info!(n_tariffs = config.tariffs.len(), "loaded the configuration");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
