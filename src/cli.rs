mod compare;

use std::{path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

pub use self::compare::compare;
use crate::{
    core::tariff::TariffOffer,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the tariffs, show the cheapest one and export the reports.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// List the supported payment schedules.
    #[clap(name = "schedules")]
    Schedules,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// TOML file with the household profile and the tariff offers.
    #[clap(long = "config", env = "STROMTARIF_CONFIG")]
    pub config_path: Option<PathBuf>,

    #[clap(flatten)]
    pub profile: ProfileArgs,

    /// Tariff offer, replaces the offers from the configuration file. Repeat for more offers.
    #[clap(
        long = "tariff",
        value_name = "[NAME:]CENTS_PER_KWH:EURO_PER_YEAR",
        allow_negative_numbers = true
    )]
    pub tariffs: Vec<TariffArg>,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Copy, Clone, Parser)]
pub struct ProfileArgs {
    /// Annual consumption («Jahresverbrauch») in kilowatt-hours.
    #[clap(
        long = "annual-consumption-kwh",
        env = "ANNUAL_CONSUMPTION_KWH",
        allow_negative_numbers = true
    )]
    pub annual_consumption: Option<KilowattHours>,

    /// Number of advance payments per year: 1, 2, 4, 6, 11, 12 or 13.
    #[clap(long, env = "PAYMENTS_PER_YEAR", allow_negative_numbers = true)]
    pub payments_per_year: Option<i64>,

    /// Advance payment («Abschlag») per installment in euro.
    #[clap(
        long = "monthly-payment-euro",
        env = "MONTHLY_PAYMENT_EURO",
        allow_negative_numbers = true
    )]
    pub monthly_payment: Option<Cost>,
}

#[derive(Parser)]
pub struct OutputArgs {
    #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Directory to write `tarifvergleich.csv` and `tarifvergleich.pdf` into.
    #[clap(long, env = "EXPORT_DIR", default_value = ".")]
    pub export_dir: PathBuf,

    /// Do not write the reports.
    #[clap(long)]
    pub no_export: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Result table and bar chart.
    Table,

    /// Machine-readable comparison.
    Json,
}

/// Tariff offer as given on the command line: `[NAME:]CENTS_PER_KWH:EURO_PER_YEAR`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TariffArg {
    pub name: String,
    pub unit_price_cents: Decimal,
    pub base_price_euro: Decimal,
}

impl FromStr for TariffArg {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.rsplitn(3, ':');
        let base_price = parts.next().unwrap_or_default();
        let Some(unit_price) = parts.next() else {
            bail!("expected `[NAME:]CENTS_PER_KWH:EURO_PER_YEAR`, got `{value}`");
        };
        Ok(Self {
            name: parts.next().unwrap_or_default().trim().to_string(),
            unit_price_cents: unit_price
                .trim()
                .parse()
                .with_context(|| format!("invalid unit price `{unit_price}`"))?,
            base_price_euro: base_price
                .trim()
                .parse()
                .with_context(|| format!("invalid base price `{base_price}`"))?,
        })
    }
}

impl From<TariffArg> for TariffOffer {
    fn from(arg: TariffArg) -> Self {
        Self::builder()
            .name(arg.name)
            .unit_price(KilowattHourRate::from_cents(arg.unit_price_cents))
            .base_price(Cost::from(arg.base_price_euro))
            .build()
    }
}
