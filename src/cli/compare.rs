use itertools::Itertools;
use serde::Serialize;

use crate::{
    chart::{self, build_cost_chart},
    cli::{CompareArgs, OutputFormat},
    config::ComparisonConfig,
    core::{
        comparator,
        comparison::{Comparison, ComparisonResult},
        profile::{ConsumptionProfile, PaymentSchedule},
        tariff::TariffOffer,
    },
    export::write_reports,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
    tables::build_results_table,
};

#[instrument(skip_all)]
pub fn compare(args: &CompareArgs) -> Result {
    let config = match &args.config_path {
        Some(path) => ComparisonConfig::read_from(path)?,
        None => ComparisonConfig::default(),
    };

    let payment_schedule = match args.profile.payments_per_year.or(config.payments_per_year) {
        Some(payments_per_year) => PaymentSchedule::try_from(payments_per_year)?,
        None => PaymentSchedule::default(),
    };
    let profile = ConsumptionProfile::builder()
        .annual_consumption(
            args.profile
                .annual_consumption
                .or(config.annual_consumption)
                .unwrap_or(KilowattHours::ZERO),
        )
        .payment_schedule(payment_schedule)
        .monthly_payment(
            args.profile.monthly_payment.or(config.monthly_payment).unwrap_or(Cost::ZERO),
        )
        .build();
    let offers = if args.tariffs.is_empty() {
        config.tariffs.into_iter().map(TariffOffer::from).collect_vec()
    } else {
        args.tariffs.iter().cloned().map(TariffOffer::from).collect_vec()
    };
    info!(
        annual_consumption = %profile.annual_consumption,
        payment_schedule = %profile.payment_schedule,
        monthly_payment = %profile.monthly_payment,
        n_offers = offers.len(),
        "comparing…"
    );

    let comparison = comparator::compare(&profile, &offers)?;
    let Some(cheapest) = comparison.cheapest() else {
        bail!("no tariffs to compare, pass `--tariff` or add `[[tariff]]` to the configuration");
    };
    info!(name = %cheapest.name, total_cost = %cheapest.total_cost, "found the cheapest tariff");

    match args.output.format {
        OutputFormat::Table => print_tables(&comparison, cheapest),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Report::from(&comparison))?);
        }
    }

    if args.output.no_export {
        warn!("skipping the export");
    } else {
        let [csv_path, pdf_path] = write_reports(&comparison, &args.output.export_dir)?;
        info!(csv = %csv_path.display(), pdf = %pdf_path.display(), "done");
    }
    Ok(())
}

fn print_tables(comparison: &Comparison, cheapest: &ComparisonResult) {
    println!("{}", build_results_table(comparison));
    println!("🏆 Günstigster Tarif: {} mit {}", cheapest.name, cheapest.total_cost);
    println!();
    println!("{}", chart::TITLE);
    println!("{}", build_cost_chart(comparison));
}

#[derive(Serialize)]
struct Report<'a> {
    amount_paid: Cost,
    results: &'a [ComparisonResult],
    cheapest: Option<&'a str>,

    /// Tariff names from the cheapest to the most expensive.
    ranking: Vec<&'a str>,
}

impl<'a> From<&'a Comparison> for Report<'a> {
    fn from(comparison: &'a Comparison) -> Self {
        Self {
            amount_paid: comparison.amount_paid,
            results: &comparison.results,
            cheapest: comparison.cheapest().map(|result| result.name.as_str()),
            ranking: comparison.ranked().map(|result| result.name.as_str()).collect(),
        }
    }
}
