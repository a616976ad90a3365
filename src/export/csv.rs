use serde::Serialize;

use crate::{core::comparison::Comparison, export::plain, prelude::*};

pub const FILE_NAME: &str = "tarifvergleich.csv";

const HEADER: [&str; 5] =
    ["Tarif", "Gesamtkosten (€)", "Gezahlt (€)", "Differenz (€)", "Idealer Abschlag (€)"];

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Tarif")]
    name: &'a str,

    #[serde(rename = "Gesamtkosten (€)")]
    total_cost: String,

    #[serde(rename = "Gezahlt (€)")]
    amount_paid: String,

    #[serde(rename = "Differenz (€)")]
    difference: String,

    #[serde(rename = "Idealer Abschlag (€)")]
    ideal_payment: String,
}

/// Comma-separated UTF-8 export with a header row, one row per result in input order.
#[instrument(skip_all, fields(n_results = comparison.results.len()))]
pub fn to_csv(comparison: &Comparison) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(&mut buffer);
    if comparison.is_empty() {
        // Serialized rows carry the header, so write it manually when there are none.
        writer.write_record(HEADER)?;
    }
    for result in &comparison.results {
        writer.serialize(Row {
            name: &result.name,
            total_cost: plain(result.total_cost),
            amount_paid: plain(result.amount_paid),
            difference: plain(result.difference),
            ideal_payment: plain(result.ideal_payment),
        })?;
    }
    writer.flush().context("failed to flush the CSV writer")?;
    drop(writer);
    Ok(buffer)
}
