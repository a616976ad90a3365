use comfy_table::{Cell, CellAlignment, Color, Table, presets};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{core::comparison::Comparison, quantity::cost::Cost};

pub const TITLE: &str = "Jahreskosten je Tarif";

/// Width of the bar for the most expensive tariff, in terminal cells.
const BAR_WIDTH: usize = 40;

/// Horizontal bar chart of the annual costs, the cheapest tariff in green.
#[must_use]
pub fn build_cost_chart(comparison: &Comparison) -> Table {
    let cheapest_position = comparison.cheapest_position();
    let max_cost =
        comparison.results.iter().map(|result| result.total_cost).max().unwrap_or(Cost::ZERO);

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.enforce_styling();
    for (position, result) in comparison.results.iter().enumerate() {
        let color = if Some(position) == cheapest_position { Color::Green } else { Color::DarkGrey };
        table.add_row(vec![
            Cell::new(&result.name),
            Cell::new("█".repeat(bar_length(result.total_cost, max_cost))).fg(color),
            Cell::new(result.total_cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn bar_length(cost: Cost, max_cost: Cost) -> usize {
    if max_cost <= Cost::ZERO || cost <= Cost::ZERO {
        return 0;
    }
    (cost.0 / max_cost.0 * Decimal::from(BAR_WIDTH)).round().to_usize().unwrap_or(0)
}
