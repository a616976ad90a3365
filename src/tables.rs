use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{comparison::Comparison, profile::PaymentSchedule};

#[must_use]
pub fn build_results_table(comparison: &Comparison) -> Table {
    let cheapest_position = comparison.cheapest_position();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec![
        "Tarif",
        "Gesamtkosten",
        "Gezahlt",
        "Differenz",
        "Idealer Abschlag",
    ]);
    for (position, result) in comparison.results.iter().enumerate() {
        let name = Cell::new(&result.name);
        table.add_row(vec![
            if Some(position) == cheapest_position {
                name.fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                name
            },
            Cell::new(result.total_cost).set_alignment(CellAlignment::Right),
            Cell::new(result.amount_paid)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(result.difference).set_alignment(CellAlignment::Right).fg(
                if result.difference.is_sign_negative() { Color::Red } else { Color::Green },
            ),
            Cell::new(result.ideal_payment).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_payment_schedules_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Abschläge pro Jahr", "Bezeichnung"]);
    for schedule in PaymentSchedule::ALL {
        table.add_row(vec![
            Cell::new(schedule.payments_per_year()).set_alignment(CellAlignment::Right),
            Cell::new(schedule.label()).fg(if schedule == PaymentSchedule::default() {
                Color::Green
            } else {
                Color::Reset
            }),
        ]);
    }
    table
}
