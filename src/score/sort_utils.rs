use crate::model::PlayerResultRow;
use std::cmp::Ordering;

/// Order result rows for display: highest final total first, ties broken by
/// player name.
#[must_use]
pub fn sort_result_rows(mut rows: Vec<PlayerResultRow>) -> Vec<PlayerResultRow> {
    rows.sort_by(|a, b| {
        b.final_total
            .partial_cmp(&a.final_total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.player.cmp(&b.player))
    });
    rows
}
