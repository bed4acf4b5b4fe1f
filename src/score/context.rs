use log::debug;

use crate::error::CoreError;
use crate::model::{RoundContext, RoundResult};
use crate::score::aggregate::compute_totals;
use crate::score::handicap::HandicapTable;
use crate::score::match_points::compute_match_points;
use crate::score::putt::compute_putt_points;
use crate::storage::Storage;
use crate::view::assemble_round_result;

/// Load one round's snapshot through the storage seam.
///
/// # Errors
/// Returns `CoreError::NotFound` if the round does not exist or has no score
/// rows, and `CoreError::Db` when storage fails.
pub async fn load_round_context(
    storage: &dyn Storage,
    round_id: i64,
) -> Result<RoundContext, CoreError> {
    let round = storage
        .get_round_details(round_id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("round {round_id}")))?;
    let members = storage.get_members_for_round(round_id).await?;
    let scores = storage.get_scores_for_round(round_id).await?;
    if scores.is_empty() {
        return Err(CoreError::NotFound(format!(
            "no participants for round {round_id}"
        )));
    }
    let handicaps = storage.get_handicaps_for_round(round_id).await?;
    Ok(RoundContext {
        round,
        members,
        scores,
        handicaps,
    })
}

/// Run the whole scoring pipeline over one snapshot. Pure; safe to call
/// concurrently for different rounds.
#[must_use]
pub fn compute_round_result(ctx: &RoundContext) -> RoundResult {
    debug!(
        "scoring round {} with {} players",
        ctx.round.round_id,
        ctx.group_size()
    );
    let handicaps = HandicapTable::from_records(&ctx.handicaps);
    let match_points = compute_match_points(ctx, &handicaps);
    let putt_points = compute_putt_points(ctx);
    let totals = compute_totals(ctx, &match_points, &putt_points);
    assemble_round_result(ctx, &match_points, &putt_points, totals)
}

/// Convenience wrapper: load a round and score it.
///
/// # Errors
/// Propagates the errors of [`load_round_context`].
pub async fn load_and_score_round(
    storage: &dyn Storage,
    round_id: i64,
) -> Result<RoundResult, CoreError> {
    let ctx = load_round_context(storage, round_id).await?;
    Ok(compute_round_result(&ctx))
}

/// Score a round and write the per-player totals back through storage. The
/// stored values are a cache of this computation, not engine state.
///
/// # Errors
/// Propagates loading errors and storage write failures.
pub async fn score_and_store_round(
    storage: &dyn Storage,
    round_id: i64,
) -> Result<RoundResult, CoreError> {
    let result = load_and_score_round(storage, round_id).await?;
    storage.store_round_totals(round_id, &result.totals).await?;
    Ok(result)
}
