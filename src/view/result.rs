use log::warn;

use crate::model::{
    MatchMatrix, MatchPointResult, MemberId, PlayerResultRow, PlayerScore, PlayerTotal,
    PuttPointResult, PuttSegment, RoundContext, RoundResult, Segment,
};
use crate::score::sort_utils::sort_result_rows;

/// Package per-player rows and the pairwise star table for the presentation
/// layer. Pure regrouping of already-computed points; no scoring happens
/// here.
#[must_use]
pub fn assemble_round_result(
    ctx: &RoundContext,
    match_points: &MatchPointResult,
    putt_points: &PuttPointResult,
    totals: Vec<PlayerTotal>,
) -> RoundResult {
    let rows = sort_result_rows(
        ctx.scores
            .iter()
            .map(|score| build_row(ctx, score, match_points, putt_points, &totals))
            .collect(),
    );
    let matrix = build_match_matrix(ctx, match_points);

    let zero_sum_check: f64 = totals.iter().map(|t| t.total).sum();
    if zero_sum_check.abs() > 1e-9 {
        warn!(
            "round {}: final totals sum to {zero_sum_check}, expected 0",
            ctx.round.round_id
        );
    }

    RoundResult {
        round_id: ctx.round.round_id,
        rows,
        matrix,
        totals,
        zero_sum_check,
    }
}

fn build_row(
    ctx: &RoundContext,
    score: &PlayerScore,
    match_points: &MatchPointResult,
    putt_points: &PuttPointResult,
    totals: &[PlayerTotal],
) -> PlayerResultRow {
    let id = score.member_id;
    let (individual_total, final_total) = totals
        .iter()
        .find(|t| t.member_id == id)
        .map_or((0.0, 0.0), |t| (t.individual, t.total));

    PlayerResultRow {
        member_id: id,
        player: ctx.member_name(id).to_string(),
        front_score: score.front_score,
        back_score: score.back_score,
        extra_score: score.extra_score,
        total_score: score.total_strokes(),
        total_putts: score.total_putts(),
        game_front: score.front_game_pt,
        game_back: score.back_game_pt,
        game_extra: score.extra_game_pt,
        game_total: score.game_pt_total(),
        match_front: match_points.segment_points(id, Segment::Front),
        match_back: match_points.segment_points(id, Segment::Back),
        match_total18: match_points.segment_points(id, Segment::Total18),
        match_extra: match_points.segment_points(id, Segment::Extra),
        match_total: match_points.player_total(id),
        putt_front: putt_points.segment_points(id, PuttSegment::Front),
        putt_back: putt_points.segment_points(id, PuttSegment::Back),
        putt_total: putt_points.player_total(id),
        individual_total,
        final_total,
    }
}

/// The star table carries match points only; putt and game points stay out
/// of the head-to-head cells.
fn build_match_matrix(ctx: &RoundContext, match_points: &MatchPointResult) -> MatchMatrix {
    let member_ids: Vec<MemberId> = ctx.scores.iter().map(|s| s.member_id).collect();
    let player_names = member_ids
        .iter()
        .map(|&id| ctx.member_name(id).to_string())
        .collect();

    let cells: Vec<Vec<Option<i32>>> = member_ids
        .iter()
        .map(|&row_id| {
            member_ids
                .iter()
                .map(|&col_id| {
                    if row_id == col_id {
                        None
                    } else {
                        Some(match_points.pair_total(row_id, col_id))
                    }
                })
                .collect()
        })
        .collect();

    let row_totals = cells
        .iter()
        .map(|row| row.iter().flatten().sum())
        .collect();

    MatchMatrix {
        member_ids,
        player_names,
        cells,
        row_totals,
    }
}
