use crate::model::{MatchPointResult, PlayerTotal, PuttPointResult, RoundContext};

/// Fold entered game points, match points and putt points into per-player
/// totals.
///
/// With four players the individual total is already the final value: match
/// and putt points are zero-sum per segment and game points are entered as
/// transfers. With three players the individual totals do not balance, so
/// each player's final value is `2 × self − Σ others`; the rescaling is the
/// one the competition rules prescribe and restores `Σ total == 0` for
/// exactly that size. Any other group size passes through unchanged.
#[must_use]
pub fn compute_totals(
    ctx: &RoundContext,
    match_points: &MatchPointResult,
    putt_points: &PuttPointResult,
) -> Vec<PlayerTotal> {
    let mut totals: Vec<PlayerTotal> = ctx
        .scores
        .iter()
        .map(|score| {
            let game_points = score.game_pt_total();
            let mp = match_points.player_total(score.member_id);
            let pp = putt_points.player_total(score.member_id);
            let individual = game_points + f64::from(mp) + f64::from(pp);
            PlayerTotal {
                member_id: score.member_id,
                game_points,
                match_points: mp,
                putt_points: pp,
                individual,
                total: individual,
            }
        })
        .collect();

    if totals.len() == 3 {
        let group_sum: f64 = totals.iter().map(|t| t.individual).sum();
        for t in &mut totals {
            t.total = t.individual * 2.0 - (group_sum - t.individual);
        }
    }
    totals
}
