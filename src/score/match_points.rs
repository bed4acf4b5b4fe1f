use std::cmp::Ordering;

use crate::model::{MatchPointResult, PairSegmentPoints, PlayerScore, RoundContext, Segment};
use crate::score::handicap::HandicapTable;
use crate::score::net::{net_score, segment_applicable};

/// Stake per segment: the winner of a segment takes 10 off the loser.
pub const SEGMENT_STAKE: i32 = 10;

/// Compare every unordered pair over its applicable segments. Lower net
/// score wins the stake; ties score nothing. Pairs flagged total-only skip
/// the front and back nines and play only the 18-hole total and extra.
#[must_use]
pub fn compute_match_points(ctx: &RoundContext, handicaps: &HandicapTable) -> MatchPointResult {
    let mut result = MatchPointResult::default();
    for i in 0..ctx.scores.len() {
        for j in (i + 1)..ctx.scores.len() {
            score_pair(&ctx.scores[i], &ctx.scores[j], handicaps, &mut result);
        }
    }
    result
}

fn score_pair(
    a: &PlayerScore,
    b: &PlayerScore,
    handicaps: &HandicapTable,
    result: &mut MatchPointResult,
) {
    let total_only = handicaps.is_total_only(a.member_id, b.member_id);
    for segment in Segment::ALL {
        if total_only && matches!(segment, Segment::Front | Segment::Back) {
            continue;
        }
        if !segment_applicable(a, b, segment) {
            continue;
        }
        let net_a = net_score(a, b.member_id, segment, handicaps);
        let net_b = net_score(b, a.member_id, segment, handicaps);
        let points_a = match net_a.cmp(&net_b) {
            Ordering::Less => SEGMENT_STAKE,
            Ordering::Greater => -SEGMENT_STAKE,
            Ordering::Equal => 0,
        };
        result.entries.push(PairSegmentPoints {
            player_a: a.member_id,
            player_b: b.member_id,
            segment,
            points_a,
            points_b: -points_a,
        });
    }
}
