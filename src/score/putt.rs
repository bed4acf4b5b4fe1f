use crate::model::{MemberId, PuttPointResult, PuttSegment, PuttSegmentPoints, RoundContext};

/// Payout for one putt segment: the players with the fewest putts split a
/// fixed pool whose size depends on the group size and the number of
/// co-winners. Group sizes other than 3 or 4 pay nothing.
#[must_use]
pub fn putt_contest(counts: &[(MemberId, i32)]) -> Vec<(MemberId, i32)> {
    let group_size = counts.len();
    if group_size != 3 && group_size != 4 {
        return counts.iter().map(|&(id, _)| (id, 0)).collect();
    }
    let Some(min) = counts.iter().map(|&(_, c)| c).min() else {
        return Vec::new();
    };
    let winners = counts.iter().filter(|&&(_, c)| c == min).count();
    let (winner_points, loser_points) = payout(group_size, winners);
    counts
        .iter()
        .map(|&(id, c)| {
            if c == min {
                (id, winner_points)
            } else {
                (id, loser_points)
            }
        })
        .collect()
}

// Each row sums to zero across the group; an all-way tie pays nothing.
fn payout(group_size: usize, winners: usize) -> (i32, i32) {
    match (group_size, winners) {
        (4, 1) => (30, -10),
        (4, 2) => (10, -10),
        (4, 3) => (10, -30),
        (3, 1) => (20, -10),
        (3, 2) => (10, -20),
        _ => (0, 0),
    }
}

/// Run the contest over both regulation nines independently.
#[must_use]
pub fn compute_putt_points(ctx: &RoundContext) -> PuttPointResult {
    let mut result = PuttPointResult::default();
    for segment in PuttSegment::ALL {
        let counts: Vec<(MemberId, i32)> = ctx
            .scores
            .iter()
            .map(|s| (s.member_id, s.putt_count(segment)))
            .collect();
        for (member_id, points) in putt_contest(&counts) {
            result.entries.push(PuttSegmentPoints {
                member_id,
                segment,
                points,
            });
        }
    }
    result
}
