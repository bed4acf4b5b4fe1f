use serde::{Deserialize, Serialize};

use crate::model::types::{MemberId, PuttSegment, Segment};

/// Points awarded to one pair in one segment. `points_b` is always the
/// negation of `points_a`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct PairSegmentPoints {
    pub player_a: MemberId,
    pub player_b: MemberId,
    pub segment: Segment,
    pub points_a: i32,
    pub points_b: i32,
}

impl PairSegmentPoints {
    #[must_use]
    pub fn points_for(&self, member: MemberId) -> i32 {
        if self.player_a == member {
            self.points_a
        } else if self.player_b == member {
            self.points_b
        } else {
            0
        }
    }

    #[must_use]
    pub fn covers(&self, x: MemberId, y: MemberId) -> bool {
        (self.player_a == x && self.player_b == y)
            || (self.player_a == y && self.player_b == x)
    }
}

/// All match-play points for a round, keyed by (pair, segment) so both the
/// pairwise matrix and per-player segment subtotals can be derived from it.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MatchPointResult {
    pub entries: Vec<PairSegmentPoints>,
}

impl MatchPointResult {
    #[must_use]
    pub fn segment_points(&self, member: MemberId, segment: Segment) -> i32 {
        self.entries
            .iter()
            .filter(|e| e.segment == segment)
            .map(|e| e.points_for(member))
            .sum()
    }

    #[must_use]
    pub fn player_total(&self, member: MemberId) -> i32 {
        self.entries.iter().map(|e| e.points_for(member)).sum()
    }

    /// Points `member` earned against `opponent`, summed over segments.
    #[must_use]
    pub fn pair_total(&self, member: MemberId, opponent: MemberId) -> i32 {
        self.entries
            .iter()
            .filter(|e| e.covers(member, opponent))
            .map(|e| e.points_for(member))
            .sum()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct PuttSegmentPoints {
    pub member_id: MemberId,
    pub segment: PuttSegment,
    pub points: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PuttPointResult {
    pub entries: Vec<PuttSegmentPoints>,
}

impl PuttPointResult {
    #[must_use]
    pub fn segment_points(&self, member: MemberId, segment: PuttSegment) -> i32 {
        self.entries
            .iter()
            .filter(|e| e.member_id == member && e.segment == segment)
            .map(|e| e.points)
            .sum()
    }

    #[must_use]
    pub fn player_total(&self, member: MemberId) -> i32 {
        self.entries
            .iter()
            .filter(|e| e.member_id == member)
            .map(|e| e.points)
            .sum()
    }
}

/// Per-player point summary. `individual` is game + match + putt points;
/// `total` is the final value after the 3-player rescaling, and equals
/// `individual` for every other group size.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerTotal {
    pub member_id: MemberId,
    pub game_points: f64,
    pub match_points: i32,
    pub putt_points: i32,
    pub individual: f64,
    pub total: f64,
}

/// One display row of the final results table.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerResultRow {
    pub member_id: MemberId,
    pub player: String,
    pub front_score: i32,
    pub back_score: i32,
    pub extra_score: i32,
    pub total_score: i32,
    pub total_putts: i32,
    pub game_front: f64,
    pub game_back: f64,
    pub game_extra: f64,
    pub game_total: f64,
    pub match_front: i32,
    pub match_back: i32,
    pub match_total18: i32,
    pub match_extra: i32,
    pub match_total: i32,
    pub putt_front: i32,
    pub putt_back: i32,
    pub putt_total: i32,
    pub individual_total: f64,
    pub final_total: f64,
}

/// Pairwise star table: match points each player took off each opponent.
/// Rows and columns share the same player order; the diagonal is `None`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchMatrix {
    pub member_ids: Vec<MemberId>,
    pub player_names: Vec<String>,
    pub cells: Vec<Vec<Option<i32>>>,
    pub row_totals: Vec<i32>,
}

/// Everything the presentation layer consumes for one round.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundResult {
    pub round_id: i64,
    pub rows: Vec<PlayerResultRow>,
    pub matrix: MatchMatrix,
    pub totals: Vec<PlayerTotal>,
    /// Sum of final totals; zero for supported group sizes, surfaced so
    /// callers can show it as a sanity indicator.
    pub zero_sum_check: f64,
}
