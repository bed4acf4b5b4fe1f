use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type MemberId = i64;

/// Registry entry for a club member. Owned by the surrounding application;
/// the engine only reads the id and display name.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Member {
    pub member_id: MemberId,
    pub name: String,
    pub base_handicap: i32,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundDetails {
    pub round_id: i64,
    pub date_played: NaiveDate,
    pub course_name: String,
    pub num_players: i32,
    pub has_extra: bool,
    pub finalized: bool,
}

/// One player's entered scores for a round. Missing values are stored as 0;
/// an extra score of 0 means no extra holes were played.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PlayerScore {
    pub member_id: MemberId,
    pub front_score: i32,
    pub back_score: i32,
    pub extra_score: i32,
    pub front_putt: i32,
    pub back_putt: i32,
    pub extra_putt: i32,
    pub front_game_pt: f64,
    pub back_game_pt: f64,
    pub extra_game_pt: f64,
}

impl PlayerScore {
    #[must_use]
    pub fn raw_segment_score(&self, segment: Segment) -> i32 {
        match segment {
            Segment::Front => self.front_score,
            Segment::Back => self.back_score,
            Segment::Total18 => self.front_score + self.back_score,
            Segment::Extra => self.extra_score,
        }
    }

    #[must_use]
    pub fn putt_count(&self, segment: PuttSegment) -> i32 {
        match segment {
            PuttSegment::Front => self.front_putt,
            PuttSegment::Back => self.back_putt,
        }
    }

    #[must_use]
    pub fn total_strokes(&self) -> i32 {
        self.front_score + self.back_score + self.extra_score
    }

    #[must_use]
    pub fn total_putts(&self) -> i32 {
        self.front_putt + self.back_putt + self.extra_putt
    }

    #[must_use]
    pub fn game_pt_total(&self) -> f64 {
        self.front_game_pt + self.back_game_pt + self.extra_game_pt
    }
}

/// Per-round handicap record for one unordered pair, carrying both
/// directional concessions. `record_id` reflects creation order and drives
/// the duplicate tie-break in the handicap table.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HandicapPair {
    pub record_id: i64,
    pub round_id: i64,
    pub player_a_id: MemberId,
    pub player_b_id: MemberId,
    pub a_gives_b: i32,
    pub b_gives_a: i32,
    pub total_only: bool,
}

/// Immutable snapshot of everything the engine needs to score one round.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundContext {
    pub round: RoundDetails,
    pub members: Vec<Member>,
    pub scores: Vec<PlayerScore>,
    pub handicaps: Vec<HandicapPair>,
}

impl RoundContext {
    /// Effective group size, taken from the score rows rather than the
    /// round's configured player count.
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn member_name(&self, member_id: MemberId) -> &str {
        self.members
            .iter()
            .find(|m| m.member_id == member_id)
            .map_or("", |m| m.name.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Front,
    Back,
    Total18,
    Extra,
}

impl Segment {
    pub const ALL: [Self; 4] = [Self::Front, Self::Back, Self::Total18, Self::Extra];

    /// Concessions are stored per nine holes, so the 18-hole total applies
    /// them twice.
    #[must_use]
    pub fn concession_multiplier(self) -> i32 {
        match self {
            Self::Total18 => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Total18 => "total",
            Self::Extra => "extra",
        };
        write!(f, "{s}")
    }
}

/// The putt contest only runs over the two regulation nines.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PuttSegment {
    Front,
    Back,
}

impl PuttSegment {
    pub const ALL: [Self; 2] = [Self::Front, Self::Back];
}

impl fmt::Display for PuttSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Front => "front",
            Self::Back => "back",
        };
        write!(f, "{s}")
    }
}
