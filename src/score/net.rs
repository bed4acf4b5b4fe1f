use crate::model::{MemberId, PlayerScore, Segment};
use crate::score::handicap::HandicapTable;

/// Net score for one player in one segment against one opponent: raw strokes
/// minus the concession the opponent grants, doubled for the 18-hole total.
#[must_use]
pub fn net_score(
    score: &PlayerScore,
    opponent: MemberId,
    segment: Segment,
    handicaps: &HandicapTable,
) -> i32 {
    let concession = handicaps.concession(opponent, score.member_id);
    score.raw_segment_score(segment) - segment.concession_multiplier() * concession
}

/// Whether a segment can be compared for a pair. Back and the 18-hole total
/// need both back nines played; extra needs at least one extra score.
#[must_use]
pub fn segment_applicable(a: &PlayerScore, b: &PlayerScore, segment: Segment) -> bool {
    match segment {
        Segment::Front => true,
        Segment::Back | Segment::Total18 => a.back_score > 0 && b.back_score > 0,
        Segment::Extra => a.extra_score > 0 || b.extra_score > 0,
    }
}
