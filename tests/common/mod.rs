#![allow(dead_code)]

use chrono::NaiveDate;
use golf_matchplay::model::{
    HandicapPair, Member, PlayerScore, RoundContext, RoundDetails,
};

pub fn member(member_id: i64, name: &str) -> Member {
    Member {
        member_id,
        name: name.to_string(),
        base_handicap: 0,
        is_active: true,
    }
}

pub fn score(member_id: i64, front: i32, back: i32) -> PlayerScore {
    PlayerScore {
        member_id,
        front_score: front,
        back_score: back,
        ..PlayerScore::default()
    }
}

pub fn with_putts(mut score: PlayerScore, front_putt: i32, back_putt: i32) -> PlayerScore {
    score.front_putt = front_putt;
    score.back_putt = back_putt;
    score
}

pub fn with_extra(mut score: PlayerScore, extra_score: i32) -> PlayerScore {
    score.extra_score = extra_score;
    score
}

pub fn with_game_points(
    mut score: PlayerScore,
    front: f64,
    back: f64,
    extra: f64,
) -> PlayerScore {
    score.front_game_pt = front;
    score.back_game_pt = back;
    score.extra_game_pt = extra;
    score
}

pub fn handicap(
    record_id: i64,
    player_a_id: i64,
    player_b_id: i64,
    a_gives_b: i32,
    b_gives_a: i32,
) -> HandicapPair {
    HandicapPair {
        record_id,
        round_id: 1,
        player_a_id,
        player_b_id,
        a_gives_b,
        b_gives_a,
        total_only: false,
    }
}

pub fn total_only(mut pair: HandicapPair) -> HandicapPair {
    pair.total_only = true;
    pair
}

pub fn round_details(round_id: i64, num_players: i32) -> RoundDetails {
    RoundDetails {
        round_id,
        date_played: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
        course_name: "Pine Valley".to_string(),
        num_players,
        has_extra: false,
        finalized: false,
    }
}

/// Round snapshot with members named Player<id> for each score row.
pub fn round(scores: Vec<PlayerScore>, handicaps: Vec<HandicapPair>) -> RoundContext {
    let members = scores
        .iter()
        .map(|s| member(s.member_id, &format!("Player{}", s.member_id)))
        .collect::<Vec<_>>();
    let details = round_details(1, i32::try_from(scores.len()).unwrap());
    RoundContext {
        round: details,
        members,
        scores,
        handicaps,
    }
}
