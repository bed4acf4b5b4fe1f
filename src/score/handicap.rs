use crate::model::{HandicapPair, MemberId};
use ahash::RandomState;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Directional concession lookup for one round, built once per computation
/// from the persisted pair records.
///
/// Records are folded in creation order. Per direction, a later record
/// replaces an earlier value unless the later value is 0 and the earlier is
/// nonzero; the total-only flag always follows the latest record for the
/// pair. Pairs without a record concede 0 strokes.
#[derive(Debug, Clone, Default)]
pub struct HandicapTable {
    concessions: HashMap<(MemberId, MemberId), i32, RandomState>,
    total_only: HashSet<(MemberId, MemberId), RandomState>,
}

impl HandicapTable {
    #[must_use]
    pub fn from_records(records: &[HandicapPair]) -> Self {
        let mut ordered: Vec<&HandicapPair> = records.iter().collect();
        ordered.sort_by_key(|r| r.record_id);

        let mut table = Self::default();
        for rec in ordered {
            table.apply_direction(rec.player_a_id, rec.player_b_id, rec.a_gives_b);
            table.apply_direction(rec.player_b_id, rec.player_a_id, rec.b_gives_a);
            let key = pair_key(rec.player_a_id, rec.player_b_id);
            if rec.total_only {
                table.total_only.insert(key);
            } else {
                table.total_only.remove(&key);
            }
        }
        table
    }

    /// Strokes `giver` concedes to `receiver`. Missing pairs are scratch
    /// play, never an error.
    #[must_use]
    pub fn concession(&self, giver: MemberId, receiver: MemberId) -> i32 {
        self.concessions.get(&(giver, receiver)).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_total_only(&self, a: MemberId, b: MemberId) -> bool {
        self.total_only.contains(&pair_key(a, b))
    }

    fn apply_direction(&mut self, giver: MemberId, receiver: MemberId, strokes: i32) {
        match self.concessions.entry((giver, receiver)) {
            Entry::Occupied(mut existing) => {
                // a stale zero never overwrites an entered value
                if strokes != 0 || *existing.get() == 0 {
                    existing.insert(strokes);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(strokes);
            }
        }
    }
}

fn pair_key(a: MemberId, b: MemberId) -> (MemberId, MemberId) {
    if a <= b { (a, b) } else { (b, a) }
}
