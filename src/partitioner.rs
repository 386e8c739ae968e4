use serde::Serialize;

/// Anything with a length in whole seconds can be split into sets.
pub trait Timed {
    fn duration_seconds(&self) -> u32;
}

impl Timed for crate::catalog::Song {
    fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }
}

impl Timed for u32 {
    fn duration_seconds(&self) -> u32 {
        *self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionResult<T> {
    pub sets: Vec<Vec<T>>,
    pub totals: Vec<u32>,
    /// Songs still waiting when every set had already reached its target.
    /// They are not placed anywhere.
    pub unplaced: usize,
}

/// Split `songs` into one bucket per target, keeping input order.
///
/// Each song goes to the current set if it fits, otherwise to the first later
/// set it fits in, otherwise into the current set anyway. After every
/// placement the current set moves forward past all sets that have reached
/// their target. Once it has moved past the last set the remaining songs are
/// left out and only counted in `unplaced`.
pub fn partition<T: Timed>(songs: impl IntoIterator<Item = T>, targets: &[u32]) -> PartitionResult<T> {
    let mut sets: Vec<Vec<T>> = targets.iter().map(|_| Vec::new()).collect();
    let mut totals = vec![0u32; targets.len()];
    let mut cur = 0;
    let mut unplaced = 0;

    for song in songs {
        if cur >= targets.len() {
            unplaced += 1;
            continue;
        }

        let d = song.duration_seconds();
        let slot = if totals[cur].saturating_add(d) <= targets[cur] {
            cur
        } else {
            (cur + 1..targets.len())
                .find(|&j| totals[j].saturating_add(d) <= targets[j])
                .unwrap_or(cur)
        };

        sets[slot].push(song);
        totals[slot] = totals[slot].saturating_add(d);

        while cur < targets.len() && totals[cur] >= targets[cur] {
            cur += 1;
        }
    }

    PartitionResult {
        sets,
        totals,
        unplaced,
    }
}
