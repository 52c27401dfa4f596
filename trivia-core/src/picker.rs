//! Quiz question selection
//!
//! Picks one question the player has not seen yet. The unseen candidates are
//! materialized first and sampled once, so selection always terminates no
//! matter how few questions remain.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Question, QuestionId};

/// Pick an unserved question from `pool` using `rng`.
///
/// Returns `None` when the pool is empty or every pool id is in `previous`.
/// Ids in `previous` that are not part of the pool are ignored.
pub fn pick_with<'a, R>(
    pool: &'a [Question],
    previous: &HashSet<QuestionId>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return None;
    }

    let candidates: Vec<&Question> = pool
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    candidates.choose(rng).copied()
}

/// Pick an unserved question using a per-call thread-local RNG.
pub fn pick_unserved<'a>(
    pool: &'a [Question],
    previous: &HashSet<QuestionId>,
) -> Option<&'a Question> {
    let mut rng = rand::thread_rng();
    pick_with(pool, previous, &mut rng)
}
