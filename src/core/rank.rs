//! Orders the candidate set against the current query.

use std::cmp::Reverse;

use crate::core::candidates::{CandidateSet, ItemHandle};
use crate::core::score::{self, AlignWeights, CaseMode, EditCosts, ScoreScratch};

/// Which similarity algorithm scores the non-substring tier, with its
/// weights. Picked once per session, at call time rather than compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScorerSpec {
    /// Edit distance; candidates sort ascending (smallest distance first).
    EditDistance(EditCosts),
    /// Alignment score; candidates sort descending (highest score first).
    Alignment(AlignWeights),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    /// The query is a case-insensitive substring of the name; always ahead
    /// of every scored entry, never scored itself.
    Contains,
    Scored(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub name: String,
    pub handle: ItemHandle,
    pub key: RankKey,
}

impl RankEntry {
    fn scored_value(&self) -> i64 {
        match self.key {
            RankKey::Contains => 0,
            RankKey::Scored(value) => value,
        }
    }
}

/// Ranks every candidate for `query`.
///
/// Substring containment (case-insensitive) short-circuits scoring: those
/// entries come first, in the set's encounter order. Everything else is
/// scored with `scorer` and stable-sorted, so equal scores also keep
/// encounter order. Two calls against an unmodified set return identical
/// orderings.
///
/// The query must be non-empty; an empty query means "show the full
/// listing" and is handled a level up, before ranking is reached. That same
/// guarantee keeps the alignment scorer's non-empty contract satisfied for
/// every Tier-2 comparison.
pub fn rank(
    query: &str,
    candidates: &CandidateSet,
    scorer: &ScorerSpec,
    case: CaseMode,
    scratch: &mut ScoreScratch,
) -> Vec<RankEntry> {
    assert!(!query.is_empty(), "ranking requires a non-empty query");

    let query_chars: Vec<char> = query.chars().collect();
    let query_lower = query.to_lowercase();
    scratch.ensure(query_chars.len());

    let mut contained = Vec::new();
    let mut scored = Vec::new();

    for (name, handle) in candidates.iter() {
        if name.to_lowercase().contains(&query_lower) {
            contained.push(RankEntry {
                name: name.to_string(),
                handle,
                key: RankKey::Contains,
            });
            continue;
        }

        let name_chars: Vec<char> = name.chars().collect();
        let value = match scorer {
            ScorerSpec::EditDistance(costs) => {
                score::edit_distance(&query_chars, &name_chars, costs, case, scratch)
            }
            ScorerSpec::Alignment(weights) => {
                score::alignment_score(&query_chars, &name_chars, weights, case, scratch)
            }
        };
        scored.push(RankEntry {
            name: name.to_string(),
            handle,
            key: RankKey::Scored(value),
        });
    }

    match scorer {
        ScorerSpec::EditDistance(_) => scored.sort_by_key(RankEntry::scored_value),
        ScorerSpec::Alignment(_) => scored.sort_by_key(|entry| Reverse(entry.scored_value())),
    }

    contained.extend(scored);
    contained
}
