//! String similarity scoring over character sequences.
//!
//! Two algorithms share the same row-compressed dynamic programming shape:
//! a weighted edit distance (lower is closer) and an alignment score with
//! match-streak bonuses (higher is closer). Both take caller-owned scratch
//! storage so a ranking pass over many candidates allocates once.

use std::mem;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseMode {
    Sensitive,
    #[default]
    Insensitive,
}

/// Costs for the edit-distance algorithm. A match is always free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EditCosts {
    pub deletion: u32,
    pub insertion: u32,
    pub substitution: u32,
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            deletion: 1,
            insertion: 1,
            substitution: 1,
        }
    }
}

/// Weights for the alignment-score algorithm. `deletion`, `insertion` and
/// `substitution` are penalty magnitudes (subtracted); the rest are rewards.
/// `streak_bonus` is granted whenever a match directly extends the match in
/// the previous row of the same alignment path, which is what makes prefix
/// and contiguous-fragment candidates outrank scattered ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AlignWeights {
    pub deletion: i64,
    pub insertion: i64,
    pub substitution: i64,
    pub match_reward: i64,
    pub first_match_bonus: i64,
    pub streak_bonus: i64,
}

impl Default for AlignWeights {
    fn default() -> Self {
        Self {
            deletion: 1,
            insertion: 1,
            substitution: 1,
            match_reward: 2,
            first_match_bonus: 1,
            streak_bonus: 3,
        }
    }
}

/// Working storage for one ranking pass: a single DP row plus one streak
/// flag per column. Owned by the caller and resized up front, never inside
/// the per-candidate loop. Not meant to be shared between two interleaved
/// ranking passes.
#[derive(Debug, Default)]
pub struct ScoreScratch {
    row: Vec<i64>,
    streak: Vec<bool>,
}

impl ScoreScratch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(shorter_len: usize) -> Self {
        let mut scratch = Self::default();
        scratch.ensure(shorter_len);
        scratch
    }

    /// Grows the buffers to hold `shorter_len + 1` columns. `shorter_len`
    /// only needs to bound the shorter side of every upcoming comparison;
    /// the query length always qualifies.
    pub fn ensure(&mut self, shorter_len: usize) {
        if self.row.len() <= shorter_len {
            self.row.resize(shorter_len + 1, 0);
            self.streak.resize(shorter_len + 1, false);
        }
    }
}

fn chars_eq(lhs: char, rhs: char, case: CaseMode) -> bool {
    match case {
        CaseMode::Sensitive => lhs == rhs,
        CaseMode::Insensitive => lhs == rhs || lhs.to_lowercase().eq(rhs.to_lowercase()),
    }
}

/// Minimum weighted cost of transforming `lhs` into `rhs`.
///
/// Runs in O(len(lhs) * len(rhs)) time over a single reused row. Empty
/// inputs degenerate to the other side's length times the applicable gap
/// cost. Panics if the scratch row has fewer than min(len) + 1 cells.
pub fn edit_distance(
    lhs: &[char],
    rhs: &[char],
    costs: &EditCosts,
    case: CaseMode,
    scratch: &mut ScoreScratch,
) -> i64 {
    // Normalize so the row spans the shorter sequence; the gap costs travel
    // with the sequences so the result still describes lhs -> rhs.
    let (src, tgt, del, ins) = if lhs.len() > rhs.len() {
        (rhs, lhs, costs.insertion as i64, costs.deletion as i64)
    } else {
        (lhs, rhs, costs.deletion as i64, costs.insertion as i64)
    };
    let sub = costs.substitution as i64;

    assert!(
        scratch.row.len() > src.len(),
        "scratch row must hold at least min(len) + 1 cells"
    );
    let row = &mut scratch.row;

    for (j, cell) in row[..=src.len()].iter_mut().enumerate() {
        *cell = j as i64 * del;
    }

    for (i, &tch) in tgt.iter().enumerate() {
        let mut diag = mem::replace(&mut row[0], (i as i64 + 1) * ins);

        for (j, &sch) in src.iter().enumerate() {
            let cell = if chars_eq(sch, tch, case) {
                diag
            } else {
                let deletion = row[j] + del;
                let insertion = row[j + 1] + ins;
                let substitution = diag + sub;
                deletion.min(insertion).min(substitution)
            };
            diag = mem::replace(&mut row[j + 1], cell);
        }
    }

    row[src.len()]
}

/// Single-shot form of [`edit_distance`] that allocates its own scratch.
pub fn edit_distance_simple(lhs: &[char], rhs: &[char], costs: &EditCosts, case: CaseMode) -> i64 {
    let mut scratch = ScoreScratch::with_capacity(lhs.len().min(rhs.len()));
    edit_distance(lhs, rhs, costs, case, &mut scratch)
}

/// Maximum alignment score between `lhs` and `rhs`.
///
/// Each aligned match earns `match_reward`, plus `first_match_bonus` when it
/// consumes the first character of the shorter sequence and `streak_bonus`
/// when it directly follows another match on the same path. The streak flags
/// live one per column and are cleared whenever the column resolves to a gap
/// or substitution instead.
///
/// Panics on empty input or an undersized scratch; both are caller bugs.
pub fn alignment_score(
    lhs: &[char],
    rhs: &[char],
    weights: &AlignWeights,
    case: CaseMode,
    scratch: &mut ScoreScratch,
) -> i64 {
    assert!(
        !lhs.is_empty() && !rhs.is_empty(),
        "alignment_score requires non-empty sequences"
    );

    // Same normalization as edit_distance: the gap penalties swap together
    // with the sequences, so asymmetric weights keep their meaning.
    let (src, tgt, del, ins) = if lhs.len() > rhs.len() {
        (rhs, lhs, weights.insertion, weights.deletion)
    } else {
        (lhs, rhs, weights.deletion, weights.insertion)
    };

    assert!(
        scratch.row.len() > src.len(),
        "scratch row must hold at least min(len) + 1 cells"
    );
    let row = &mut scratch.row;
    let streak = &mut scratch.streak;

    for (j, cell) in row[..=src.len()].iter_mut().enumerate() {
        *cell = -(j as i64) * del;
    }
    for flag in streak[..=src.len()].iter_mut() {
        *flag = false;
    }

    for (i, &tch) in tgt.iter().enumerate() {
        let mut diag = mem::replace(&mut row[0], -(i as i64 + 1) * ins);
        let mut diag_matched = mem::replace(&mut streak[0], false);

        for (j, &sch) in src.iter().enumerate() {
            let deletion = row[j] - del;
            let insertion = row[j + 1] - ins;
            let substitution = diag - weights.substitution;
            let mut best = deletion.max(insertion).max(substitution);
            let mut matched = false;

            if chars_eq(sch, tch, case) {
                let mut score = diag + weights.match_reward;
                if j == 0 {
                    score += weights.first_match_bonus;
                }
                if diag_matched {
                    score += weights.streak_bonus;
                }
                if score >= best {
                    best = score;
                    matched = true;
                }
            }

            diag = mem::replace(&mut row[j + 1], best);
            diag_matched = mem::replace(&mut streak[j + 1], matched);
        }
    }

    row[src.len()]
}

/// Single-shot form of [`alignment_score`] that allocates its own scratch.
pub fn alignment_score_simple(
    lhs: &[char],
    rhs: &[char],
    weights: &AlignWeights,
    case: CaseMode,
) -> i64 {
    let mut scratch = ScoreScratch::with_capacity(lhs.len().min(rhs.len()));
    alignment_score(lhs, rhs, weights, case, &mut scratch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn distance(lhs: &str, rhs: &str) -> i64 {
        edit_distance_simple(
            &chars(lhs),
            &chars(rhs),
            &EditCosts::default(),
            CaseMode::Sensitive,
        )
    }

    fn align(lhs: &str, rhs: &str, weights: &AlignWeights) -> i64 {
        alignment_score_simple(&chars(lhs), &chars(rhs), weights, CaseMode::Sensitive)
    }

    #[test]
    fn distance_of_identical_strings_is_zero() {
        for s in ["", "a", "project_a", "snake case name"] {
            assert_eq!(distance(s, s), 0, "identical input {s:?}");
        }
    }

    #[test]
    fn distance_matches_known_values() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("abc", "abc"), 0);
        assert_eq!(distance("abc", "abd"), 1);
    }

    #[test]
    fn distance_is_symmetric_with_unit_costs() {
        let pairs = [("kitten", "sitting"), ("", "abc"), ("short", "a longer one")];
        for (lhs, rhs) in pairs {
            assert_eq!(distance(lhs, rhs), distance(rhs, lhs));
        }
    }

    #[test]
    fn distance_from_empty_is_scaled_by_insertion_cost() {
        let costs = EditCosts {
            deletion: 7,
            insertion: 3,
            substitution: 1,
        };
        let got = edit_distance_simple(&[], &chars("abcd"), &costs, CaseMode::Sensitive);
        assert_eq!(got, 4 * 3);

        // The mirrored direction deletes every character instead.
        let got = edit_distance_simple(&chars("abcd"), &[], &costs, CaseMode::Sensitive);
        assert_eq!(got, 4 * 7);
    }

    #[test]
    fn distance_respects_substitution_weight() {
        // With substitution priced above a delete plus an insert, the cheap
        // two-step route wins.
        let costs = EditCosts {
            deletion: 1,
            insertion: 1,
            substitution: 5,
        };
        let got = edit_distance_simple(&chars("abc"), &chars("abd"), &costs, CaseMode::Sensitive);
        assert_eq!(got, 2);
    }

    #[test]
    fn distance_case_mode_controls_matching() {
        assert_eq!(distance("ABC", "abc"), 3);
        let got = edit_distance_simple(
            &chars("ABC"),
            &chars("abc"),
            &EditCosts::default(),
            CaseMode::Insensitive,
        );
        assert_eq!(got, 0);
    }

    #[test]
    fn alignment_swap_with_penalties_is_identical() {
        let weights = AlignWeights {
            deletion: 2,
            insertion: 5,
            ..AlignWeights::default()
        };
        let swapped = AlignWeights {
            deletion: 5,
            insertion: 2,
            ..weights
        };
        for (lhs, rhs) in [("proj", "project_a"), ("archive", "arch"), ("ab", "zzabzz")] {
            assert_eq!(
                align(lhs, rhs, &weights),
                align(rhs, lhs, &swapped),
                "pair ({lhs:?}, {rhs:?})"
            );
        }
    }

    #[test]
    fn alignment_of_equal_strings_earns_every_bonus() {
        let weights = AlignWeights::default();
        let s = "project";
        let len = s.len() as i64;
        let expected =
            len * weights.match_reward + weights.first_match_bonus + (len - 1) * weights.streak_bonus;
        assert_eq!(align(s, s, &weights), expected);
    }

    #[test]
    fn alignment_prefers_one_contiguous_run() {
        let weights = AlignWeights::default();
        // Both candidates contain the same four query characters; only one
        // holds them in a single run.
        let contiguous = align("proj", "xxprojxx", &weights);
        let split = align("proj", "xxprxxojxx", &weights);
        assert!(
            contiguous > split,
            "contiguous {contiguous} should beat split {split}"
        );
    }

    #[test]
    fn alignment_case_mode_controls_matching() {
        let weights = AlignWeights::default();
        let sensitive = align("ABC", "abc", &weights);
        let insensitive = alignment_score_simple(
            &chars("ABC"),
            &chars("abc"),
            &weights,
            CaseMode::Insensitive,
        );
        assert!(insensitive > sensitive);
        assert_eq!(insensitive, align("abc", "abc", &weights));
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn alignment_rejects_empty_input() {
        alignment_score_simple(&[], &chars("abc"), &AlignWeights::default(), CaseMode::Sensitive);
    }

    #[test]
    #[should_panic(expected = "scratch row")]
    fn undersized_scratch_is_a_contract_violation() {
        let mut scratch = ScoreScratch::with_capacity(1);
        edit_distance(
            &chars("abcdef"),
            &chars("abcdefgh"),
            &EditCosts::default(),
            CaseMode::Sensitive,
            &mut scratch,
        );
    }

    #[test]
    fn scratch_reuse_matches_single_shot_results() {
        let weights = AlignWeights::default();
        let costs = EditCosts::default();
        let query = chars("proj");
        let candidates = ["project_a", "archive", "p", "a much longer candidate name"];

        let mut scratch = ScoreScratch::with_capacity(query.len());
        for candidate in candidates {
            let cand = chars(candidate);
            assert_eq!(
                edit_distance(&query, &cand, &costs, CaseMode::Insensitive, &mut scratch),
                edit_distance_simple(&query, &cand, &costs, CaseMode::Insensitive),
            );
            assert_eq!(
                alignment_score(&query, &cand, &weights, CaseMode::Insensitive, &mut scratch),
                alignment_score_simple(&query, &cand, &weights, CaseMode::Insensitive),
            );
        }
    }
}
