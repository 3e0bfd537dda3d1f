//! Tier ranking of category tallies.
//!
//! The six categories are partitioned into score tiers: everything at the
//! maximum count, everything at the next distinct count below it, and
//! everything at the third distinct count. Ties inside a tier are real
//! candidates, not noise; code generation permutes them.

use crate::models::survey::{Category, CategoryCounts};

/// The top three score tiers, each enumerated in the fixed R, I, A, S, E, C
/// order. Categories below the third distinct count are not ranked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TierRanking {
    pub max: Vec<Category>,
    pub second: Vec<Category>,
    pub third: Vec<Category>,
}

/// Partitions counts into tiers. Zero counts form tiers like any other value,
/// so one yes answer still yields a full ranking.
///
/// All-zero input gets the fixed default ranking R, then I, then A, rather
/// than a six-way tie for first. A six-way tie would make all 720 orderings
/// candidate codes and the match result would collapse to whichever table row
/// happens to come first.
pub fn rank(counts: &CategoryCounts) -> TierRanking {
    let max_count = counts.max_count();
    if max_count == 0 {
        return TierRanking {
            max: vec![Category::Realistic],
            second: vec![Category::Investigative],
            third: vec![Category::Artistic],
        };
    }

    let max = members_at(counts, max_count);
    let mut second = Vec::new();
    let mut third = Vec::new();

    if let Some(second_count) = highest_below(counts, max_count) {
        second = members_at(counts, second_count);
        if let Some(third_count) = highest_below(counts, second_count) {
            third = members_at(counts, third_count);
        }
    }

    TierRanking { max, second, third }
}

fn members_at(counts: &CategoryCounts, value: u32) -> Vec<Category> {
    Category::ALL
        .iter()
        .copied()
        .filter(|&category| counts.get(category) == value)
        .collect()
}

fn highest_below(counts: &CategoryCounts, bound: u32) -> Option<u32> {
    Category::ALL
        .iter()
        .map(|&category| counts.get(category))
        .filter(|&count| count < bound)
        .max()
}
