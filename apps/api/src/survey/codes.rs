//! Candidate code generation.
//!
//! A code slot is filled from the highest tier that still has members: the
//! max tier first, then the second, then the third. Whenever a tier
//! contributes more than one slot, every ordering of its members is emitted,
//! because tied categories are equally valid in either position. The result
//! is a deduplicated candidate list in a deterministic order; downstream
//! matching walks it front to back.

use itertools::Itertools;

use crate::models::survey::Category;
use crate::survey::ranking::TierRanking;

/// Placeholder letter for slots no tier can fill.
const PLACEHOLDER: char = 'X';

/// Generates every candidate code of the given length (2 for personality
/// lookup, 3 for industry lookup) from a tier ranking. Never returns an empty
/// list: with nothing to draw from, the all-placeholder code stands in.
pub fn generate_codes(length: usize, ranking: &TierRanking) -> Vec<String> {
    let mut codes = Vec::new();

    if ranking.max.len() >= length {
        for code in permutations(&ranking.max, length) {
            codes.push(code);
        }
    } else {
        let remaining = length - ranking.max.len();
        for prefix in permutations(&ranking.max, ranking.max.len()) {
            fill_from_lower_tiers(&mut codes, &prefix, remaining, ranking);
        }
    }

    let mut deduped: Vec<String> = Vec::new();
    for code in codes {
        if !deduped.contains(&code) {
            deduped.push(code);
        }
    }
    if deduped.is_empty() {
        deduped.push(PLACEHOLDER.to_string().repeat(length));
    }
    deduped
}

/// Completes a max-tier prefix from the second tier, spilling into the third
/// tier when the second cannot cover the remaining slots, and padding with
/// the placeholder when the third cannot either.
fn fill_from_lower_tiers(
    codes: &mut Vec<String>,
    prefix: &str,
    remaining: usize,
    ranking: &TierRanking,
) {
    if ranking.second.len() >= remaining {
        for suffix in permutations(&ranking.second, remaining) {
            codes.push(format!("{prefix}{suffix}"));
        }
        return;
    }

    let shortfall = remaining - ranking.second.len();
    for middle in permutations(&ranking.second, ranking.second.len()) {
        if ranking.third.len() >= shortfall {
            for suffix in permutations(&ranking.third, shortfall) {
                codes.push(format!("{prefix}{middle}{suffix}"));
            }
        } else {
            let mut code = format!("{prefix}{middle}");
            for category in &ranking.third {
                code.push(category.letter());
            }
            while code.len() < prefix.len() + remaining {
                code.push(PLACEHOLDER);
            }
            codes.push(code);
        }
    }
}

/// All k-permutations of a tier, joined into strings. A zero-size selection
/// yields the single empty string, which lets empty tiers fall through the
/// fill logic without special cases.
fn permutations(tier: &[Category], size: usize) -> Vec<String> {
    tier.iter()
        .permutations(size)
        .map(|perm| perm.iter().map(|category| category.letter()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::survey::Category::*;

    fn ranking(
        max: Vec<Category>,
        second: Vec<Category>,
        third: Vec<Category>,
    ) -> TierRanking {
        TierRanking { max, second, third }
    }

    #[test]
    fn test_single_max_fills_from_second_tier() {
        // One yes for R, everything else tied at zero: five candidates in
        // trait order.
        let ranking = ranking(
            vec![Realistic],
            vec![Investigative, Artistic, Social, Enterprising, Conventional],
            vec![],
        );
        assert_eq!(
            generate_codes(2, &ranking),
            vec!["RI", "RA", "RS", "RE", "RC"]
        );
    }

    #[test]
    fn test_tied_max_pair_permutes_both_orders() {
        let ranking = ranking(vec![Realistic, Social], vec![Artistic], vec![]);
        assert_eq!(generate_codes(2, &ranking), vec!["RS", "SR"]);
    }

    #[test]
    fn test_three_way_max_tie_gives_six_two_letter_codes() {
        let ranking = ranking(vec![Realistic, Investigative, Artistic], vec![], vec![]);
        assert_eq!(
            generate_codes(2, &ranking),
            vec!["RI", "RA", "IR", "IA", "AR", "AI"]
        );
    }

    #[test]
    fn test_three_letter_spills_into_third_tier() {
        // max {R}, second {I}: the third slot comes from the third tier.
        let ranking = ranking(
            vec![Realistic],
            vec![Investigative],
            vec![Artistic, Conventional],
        );
        assert_eq!(generate_codes(3, &ranking), vec!["RIA", "RIC"]);
    }

    #[test]
    fn test_tied_max_prefix_permuted_in_three_letter_codes() {
        let ranking = ranking(vec![Realistic, Investigative], vec![Artistic], vec![]);
        assert_eq!(generate_codes(3, &ranking), vec!["RIA", "IRA"]);
    }

    #[test]
    fn test_default_ranking_yields_single_codes() {
        // The all-zero fallback ranking R/I/A.
        let ranking = ranking(vec![Realistic], vec![Investigative], vec![Artistic]);
        assert_eq!(generate_codes(2, &ranking), vec!["RI"]);
        assert_eq!(generate_codes(3, &ranking), vec!["RIA"]);
    }

    #[test]
    fn test_empty_third_tier_pads_with_placeholder() {
        let ranking = ranking(vec![Realistic], vec![Investigative], vec![]);
        assert_eq!(generate_codes(3, &ranking), vec!["RIX"]);
    }

    #[test]
    fn test_empty_ranking_yields_placeholder_codes() {
        let ranking = ranking(vec![], vec![], vec![]);
        assert_eq!(generate_codes(2, &ranking), vec!["XX"]);
        assert_eq!(generate_codes(3, &ranking), vec!["XXX"]);
    }

    #[test]
    fn test_codes_deduplicated() {
        let ranking = ranking(vec![Realistic], vec![Investigative], vec![Artistic]);
        let codes = generate_codes(2, &ranking);
        let mut unique = codes.clone();
        unique.dedup();
        assert_eq!(codes, unique);
    }

    #[test]
    fn test_all_codes_have_requested_length_and_charset() {
        let rankings = [
            ranking(vec![Realistic], vec![], vec![]),
            ranking(
                vec![Realistic, Investigative, Artistic, Social],
                vec![Enterprising],
                vec![Conventional],
            ),
            ranking(
                vec![Social],
                vec![Enterprising, Conventional],
                vec![Realistic],
            ),
            ranking(vec![], vec![], vec![]),
        ];
        for ranking in &rankings {
            for length in [2, 3] {
                let codes = generate_codes(length, ranking);
                assert!(!codes.is_empty());
                for code in &codes {
                    assert_eq!(code.len(), length, "code {code}");
                    assert!(
                        code.chars().all(|c| "RIASECX".contains(c)),
                        "code {code}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_large_max_tier_three_letter_count() {
        // Four tied categories, three slots: 4 * 3 * 2 ordered selections.
        let ranking = ranking(
            vec![Realistic, Investigative, Artistic, Social],
            vec![],
            vec![],
        );
        assert_eq!(generate_codes(3, &ranking).len(), 24);
    }
}
