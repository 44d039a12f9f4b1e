//! Solution ranking
//!
//! Orders solutions best first: fewest total letters, then fewest words, then
//! alphabetically by the concatenated chain.

use crate::core::Solution;

/// Sort solutions best first
///
/// The order is total, so ranking the same solutions always gives the same
/// sequence regardless of input order.
#[must_use]
pub fn rank<I>(solutions: I) -> Vec<Solution>
where
    I: IntoIterator<Item = Solution>,
{
    let mut ranked: Vec<Solution> = solutions.into_iter().collect();
    ranked.sort_by(|a, b| a.score().cmp(&b.score()));
    ranked
}

/// The best solution, if any
#[must_use]
pub fn best<I>(solutions: I) -> Option<Solution>
where
    I: IntoIterator<Item = Solution>,
{
    solutions.into_iter().min_by(|a, b| a.score().cmp(&b.score()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterBox;
    use crate::solver::validator::validate;

    fn solution(words: &[&str]) -> Solution {
        let letter_box = LetterBox::new(&["abc", "def", "ghi", "jkl"]).unwrap();
        let words = words
            .iter()
            .map(|w| validate(w, &letter_box).unwrap())
            .collect();
        Solution::new(words, &letter_box).unwrap()
    }

    #[test]
    fn ranks_by_letters_then_words_then_text() {
        let triple = solution(&["adgj", "jbeh", "hkcfil"]);
        let pair_k = solution(&["adgjbehk", "kcfil"]);
        let pair_h = solution(&["adgjbeh", "hkcfil"]);
        let single = solution(&["adgjbehkcfil"]);

        let ranked = rank(vec![triple.clone(), pair_k.clone(), single.clone(), pair_h.clone()]);
        assert_eq!(ranked, vec![single, pair_h, pair_k, triple]);
    }

    #[test]
    fn fewer_words_wins_at_equal_length() {
        let pair = solution(&["adgjbeh", "hkcfila"]);
        let triple = solution(&["adgj", "jbeh", "hkcfil"]);
        assert_eq!(pair.total_letters(), 14);
        assert_eq!(triple.total_letters(), 14);

        let ranked = rank(vec![triple, pair.clone()]);
        assert_eq!(ranked[0], pair);
    }

    #[test]
    fn ranking_ignores_input_order() {
        let a = solution(&["adgjbeh", "hkcfil"]);
        let b = solution(&["adgjbehk", "kcfil"]);
        let c = solution(&["adgj", "jbeh", "hkcfil"]);

        let forward = rank(vec![a.clone(), b.clone(), c.clone()]);
        let backward = rank(vec![c, b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn best_matches_first_ranked() {
        let a = solution(&["adgjbehk", "kcfil"]);
        let b = solution(&["adgjbeh", "hkcfil"]);
        let ranked = rank(vec![a.clone(), b.clone()]);
        assert_eq!(best(vec![a, b]).as_ref(), ranked.first());
    }

    #[test]
    fn empty_input() {
        assert!(rank(Vec::new()).is_empty());
        assert!(best(Vec::new()).is_none());
    }
}
