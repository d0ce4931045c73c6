//! Fuzzy matching and filtering.
//!
//! A deliberately small, reproducible scorer — unlike the teacher's
//! Bayesian `command_palette::scorer`, this implements one fixed formula
//! exactly as this crate's spec pins it down, so tests can assert on
//! scores directly rather than relative ranking only.

/// Result of matching `pattern` against one `target` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: bool,
    pub score: i32,
    /// Rune indices into `target` where `pattern`'s characters matched,
    /// in order.
    pub positions: Vec<usize>,
}

const SCORE_MATCH: i32 = 15;
const SCORE_CONSECUTIVE: i32 = 30;
const SCORE_WORD_BOUNDARY: i32 = 20;
const PENALTY_GAP: i32 = 1;

fn is_word_boundary(target: &[char], idx: usize) -> bool {
    if idx == 0 {
        return true;
    }
    target
        .get(idx - 1)
        .is_some_and(|c| c.is_whitespace() || c.is_ascii_punctuation())
}

/// Scan `target` left to right, advancing through `pattern` whenever
/// characters match under the case-fold rule. An empty pattern always
/// matches with score 0.
#[must_use]
pub fn fuzzy_match(pattern: &str, target: &str, case_sensitive: bool) -> MatchResult {
    let pattern_chars: Vec<char> = if case_sensitive {
        pattern.chars().collect()
    } else {
        pattern.chars().flat_map(char::to_lowercase).collect()
    };
    if pattern_chars.is_empty() {
        return MatchResult {
            matched: true,
            score: 0,
            positions: Vec::new(),
        };
    }

    let target_chars: Vec<char> = target.chars().collect();
    let mut positions = Vec::with_capacity(pattern_chars.len());
    let mut score = 0i32;
    let mut pi = 0usize;
    let mut last_match_idx: Option<usize> = None;

    for (ti, &tc) in target_chars.iter().enumerate() {
        if pi >= pattern_chars.len() {
            break;
        }
        let folded = if case_sensitive {
            tc
        } else {
            tc.to_lowercase().next().unwrap_or(tc)
        };
        if folded == pattern_chars[pi] {
            score += SCORE_MATCH;
            if is_word_boundary(&target_chars, ti) {
                score += SCORE_WORD_BOUNDARY;
            }
            if let Some(last) = last_match_idx {
                if ti == last + 1 {
                    score += SCORE_CONSECUTIVE;
                } else {
                    score -= PENALTY_GAP * (ti - last - 1) as i32;
                }
            }
            positions.push(ti);
            last_match_idx = Some(ti);
            pi += 1;
        }
    }

    let matched = pi == pattern_chars.len();
    MatchResult {
        matched,
        score: if matched { score } else { 0 },
        positions: if matched { positions } else { Vec::new() },
    }
}

/// Filter `items` by `query`, returning the indices of items that match,
/// sorted by descending score with ties broken by ascending index.
#[must_use]
pub fn filter<S: AsRef<str>>(items: &[S], query: &str) -> Vec<usize> {
    let mut scored: Vec<(usize, i32)> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let r = fuzzy_match(query, item.as_ref(), false);
            r.matched.then_some((i, r.score))
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.into_iter().map(|(i, _)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_always_matches() {
        let r = fuzzy_match("", "anything", false);
        assert!(r.matched);
        assert_eq!(r.score, 0);
        assert!(r.positions.is_empty());
    }

    #[test]
    fn case_insensitive_by_default() {
        assert!(fuzzy_match("AP", "apple", false).matched);
        assert!(!fuzzy_match("AP", "apple", true).matched);
    }

    #[test]
    fn positions_spell_out_the_pattern() {
        let r = fuzzy_match("ap", "grape", false);
        assert!(r.matched);
        let spelled: String = r
            .positions
            .iter()
            .map(|&i| "grape".chars().nth(i).unwrap())
            .collect();
        assert_eq!(spelled.to_lowercase(), "ap");
    }

    #[test]
    fn filter_orders_by_score_prefers_word_start() {
        let items = ["apple", "apricot", "banana", "cherry"];
        let idx = filter(&items, "ap");
        assert!(idx.contains(&0));
        assert!(idx.contains(&1));
        assert!(!idx.contains(&2));
        assert!(!idx.contains(&3));
        // "apple" matches at offset 0,1 (consecutive, word boundary);
        // "apricot" also matches at 0,1 — both score identically here,
        // so ties break by ascending index.
        let pos_apple = idx.iter().position(|&i| i == 0).unwrap();
        let pos_apricot = idx.iter().position(|&i| i == 1).unwrap();
        assert!(pos_apple <= pos_apricot);
    }

    #[test]
    fn filter_breaks_ties_by_ascending_index() {
        let items = ["ba", "ba"];
        assert_eq!(filter(&items, "ba"), vec![0, 1]);
    }

    #[test]
    fn no_match_returns_empty_result() {
        let r = fuzzy_match("xyz", "abc", false);
        assert!(!r.matched);
        assert_eq!(r.score, 0);
        assert!(r.positions.is_empty());
    }
}
