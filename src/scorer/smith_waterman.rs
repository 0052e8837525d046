use crate::scorer::Scorer;

/// Substitution scores for aligned characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchMismatch {
    pub match_reward: f64,
    pub mismatch_penalty: f64,
}

impl MatchMismatch {
    fn score(&self, a: char, b: char) -> f64 {
        if a == b {
            self.match_reward
        } else {
            self.mismatch_penalty
        }
    }
}

/// Local alignment scorer (Smith-Waterman-Gotoh with equal gap open and
/// extend costs, computed one row at a time).
///
/// The best alignment score is normalised by the best score the shorter
/// input could reach, so results fall in `[0, 1]` and 1.0 means the shorter
/// side aligns completely.
#[derive(Debug, Clone, PartialEq)]
pub struct SmithWatermanGotoh {
    pub case_sensitive: bool,
    pub gap_penalty: f64,
    pub substitution: MatchMismatch,
}

impl Default for SmithWatermanGotoh {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SmithWatermanGotoh {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            gap_penalty: -2.0,
            substitution: MatchMismatch {
                match_reward: 1.0,
                mismatch_penalty: -2.0,
            },
        }
    }

    fn chars(&self, s: &str) -> Vec<char> {
        if self.case_sensitive {
            s.chars().collect()
        } else {
            s.chars().flat_map(char::to_lowercase).collect()
        }
    }
}

impl Scorer for SmithWatermanGotoh {
    fn compare(&self, text: &str, term: &str) -> f64 {
        let a = self.chars(text);
        let b = self.chars(term);
        if a.is_empty() && b.is_empty() {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let max_distance =
            a.len().min(b.len()) as f64 * self.substitution.match_reward.max(self.gap_penalty);
        if max_distance <= 0.0 {
            return 0.0;
        }

        // `row[j]` holds H[i][j] for the row being computed; `prev` is H[i-1].
        let mut prev = vec![0.0f64; b.len() + 1];
        let mut row = vec![0.0f64; b.len() + 1];
        let mut best = 0.0f64;

        for &ca in &a {
            row[0] = 0.0;
            for (j, &cb) in b.iter().enumerate() {
                let diagonal = prev[j] + self.substitution.score(ca, cb);
                let up = prev[j + 1] + self.gap_penalty;
                let left = row[j] + self.gap_penalty;
                let h = diagonal.max(up).max(left).max(0.0);
                row[j + 1] = h;
                if h > best {
                    best = h;
                }
            }
            std::mem::swap(&mut prev, &mut row);
        }
        best / max_distance
    }
}
