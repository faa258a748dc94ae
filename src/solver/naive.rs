use derive_new::new;

use crate::alphabet::normalize;
use crate::solver::{Frame, Solution, SolveError, Solver};
use crate::wordlist::prefix_index::PrefixIndex;

/// Looks up every permutation of the input. Permutations are assembled
/// back to front (each removed character is re-attached at the front of
/// the sub-permutations), so partial strings are arbitrary interior
/// fragments of the final candidate and nothing can be ruled out early.
/// Kept as the baseline the pruning strategy is measured against.
#[derive(new)]
pub struct NaiveSolver {
    index: PrefixIndex,
}

impl Solver for NaiveSolver {
    fn solve(&self, input: &str) -> Result<Solution, SolveError> {
        if input.is_empty() {
            return Err(SolveError::EmptyInput);
        }
        let chars: Vec<char> = normalize(input).chars().collect();
        Ok(self.search(&chars).into_solution(chars.len()))
    }
}

impl NaiveSolver {
    fn search(&self, chars: &[char]) -> Frame {
        if let [only] = chars {
            return Frame::base(*only);
        }
        let mut frame = Frame::default();
        for (i, &c) in chars.iter().enumerate() {
            let mut remainder = chars.to_vec();
            remainder.remove(i);
            for sub in frame.absorb(self.search(&remainder)) {
                frame.steps += 1;
                let mut candidate = String::with_capacity(c.len_utf8() + sub.len());
                candidate.push(c);
                candidate.push_str(&sub);
                if self.index.is_word(&candidate) {
                    frame.anagrams.insert(candidate.clone());
                }
                // no pruning: every permutation stays live
                frame.partials.push(candidate);
            }
        }
        frame
    }
}
