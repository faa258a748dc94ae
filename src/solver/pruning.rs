use derive_new::new;

use crate::alphabet::normalize;
use crate::solver::{Frame, Solution, SolveError, Solver};
use crate::wordlist::prefix_index::PrefixIndex;

/// Builds permutations left to right: each removed character is appended
/// to the back of the sub-permutations, so every partial string is a true
/// prefix of any candidate it can grow into. A partial the index does not
/// know as a prefix can therefore be dropped before it breeds — when
/// solving "dog" there is no point extending "dg".
#[derive(new)]
pub struct PruningSolver {
    index: PrefixIndex,
}

impl Solver for PruningSolver {
    fn solve(&self, input: &str) -> Result<Solution, SolveError> {
        if input.is_empty() {
            return Err(SolveError::EmptyInput);
        }
        let chars: Vec<char> = normalize(input).chars().collect();
        Ok(self.search(&chars).into_solution(chars.len()))
    }
}

impl PruningSolver {
    fn search(&self, chars: &[char]) -> Frame {
        if let [only] = chars {
            return Frame::base(*only);
        }
        let mut frame = Frame::default();
        for (i, &c) in chars.iter().enumerate() {
            let mut remainder = chars.to_vec();
            remainder.remove(i);
            for mut candidate in frame.absorb(self.search(&remainder)) {
                frame.steps += 1;
                candidate.push(c);
                if self.index.is_word(&candidate) {
                    frame.anagrams.insert(candidate.clone());
                }
                // discarded candidates still cost the step above
                if self.index.is_prefix(&candidate) {
                    frame.partials.push(candidate);
                }
            }
        }
        frame
    }
}
