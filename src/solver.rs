pub mod naive;
pub mod pruning;

use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome of one search: the distinct dictionary words that use every
/// character of the input, plus how many candidate strings the strategy
/// evaluated along the way. Steps are a diagnostic for comparing
/// strategies, not a correctness signal.
#[derive(Debug, PartialEq, Eq)]
pub struct Solution {
    pub anagrams: HashSet<String>,
    pub steps: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SolveError {
    EmptyInput,
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::EmptyInput => write!(f, "please enter a string of characters"),
        }
    }
}

impl Error for SolveError {}

/// A strategy for enumerating permutations of an input against a shared
/// `PrefixIndex`. Implementations differ only in how partial permutations
/// grow, and therefore in how much of the permutation tree they can skip.
pub trait Solver {
    fn solve(&self, input: &str) -> Result<Solution, SolveError>;
}

/// Per-call state threaded up through the recursion: the partial
/// permutations still worth extending, the words found below this point,
/// and the candidate evaluations spent so far.
#[derive(Debug, Default)]
pub(crate) struct Frame {
    pub(crate) partials: Vec<String>,
    pub(crate) anagrams: HashSet<String>,
    pub(crate) steps: u64,
}

impl Frame {
    /// Length-1 remainder: the trivial permutation, no dictionary check.
    pub(crate) fn base(c: char) -> Frame {
        Frame {
            partials: vec![c.to_string()],
            anagrams: HashSet::new(),
            steps: 1,
        }
    }

    /// Fold a child's frame into this one, handing back its partials for
    /// extension.
    pub(crate) fn absorb(&mut self, sub: Frame) -> Vec<String> {
        self.steps += sub.steps;
        self.anagrams.extend(sub.anagrams);
        sub.partials
    }

    /// Words shorter than the input surface during recursion (any prefix
    /// of the input's letters that happens to be a word). Only words that
    /// use every input character are anagrams, so the boundary drops the
    /// rest.
    pub(crate) fn into_solution(mut self, input_len: usize) -> Solution {
        self.anagrams.retain(|word| word.chars().count() == input_len);
        Solution {
            anagrams: self.anagrams,
            steps: self.steps,
        }
    }
}
