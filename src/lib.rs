//! Word jumble solver: given a word list and a scrambled string, find every
//! dictionary word that is an anagram of it.

pub mod alphabet;
pub mod solver;
pub mod wordlist;
