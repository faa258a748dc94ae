use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::alphabet::normalize;

/// Flags recorded for one indexed string. The two are independent: a
/// string can be a complete word and a prefix of longer words at once
/// ("to" with "toe" in the corpus). Merging only ever turns flags on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixEntry {
    pub is_prefix: bool,
    pub is_word: bool,
}

/// Maps every corpus word, and every proper non-empty prefix of every
/// corpus word, to a [`PrefixEntry`]. Built once from the full corpus and
/// never mutated afterwards.
///
/// Corpus entries shorter than two characters are skipped outright; they
/// are never indexed and can never come back as anagrams.
///
/// Entries are normalized with [`normalize`] at build time. Lookups are
/// verbatim, so callers must normalize queries the same way.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefixIndex {
    entries: HashMap<String, PrefixEntry>,
}

impl PrefixIndex {
    pub fn build<I, S>(corpus: I) -> PrefixIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: HashMap<String, PrefixEntry> = HashMap::new();
        for raw in corpus {
            let word = normalize(raw.as_ref());
            if word.chars().count() < 2 {
                continue;
            }
            // every proper prefix, split on char boundaries
            for (split, _) in word.char_indices().skip(1) {
                entries.entry(word[..split].to_string()).or_default().is_prefix = true;
            }
            entries.entry(word).or_default().is_word = true;
        }
        PrefixIndex { entries }
    }

    /// True iff `s` was indexed as a complete word. Absent key is false,
    /// never an error.
    pub fn is_word(&self, s: &str) -> bool {
        self.entries.get(s).map(|e| e.is_word).unwrap_or(false)
    }

    /// True iff `s` is a proper prefix of some indexed word.
    pub fn is_prefix(&self, s: &str) -> bool {
        self.entries.get(s).map(|e| e.is_prefix).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashmap;

    use crate::wordlist::prefix_index::{PrefixEntry, PrefixIndex};

    #[test]
    fn every_proper_prefix_is_marked() {
        let index = PrefixIndex::build(vec!["goodbye"]);
        for prefix in ["g", "go", "goo", "good", "goodb", "goodby"] {
            assert!(index.is_prefix(prefix), "{} should be a prefix", prefix);
            assert!(!index.is_word(prefix), "{} should not be a word", prefix);
        }
        assert!(index.is_word("goodbye"));
        assert!(!index.is_prefix("goodbye"));
    }

    #[test]
    fn word_and_prefix_flags_are_independent() {
        let index = PrefixIndex::build(vec!["to", "toe"]);
        let expected = hashmap! {
            "t" => PrefixEntry { is_prefix: true, is_word: false },
            "to" => PrefixEntry { is_prefix: true, is_word: true },
            "toe" => PrefixEntry { is_prefix: false, is_word: true },
        };
        for (s, flags) in expected {
            assert_eq!(index.is_prefix(s), flags.is_prefix, "is_prefix({})", s);
            assert_eq!(index.is_word(s), flags.is_word, "is_word({})", s);
        }
    }

    #[test]
    fn single_letter_words_are_never_indexed() {
        let index = PrefixIndex::build(vec!["a", "i"]);
        assert!(index.is_empty());
        assert!(!index.is_word("a"));
        assert!(!index.is_prefix("a"));
    }

    #[test]
    fn single_letter_prefixes_of_longer_words_survive() {
        let index = PrefixIndex::build(vec!["a", "an"]);
        assert!(!index.is_word("a"));
        assert!(index.is_prefix("a"));
        assert!(index.is_word("an"));
    }

    #[test]
    fn corpus_case_is_normalized_at_build() {
        let index = PrefixIndex::build(vec!["Cat", "ACT"]);
        assert!(index.is_word("cat"));
        assert!(index.is_word("act"));
        assert!(index.is_prefix("ca"));
        // lookups are verbatim; unnormalized queries miss
        assert!(!index.is_word("Cat"));
    }

    #[test]
    fn building_twice_gives_identical_indices() {
        let corpus = vec!["cat", "act", "tac", "ca"];
        let a = PrefixIndex::build(&corpus);
        let b = PrefixIndex::build(&corpus);
        assert_eq!(a, b);
    }

    #[test]
    fn survives_serde_round_trip() {
        let index = PrefixIndex::build(vec!["to", "toe", "ten"]);
        let json = serde_json::to_string(&index).unwrap();
        let back: PrefixIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(index, back);
        assert!(back.is_word("toe"));
        assert!(back.is_prefix("te"));
    }

    #[test]
    fn multibyte_words_index_on_char_boundaries() {
        let index = PrefixIndex::build(vec!["über"]);
        assert!(index.is_prefix("ü"));
        assert!(index.is_prefix("üb"));
        assert!(index.is_word("über"));
    }
}
