use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::wordlist::prefix_index::PrefixIndex;

/// Shape of a word-list file. The default reads one word per line;
/// delimited formats (e.g. "word<TAB>frequency") name the delimiter and
/// which column holds the word.
#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delim) => line.split(delim).nth(self.word_column.unwrap_or(0)),
        }
    }
}

/// Owns the prefix index built from a word-list file. The file I/O lives
/// here so the index itself never touches the filesystem.
pub struct Wordlist {
    index: PrefixIndex,
}

impl Wordlist {
    pub fn from_file(path: &Path, format: FileFormat) -> io::Result<Wordlist> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let start = Instant::now();
        let mut words: Vec<String> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(word) = format.parse_line(line.trim_end()) {
                if !word.is_empty() {
                    words.push(word.to_string());
                }
            }
        }
        println!(
            "Read {} words from {} in {:.3}s",
            words.len(),
            path.display(),
            start.elapsed().as_secs_f64()
        );

        let start = Instant::now();
        let index = PrefixIndex::build(&words);
        println!(
            "Built index of {} entries in {:.3}s",
            index.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(Wordlist { index })
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.index.is_word(&normalize(word))
    }

    pub fn is_prefix(&self, s: &str) -> bool {
        self.index.is_prefix(&normalize(s))
    }

    /// Hand the index over to a solver.
    pub fn into_index(self) -> PrefixIndex {
        self.index
    }
}
