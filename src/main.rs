use std::io;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use structopt::StructOpt;

use jumble::solver::naive::NaiveSolver;
use jumble::solver::pruning::PruningSolver;
use jumble::solver::Solver;
use jumble::wordlist::wordlist::{FileFormat, Wordlist};

/// Read scrambled words from stdin and print their dictionary anagrams.
#[derive(StructOpt)]
struct Cli {
    /// Newline-delimited word list to build the dictionary from
    #[structopt(parse(from_os_str), default_value = "data/words.txt")]
    path: PathBuf,
    /// Use the prefix-pruning algorithm instead of the naive one
    #[structopt(short, long)]
    better: bool,
}

fn main() -> io::Result<()> {
    let args = Cli::from_args();

    let wordlist = Wordlist::from_file(args.path.as_path(), FileFormat::builder().build())?;
    let solver: Box<dyn Solver> = if args.better {
        Box::new(PruningSolver::new(wordlist.into_index()))
    } else {
        Box::new(NaiveSolver::new(wordlist.into_index()))
    };

    let stdin = io::stdin();
    print!("Enter word: ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match solver.solve(line.trim_end()) {
            Ok(solution) => {
                let mut anagrams: Vec<&String> = solution.anagrams.iter().collect();
                anagrams.sort_unstable();
                println!(
                    "Found {} anagrams in {} steps",
                    anagrams.len(),
                    solution.steps
                );
                println!("{:?}", anagrams);
            }
            Err(e) => println!("{}", e),
        }
        print!("\nEnter word: ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}
