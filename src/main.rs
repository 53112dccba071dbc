//! hashbrute - exhaustive candidate search against a known password digest.
//!
//! Only run it against digests you own.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use indicatif::ProgressBar;
use std::path::PathBuf;
use tracing::info;

use hashbrute::config::{DEFAULT_MAX_LENGTH, DEFAULT_PLAINTEXT};
use hashbrute::output::{ConsoleOutput, JsonOutput, MultiOutput, Output};
use hashbrute::{logging, Alphabet, DigestAlgorithm, SearchConfig, Searcher, TargetSpec};

fn parse_algorithm(s: &str) -> Result<DigestAlgorithm, String> {
    DigestAlgorithm::from_str(s).map_err(|e| e.to_string())
}

fn parse_charset(s: &str) -> Result<Alphabet, String> {
    Alphabet::parse(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "hashbrute")]
#[command(about = "Exhaustive candidate search against a known password digest")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// More log output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Search for the plaintext of a target digest (default)
    Search(SearchArgs),

    /// Print the digest of a single plaintext
    Hash {
        /// The plaintext
        plaintext: String,

        /// Digest algorithm (md5, sha256, double_sha256)
        #[arg(long, value_parser = parse_algorithm, default_value = "md5")]
        algorithm: DigestAlgorithm,
    },

    /// Run benchmark
    Bench {
        /// Digest algorithm to benchmark
        #[arg(long, value_parser = parse_algorithm, default_value = "md5")]
        algorithm: DigestAlgorithm,

        /// Output JSON for benchmark runner
        #[arg(long)]
        json: bool,
    },
}

/// Parser for the search flags alone, used when no subcommand is given.
#[derive(Parser)]
#[command(name = "hashbrute")]
struct DefaultSearch {
    #[command(flatten)]
    args: SearchArgs,
}

#[derive(Args)]
struct SearchArgs {
    /// Known plaintext the target digest is computed from
    #[arg(long, conflicts_with = "target")]
    plaintext: Option<String>,

    /// Target digest as hex
    #[arg(long)]
    target: Option<String>,

    /// Digest algorithm (md5, sha256, double_sha256)
    #[arg(long, value_parser = parse_algorithm, default_value = "md5")]
    algorithm: DigestAlgorithm,

    /// Character set: lower, upper, digits, alnum, hex or custom:<chars>
    #[arg(long, value_parser = parse_charset, default_value = "lower", conflicts_with = "alphabet")]
    charset: Alphabet,

    /// Literal candidate characters, in enumeration order
    #[arg(long)]
    alphabet: Option<String>,

    /// Longest candidate to try
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Also write a JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show a progress bar on stderr
    #[arg(long)]
    progress: bool,

    /// Report attempts and search space size
    #[arg(long)]
    stats: bool,
}

impl Default for SearchArgs {
    /// Same values as `hashbrute search` with no flags.
    fn default() -> Self {
        DefaultSearch::parse_from(["hashbrute"]).args
    }
}

impl SearchArgs {
    fn config(&self) -> SearchConfig {
        let target = match (&self.target, &self.plaintext) {
            (Some(hex), _) => TargetSpec::Digest(hex.clone()),
            (None, Some(plaintext)) => TargetSpec::Plaintext(plaintext.clone()),
            (None, None) => TargetSpec::Plaintext(DEFAULT_PLAINTEXT.to_string()),
        };

        let alphabet = match &self.alphabet {
            Some(chars) => Alphabet::new(chars.chars()),
            None => self.charset.clone(),
        };

        SearchConfig::default()
            .with_target(target)
            .with_alphabet(alphabet)
            .with_max_length(self.max_length)
            .with_algorithm(self.algorithm)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_from_flags(cli.verbose, cli.quiet));

    let command = cli
        .command
        .unwrap_or_else(|| Command::Search(SearchArgs::default()));

    match command {
        Command::Search(args) => run_search(&args),
        Command::Hash {
            plaintext,
            algorithm,
        } => {
            println!("{}", algorithm.create().hex_digest(plaintext.as_bytes()));
            Ok(())
        }
        Command::Bench { algorithm, json } => hashbrute::benchmark::run_benchmark(algorithm, json),
    }
}

fn run_search(args: &SearchArgs) -> Result<()> {
    let config = args.config();
    let searcher = Searcher::new(&config)?;

    let primary: Box<dyn Output> = if args.json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(ConsoleOutput::new().with_verbose(args.stats))
    };

    let output: Box<dyn Output> = match &args.output {
        Some(path) => {
            info!(path = %path.display(), "writing JSON report");
            Box::new(MultiOutput::new(vec![primary, Box::new(JsonOutput::to_file(path)?)]))
        }
        None => primary,
    };

    output.target(searcher.target())?;
    output.flush()?;

    let progress = args.progress.then(|| {
        let pb = ProgressBar::new(searcher.search_space().unwrap_or(u64::MAX));
        pb.set_style(hashbrute::default_progress_style());
        pb
    });

    let outcome = searcher.run(progress.as_ref());

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    output.outcome(&searcher, &outcome)?;
    output.flush()?;

    Ok(())
}
