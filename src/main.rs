use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::debug;

use seekbench::config::{Config, PatternSpec};
use seekbench::error::SeekError;
use seekbench::types::{Algorithm, PatternClass, Unit};

/// seekbench: prefix-function, bad-character and rolling-hash substring
/// search, timed against a directory of documents.
#[derive(Parser)]
#[command(name = "seekbench", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Subcommand)]
enum Command {
    /// Time every algorithm on every document for short, long and absent patterns.
    Bench {
        /// Directory of documents. Overrides `[corpus] dir` from the config.
        dir: Option<PathBuf>,

        /// Config file. Defaults to ./seekbench.toml when present.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only load documents whose file name matches this glob.
        #[arg(long)]
        glob: Option<String>,

        /// Searches per (algorithm, document, pattern).
        #[arg(long)]
        reps: Option<u32>,

        /// Compare chars (code points) or raw UTF-8 bytes.
        #[arg(long)]
        unit: Option<Unit>,

        /// Short pattern expected to occur; repeatable. Replaces configured short patterns.
        #[arg(long)]
        short: Vec<String>,

        /// Long pattern expected to occur. Replaces configured long patterns.
        #[arg(long)]
        long: Vec<String>,

        /// Pattern expected not to occur. Replaces configured absent patterns.
        #[arg(long)]
        absent: Vec<String>,

        /// Machine-readable JSON output.
        #[arg(long)]
        json: bool,
    },
    /// Report the first offset of a pattern in one file.
    Find {
        /// File to search.
        file: PathBuf,

        /// Pattern to look for.
        pattern: String,

        /// kmp, boyer-moore, rabin-karp or all.
        #[arg(long, default_value = "all")]
        algorithm: String,

        /// Count offsets in chars (code points) or bytes.
        #[arg(long, default_value = "char")]
        unit: Unit,

        /// Config file for `[hash]` parameters. Defaults to ./seekbench.toml
        /// when present.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    seekbench::logging::init();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "seekbench", &mut io::stdout());
        return;
    }

    let Some(command) = cli.command else {
        eprintln!(
            "usage: seekbench bench [DIR] [--config FILE] | seekbench find <FILE> <PATTERN>"
        );
        process::exit(3);
    };

    let result = match command {
        Command::Bench {
            dir,
            config,
            glob,
            reps,
            unit,
            short,
            long,
            absent,
            json,
        } => {
            let overrides = Overrides {
                dir,
                glob,
                reps,
                unit,
                patterns: [
                    (PatternClass::Short, short),
                    (PatternClass::Long, long),
                    (PatternClass::Absent, absent),
                ],
            };
            bench(config, overrides, json)
        }
        Command::Find {
            file,
            pattern,
            algorithm,
            unit,
            config,
        } => find(&file, &pattern, &algorithm, unit, config.as_deref()),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    }
}

/// Command-line values that take precedence over the config file.
struct Overrides {
    dir: Option<PathBuf>,
    glob: Option<String>,
    reps: Option<u32>,
    unit: Option<Unit>,
    patterns: [(PatternClass, Vec<String>); 3],
}

impl Overrides {
    fn apply(self, config: &mut Config) {
        if let Some(dir) = self.dir {
            config.corpus.dir = dir;
        }
        if let Some(glob) = self.glob {
            config.corpus.glob = glob;
        }
        if let Some(reps) = self.reps {
            config.repetitions = reps;
        }
        if let Some(unit) = self.unit {
            config.unit = unit;
        }
        for (class, texts) in self.patterns {
            if texts.is_empty() {
                continue;
            }
            config.patterns.retain(|p| p.class != class);
            config
                .patterns
                .extend(texts.into_iter().map(|t| PatternSpec::new(class, t)));
        }
    }
}

fn bench(
    config_path: Option<PathBuf>,
    overrides: Overrides,
    json: bool,
) -> Result<String, SeekError> {
    let mut config = discover_config(config_path.as_deref())?;
    overrides.apply(&mut config);
    debug!(
        dir = %config.corpus.dir.display(),
        reps = config.repetitions,
        unit = %config.unit,
        "starting bench"
    );

    let report = seekbench::run_bench(&config)?;
    if json {
        serde_json::to_string_pretty(&report).map_err(|e| SeekError::InvalidQuery {
            query: "--json".into(),
            reason: e.to_string(),
        })
    } else {
        Ok(seekbench::format::report(&report))
    }
}

fn discover_config(explicit: Option<&Path>) -> Result<Config, SeekError> {
    let cwd = std::env::current_dir().map_err(|e| SeekError::from_io(".", e))?;
    Config::discover(explicit, &cwd)
}

fn find(
    file: &Path,
    pattern: &str,
    algorithm: &str,
    unit: Unit,
    config_path: Option<&Path>,
) -> Result<String, SeekError> {
    let algorithms: Vec<Algorithm> = if algorithm.eq_ignore_ascii_case("all") {
        Algorithm::ALL.to_vec()
    } else {
        let alg = algorithm.parse().map_err(|reason| SeekError::InvalidQuery {
            query: algorithm.to_string(),
            reason,
        })?;
        vec![alg]
    };

    let config = discover_config(config_path)?;
    debug!(base = config.hash.base(), modulus = config.hash.modulus(), "find");
    let results = seekbench::find_in_file(file, pattern, unit, &algorithms, config.hash)?;
    Ok(seekbench::format::find_results(file, pattern, unit, &results))
}
