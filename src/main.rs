use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{info, warn};

use statmod::input::demo::demo_cohort;
use statmod::input::{InputError, load_cohort};
use statmod::report::write_reports;
use statmod::{
    Cohort, ModerationConfig, ModerationError, RoundingMode, TopTiePolicy, moderate_batch,
    moderate_cohort,
};

#[derive(Debug, Parser)]
#[command(name = "statmod", version, about = "Approximate statistical moderation of SAC scores")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Moderate one or more cohort TSV files.
    Run {
        /// Cohort file (tab-separated, optionally .gz). Repeat for a batch.
        #[arg(long = "input", required = true)]
        inputs: Vec<PathBuf>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Moderate the built-in 25-student sample class.
    Demo {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Debug, Args)]
struct CommonArgs {
    /// Output directory for moderated.tsv, summary.json and report.txt.
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = RoundingMode::HalfEven)]
    rounding: RoundingMode,
    /// Exam top anchor when several students share the top SAC score.
    #[arg(long, value_enum, default_value_t = TopTiePolicy::TopExamOverall)]
    top_tie: TopTiePolicy,
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Moderation(#[from] ModerationError),
    #[error("failed to write reports to {path}: {source}")]
    Report {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("two batch inputs would both write to {path}")]
    DuplicateOutput { path: PathBuf },
    #[error("{failed} of {total} cohorts failed")]
    Batch { failed: usize, total: usize },
}

impl CommonArgs {
    fn config(&self) -> ModerationConfig {
        ModerationConfig::new(self.rounding, self.top_tie)
    }

    fn verbosity(&self) -> i8 {
        if self.quiet {
            -1
        } else {
            self.verbose.min(1) as i8
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Run { inputs, common } => {
            statmod::logging::init(common.verbosity());
            run_inputs(&inputs, &common)
        }
        Command::Demo { common } => {
            statmod::logging::init(common.verbosity());
            let cohort = demo_cohort()?;
            moderate_and_write(&cohort, &common.config(), &common.out)
        }
    }
}

fn run_inputs(inputs: &[PathBuf], common: &CommonArgs) -> Result<(), AppError> {
    let config = common.config();
    if let [single] = inputs {
        let cohort = load_cohort(single)?;
        return moderate_and_write(&cohort, &config, &common.out);
    }

    let out_dirs = batch_output_dirs(&common.out, inputs)?;
    let cohorts = inputs
        .iter()
        .map(|p| load_cohort(p))
        .collect::<Result<Vec<Cohort>, _>>()?;
    info!(cohorts = cohorts.len(), "moderating batch");

    let results = moderate_batch(&cohorts, &config);
    let mut failed = 0usize;
    for ((path, out_dir), result) in inputs.iter().zip(out_dirs).zip(results) {
        match result {
            Ok(moderated) => write_reports(&moderated, &out_dir).map_err(|source| {
                AppError::Report {
                    path: out_dir.clone(),
                    source,
                }
            })?,
            Err(err) => {
                warn!(input = %path.display(), %err, "cohort moderation failed");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(AppError::Batch {
            failed,
            total: inputs.len(),
        });
    }
    Ok(())
}

fn moderate_and_write(
    cohort: &Cohort,
    config: &ModerationConfig,
    out_dir: &Path,
) -> Result<(), AppError> {
    let moderated = moderate_cohort(cohort, config)?;
    write_reports(&moderated, out_dir).map_err(|source| AppError::Report {
        path: out_dir.to_path_buf(),
        source,
    })
}

/// File name with any `.gz`, then `.tsv` / `.txt` suffix stripped.
fn cohort_stem(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cohort".to_string());
    name.strip_suffix(".gz")
        .unwrap_or(&name)
        .trim_end_matches(".tsv")
        .trim_end_matches(".txt")
        .to_string()
}

/// One `<out>/<stem>` per input. Stems shared by several inputs get the
/// 1-based input position appended; any directory still claimed twice is
/// an error so no cohort overwrites another.
fn batch_output_dirs(base: &Path, inputs: &[PathBuf]) -> Result<Vec<PathBuf>, AppError> {
    let stems: Vec<String> = inputs.iter().map(|p| cohort_stem(p)).collect();
    let mut stem_counts: HashMap<&str, usize> = HashMap::new();
    for stem in &stems {
        *stem_counts.entry(stem.as_str()).or_default() += 1;
    }

    let mut seen = HashSet::new();
    let mut dirs = Vec::with_capacity(inputs.len());
    for (i, stem) in stems.iter().enumerate() {
        let dir = if stem_counts[stem.as_str()] > 1 {
            base.join(format!("{stem}_{}", i + 1))
        } else {
            base.join(stem)
        };
        if !seen.insert(dir.clone()) {
            return Err(AppError::DuplicateOutput { path: dir });
        }
        dirs.push(dir);
    }
    Ok(dirs)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
