//! preflight: analysis and test orchestration for a redo-built codebase.
//!
//! Two paths, two exit conventions: `analyze` propagates the primary
//! analyzer stage's exit code; `test-all` exits non-zero iff any test
//! failed (an empty test set is success).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use preflight_analysis::analyze_directory;
use preflight_core::config::PreflightConfig;
use preflight_core::context::{ContextFactory, SnapshotContextFactory};
use preflight_core::errors::PreflightErrorCode;
use preflight_core::tracing::init_tracing;
use preflight_runner::run_all;

#[derive(Parser)]
#[command(name = "preflight")]
#[command(about = "Analysis and test orchestration for redo-built flight software")]
#[command(version)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct the source closure of a directory's artifacts and run
    /// the static analyzer over it
    Analyze(AnalyzeArgs),
    /// Discover and run every test at or below a directory
    TestAll(TestAllArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Directory whose built artifacts should be analyzed
    #[arg(value_name = "DIR", default_value = ".")]
    directory: PathBuf,
}

#[derive(Args)]
struct TestAllArgs {
    /// Directory to scan for tests
    #[arg(value_name = "DIR", default_value = ".")]
    directory: PathBuf,

    /// Disable colorized pass/fail markers
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };

    match cli.command {
        Commands::Analyze(args) => run_analyze(&args, &config),
        Commands::TestAll(args) => run_test_all(&args, &config),
    }
}

fn load_config(path: Option<&Path>) -> Result<PreflightConfig, ExitCode> {
    match path {
        Some(path) => PreflightConfig::load(path).map_err(|e| {
            eprintln!("{}", e.operator_string());
            ExitCode::FAILURE
        }),
        None => Ok(PreflightConfig::default()),
    }
}

fn run_analyze(args: &AnalyzeArgs, config: &PreflightConfig) -> ExitCode {
    let Some(base) = absolute(&args.directory) else {
        return ExitCode::FAILURE;
    };

    // Analysis wants both halves of every unit compiled, not the minimum
    // set pure compilation would pick.
    let factory =
        SnapshotContextFactory::new(config.engine.clone(), &base).with_safe_compile(true);
    let ctx = factory.fresh_context();

    match analyze_directory(&base, &config.analyze, &ctx) {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(outcome)) => status_code(outcome.status),
        Err(e) => {
            eprintln!("{}", e.operator_string());
            ExitCode::FAILURE
        }
    }
}

fn run_test_all(args: &TestAllArgs, config: &PreflightConfig) -> ExitCode {
    let Some(base) = absolute(&args.directory) else {
        return ExitCode::FAILURE;
    };

    let mut runner_config = config.runner.clone();
    if args.no_color {
        runner_config.no_color = Some(true);
    }

    let factory = SnapshotContextFactory::new(config.engine.clone(), &base);
    match run_all(&base, &factory, &runner_config) {
        Ok(summary) => status_code(summary.exit_code()),
        Err(e) => {
            eprintln!("{}", e.operator_string());
            ExitCode::FAILURE
        }
    }
}

fn absolute(directory: &Path) -> Option<PathBuf> {
    match directory.canonicalize() {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("Cannot resolve directory {}: {e}", directory.display());
            None
        }
    }
}

fn status_code(status: i32) -> ExitCode {
    if status == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(u8::try_from(status).unwrap_or(1))
    }
}
