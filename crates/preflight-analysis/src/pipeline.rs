//! End-to-end analysis pipeline driver.
//!
//! Orchestrates directory setup, closure staging, the four analyzer
//! stages, copy-back, and report filtering. Each step carries its own
//! failure policy: setup diagnostics are best-effort, precondition
//! failures are fatal, and analyzer exit codes are captured values that
//! never short-circuit later stages.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tracing::{info, warn};

use preflight_core::config::AnalyzeConfig;
use preflight_core::context::BuildContext;
use preflight_core::engine::run_logged;
use preflight_core::errors::AnalyzeError;
use preflight_core::flight::FlightClassifier;
use preflight_core::fsutil::copy_tree;
use preflight_core::types::{is_analyzable_source, BuildTarget, SourceSet};

use crate::closure::build_closure;
use crate::report::filter_report;
use crate::resolver::{collect_artifacts, resolve_sources};
use crate::staging::{stage_closure, staged_path};

/// What one analysis run produced.
#[derive(Debug)]
pub struct AnalysisOutcome {
    /// Exit status of the primary analysis stage; later report stages do
    /// not affect it.
    pub status: i32,
    /// `build/analyze` directory holding the copied-back reports.
    pub build_dir: PathBuf,
    /// The files the analyzer was asked to examine.
    pub analyzed: Vec<PathBuf>,
    /// True when the whole closure was analyzed (a binary is producible).
    pub binary_mode: bool,
}

/// Analyze everything buildable under `base`.
///
/// Returns `Ok(None)` when the directory has no analyzable objects — a
/// valid outcome, not an error.
pub fn analyze_directory(
    base: &Path,
    config: &AnalyzeConfig,
    ctx: &BuildContext,
) -> Result<Option<AnalysisOutcome>, AnalyzeError> {
    let collected = collect_artifacts(base, ctx.target_db.as_ref());
    if collected.objects.is_empty() {
        eprintln!("No source files found to analyze.");
        return Ok(None);
    }

    let resolved = resolve_sources(&collected.objects, ctx.source_db.as_ref())?;
    let target = resolved.build_target.normalize_for_analysis();

    run_analysis(
        base,
        &resolved.sources,
        &target,
        collected.binary_mode(),
        config,
        ctx,
    )
    .map(Some)
}

/// Stage the closure and drive the analyzer for one resolved source set.
pub fn run_analysis(
    base: &Path,
    sources: &SourceSet,
    target: &BuildTarget,
    binary_mode: bool,
    config: &AnalyzeConfig,
    ctx: &BuildContext,
) -> Result<AnalysisOutcome, AnalyzeError> {
    let classifier =
        FlightClassifier::from_builtin_rules().map_err(|e| AnalyzeError::InvalidRules {
            message: e.to_string(),
        })?;

    let build_dir = base.join("build").join("analyze");
    fs::create_dir_all(&build_dir).map_err(|source| AnalyzeError::Io {
        path: build_dir.clone(),
        source,
    })?;

    // Auditability aid only; analysis proceeds without it.
    write_source_list(&build_dir.join("sources_analyzed.txt"), sources.to_sorted_vec());

    let closed = build_closure(sources, target, base, config, ctx)?;

    // A directory that can produce a binary gets its entire closure
    // analyzed; libraries are analyzed narrowly because their dependents
    // will be analyzed when built into a binary.
    let candidates: Vec<PathBuf> = if binary_mode {
        closed.closure.to_sorted_vec()
    } else {
        sources.to_sorted_vec()
    };
    let analyzed: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|p| is_analyzable_source(p) && classifier.is_flight_path(p))
        .collect();

    let staging_area = staging_area_for(base, config)?;
    let staging_src = staging_area.join("src");
    stage_closure(&staging_src, &closed.closure)?;

    let relocated: Vec<PathBuf> = analyzed
        .iter()
        .filter_map(|p| staged_path(&staging_src, p))
        .collect();
    write_source_list(
        &build_dir.join("sources_analyzed_relocated.txt"),
        relocated,
    );

    let what = if binary_mode { "Binary" } else { "Library" };
    eprintln!(
        "Analyzing {}:\n{}",
        what,
        analyzed
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    );

    let staged_descriptor = rewrite_staged_descriptor(&closed.descriptor, &staging_src)?;

    let reports_dir = staging_src.join("reports");
    fs::create_dir_all(&reports_dir).map_err(|source| AnalyzeError::Io {
        path: reports_dir.clone(),
        source,
    })?;

    let status = run_analyzer_stages(config, &staged_descriptor, &reports_dir);

    copy_tree(&reports_dir, &build_dir).map_err(|source| AnalyzeError::Io {
        path: build_dir.clone(),
        source,
    })?;

    let filtered = filter_report(&build_dir, &classifier).map_err(|source| AnalyzeError::Io {
        path: build_dir.clone(),
        source,
    })?;

    print_report(&build_dir, &staging_area, filtered.is_some());

    info!(status, binary_mode, files = analyzed.len(), "analysis complete");
    Ok(AnalysisOutcome {
        status,
        build_dir,
        analyzed,
        binary_mode,
    })
}

/// Per-run staging area: the staging root extended with the absolute
/// invocation path, keeping runs from different directories apart.
fn staging_area_for(base: &Path, config: &AnalyzeConfig) -> Result<PathBuf, AnalyzeError> {
    let absolute = base.canonicalize().map_err(|source| AnalyzeError::Io {
        path: base.to_path_buf(),
        source,
    })?;
    let mut area = config.effective_staging_root();
    for component in absolute.components() {
        if let Component::Normal(part) = component {
            area.push(part);
        }
    }
    Ok(area)
}

/// Copy-then-rewrite of the project descriptor for the staged layout.
fn rewrite_staged_descriptor(
    descriptor: &Path,
    staging_src: &Path,
) -> Result<PathBuf, AnalyzeError> {
    let contents = fs::read_to_string(descriptor).map_err(|source| AnalyzeError::Io {
        path: descriptor.to_path_buf(),
        source,
    })?;
    let rewritten = crate::descriptor::rewrite_for_analysis(&contents);
    let staged = staged_path(staging_src, descriptor).ok_or_else(|| AnalyzeError::Io {
        path: descriptor.to_path_buf(),
        source: std::io::Error::other("descriptor has no file name"),
    })?;
    fs::write(&staged, rewritten).map_err(|source| AnalyzeError::Io {
        path: staged.clone(),
        source,
    })?;
    Ok(staged)
}

/// Run all four analyzer stages; every stage is attempted and logged, and
/// the returned status is the first (full-analysis) stage's exit code —
/// its failure means no analysis occurred at all.
fn run_analyzer_stages(config: &AnalyzeConfig, descriptor: &Path, reports_dir: &Path) -> i32 {
    let analyzer = config.effective_analyzer_bin();
    let project_arg = format!("-P{}", descriptor.display());

    let mut analyze_args: Vec<OsString> = vec![
        "analyze".into(),
        "-j0".into(),
        "--keep-going".into(),
    ];
    if let Some(mode) = config.effective_mode() {
        analyze_args.push(format!("--mode={mode}").into());
    }
    analyze_args.push(project_arg.clone().into());
    let status = run_stage(analyzer, analyze_args, &reports_dir.join("analyze.txt"));

    let csv_out = reports_dir.join("report.csv");
    run_stage(
        analyzer,
        report_args("csv", &project_arg, &csv_out),
        &reports_dir.join("report_csv.txt"),
    );

    let security_out = reports_dir.join("security.html");
    run_stage(
        analyzer,
        report_args("security", &project_arg, &security_out),
        &reports_dir.join("report_security.txt"),
    );

    let text_out = reports_dir.join("report.txt");
    run_stage(
        analyzer,
        report_args("text", &project_arg, &text_out),
        &reports_dir.join("report_text.txt"),
    );

    status
}

fn report_args(kind: &str, project_arg: &str, out: &Path) -> Vec<OsString> {
    vec![
        "report".into(),
        kind.into(),
        project_arg.into(),
        "--out".into(),
        out.into(),
    ]
}

fn run_stage(analyzer: &str, args: Vec<OsString>, log: &Path) -> i32 {
    match run_logged(analyzer, &args, log) {
        Ok(status) => status,
        Err(e) => {
            warn!(analyzer, error = %e, "analyzer stage could not run");
            127
        }
    }
}

fn write_source_list(path: &Path, files: Vec<PathBuf>) {
    let contents = files
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    if let Err(e) = fs::write(path, contents) {
        warn!(path = %path.display(), error = %e, "could not write source list");
    }
}

/// Print the filtered report between banners, then the artifact manifest.
fn print_report(build_dir: &Path, staging_area: &Path, have_report: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();

    let _ = writeln!(out, "\n-----------------------------------------------------");
    let _ = writeln!(out, "----------------- Analysis Output -------------------");
    let _ = writeln!(out, "-----------------------------------------------------");
    if have_report {
        if let Ok(report) = fs::read_to_string(build_dir.join("report.txt")) {
            let _ = out.write_all(report.as_bytes());
        }
    } else {
        let _ = writeln!(out, "No filtered report found.");
    }
    let _ = writeln!(out, "-----------------------------------------------------");
    let _ = writeln!(out, "-----------------------------------------------------\n");

    let _ = writeln!(
        out,
        "Analysis text output saved in {}",
        build_dir.join("report.txt").display()
    );
    let _ = writeln!(
        out,
        "Unfiltered analysis output saved in {}",
        build_dir.join("unfiltered_report.txt").display()
    );
    let _ = writeln!(
        out,
        "Analysis CSV output saved in {}",
        build_dir.join("report.csv").display()
    );
    let _ = writeln!(
        out,
        "Analysis run log saved in {}",
        build_dir.join("analyze.txt").display()
    );
    let _ = writeln!(
        out,
        "Security report output saved in {}",
        build_dir.join("security.html").display()
    );
    let _ = writeln!(
        out,
        "Analyzer output directory located at {}",
        staging_area.display()
    );
}
