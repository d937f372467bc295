//! Artifact-to-source resolution.

use std::path::Path;

use tracing::debug;

use preflight_core::constants::{BINARY_SUFFIX, OBJECT_SUFFIX};
use preflight_core::database::{SourceDatabase, TargetDatabase};
use preflight_core::errors::ResolveError;
use preflight_core::types::{Artifact, BuildTarget, SourceSet};

/// The originating sources of a set of artifacts, plus the one build
/// target they all share.
#[derive(Debug)]
pub struct ResolvedSources {
    pub sources: SourceSet,
    pub build_target: BuildTarget,
}

/// Map artifacts back to the source files that produced them.
///
/// Artifacts whose unit is unknown to the source database are skipped, not
/// errors: they may originate from a different source language or a build
/// path outside this project. A build-target mismatch between any two
/// artifacts aborts the whole operation — mixing targets would silently
/// analyze the wrong configuration.
pub fn resolve_sources(
    artifacts: &[Artifact],
    db: &dyn SourceDatabase,
) -> Result<ResolvedSources, ResolveError> {
    let first = artifacts.first().ok_or(ResolveError::NoArtifacts)?;
    let build_target = target_of(first)?;
    for artifact in &artifacts[1..] {
        let found = target_of(artifact)?;
        if found != build_target {
            return Err(ResolveError::MixedTargets {
                expected: build_target.as_str().to_string(),
                found: found.as_str().to_string(),
                artifact: artifact.path().to_path_buf(),
            });
        }
    }

    let mut sources = SourceSet::new();
    for artifact in artifacts {
        let Some(unit) = artifact.unit_name() else {
            continue;
        };
        match db.sources_for_unit(&unit) {
            Some(files) => sources.extend(files),
            None => {
                debug!(unit = %unit, artifact = %artifact.path().display(), "unit not in source database, skipping");
            }
        }
    }

    Ok(ResolvedSources {
        sources,
        build_target,
    })
}

fn target_of(artifact: &Artifact) -> Result<BuildTarget, ResolveError> {
    artifact
        .build_target()
        .ok_or_else(|| ResolveError::MalformedArtifactPath {
            artifact: artifact.path().to_path_buf(),
        })
}

/// The analyzable build outputs found under one directory.
#[derive(Debug, Default)]
pub struct CollectedArtifacts {
    /// Object artifacts, minus generated assertion/representation partners.
    pub objects: Vec<Artifact>,
    /// Linkable binaries, minus type-range description executables.
    pub binaries: Vec<Artifact>,
}

impl CollectedArtifacts {
    /// Binary mode analyzes the whole closure; it applies whenever this
    /// directory can produce a linkable executable.
    pub fn binary_mode(&self) -> bool {
        !self.binaries.is_empty()
    }
}

/// Query the target database for everything buildable under `dir` and keep
/// the artifacts worth analyzing. An unknown directory is "no targets",
/// not an error.
pub fn collect_artifacts(dir: &Path, db: &dyn TargetDatabase) -> CollectedArtifacts {
    let targets = db.targets_for_directory(dir).unwrap_or_default();
    let build_dir = dir.join("build");

    let mut collected = CollectedArtifacts::default();
    for target in targets {
        if !target
            .parent()
            .is_some_and(|parent| parent.starts_with(&build_dir))
        {
            continue;
        }
        let Some(name) = target.to_str() else {
            continue;
        };
        if name.ends_with(OBJECT_SUFFIX) {
            // Assertion/representation objects are generated scaffolding,
            // not flight packages.
            if name.ends_with("-assertion.o") || name.ends_with("-representation.o") {
                continue;
            }
            collected.objects.push(Artifact::new(target));
        } else if name.ends_with(BINARY_SUFFIX) {
            if name.ends_with("type_ranges.elf") {
                continue;
            }
            collected.binaries.push(Artifact::new(target));
        }
    }
    collected
}
