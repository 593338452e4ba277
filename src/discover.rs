//! Source discovery — expand target globs into the list of documentable files.
//!
//! The scan root is walked recursively once. A target without `/` is matched
//! against file names in every directory (`*.cs`); a target with `/` is matched
//! against the path relative to the root (`src/**/*.js`). Files are kept when
//! their extension has a language and no ignore suffix matches. Build and
//! output directories are never entered. Leading `./` segments of a target
//! are dropped, so `./src/*.js` means `src/*.js`.

use crate::language::Languages;
use crate::model::SourceFile;
use crate::paths;
use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Directory names that never contain sources worth documenting.
pub const RESERVED_DIRS: &[&str] = &["docs", "bin", "obj"];

const PATH_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled CLI target.
#[derive(Debug)]
enum Target {
    FileName(Pattern),
    RelativePath(Pattern),
}

impl Target {
    fn parse(raw: &str) -> Result<Self> {
        let pattern = Pattern::new(trim_current_dir(raw))
            .with_context(|| format!("invalid glob pattern: {}", raw))?;
        if raw.contains('/') {
            Ok(Target::RelativePath(pattern))
        } else {
            Ok(Target::FileName(pattern))
        }
    }

    fn matches(&self, rel_path: &str) -> bool {
        match self {
            Target::FileName(p) => p.matches(paths::title(rel_path)),
            Target::RelativePath(p) => p.matches_with(rel_path, PATH_MATCH),
        }
    }
}

/// Drop leading `./` segments: walked paths are relative without them.
fn trim_current_dir(mut raw: &str) -> &str {
    while let Some(rest) = raw.strip_prefix("./") {
        raw = rest.trim_start_matches('/');
    }
    raw
}

/// Find every documentable file under `root` matching any of `targets`.
///
/// `skip_paths` are canonical directory paths to prune (typically the output
/// directory). Results keep target order, then walk order, without duplicates.
pub fn discover<'l>(
    root: &Path,
    targets: &[String],
    languages: &'l Languages,
    skip_paths: &[PathBuf],
) -> Result<Vec<SourceFile<'l>>> {
    let compiled = targets
        .iter()
        .map(|t| Target::parse(t))
        .collect::<Result<Vec<_>>>()?;

    let candidates = walk(root, skip_paths)?;
    debug!(root = %root.display(), count = candidates.len(), "walked source tree");

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for (raw, target) in targets.iter().zip(&compiled) {
        let mut matched = 0;
        for rel in &candidates {
            if !target.matches(rel) {
                continue;
            }
            matched += 1;
            if seen.contains(rel) {
                continue;
            }
            let Some(language) = languages.for_path(Path::new(rel)) else {
                trace!(path = %rel, "no language for extension");
                continue;
            };
            if language.is_ignored(rel) {
                trace!(path = %rel, "ignored by suffix");
                continue;
            }
            seen.insert(rel.clone());
            files.push(SourceFile {
                path: rel.clone(),
                language,
            });
        }
        if matched == 0 {
            warn!(target = %raw, "no files matched");
        }
    }
    Ok(files)
}

/// All regular files under `root`, relative and sorted, outside reserved directories.
fn walk(root: &Path, skip_paths: &[PathBuf]) -> Result<Vec<String>> {
    let is_reserved = |name: &OsStr| name.to_str().is_some_and(|n| RESERVED_DIRS.contains(&n));
    let is_skipped = |path: &Path| {
        !skip_paths.is_empty()
            && fs::canonicalize(path).is_ok_and(|p| skip_paths.contains(&p))
    };

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            !(e.depth() > 0
                && e.file_type().is_dir()
                && (is_reserved(e.file_name()) || is_skipped(e.path())))
        });
    for entry in walker {
        let entry =
            entry.with_context(|| format!("failed to scan directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(rel) = paths::relative_source(root, entry.path()) {
            files.push(rel);
        }
    }
    Ok(files)
}
