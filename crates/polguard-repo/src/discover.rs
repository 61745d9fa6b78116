use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Default candidate pattern: JSON policy documents.
pub const DEFAULT_INCLUDE: &str = "*.json";

/// Discover candidate policy documents directly inside `dir`.
///
/// Behavior:
/// - Only regular files whose *file name* matches `include` are returned.
/// - Subdirectories are not descended into.
/// - Results are sorted by file name so runs are reproducible.
/// - An entry that cannot be inspected (e.g. a dangling symlink) is still returned when its
///   name matches, so reading it fails per document; otherwise it is skipped.
pub fn discover_documents(dir: &Utf8Path, include: &GlobSet) -> anyhow::Result<Vec<Utf8PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir);
    }

    let mut out: Vec<Utf8PathBuf> = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 is the directory itself: the listing as a whole failed.
            Err(err) if err.depth() == 0 => {
                return Err(err).with_context(|| format!("read directory {}", dir));
            }
            Err(err) => {
                if let Some(path) = unreadable_candidate(&err, include) {
                    out.push(path);
                } else {
                    tracing::debug!(error = %err, "skipping unreadable directory entry");
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(path) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        let Some(name) = path.file_name() else {
            continue;
        };
        if include.is_match(name) {
            out.push(path);
        }
    }

    Ok(out)
}

/// Compile candidate file name globs. An empty list falls back to [`DEFAULT_INCLUDE`].
pub fn build_include_set(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    if patterns.is_empty() {
        b.add(Glob::new(DEFAULT_INCLUDE)?);
    }
    for p in patterns {
        b.add(Glob::new(p).with_context(|| format!("invalid include glob: {p}"))?);
    }
    Ok(b.build()?)
}

fn unreadable_candidate(err: &walkdir::Error, include: &GlobSet) -> Option<Utf8PathBuf> {
    let path = pathbuf_to_utf8(err.path()?.to_path_buf())?;
    let matches = path.file_name().is_some_and(|name| include.is_match(name));
    matches.then_some(path)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
