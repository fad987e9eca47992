use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths under the base dir.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning the corpus.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Collect corpus files under `base_dir`.
///
/// A file is kept when its extension is one of `extensions`. Paths under a
/// literal ignore entry (e.g. the `target` build directory) are not walked
/// at all; glob ignore entries are matched against the full path.
pub fn scan_files(base_dir: &Path, extensions: &[String], ignore_patterns: &[String]) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => tracing::warn!("Invalid ignore pattern '{}': {}", p, e),
            }
        } else {
            let rel = Path::new(p);
            let rel = rel.strip_prefix(".").unwrap_or(rel);
            literal_ignore_paths.push(base_dir.join(rel));
        }
    }

    let walker = WalkDir::new(base_dir).into_iter().filter_entry(|entry| {
        let path = entry.path();
        !literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                tracing::warn!("Cannot access path: {}", e);
                continue;
            }
        };
        let path = entry.path();

        if glob_patterns
            .iter()
            .any(|p| p.matches(&path.to_string_lossy()))
        {
            continue;
        }

        if entry.file_type().is_file() && has_extension(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    tracing::debug!(
        "Scanned {}: {} corpus file(s), {} skipped",
        base_dir.display(),
        files.len(),
        skipped_count
    );

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.') == ext)
        })
}
