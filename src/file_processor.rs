//! File discovery and per-file processing

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use log::LevelFilter;
use mdtidy_lib::config::Config;
use mdtidy_lib::lint_context::LintContext;
use mdtidy_lib::pipeline::{Pipeline, PipelineResult};
use mdtidy_lib::run_log::RunLog;
use std::fs;
use std::path::{Path, PathBuf};

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Result of running the pipeline over one file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: PipelineResult,
    /// 1-based line and column of the first byte that differs, if the file changed
    pub first_change: Option<(usize, usize)>,
    /// Whether the fixed content was written back
    pub written: bool,
    pub log_lines: Vec<String>,
}

pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.iter().any(|md| ext.eq_ignore_ascii_case(md)))
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).with_context(|| format!("Invalid exclude pattern '{pattern}'"))?;
        builder.add(glob);
    }
    builder.build().context("Failed to build exclude patterns")
}

/// A path is excluded when it, or any of its parent directories, matches a pattern
fn is_excluded(path: &Path, excludes: &GlobSet) -> bool {
    if excludes.is_empty() {
        return false;
    }
    let path = path.strip_prefix(".").unwrap_or(path);
    path.ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .any(|p| excludes.is_match(p))
}

/// Collect the Markdown files under `paths`.
///
/// Directories are walked with `.gitignore` support (unless `respect-gitignore` is
/// off); explicitly named files are kept whatever their extension. Both are subject
/// to the `exclude` globs. An empty `paths` means the current directory.
pub fn find_markdown_files(paths: &[String], config: &Config) -> Result<Vec<PathBuf>> {
    let excludes = build_exclude_set(&config.global.exclude)?;
    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.iter().map(PathBuf::from).collect()
    };

    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for root in roots {
        if root.is_file() {
            if is_excluded(&root, &excludes) {
                log::warn!("{} ignored because of an exclude pattern", root.display());
            } else {
                files.push(root);
            }
        } else if root.is_dir() {
            dirs.push(root);
        } else {
            anyhow::bail!("Path not found: {}", root.display());
        }
    }

    if let Some((first, rest)) = dirs.split_first() {
        let use_gitignore = config.global.respect_gitignore;
        let mut walk_builder = WalkBuilder::new(first);
        for dir in rest {
            walk_builder.add(dir);
        }
        walk_builder
            .ignore(use_gitignore)
            .git_ignore(use_gitignore)
            .git_global(use_gitignore)
            .git_exclude(use_gitignore)
            .parents(use_gitignore)
            .hidden(true)
            .require_git(false);

        for result in walk_builder.build() {
            match result {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && is_markdown_file(path) && !is_excluded(path, &excludes) {
                        let cleaned = path.strip_prefix(".").unwrap_or(path);
                        files.push(cleaned.to_path_buf());
                    }
                }
                Err(err) => log::warn!("Error walking directory: {err}"),
            }
        }
    }

    files.sort();
    files.dedup();
    log::debug!("Found {} markdown file(s)", files.len());
    Ok(files)
}

/// Byte offset of the first difference between two texts
fn first_difference(before: &str, after: &str) -> usize {
    before
        .char_indices()
        .zip(after.chars())
        .find(|((_, a), b)| a != b)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| before.len().min(after.len()))
}

/// Run the pipeline over `content`, locating the first change in the original text
pub fn process_content(path: PathBuf, content: &str, pipeline: &Pipeline, log_level: LevelFilter) -> FileOutcome {
    let mut run_log = RunLog::new(log_level, RunLog::DEFAULT_CAPACITY);
    let result = pipeline.run(content, &mut run_log);
    let first_change = result.changed().then(|| {
        let ctx = LintContext::new(content, &[]);
        ctx.offset_to_line_col(first_difference(content, &result.content))
    });
    FileOutcome {
        path,
        result,
        first_change,
        written: false,
        log_lines: run_log.lines().map(str::to_string).collect(),
    }
}

/// Read one file, run the pipeline over it and, when `fix` is set, write the result back
pub fn process_file(path: &Path, pipeline: &Pipeline, fix: bool, log_level: LevelFilter) -> Result<FileOutcome> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mut outcome = process_content(path.to_path_buf(), &content, pipeline, log_level);
    if fix && outcome.result.changed() {
        fs::write(path, &outcome.result.content).with_context(|| format!("Failed to write {}", path.display()))?;
        outcome.written = true;
    }
    Ok(outcome)
}

/// Process every file, in parallel when the `parallel` feature is on
pub fn process_files(
    files: &[PathBuf],
    pipeline: &Pipeline,
    fix: bool,
    log_level: LevelFilter,
) -> Vec<Result<FileOutcome>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        files
            .par_iter()
            .map(|path| process_file(path, pipeline, fix, log_level))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        files
            .iter()
            .map(|path| process_file(path, pipeline, fix, log_level))
            .collect()
    }
}
