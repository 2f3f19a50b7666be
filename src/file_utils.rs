use anyhow::{anyhow, Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Compile a glob-style file name pattern (`*` wildcard only) to a regex.
    pub fn pattern_to_regex(pattern: &str) -> Result<Regex> {
        let escaped = regex::escape(pattern).replace(r"\*", ".*");
        Regex::new(&format!("^{}$", escaped))
            .with_context(|| format!("Invalid file pattern: {}", pattern))
    }

    /// Find notebook files in a directory whose name matches any pattern.
    ///
    /// The scan is non-recursive and the result is sorted by path, so a
    /// batch always processes files in a stable order.
    pub fn find_notebooks<P: AsRef<Path>>(dir: P, patterns: &[String]) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        if !Self::dir_exists(dir) {
            return Err(anyhow!("Directory does not exist: {:?}", dir));
        }

        let regexes = patterns
            .iter()
            .map(|p| Self::pattern_to_regex(p))
            .collect::<Result<Vec<_>>>()?;

        let mut result = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let is_notebook = path
                .extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("ipynb"));
            if !is_notebook {
                continue;
            }

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if regexes.iter().any(|re| re.is_match(&name)) {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }
}
