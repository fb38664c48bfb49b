use eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories to skip during traversal
const IGNORE_DIRS: &[&str] = &[
    ".git",
    ".vs",
    "bin",
    "obj",
    "packages",
    "node_modules",
    "TestResults",
];

/// Collect all C# source files under the given targets
pub fn collect_cs_files(targets: &[PathBuf]) -> Result<Vec<PathBuf>> {
    collect_files(targets, "cs")
}

/// Collect all XML files under the given targets
pub fn collect_xml_files(targets: &[PathBuf]) -> Result<Vec<PathBuf>> {
    collect_files(targets, "xml")
}

fn collect_files(targets: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for target in targets {
        if !target.exists() {
            return Err(eyre::eyre!("Path does not exist: {}", target.display()));
        }

        if target.is_file() {
            if has_extension(target, extension) {
                files.push(target.clone());
            }
        } else if target.is_dir() {
            collect_from_directory(target, extension, &mut files)
                .wrap_err_with(|| format!("Failed to walk directory: {}", target.display()))?;
        }
    }

    // Sort files alphabetically for deterministic output
    files.sort();
    Ok(files)
}

fn collect_from_directory(dir: &Path, extension: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_ignore(e.file_name().to_string_lossy().as_ref()))
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && has_extension(path, extension) {
            files.push(path.to_path_buf());
        }
    }

    Ok(())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

fn should_ignore(name: &str) -> bool {
    IGNORE_DIRS.iter().any(|dir| name == *dir)
}
