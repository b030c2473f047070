use std::fs;
use std::path::{Component, Path, PathBuf};

use log::warn;

use crate::error::{NgramError, Result};

/// Extension of corpus files inside a data directory.
pub const CORPUS_EXTENSION: &str = "txt";

/// Reads a whole corpus file as UTF-8 text.
///
/// # Errors
/// Returns `NgramError::UnreadableInput` if the file is missing,
/// unreadable or not valid UTF-8.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
	let path = path.as_ref();
	fs::read_to_string(path).map_err(|source| NgramError::UnreadableInput { path: path.to_path_buf(), source })
}

/// Reads a corpus, treating any read failure as an empty corpus.
///
/// The failure is logged, every downstream component handles `""`.
pub fn read_corpus_or_empty<P: AsRef<Path>>(path: P) -> String {
	match read_corpus(path) {
		Ok(text) => text,
		Err(e) => {
			warn!("{e}, using an empty corpus");
			String::new()
		}
	}
}

/// Resolves a corpus name to `<dir>/<name>.txt`.
///
/// # Errors
/// Returns `NgramError::InvalidParameter` if the name is empty or would
/// leave `dir` (separators, `..`, absolute paths).
pub fn resolve_corpus<P: AsRef<Path>>(dir: P, name: &str) -> Result<PathBuf> {
	let name = name.trim();
	if name.is_empty() {
		return Err(NgramError::invalid_parameter("corpus", "name cannot be empty"));
	}

	let mut components = Path::new(name).components();
	match (components.next(), components.next()) {
		(Some(Component::Normal(_)), None) => (),
		_ => return Err(NgramError::invalid_parameter("corpus", format!("'{name}' is not a plain file name"))),
	}

	// `quijote.v2` names `quijote.v2.txt`
	Ok(dir.as_ref().join(format!("{name}.{CORPUS_EXTENSION}")))
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/quijote.txt"` → `"quijote"`
/// - `"quijote.txt"` → `"quijote"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> Result<String> {
	let input_path = input_path.as_ref();
	let stem = input_path
		.file_stem()
		.ok_or_else(|| NgramError::invalid_parameter("path", format!("'{}' has no filename", input_path.display())))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<String>> {
	let dir = dir.as_ref();
	let unreadable = |source| NgramError::UnreadableInput { path: dir.to_path_buf(), source };

	let mut files = Vec::new();
	for entry in fs::read_dir(dir).map_err(unreadable)? {
		let path = entry.map_err(unreadable)?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

/// Lists corpus names (file stems of `*.txt`) available in `dir`.
pub fn list_corpora<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
	list_files(dir, CORPUS_EXTENSION)?
		.iter()
		.map(get_filename)
		.collect()
}
