use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use log::info;
use serde::Serialize;

use rs_ngram_core::io::{list_corpora, read_corpus, read_corpus_or_empty, resolve_corpus};
use rs_ngram_core::model::AutocompleteModel;
use rs_ngram_core::model::suggestion::{build_model, clamp_order};
use rs_ngram_core::pipeline::tokenize;
use rs_ngram_core::{NgramError, Result};

/// Identifies a cached autocomplete model.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelKey {
	pub corpus: String,
	pub n: usize,
	pub boundaries: bool,
}

/// State shared by all workers.
///
/// Corpora are read from `data_dir` on every request. Autocomplete
/// models are cached by `ModelKey`; a cached model is never mutated.
pub struct SharedData {
	data_dir: PathBuf,
	models: RwLock<HashMap<ModelKey, Arc<AutocompleteModel>>>,
}

impl SharedData {
	pub fn new(data_dir: impl Into<PathBuf>) -> Self {
		Self { data_dir: data_dir.into(), models: RwLock::new(HashMap::new()) }
	}

	/// Names of the corpora available in the data directory.
	pub fn corpora(&self) -> Result<Vec<String>> {
		list_corpora(&self.data_dir)
	}

	/// Reads a corpus, failing if it cannot be read.
	pub fn read(&self, corpus: &str) -> Result<String> {
		read_corpus(resolve_corpus(&self.data_dir, corpus)?)
	}

	/// Reads a corpus, an unreadable one being treated as empty.
	///
	/// Invalid names are still rejected.
	pub fn read_or_empty(&self, corpus: &str) -> Result<String> {
		Ok(read_corpus_or_empty(resolve_corpus(&self.data_dir, corpus)?))
	}

	/// Returns the autocomplete model of a corpus, building it on first use.
	///
	/// `n` is clamped into the suggestion order range.
	pub fn model(&self, corpus: &str, n: usize, boundaries: bool) -> Result<Arc<AutocompleteModel>> {
		let key = ModelKey { corpus: corpus.trim().to_owned(), n: clamp_order(n), boundaries };

		if let Some(model) = self.read_models()?.get(&key) {
			return Ok(Arc::clone(model));
		}

		let text = self.read(&key.corpus)?;
		let model = Arc::new(build_model(&tokenize(&text, boundaries, true), key.n)?);
		info!("built {}-gram model for '{}' ({} contexts)", key.n, key.corpus, model.len());

		let mut models = self
			.models
			.write()
			.map_err(|_| NgramError::Processing("model cache lock poisoned".to_owned()))?;
		// Another worker may have built it meanwhile, keep the first one
		Ok(Arc::clone(models.entry(key).or_insert(model)))
	}

	/// Keys of the cached models, sorted.
	pub fn cached_models(&self) -> Result<Vec<ModelKey>> {
		let mut keys: Vec<ModelKey> = self.read_models()?.keys().cloned().collect();
		keys.sort();
		Ok(keys)
	}

	/// Drops every cached model. Returns how many were dropped.
	pub fn clear_models(&self) -> Result<usize> {
		let mut models = self
			.models
			.write()
			.map_err(|_| NgramError::Processing("model cache lock poisoned".to_owned()))?;
		let count = models.len();
		models.clear();
		Ok(count)
	}

	fn read_models(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<ModelKey, Arc<AutocompleteModel>>>> {
		self.models
			.read()
			.map_err(|_| NgramError::Processing("model cache lock poisoned".to_owned()))
	}
}
