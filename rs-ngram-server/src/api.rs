use actix_web::{HttpResponse, Responder, delete, get, post, web};
use serde::{Deserialize, Serialize};

use rs_ngram_core::model::suggestion::{DEFAULT_MAX_SUGGESTIONS, DEFAULT_ORDER, suggest_from_model};
use rs_ngram_core::pipeline::{compare_boundaries, train};
use rs_ngram_core::text::preprocessing_report;
use rs_ngram_core::{NgramError, ProcessingOptions, process};

use crate::error::ApiError;
use crate::state::SharedData;

type ApiResult = Result<HttpResponse, ApiError>;

/// Query parameters of `/v1/corpora/{name}/analysis`.
#[derive(Deserialize)]
struct AnalysisParams {
	n: Option<usize>,
	boundaries: Option<bool>,
	stopwords: Option<bool>,
	/// Comma separated comparison orders, e.g. `2,3,4`
	compare: Option<String>,
}

impl AnalysisParams {
	/// Builds processing options, keeping the defaults for missing values.
	fn options(&self) -> Result<ProcessingOptions, NgramError> {
		let defaults = ProcessingOptions::default();
		let comparison_orders = match &self.compare {
			None => defaults.comparison_orders,
			Some(s) => s
				.split(',')
				.map(str::trim)
				.filter(|s| !s.is_empty())
				.map(|s| {
					s.parse::<usize>()
						.map_err(|_| NgramError::invalid_parameter("compare", format!("'{s}' is not an order")))
				})
				.collect::<Result<Vec<_>, _>>()?,
		};

		Ok(ProcessingOptions {
			n: self.n.unwrap_or(defaults.n),
			use_boundaries: self.boundaries.unwrap_or(defaults.use_boundaries),
			use_stopwords: self.stopwords.unwrap_or(defaults.use_stopwords),
			comparison_orders,
		})
	}
}

/// Query parameters of `/v1/corpora/{name}/model`.
#[derive(Deserialize)]
struct ModelParams {
	n: Option<usize>,
	boundaries: Option<bool>,
}

/// Query parameters of `/v1/corpora/{name}/comparison`.
#[derive(Deserialize)]
struct ComparisonParams {
	n: Option<usize>,
}

/// JSON body of `/v1/suggestions`.
#[derive(Deserialize)]
#[serde(default)]
struct SuggestionRequest {
	text: String,
	corpus: String,
	n: usize,
	max_suggestions: usize,
	boundaries: bool,
}

impl Default for SuggestionRequest {
	fn default() -> Self {
		Self {
			text: String::new(),
			corpus: String::new(),
			n: DEFAULT_ORDER,
			max_suggestions: DEFAULT_MAX_SUGGESTIONS,
			boundaries: false,
		}
	}
}

#[derive(Serialize)]
struct Cleared {
	cleared: usize,
}

/// HTTP GET endpoint `/v1/corpora`
///
/// Lists the corpus names found in the data directory.
#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<SharedData>) -> ApiResult {
	Ok(HttpResponse::Ok().json(data.corpora()?))
}

/// HTTP GET endpoint `/v1/corpora/{name}/analysis`
///
/// Word frequencies, n-gram frequencies and probability tables.
/// An unreadable corpus is analyzed as an empty one.
#[get("/v1/corpora/{name}/analysis")]
async fn get_analysis(
	data: web::Data<SharedData>,
	name: web::Path<String>,
	query: web::Query<AnalysisParams>,
) -> ApiResult {
	let options = query.options()?;
	let text = data.read_or_empty(&name)?;
	Ok(HttpResponse::Ok().json(process(&text, &options)))
}

/// HTTP GET endpoint `/v1/corpora/{name}/preprocessing`
///
/// What normalization removed from the corpus.
#[get("/v1/corpora/{name}/preprocessing")]
async fn get_preprocessing(data: web::Data<SharedData>, name: web::Path<String>) -> ApiResult {
	let text = data.read_or_empty(&name)?;
	Ok(HttpResponse::Ok().json(preprocessing_report(&text)))
}

/// HTTP GET endpoint `/v1/corpora/{name}/model`
///
/// Most frequent records of an n-gram model trained on the corpus.
#[get("/v1/corpora/{name}/model")]
async fn get_trained_model(
	data: web::Data<SharedData>,
	name: web::Path<String>,
	query: web::Query<ModelParams>,
) -> ApiResult {
	let text = data.read_or_empty(&name)?;
	let report = train(&text, query.n.unwrap_or(DEFAULT_ORDER), query.boundaries.unwrap_or(false))?;
	Ok(HttpResponse::Ok().json(report))
}

/// HTTP GET endpoint `/v1/corpora/{name}/comparison`
///
/// The corpus modeled with and without sentence boundaries.
#[get("/v1/corpora/{name}/comparison")]
async fn get_comparison(
	data: web::Data<SharedData>,
	name: web::Path<String>,
	query: web::Query<ComparisonParams>,
) -> ApiResult {
	let text = data.read(&name)?;
	Ok(HttpResponse::Ok().json(compare_boundaries(&text, query.n.unwrap_or(DEFAULT_ORDER))))
}

/// HTTP POST endpoint `/v1/suggestions`
///
/// Ranked next words for a partial text, using a cached model.
#[post("/v1/suggestions")]
async fn post_suggestions(data: web::Data<SharedData>, body: web::Json<SuggestionRequest>) -> ApiResult {
	if body.text.trim().is_empty() {
		return Err(NgramError::EmptyQuery.into());
	}
	let SuggestionRequest { text, corpus, n, max_suggestions, boundaries } = body.into_inner();
	// Building a model on a cache miss is CPU bound, keep it off the worker
	let model = web::block(move || data.model(&corpus, n, boundaries))
		.await
		.map_err(|e| NgramError::Processing(e.to_string()))??;
	Ok(HttpResponse::Ok().json(suggest_from_model(&model, &text, max_suggestions)?))
}

/// HTTP GET endpoint `/v1/models`
///
/// Lists the autocomplete models currently cached.
#[get("/v1/models")]
async fn get_models(data: web::Data<SharedData>) -> ApiResult {
	Ok(HttpResponse::Ok().json(data.cached_models()?))
}

/// HTTP DELETE endpoint `/v1/models`
///
/// Drops cached models, e.g. after a corpus changed on disk.
#[delete("/v1/models")]
async fn delete_models(data: web::Data<SharedData>) -> ApiResult {
	Ok(HttpResponse::Ok().json(Cleared { cleared: data.clear_models()? }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl Responder {
	HttpResponse::NotFound().json(serde_json::json!({ "error": "not found" }))
}

/// Registers every endpoint on an app.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_corpora)
		.service(get_analysis)
		.service(get_preprocessing)
		.service(get_trained_model)
		.service(get_comparison)
		.service(post_suggestions)
		.service(get_models)
		.service(delete_models);
}
