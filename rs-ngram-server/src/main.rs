use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use clap::Parser;
use log::info;

mod api;
mod error;
mod state;

use state::SharedData;

/// JSON API serving n-gram analysis and autocomplete over text corpora.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
	/// Address to bind.
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to bind.
	#[arg(long, default_value_t = 5000)]
	port: u16,

	/// Directory holding the `<name>.txt` corpora.
	#[arg(long, default_value = "./data")]
	data_dir: PathBuf,

	/// Number of HTTP workers (defaults to the number of CPUs).
	#[arg(long)]
	workers: Option<usize>,
}

/// Main entry point for the server.
///
/// Shares the data directory and the model cache between workers and
/// starts an Actix-web HTTP server with the `/v1` endpoints.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let config = Config::parse();
	let workers = config.workers.unwrap_or_else(num_cpus::get).max(1);
	if !config.data_dir.is_dir() {
		log::warn!("data directory {} does not exist, no corpus will be found", config.data_dir.display());
	}

	info!("serving corpora from {} on {}:{} ({} workers)", config.data_dir.display(), config.host, config.port, workers);
	let shared_data = web::Data::new(SharedData::new(config.data_dir));

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.configure(api::configure)
			.default_service(web::route().to(api::not_found))
	})
		.workers(workers)
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
