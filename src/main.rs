use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use sollagarathi::config::AppConfig;
use sollagarathi::core::api::ApiServer;
use sollagarathi::core::logging;
use sollagarathi::core::resolver::{SourceAdapter, WordResolver};
use sollagarathi::core::sources::{ScrapedSource, WiktionarySource};
use sollagarathi::core::suggest::{
    build_default_concepts, ConceptMap, InputToolsTransliterator, SuggestionService, Transliterator,
};
use sollagarathi::database::{Database, LexiconOps};

/// One row of a bulk import file.
#[derive(Debug, Deserialize)]
struct ImportRow {
    lemma: String,
    body: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = AppConfig::config_path();
    let config = AppConfig::try_load_from(&config_path)
        .with_context(|| format!("loading configuration ({} and SOLLAGARATHI_* env)", config_path.display()))?;

    let _log_guard = logging::init(&config.log_dir(), &config.logging.level);
    log::info!("{} v{} starting", sollagarathi::NAME, sollagarathi::VERSION);
    if config_path.exists() {
        log::info!("Loaded config from {}", config_path.display());
    } else {
        log::debug!("No config file at {}, using defaults and environment", config_path.display());
    }

    let db_path = config.database_path();
    let database = Database::open(&db_path)
        .await
        .with_context(|| format!("opening lexicon database at {}", db_path.display()))?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match (args.first().map(String::as_str), args.get(1)) {
        (None | Some("serve"), None) => serve(config, database).await,
        (Some("import"), Some(file)) => import(&database, Path::new(file)).await,
        _ => anyhow::bail!("usage: sollagarathi [serve | import <entries.json>]"),
    }
}

/// Insert-if-absent every `{lemma, body}` row of a JSON array.
async fn import(database: &Database, file: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let rows: Vec<ImportRow> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", file.display()))?;

    let entries: Vec<(String, String)> = rows.into_iter().map(|r| (r.lemma, r.body)).collect();
    let inserted = database.import_entries(&entries).await?;
    log::info!(
        "Imported {} new of {} entries from {}",
        inserted,
        entries.len(),
        file.display()
    );

    database.close().await;
    Ok(())
}

async fn serve(config: AppConfig, database: Database) -> anyhow::Result<()> {
    let timeout = Duration::from_millis(config.resolver.source_timeout_ms);
    let client = reqwest::Client::builder()
        .user_agent(concat!("sollagarathi/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .context("building HTTP client")?;

    let mut builder = WordResolver::builder(Arc::new(database.clone()))
        .with_mode(config.resolver.mode)
        .with_timeout(timeout)
        .with_cache_fill(config.resolver.cache_fill)
        .with_suggestions(build_suggestions(&config, client.clone()));

    if config.sources.wiktionary_enabled {
        builder = builder.add_source(Arc::new(WiktionarySource::new(
            client.clone(),
            config.sources.wiktionary_endpoint.clone(),
        )));
    }
    for scraped in config.sources.scraped.iter().filter(|s| s.enabled) {
        let source: Arc<dyn SourceAdapter> = Arc::new(ScrapedSource::new(client.clone(), scraped.clone()));
        builder = builder.add_source(source);
    }

    let resolver = Arc::new(builder.build());
    let server = ApiServer::new(config.server.socket_addr(), resolver);

    server
        .serve(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for Ctrl-C: {}", e);
            }
        })
        .await
        .context("running API server")?;

    database.close().await;
    log::info!("Shutdown complete");
    Ok(())
}

fn build_suggestions(config: &AppConfig, client: reqwest::Client) -> SuggestionService {
    let mut concepts = build_default_concepts();
    if let Some(path) = &config.suggest.concepts_path {
        match ConceptMap::from_toml_file(path) {
            Ok(extra) => {
                log::info!("Loaded {} concept words from {}", extra.len(), path.display());
                concepts.merge(&extra);
            }
            Err(e) => log::warn!("Ignoring concept file {}: {}", path.display(), e),
        }
    }

    let transliterator: Option<Arc<dyn Transliterator>> = if config.suggest.transliteration_enabled {
        Some(Arc::new(InputToolsTransliterator::new(
            client,
            config.suggest.transliteration_endpoint.clone(),
            config.suggest.max_candidates,
        )))
    } else {
        None
    };

    SuggestionService::new(concepts, transliterator, config.suggest.max_candidates)
}
