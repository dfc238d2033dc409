use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use prodsearch_catalog::load_catalog;
use prodsearch_common::{logger, AppConfig};
use prodsearch_embedding::OllamaClient;
use prodsearch_vector::{SearchEngine, SearchResult};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "prodsearch")]
#[command(about = "ProdSearch - semantic search over a product catalog", long_about = None)]
struct Cli {
    /// Catalog file path (overrides CATALOG_PATH)
    #[arg(long)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single query and exit
    Query {
        /// Query text
        text: String,

        /// Number of results
        #[arg(long)]
        k: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root, early so CLI
    // argument overrides work correctly
    load_dotenv_from_project_root();

    if let Some(catalog) = &cli.catalog {
        std::env::set_var("CATALOG_PATH", catalog);
    }

    let config = AppConfig::from_env()?;
    config.validate()?;
    logger::setup_console_logging(&config.log_level);

    tracing::info!("ProdSearch starting...");
    tracing::info!("  Ollama: {}", config.ollama_base_url);
    tracing::info!("  Embedding model: {}", config.embedding_model);
    tracing::info!("  Catalog: {}", config.catalog_path.display());

    let client = OllamaClient::new(&config.ollama_base_url, &config.embedding_model)?;
    match client.test_connection().await {
        Ok(true) => tracing::info!("Ollama connection OK"),
        Ok(false) => bail!("Ollama at {} responded with an error status", config.ollama_base_url),
        Err(e) => bail!("Cannot reach Ollama at {}: {}", config.ollama_base_url, e),
    }

    // Startup ingestion is fatal on failure
    let items = load_catalog(&config.catalog_path)?;
    let documents = items.into_iter().map(|item| item.into_document()).collect();

    let engine = SearchEngine::new(Arc::new(client));
    let ids = engine
        .ingest(documents)
        .await
        .context("Catalog ingestion failed")?;
    println!("Indexed {} catalog items", ids.len());

    match cli.command {
        Some(Commands::Query { text, k }) => {
            let results = engine.search(&text, k.unwrap_or(config.top_k)).await?;
            print_results(&results);
        }
        None => {
            run_interactive(&engine, config.top_k).await?;
        }
    }

    Ok(())
}

/// Interactive query loop
///
/// A plain bounded loop over stdin lines: read, dispatch, repeat. A failed
/// query is reported and the loop continues; `exit`, `quit`, or EOF end
/// the session.
async fn run_interactive(engine: &SearchEngine, top_k: usize) -> Result<()> {
    println!("Type a query, 'stats' for index info, 'exit' to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("search> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let query = line.trim();

        if query.is_empty() {
            continue;
        }

        match query {
            "exit" | "quit" => break,
            "stats" => {
                let (count, dim) = engine.stats().await;
                match dim {
                    Some(dim) => println!("{} documents, dimension {}", count, dim),
                    None => println!("index is empty"),
                }
            }
            _ => match engine.search(query, top_k).await {
                Ok(results) if results.is_empty() => println!("No results."),
                Ok(results) => print_results(&results),
                Err(e) => {
                    tracing::error!("Query failed: {}", e);
                    println!("Query failed: {}", e);
                }
            },
        }
    }

    println!("Bye.");
    Ok(())
}

fn print_results(results: &[SearchResult]) {
    for (rank, result) in results.iter().enumerate() {
        let source = result
            .metadata
            .get("source")
            .and_then(|v| v.as_str())
            .unwrap_or("?");
        println!("{}. [{:.4}] {} (source: {})", rank + 1, result.score, result.content, source);
    }
}
