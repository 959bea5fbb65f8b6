use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, Level};

use nc_core::{Config, Error, GenerationParams, NewsSource, Result};
use nc_inference::{create_backend, BackendKind};
use nc_search::news::{filter_relevant, format_digest, no_matches, MAX_DIGEST_ARTICLES};
use nc_search::{NewsClient, SearchClient};
use nc_web::prompts::summarize_prompt;
use nc_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(name = "newschat", about = "Summarize news topics with a hosted LLM")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server exposing /summarize and /followup
    Serve {
        #[arg(long, default_value_t = 3000)]
        port: u16,
        /// Which text-generation backend to use (gemini, huggingface, together, dummy)
        #[arg(long, default_value = "together")]
        backend: BackendKind,
    },
    /// One-shot: fetch news for a topic and print a summary
    Summarize {
        topic: String,
        #[arg(long, default_value = "together")]
        backend: BackendKind,
    },
}

fn news_client(config: &Config) -> Result<NewsClient> {
    let key = config
        .newsapi_key
        .clone()
        .ok_or_else(|| Error::Config("NEWSAPI_KEY is required".to_string()))?;
    Ok(NewsClient::new(key))
}

fn search_client(config: &Config) -> Result<SearchClient> {
    let key = config
        .serper_key
        .clone()
        .ok_or_else(|| Error::Config("SERPER_API_KEY is required".to_string()))?;
    Ok(SearchClient::new(key))
}

async fn serve(port: u16, backend: BackendKind, config: &Config) -> Result<()> {
    let generator = create_backend(backend, config)?;
    info!("🤖 Text-generation backend: {}", generator.kind());

    let state = AppState {
        generator,
        news: Arc::new(news_client(config)?),
        search: Arc::new(search_client(config)?),
    };

    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("🚀 NewsChat running at http://localhost:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn summarize_once(topic: &str, backend: BackendKind, config: &Config) -> Result<()> {
    let generator = create_backend(backend, config)?;
    let news = news_client(config)?;

    let articles = news.search_news(topic).await?;
    let relevant = filter_relevant(&articles, topic);
    if relevant.is_empty() {
        println!("{}", no_matches(topic));
        return Ok(());
    }

    let digest = format_digest(&relevant, MAX_DIGEST_ARTICLES);
    info!("📰 News fetched. Sending to {} for summary...", generator.kind());

    let prompt = summarize_prompt(topic, &digest);
    let summary = generator.generate(&prompt, &GenerationParams::default()).await;

    println!("✅ Summary:\n");
    println!("{}", summary);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Serve { port, backend } => serve(port, backend, &config).await,
        Commands::Summarize { topic, backend } => summarize_once(&topic, backend, &config).await,
    }
}
