use clap::{Parser, Subcommand};
use dj_song_matcher::{
    providers::{CatalogProvider, DemoProvider, JsonFileProvider},
    similarity, Catalog, MatchConfig, MatchEngine, MatchKind,
};

#[derive(Parser)]
#[command(name = "song-matcher-cli")]
#[command(about = "DJ Song Matcher CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog JSON file (defaults to the built-in demo catalog)
    #[arg(short, long)]
    catalog: Option<String>,

    /// Matcher config JSON file
    #[arg(long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Similarity score of two strings
    Similarity {
        a: String,
        b: String,
    },

    /// Search the catalog
    Search {
        /// Search query
        query: String,

        /// Maximum results
        #[arg(short, long)]
        max_results: Option<usize>,

        /// Minimum score (exclusive)
        #[arg(long)]
        min_score: Option<f64>,
    },

    /// Validate a song request
    Validate {
        /// Requested title
        title: String,

        /// Requested artist
        #[arg(default_value = "")]
        artist: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MatchConfig::from_json_file(path)?,
        None => MatchConfig::default(),
    };

    let provider: Box<dyn CatalogProvider> = match &cli.catalog {
        Some(path) => Box::new(JsonFileProvider::new(path)),
        None => Box::new(DemoProvider),
    };
    let engine = MatchEngine::new(Catalog::from_provider(provider.as_ref())?).with_config(config);

    match cli.command {
        Commands::Similarity { a, b } => {
            println!("{:.4}", similarity(&a, &b));
        }

        Commands::Search { query, max_results, min_score } => {
            println!("🔍 Searching for: {}", query);

            let results = engine.search(
                &query,
                max_results.unwrap_or(config.max_results),
                min_score.unwrap_or(config.min_score),
            );

            if results.is_empty() {
                println!("\n❌ No suggestions");
            }
            for (i, result) in results.iter().enumerate() {
                println!(
                    "   {}. {} ({}% match) [{}]",
                    i + 1,
                    result.song.display_name(),
                    result.percent(),
                    result.song.id
                );
            }
        }

        Commands::Validate { title, artist } => {
            let result = engine.validate(&title, &artist);

            let icon = match result.kind {
                MatchKind::Exact => "✅",
                MatchKind::Close => "🟡",
                MatchKind::Unmatched => "⚠️",
            };
            println!("{} {:?} (confidence {:.1}%)", icon, result.kind, result.confidence * 100.0);

            if let Some(message) = &result.message {
                println!("   {}", message);
            }

            if !result.suggestions.is_empty() {
                println!("\n📋 Suggestions:");
                for (i, s) in result.suggestions.iter().enumerate() {
                    println!("   {}. {} ({}% match)", i + 1, s.song.display_name(), s.percent());
                }
            }
        }
    }

    Ok(())
}
