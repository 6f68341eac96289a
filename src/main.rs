use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use textrank::{
    EnglishAnalyzer, StopwordFilter, TextRank, TextRankConfig, DEFAULT_SENTENCE_ITERATIONS,
    DEFAULT_WORD_ITERATIONS,
};

/// Rank the most central sentences or keywords of text read from stdin,
/// printed one per line in descending rank order.
#[derive(Parser)]
#[command(name = "textrank", version, about)]
struct Cli {
    /// Rank keywords instead of sentences
    #[arg(long)]
    keywords: bool,

    /// Vote propagation depth (default: 5 for sentences, 30 for keywords)
    #[arg(long)]
    iterations: Option<usize>,

    /// Print only the top N results
    #[arg(long)]
    top: Option<usize>,

    /// Language code for the stopword list (e.g. en, de, fr)
    #[arg(long, default_value = "en")]
    language: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textrank=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading text from stdin")?;

    let analyzer = EnglishAnalyzer::with_stopwords(StopwordFilter::for_language(&cli.language));
    let ranker = TextRank::with_analyzer(TextRankConfig::default(), analyzer)?;

    let mut ranked = if cli.keywords {
        ranker.rank_words(&text, cli.iterations.unwrap_or(DEFAULT_WORD_ITERATIONS))
    } else {
        ranker.rank_sentences(&text, cli.iterations.unwrap_or(DEFAULT_SENTENCE_ITERATIONS))
    };

    if let Some(top) = cli.top {
        ranked.truncate(top);
    }
    for unit in ranked {
        println!("{unit}");
    }

    Ok(())
}
