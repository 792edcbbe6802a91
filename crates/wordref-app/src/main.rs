use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordref_config::Config;
use wordref_core::parse_translation;
use wordref_fetch::PageClient;
use wordref_html::HtmlDocument;

mod render;

/// Look up a word in an online bilingual dictionary.
#[derive(Parser)]
#[command(name = "wordref", version)]
struct Args {
    /// Word to look up
    word: String,

    /// Language tag recorded on source-side words (default: fr)
    #[arg(long)]
    from: Option<String>,

    /// Language tag recorded on target-side words (default: en)
    #[arg(long)]
    to: Option<String>,

    /// Print the parsed translation as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = Config::new();

    let mut languages = config.parser.languages();
    if let Some(from) = args.from {
        languages.source = from;
    }
    if let Some(to) = args.to {
        languages.target = to;
    }

    let client = PageClient::new(&config.fetch).context("failed to build HTTP client")?;
    let page = client
        .fetch_page(&args.word)
        .await
        .with_context(|| format!("failed to fetch dictionary page for `{}`", args.word))?;
    tracing::debug!("fetched {} bytes for `{}`", page.len(), args.word);

    let document = HtmlDocument::parse(&page);
    let translation = parse_translation(&document, &languages)
        .with_context(|| format!("failed to parse dictionary page for `{}`", args.word))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&translation)?);
    } else {
        print!("{}", render::plain(&args.word, &translation));
    }
    Ok(())
}
