use anyhow::{Context, Result};
use clap::Parser;
use engine::keyword::DEFAULT_NOISE_WORDS;
use engine::SearchIndex;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "littlesearch")]
#[command(about = "Index a corpus of text files and search it for two keywords", long_about = None)]
struct Cli {
    /// Manifest file listing the document files to index, whitespace-separated
    #[arg(long, default_value = "docs.txt")]
    docs: PathBuf,
    /// Noise-word file; falls back to a built-in English list when omitted
    #[arg(long)]
    noise: Option<PathBuf>,
    /// Emit the result as JSON instead of plain lines
    #[arg(long, default_value_t = false)]
    json: bool,
    /// First keyword (favored on frequency ties)
    kw1: String,
    /// Second keyword
    kw2: String,
}

#[derive(Serialize)]
struct QueryOutput<'a> {
    kw1: &'a str,
    kw2: &'a str,
    documents: Vec<String>,
    indexed_keywords: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let noise_words = match &cli.noise {
        Some(path) => load_noise_words(path)?,
        None => DEFAULT_NOISE_WORDS.clone(),
    };
    let doc_ids = load_manifest(&cli.docs)?;
    tracing::info!(docs = doc_ids.len(), manifest = %cli.docs.display(), "building index");
    let index = SearchIndex::build(doc_ids, |doc| document_tokens(Path::new(doc)), noise_words)?;

    // Keywords are stored lowercase, so match whatever casing the user typed.
    let (kw1, kw2) = (cli.kw1.to_lowercase(), cli.kw2.to_lowercase());
    let documents = index.top5(&kw1, &kw2);
    if cli.json {
        let out = QueryOutput {
            kw1: &kw1,
            kw2: &kw2,
            documents,
            indexed_keywords: index.keyword_count(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if documents.is_empty() {
        println!("no matching documents");
    } else {
        for doc in documents {
            println!("{doc}");
        }
    }
    Ok(())
}

/// Read the document manifest: one corpus file name per whitespace-separated
/// entry, in indexing order.
fn load_manifest(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading document manifest {}", path.display()))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

fn load_noise_words(path: &Path) -> Result<HashSet<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading noise words {}", path.display()))?;
    Ok(text.split_whitespace().map(str::to_lowercase).collect())
}

/// Token source for one document: its raw whitespace-delimited tokens in
/// reading order.
fn document_tokens(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading document {}", path.display()))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}
