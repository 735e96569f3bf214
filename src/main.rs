use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use schmify::bot::{self, cache::SeenCache, PostDraft};
use schmify::cli::output::{self, OutputFormat};
use schmify::{transform_phrase, Config};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "schmify")]
#[command(version, about = "Shm-reduplicate words, phrases and trending topics", long_about = None)]
struct Cli {
    /// Candidate topics to convert, tried in order until one works.
    /// Reads one candidate per line from stdin when empty.
    #[arg(value_name = "TOPICS", conflicts_with = "phrase")]
    topics: Vec<String>,

    /// Convert a single phrase directly (no topic filtering)
    #[arg(short, long)]
    phrase: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Seen-topics cache file
    #[arg(long)]
    seen_cache: Option<PathBuf>,

    /// Pattern for candidate topics to skip (regex)
    #[arg(long)]
    skip_pattern: Vec<String>,

    /// Use this terminator instead of a random one from the config
    #[arg(long)]
    terminator: Option<String>,

    /// Go through the motions without updating the seen-topics cache
    #[arg(short = 'x', long)]
    dry_run: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "schmify", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.seen_cache.clone(), cli.skip_pattern.clone())?;
    let terminator = choose_terminator(&cli, &config);

    // Phrase mode: transform directly, no candidate filtering.
    if let Some(phrase) = &cli.phrase {
        let draft = PostDraft {
            original: phrase.clone(),
            transformed: transform_phrase(phrase),
        };
        let post = bot::compose_post(&draft.original, &draft.transformed, &terminator);
        output::print_post(&draft, &post, !cli.no_color, &cli.format);
        return Ok(());
    }

    // Topic mode: try candidates until one transforms.
    let candidates = gather_candidates(&cli)?;
    if candidates.is_empty() {
        anyhow::bail!("No topic candidates given. Use --help for usage information.");
    }

    let cache_path = config
        .seen_cache
        .clone()
        .context("No seen-topics cache location available")?;
    let mut cache = SeenCache::load(cache_path)?;

    let skip = config.compiled_skip_patterns();
    let Some(draft) = bot::pick_post(&candidates, cache.topics(), &skip) else {
        output::print_no_topic_summary(candidates.len(), !cli.no_color);
        std::process::exit(1);
    };

    let post = bot::compose_post(&draft.original, &draft.transformed, &terminator);
    output::print_post(&draft, &post, !cli.no_color, &cli.format);

    if !cli.dry_run {
        cache.record(&draft.original)?;
    }

    Ok(())
}

fn choose_terminator(cli: &Cli, config: &Config) -> String {
    match &cli.terminator {
        Some(t) => t.clone(),
        None => bot::pick_terminator(&mut rand::thread_rng(), &config.terminators).to_string(),
    }
}

fn gather_candidates(cli: &Cli) -> Result<Vec<String>> {
    if !cli.topics.is_empty() {
        return Ok(cli.topics.clone());
    }

    let stdin = io::stdin();
    let mut candidates = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read candidate topics from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            candidates.push(trimmed.to_string());
        }
    }
    Ok(candidates)
}
