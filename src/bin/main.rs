use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use thamil_collate::persistence::{load_or_new, save_to_disk};
use thamil_collate::{phonemes, Collator, CollatorConfig, ForeignPolicy};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Word list printed by `--demo`.
const DEMO_WORDS: [&str; 11] = [
    "மடம்",
    "மட்டம்",
    "மட்டும்",
    "மடக்கு",
    "முடக்கு",
    "முடுக்கு",
    "படம்",
    "குடம்",
    "தடம்",
    "தடி",
    "திட்டம்",
];

#[derive(Parser)]
#[command(version, about = "Sort Tamil words in alphabetical order")]
struct Cli {
    /// Files with one word per line. Reads stdin when none are given.
    files: Vec<PathBuf>,
    /// Where non-Tamil letters sort: first, last or codepoint
    #[arg(long)]
    foreign: Option<ForeignPolicy>,
    /// JSON collator config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Sort the built-in sample list and print it before and after
    #[arg(long, default_value_t = false)]
    demo: bool,
    /// Print the result as a JSON array
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Descending order
    #[arg(long, default_value_t = false)]
    reverse: bool,
    /// Drop words equal to the previous one
    #[arg(long, default_value_t = false)]
    dedup: bool,
    /// Print each word's phonemes next to it
    #[arg(long, default_value_t = false)]
    phonemes: bool,
    /// Merge the words into this lexicon file and print the whole lexicon
    #[arg(long)]
    lexicon: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let collator = Collator::from_config(&resolve_config(&cli)?);
    debug!(policy = %collator.policy(), "collator ready");

    let input: Vec<String> = if cli.demo {
        DEMO_WORDS.iter().map(|w| w.to_string()).collect()
    } else {
        read_words(&cli.files)?
    };

    let mut sorted = match &cli.lexicon {
        Some(path) => {
            let mut lexicon = load_or_new(path, collator);
            let added = input.iter().filter(|w| lexicon.insert(w)).count();
            save_to_disk(&lexicon, path)
                .with_context(|| format!("saving lexicon {}", path.display()))?;
            info!(added, total = lexicon.len(), "lexicon updated");
            lexicon.words().to_vec()
        }
        None => collator.sorted(&input),
    };
    if cli.dedup {
        sorted.dedup_by(|later, earlier| {
            collator.compare(later.as_str(), earlier.as_str()).is_eq()
        });
    }
    if cli.reverse {
        sorted.reverse();
    }

    let mut out = io::stdout().lock();
    if cli.json {
        serde_json::to_writer(&mut out, &sorted)?;
        writeln!(out)?;
    } else if cli.demo {
        print_heading(&mut out, "Original list of strings:")?;
        print_words(&mut out, &input, cli.phonemes)?;
        print_heading(&mut out, "Sorted   list of strings:")?;
        print_words(&mut out, &sorted, cli.phonemes)?;
    } else {
        print_words(&mut out, &sorted, cli.phonemes)?;
    }
    out.flush()?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// `--foreign` wins over `--config`, which wins over the environment.
fn resolve_config(cli: &Cli) -> Result<CollatorConfig> {
    let mut config = match &cli.config {
        Some(path) => CollatorConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => CollatorConfig::from_env(),
    };
    if let Some(policy) = cli.foreign {
        config.foreign = policy;
    }
    Ok(config)
}

fn read_words(files: &[PathBuf]) -> Result<Vec<String>> {
    let mut raw = String::new();
    if files.is_empty() {
        io::stdin().read_to_string(&mut raw).context("reading stdin")?;
    } else {
        for path in files {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            raw.push_str(&text);
            raw.push('\n');
        }
    }
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn print_heading(out: &mut impl Write, heading: &str) -> io::Result<()> {
    if io::stdout().is_tty() {
        writeln!(out, "{}", heading.bold().cyan())
    } else {
        writeln!(out, "{}", heading)
    }
}

fn print_words(out: &mut impl Write, words: &[String], with_phonemes: bool) -> io::Result<()> {
    for word in words {
        if with_phonemes {
            writeln!(out, "{}\t{}", word, phonemes(word).join(" "))?;
        } else {
            writeln!(out, "{}", word)?;
        }
    }
    Ok(())
}
