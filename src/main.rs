//! CLI entry point and command handlers for lexward.

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use lexward::checks::{analyze_proposal, AnalysisContext, DomainCompatibility};
use lexward::extract::extract_fields;
use lexward::lexicon::LexiconStore;
use lexward::paths;
use lexward::phonology::PhonologyRules;
use lexward::report::format_report;
use lexward::{ui, utc_now_iso};

#[derive(Parser)]
#[command(name = "lexward")]
#[command(version)]
#[command(about = "Lexicon proposal validation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a word proposal and print the validation report
    ///
    /// The proposal body is taken from the TEXT argument, from --file, or
    /// from piped stdin, in that order of preference.
    Analyze {
        /// Proposal body (markdown with labeled sections)
        text: Option<String>,
        /// Read the proposal body from a file
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Path to the lexicon snapshot
        #[arg(long, value_name = "PATH", default_value = paths::LEXICON_FILE)]
        lexicon: PathBuf,
        /// Path to the phonological rules document
        #[arg(long, value_name = "PATH", default_value = paths::RULES_FILE)]
        rules: PathBuf,
    },
    /// Show lexicon statistics
    Stats {
        /// Path to the lexicon snapshot
        #[arg(long, value_name = "PATH", default_value = paths::LEXICON_FILE)]
        lexicon: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            text,
            file,
            lexicon,
            rules,
        } => cmd_analyze(text, file, &lexicon, &rules),
        Commands::Stats { lexicon } => cmd_stats(&lexicon),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "lexward", &mut io::stdout());
            Ok(())
        }
    }
}

fn cmd_analyze(
    text: Option<String>,
    file: Option<PathBuf>,
    lexicon_path: &PathBuf,
    rules_path: &PathBuf,
) -> Result<()> {
    let body = resolve_input(text, file)?;

    let store = LexiconStore::load(lexicon_path)?;
    let rules = PhonologyRules::load(rules_path)?;
    let compatibility = rules
        .compatible_domains
        .map(DomainCompatibility::from_table)
        .unwrap_or_default();
    let ctx = AnalysisContext::new(&store, &rules.inventory).with_compatibility(compatibility);

    let fields = extract_fields(&body);
    let result = analyze_proposal(&ctx, &fields);

    // The report goes to stdout; everything else stays on stderr. Any
    // completed analysis exits cleanly, whatever the verdict.
    println!("{}", format_report(&result));
    for (name, outcome) in result.sections() {
        ui::info(&format!(
            "  {} {} {}",
            ui::status_icon(outcome.status),
            name,
            outcome.status
        ));
    }
    ui::info(&format!(
        "Analysis completed at {}: {}",
        utc_now_iso(),
        ui::recommendation_label(result.recommendation())
    ));
    Ok(())
}

fn resolve_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("Failed to read proposal from {}", path.display()));
    }
    if !atty::is(atty::Stream::Stdin) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read proposal from stdin")?;
        return Ok(buf);
    }
    bail!("no proposal text provided (pass TEXT, --file, or pipe via stdin)")
}

fn cmd_stats(lexicon_path: &PathBuf) -> Result<()> {
    let store = LexiconStore::load(lexicon_path)?;
    let stats = store.statistics();

    println!("{}", ui::colors::heading("Lexicon statistics"));
    println!("  Total words:      {}", stats.total_words);
    println!("  Root words:       {}", stats.root_words);
    println!("  Compound words:   {}", stats.compound_words);
    println!(
        "  Avg roots/compound: {:.2}",
        stats.average_compound_breadth
    );

    println!("\n{}", ui::colors::heading("Domain distribution"));
    for (domain, count) in &stats.domain_distribution {
        println!("  {:<16} {}", ui::colors::identifier(domain), count);
    }

    if !stats.most_productive_roots.is_empty() {
        println!("\n{}", ui::colors::heading("Most productive roots"));
        for (root, count) in &stats.most_productive_roots {
            println!(
                "  {:<16} {} {}",
                ui::colors::identifier(root),
                count,
                ui::colors::secondary("compounds")
            );
        }
    }
    Ok(())
}
