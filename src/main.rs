use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
    process::ExitCode,
};

use chrono::Local;
use clap::Parser;
use lexmine::{
    anki::AnkiConnect,
    report::retention::{
        prune_old_reports,
        timestamped_report_name,
    },
    segmentation::strip_markup,
    AnalyzerConfig,
    FrequencyBand,
    KnownSource,
    WordAnalyzer,
};
use log::{
    error,
    warn,
};
use stderrlog::Timestamp;

/// Counts words across documents and lists the ones you don't know yet.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Text or HTML documents to analyze.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Configuration file (JSON). Defaults to the user data directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plain word list with one known word per line.
    #[arg(long, conflicts_with = "anki")]
    known_words: Option<PathBuf>,

    /// Load known words from AnkiConnect.
    #[arg(long)]
    anki: bool,

    /// How many words to list.
    #[arg(long, default_value_t = 50)]
    top: usize,

    /// List known words too.
    #[arg(long)]
    include_known: bool,

    /// Write a report into the configured results folder.
    #[arg(long)]
    export: bool,

    /// Silence log messages.
    #[arg(short, long)]
    quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8, quiet: bool) -> Result<(), log::SetLoggerError> {
    // Warnings are shown by default.
    let log_level = match verbose {
        0 => stderrlog::LogLevelNum::Warn,
        1 => stderrlog::LogLevelNum::Info,
        2 => stderrlog::LogLevelNum::Debug,
        _ => stderrlog::LogLevelNum::Trace,
    };

    stderrlog::new().quiet(quiet).verbosity(log_level).timestamp(Timestamp::Off).init()
}

fn read_document(path: &Path) -> std::io::Result<String> {
    let content = fs::read_to_string(path)?;
    let is_html = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"));
    Ok(if is_html { strip_markup(&content) } else { content })
}

fn load_known(analyzer: &mut WordAnalyzer, args: &Args) {
    if let Some(path) = &args.known_words {
        if !analyzer.load_known_from_word_list(path) {
            warn!("Continuing without known words from {}", path.display());
        }
    } else if args.anki {
        let config = analyzer.config().clone();
        match AnkiConnect::new(config.anki_url.clone()) {
            Ok(anki) => {
                let source = KnownSource::Flashcards {
                    provider: &anki,
                    deck_pattern: &config.deck_pattern,
                    field_names: &config.field_names,
                };
                if !analyzer.load_known(source) {
                    warn!("Continuing without known words from Anki");
                }
            }
            Err(e) => warn!("Anki client unavailable: {}", e),
        }
    }
}

fn export(analyzer: &WordAnalyzer) -> Option<PathBuf> {
    let config = analyzer.config();
    let path = config
        .results_folder
        .join(timestamped_report_name(&config.results_filename_prefix, Local::now()));
    if !analyzer.export_report(&path) {
        return None;
    }

    if let Err(e) = prune_old_reports(&config.results_folder, config.max_results_files) {
        warn!("Could not clean up {}: {}", config.results_folder.display(), e);
    }
    Some(path)
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = setup_logging(args.verbose, args.quiet) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config_path = args.config.clone().unwrap_or_else(AnalyzerConfig::default_path);
    let config = AnalyzerConfig::load_or_default(&config_path);
    let mut analyzer = WordAnalyzer::from_config(config);

    load_known(&mut analyzer, &args);

    let mut processed = 0;
    for input in &args.inputs {
        match read_document(input) {
            Ok(text) => {
                analyzer.ingest(&text);
                processed += 1;
            }
            Err(e) => error!("Skipping {}: {}", input.display(), e),
        }
    }

    if processed == 0 {
        error!("No readable input documents");
        return ExitCode::FAILURE;
    }

    let stats = analyzer.summary_stats();
    println!("Documents processed: {}", processed);
    println!("Unique words:        {}", stats.unique_words);
    println!("Total occurrences:   {}", stats.total_occurrences);
    println!("Known words:         {}", stats.known_words);
    println!("New words:           {}", stats.new_words);
    println!("Average frequency:   {:.2}", stats.average_frequency);
    for band in FrequencyBand::ALL {
        println!("  {:<14} {}", band.label(), stats.bands.get(&band).copied().unwrap_or(0));
    }

    println!();
    for (rank, (key, count)) in analyzer.top_n(args.top, !args.include_known).iter().enumerate() {
        println!("{:>4}. {:<24} {:<26} {}", rank + 1, key.token, key.category.label(), count);
    }

    if args.export {
        match export(&analyzer) {
            Some(path) => println!("\nReport written to {}", path.display()),
            None => return ExitCode::FAILURE,
        }
    }

    ExitCode::SUCCESS
}
