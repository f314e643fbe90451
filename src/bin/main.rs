use chandas_core::config::ChandasConfig;
use chandas_core::input::{clean_recognized_text, read_file, read_stdin};
use chandas_core::persistence::save_report;
use chandas_core::render::PatternRenderer;
use chandas_core::{samples, ChandasEngine, ChandasError, Result, WeightPattern};
use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};
use std::io::{stdin, stdout, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

/// Identify the meter (chandas) of a Sanskrit verse.
#[derive(Parser, Debug)]
#[command(name = "chandas_engine", version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Verse text. Reads stdin when omitted and no other source is given.
    text: Option<String>,

    /// Read the verse from a file
    #[arg(short, long, conflicts_with_all = ["text", "sample", "pattern"])]
    file: Option<PathBuf>,

    /// Analyze a built-in sample (gayatri, ramayana, gita, vedic, vowels)
    #[arg(short, long, conflicts_with_all = ["text", "pattern"])]
    sample: Option<String>,

    /// Classify a literal L/G weight pattern
    #[arg(short, long, conflicts_with = "text")]
    pattern: Option<String>,

    /// Interactive mode: a blank line analyzes the lines typed so far
    #[arg(short, long)]
    interactive: bool,

    /// Clean up text that came from a character recogniser before analysis
    #[arg(long)]
    ocr_cleanup: bool,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Save the analysis (.json for JSON, anything else for binary)
    #[arg(long)]
    save: Option<PathBuf>,

    /// JSON display configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    no_color: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let level = match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("[ERROR] {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = ChandasConfig::load_or_default(args.config.as_deref());
    if args.no_color || !stdout().is_terminal() {
        config.display.color = false;
    }
    let renderer = PatternRenderer::new(config.display.clone());
    let engine = ChandasEngine::new();

    if let Some(symbols) = &args.pattern {
        let pattern = WeightPattern::parse(symbols)?;
        let result = engine.classify_pattern(&pattern)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", renderer.render_result(&result));
        }
        return Ok(());
    }

    if args.interactive {
        return interactive(&engine, &renderer, &args);
    }

    let text = if let Some(path) = &args.file {
        read_file(path)?
    } else if let Some(key) = &args.sample {
        let sample = samples::lookup(key)?;
        info!("Using sample '{}'", sample.title);
        sample.text.to_string()
    } else if let Some(text) = &args.text {
        text.clone()
    } else {
        read_stdin()?
    };

    analyze_and_print(&engine, &renderer, &args, &text)
}

fn analyze_and_print(engine: &ChandasEngine, renderer: &PatternRenderer, args: &Args, text: &str) -> Result<()> {
    let text = if args.ocr_cleanup {
        clean_recognized_text(text)
    } else {
        text.to_string()
    };

    let analysis = engine.analyze(&text)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", renderer.render_analysis(&analysis));
        println!("\nSuccessfully analyzed {} syllables.", analysis.syllable_count());
    }

    if let Some(path) = &args.save {
        save_report(&analysis, path)?;
        info!("Report saved to '{}'", path.display());
    }
    Ok(())
}

fn interactive(engine: &ChandasEngine, renderer: &PatternRenderer, args: &Args) -> Result<()> {
    println!("Chandas Analyzer. Enter verse lines; a blank line analyzes, 'exit' quits.");
    println!("---------------------------------------------------------------");

    let mut verse = String::new();
    let mut lines = stdin().lock().lines();
    loop {
        print!("> ");
        stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        match line.trim() {
            "exit" => break,
            "" => {
                if verse.trim().is_empty() {
                    continue;
                }
                match analyze_and_print(engine, renderer, args, &verse) {
                    Ok(()) => {}
                    Err(ChandasError::NoAnalyzableText) => {
                        println!("Unable to analyze the text. Please check if it contains valid Sanskrit characters.");
                    }
                    Err(e) => return Err(e),
                }
                verse.clear();
                println!();
            }
            _ => {
                verse.push_str(&line);
                verse.push('\n');
            }
        }
    }
    Ok(())
}
