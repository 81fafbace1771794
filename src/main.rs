use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use durus::content::{extract_quizzes, generate_outline, load_document, search_document};
use durus::export::export_document;
use durus::{ExportFormat, GameKind, ProgressStore};

#[derive(Parser)]
#[command(
    name = "durus",
    version,
    about = "Lesson viewer and quiz toolkit for CMS-driven course content"
)]
struct Cli {
    /// Lesson JSON file exported from the content API
    file: Option<PathBuf>,

    /// Print the quizzes embedded in the lesson
    #[arg(short, long)]
    quizzes: bool,

    /// Print the lesson outline
    #[arg(short, long)]
    outline: bool,

    /// Search the lesson text
    #[arg(short, long)]
    search: Option<String>,

    /// Export the lesson instead of viewing it
    #[arg(short, long, value_enum)]
    export: Option<ExportFormat>,

    /// Show stored best scores for the mini-games
    #[arg(long)]
    scores: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.scores {
        return print_scores();
    }

    let Some(file) = cli.file else {
        bail!("no lesson file given (or use --scores to see game progress)");
    };

    let document = load_document(&file)?;

    if let Some(format) = cli.export {
        print!("{}", export_document(&document, &format)?);
        return Ok(());
    }

    if let Some(query) = cli.search {
        for result in search_document(&document, &query) {
            println!("{:>4}: {}", result.line_index + 1, result.text);
        }
        return Ok(());
    }

    if cli.outline {
        for item in generate_outline(&document) {
            let indent = "  ".repeat(item.level.saturating_sub(1) as usize);
            println!("{indent}{} (line {})", item.title, item.line_index + 1);
        }
        return Ok(());
    }

    if cli.quizzes {
        for (i, quiz) in extract_quizzes(&document.lines).iter().enumerate() {
            println!("{}. [{}] {}", i + 1, quiz.category.code(), quiz.question);
            for choice in &quiz.choices {
                println!("   - {choice}");
            }
            if !quiz.answer.is_empty() {
                println!("   = {}", quiz.answer);
            }
        }
        return Ok(());
    }

    println!("{}", document.title);
    println!();
    for line in &document.lines {
        println!("{line}");
    }

    Ok(())
}

fn print_scores() -> Result<()> {
    let store = ProgressStore::load()?;
    for kind in GameKind::all() {
        match store.get(kind.id()) {
            Some(progress) => println!(
                "{:<14} {:<20} best {:>3}, {} plays",
                kind.id(),
                kind.title(),
                progress.best_score,
                progress.plays
            ),
            None => println!("{:<14} {:<20} not played yet", kind.id(), kind.title()),
        }
    }
    Ok(())
}
