use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use course_digest::block::{self, CourseBlock};
use course_digest::pipeline::{self, BatchStats};
use course_digest::report::{self, CourseRow};
use course_digest::settings::Settings;
use course_digest::tables::Tables;

#[derive(Parser)]
#[command(name = "course_digest", about = "Summarise common core course listings for spreadsheet display")]
struct Cli {
    /// Subject area → school table (JSON object)
    #[arg(long, global = true)]
    schools: Option<PathBuf>,
    /// Common core display order (JSON array)
    #[arg(long, global = true)]
    core_order: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract and format course blocks, write the rows as JSON
    Run {
        /// Course blocks (JSON array), already sorted by title
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, default_value = "courses.json")]
        output: PathBuf,
    },
    /// Formatted courses as a table
    Overview {
        #[arg(short, long)]
        input: PathBuf,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
        /// Only show courses with errors
        #[arg(long)]
        failed: bool,
    },
    /// Show the lookup tables in effect
    Tables,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?.with_overrides(cli.schools.as_deref(), cli.core_order.as_deref());
    let tables = Tables::load(&settings.school_table, &settings.core_order);

    match cli.command {
        Commands::Run { input, output } => {
            let blocks = read_blocks(&input)?;
            if blocks.is_empty() {
                println!("No course blocks in {}.", input.display());
                return Ok(());
            }
            info!(courses = blocks.len(), input = %input.display(), "processing");
            let rows = process_with_progress(&tables, &blocks)?;
            report::write_json(&output, &rows)?;

            let stats = BatchStats::of(&rows);
            stats.log();
            stats.print();
            for row in rows.iter().filter(|r| !r.ok) {
                for e in &row.errors {
                    println!("  {}", e);
                }
            }
            println!("Wrote {}", output.display());
        }
        Commands::Overview { input, limit, failed } => {
            let blocks = read_blocks(&input)?;
            let rows = pipeline::process_batch(&tables, &blocks);
            let shown: Vec<&CourseRow> = rows.iter().filter(|r| !failed || !r.ok).collect();
            if shown.is_empty() {
                println!("No courses to show.");
                return Ok(());
            }
            report::print_overview(&shown, limit);
        }
        Commands::Tables => {
            println!("Schools ({}):", settings.school_table.display());
            for (subject, school) in tables.schools.entries() {
                println!("  {:<6} {}", subject, school);
            }
            println!("\nCommon core order ({}):", settings.core_order.display());
            for (i, tag) in tables.core_order.tags().iter().enumerate() {
                println!("  {:>2} {}", i, tag);
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn read_blocks(path: &Path) -> anyhow::Result<Vec<CourseBlock>> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    block::from_json(&json).with_context(|| format!("parsing course blocks in {}", path.display()))
}

fn process_with_progress(tables: &Tables, blocks: &[CourseBlock]) -> anyhow::Result<Vec<CourseRow>> {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(blocks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut rows = Vec::with_capacity(blocks.len());
    for chunk in blocks.chunks(200) {
        rows.extend(pipeline::process_batch(tables, chunk));
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    Ok(rows)
}
