//! Batch processing command for multiple reports.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::{debug, error, warn};

use vscan_core::DocumentReport;

use super::process::{self, FilterArgs, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory (default: all reports to stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    #[command(flatten)]
    filter: FilterArgs,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    report: Option<DocumentReport>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = process::load_config(config_path)?;
    let extractor = Arc::new(process::build_extractor(&config, args.filter.strategy)?);

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // One blocking task per document; the semaphore bounds concurrency.
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut handles = Vec::with_capacity(files.len());

    for path in files {
        let permit = semaphore.clone().acquire_owned().await?;
        let extractor = Arc::clone(&extractor);
        let progress = progress.clone();

        handles.push(tokio::task::spawn_blocking(move || {
            let file_start = Instant::now();
            let result = process::process_file(&path, &extractor);
            progress.inc(1);
            drop(permit);
            (path, result, file_start.elapsed().as_millis() as u64)
        }));
    }

    // Awaiting in spawn order keeps results in input order.
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let (path, result, processing_time_ms) = handle.await?;

        match result {
            Ok(mut report) => {
                args.filter.apply(&mut report);
                results.push(ProcessResult {
                    path,
                    report: Some(report),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        report: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }
    }

    progress.finish_and_clear();

    let today = args.filter.today();
    let successful: Vec<_> = results.iter().filter(|r| r.report.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    match &args.output_dir {
        Some(output_dir) => {
            for result in &successful {
                if let Some(report) = &result.report {
                    let output_name = result
                        .path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("report");
                    let output_path =
                        output_dir.join(format!("{}.{}", output_name, args.format.extension()));

                    let content =
                        process::format_reports(std::slice::from_ref(report), args.format, today)?;
                    fs::write(&output_path, content)?;
                    debug!("Wrote output to {}", output_path.display());
                }
            }
        }
        None => {
            let reports: Vec<DocumentReport> =
                successful.iter().filter_map(|r| r.report.clone()).collect();
            print!("{}", process::format_reports(&reports, args.format, today)?);
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "strategy",
        "line_count",
        "item_count",
        "next_due",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(report) = &result.report {
            let next_due = report
                .items
                .iter()
                .map(|i| i.due_date())
                .min()
                .map(|d| d.to_string())
                .unwrap_or_default();

            wtr.write_record([
                filename,
                "success",
                report.strategy.as_str(),
                &report.line_count.to_string(),
                &report.items.len().to_string(),
                &next_due,
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
