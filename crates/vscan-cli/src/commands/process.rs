//! Process command - extract due items from a single report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use tracing::{debug, info};

use vscan_core::{
    DocumentReport, FixedPolicy, LineSequence, PageTextSource, PdfReader, Strategy,
    SurveyExtractor, VscanConfig,
};

use super::config::default_config_path;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or extracted text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Options shared by `process` and `batch`.
#[derive(Args, Clone)]
pub struct FilterArgs {
    /// Use this strategy instead of filename routing
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Keep only items due within this many days
    #[arg(short = 'w', long)]
    pub within_days: Option<i64>,

    /// Reference date for days remaining (default: today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

impl FilterArgs {
    /// Reference date for days remaining.
    pub fn today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Apply the day window, if one was requested.
    pub fn apply(&self, report: &mut DocumentReport) {
        if let Some(days) = self.within_days {
            report.retain_within(self.today(), days);
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let extractor = build_extractor(&config, args.filter.strategy)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let mut report = process_file(&args.input, &extractor)?;
    args.filter.apply(&mut report);

    let output = format_reports(std::slice::from_ref(&report), args.format, args.filter.today())?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load the config from `config_path`, else the default location, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<VscanConfig> {
    if let Some(path) = config_path {
        return Ok(VscanConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        Ok(VscanConfig::from_file(&default_path)?)
    } else {
        Ok(VscanConfig::default())
    }
}

/// Build an extractor, pinning the strategy when one was given.
pub fn build_extractor(
    config: &VscanConfig,
    strategy: Option<Strategy>,
) -> anyhow::Result<SurveyExtractor> {
    let extractor = SurveyExtractor::new(config)?;
    Ok(match strategy {
        Some(strategy) => extractor.with_policy(FixedPolicy(strategy)),
        None => extractor,
    })
}

/// Read a report and extract its due items.
///
/// PDFs are read page by page; any other extension is treated as text.
pub fn process_file(path: &Path, extractor: &SurveyExtractor) -> anyhow::Result<DocumentReport> {
    let document_id = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string();

    let lines = read_lines(path)?;
    if lines.is_empty() {
        debug!("No text found in {}", path.display());
    }

    Ok(extractor.extract_report(&document_id, &lines))
}

fn read_lines(path: &Path) -> anyhow::Result<LineSequence> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => {
            let reader = PdfReader::open(path)?;
            debug!("PDF has {} pages", reader.page_count());
            Ok(reader.line_sequence())
        }
        _ => {
            let bytes = fs::read(path)?;
            Ok(LineSequence::from_text(&String::from_utf8_lossy(&bytes)))
        }
    }
}

/// Render reports, grouped per document, in the requested format.
pub fn format_reports(
    reports: &[DocumentReport],
    format: OutputFormat,
    today: NaiveDate,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let json = if reports.len() == 1 {
                serde_json::to_string_pretty(&reports[0])?
            } else {
                serde_json::to_string_pretty(reports)?
            };
            Ok(format!("{}\n", json))
        }
        OutputFormat::Csv => format_reports_csv(reports, today),
        OutputFormat::Text => Ok(format_reports_text(reports, today)),
    }
}

fn format_reports_csv(reports: &[DocumentReport], today: NaiveDate) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "document",
        "strategy",
        "name",
        "due_date",
        "days_remaining",
        "range",
    ])?;

    for report in reports {
        for item in &report.items {
            wtr.write_record([
                report.document_id.as_str(),
                report.strategy.as_str(),
                item.name(),
                &item.due_date().to_string(),
                &item.days_remaining(today).to_string(),
                item.range_annotation().unwrap_or(""),
            ])?;
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_reports_text(reports: &[DocumentReport], today: NaiveDate) -> String {
    let mut output = String::new();

    for report in reports {
        output.push_str(&format!(
            "{} ({}, {} lines)\n",
            report.document_id, report.strategy, report.line_count
        ));

        if report.items.is_empty() {
            output.push_str("  No due items found\n");
        }

        for item in &report.items {
            output.push_str(&format!(
                "  {}  {:>5}d  {}",
                item.due_date(),
                item.days_remaining(today),
                item.name()
            ));
            if let Some(range) = item.range_annotation() {
                output.push_str(&format!("  [{}]", range));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use vscan_core::DueItem;

    fn report() -> DocumentReport {
        DocumentReport {
            document_id: "OCEAN_ABS.pdf".to_string(),
            strategy: Strategy::PairWise,
            line_count: 3,
            items: vec![
                DueItem::new("Class Annual Survey", NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
                DueItem::new("Special Survey", NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
                    .with_range("01-Mar-2026 ~ 01-Sep-2026"),
            ],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 22).unwrap()
    }

    #[test]
    fn test_format_text() {
        let text = format_reports(&[report()], OutputFormat::Text, today()).unwrap();
        assert!(text.starts_with("OCEAN_ABS.pdf (pair_wise, 3 lines)\n"));
        assert!(text.contains("2026-01-01     10d  Class Annual Survey\n"));
        assert!(text.contains("Special Survey  [01-Mar-2026 ~ 01-Sep-2026]"));
    }

    #[test]
    fn test_format_csv() {
        let csv = format_reports(&[report()], OutputFormat::Csv, today()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "document,strategy,name,due_date,days_remaining,range");
        assert_eq!(lines[1], "OCEAN_ABS.pdf,pair_wise,Class Annual Survey,2026-01-01,10,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_window_filter() {
        let filter = FilterArgs {
            strategy: None,
            within_days: Some(30),
            as_of: Some(today()),
        };
        let mut report = report();
        filter.apply(&mut report);
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].name(), "Class Annual Survey");
    }
}
