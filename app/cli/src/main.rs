//! FILENAME: app/cli/src/main.rs
//! formfill: find the fields of a spreadsheet form and fill them in.

mod logging;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use detector::{detect_fields, DetectionError, DetectorConfig};
use engine::Sheet;
use filler::{run, FillResult, FormError, StaticValueSource, ValueSourceError};
use persistence::{load_xlsx, load_xlsx_sheet, write_into_template, PersistenceError};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FORM_ERROR: u8 = 1;
pub const EXIT_VALUE_SOURCE_ERROR: u8 = 2;
pub const EXIT_IO_ERROR: u8 = 3;

#[derive(Parser)]
#[command(name = "formfill")]
#[command(about = "Detect and fill form fields in XLSX worksheets")]
#[command(version)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Also write log lines to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the form fields found in a worksheet
    #[command(after_help = "\
Examples:
  formfill detect solicitud.xlsx
  formfill detect solicitud.xlsx --json | jq '.[].label'")]
    Detect {
        /// Input workbook
        input: PathBuf,

        /// Worksheet to read (defaults to the first one)
        #[arg(long)]
        sheet: Option<String>,

        /// Detector settings as JSON; missing keys keep their defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the fields as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Fill the detected fields with values from a JSON object
    #[command(after_help = "\
Examples:
  formfill fill solicitud.xlsx --data valores.json
  formfill fill solicitud.xlsx --data valores.json -o lista.xlsx")]
    Fill {
        /// Input workbook
        input: PathBuf,

        /// JSON object mapping labels to values
        #[arg(long, short = 'd')]
        data: PathBuf,

        /// Output workbook (defaults to <input stem>_output.xlsx)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Worksheet to read (defaults to the first one)
        #[arg(long)]
        sheet: Option<String>,

        /// Detector settings as JSON; missing keys keep their defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("error: cannot open log file: {}", e);
        return ExitCode::from(EXIT_IO_ERROR);
    }

    let result = match cli.command {
        Commands::Detect {
            input,
            sheet,
            config,
            json,
        } => cmd_detect(&input, sheet.as_deref(), config.as_deref(), json),
        Commands::Fill {
            input,
            data,
            output,
            sheet,
            config,
        } => cmd_fill(&input, &data, output, sheet.as_deref(), config.as_deref()),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Maps the first typed error found in the chain to an exit code.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(form) = cause.downcast_ref::<FormError>() {
            return match form {
                FormError::Detection(_) => EXIT_FORM_ERROR,
                FormError::ValueSource(_) => EXIT_VALUE_SOURCE_ERROR,
            };
        }
        if cause.is::<DetectionError>() {
            return EXIT_FORM_ERROR;
        }
        if cause.is::<ValueSourceError>() {
            return EXIT_VALUE_SOURCE_ERROR;
        }
        if cause.is::<PersistenceError>()
            || cause.is::<std::io::Error>()
            || cause.is::<serde_json::Error>()
        {
            return EXIT_IO_ERROR;
        }
    }
    EXIT_FORM_ERROR
}

// ============================================================================
// detect
// ============================================================================

fn cmd_detect(
    input: &Path,
    sheet_name: Option<&str>,
    config: Option<&Path>,
    json: bool,
) -> Result<u8> {
    let config = load_config(config)?;
    let sheet = load_sheet(input, sheet_name)?;
    let detection = detect_fields(&sheet, &config)
        .with_context(|| format!("detecting fields in {}", input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(detection.fields())?);
        return Ok(EXIT_SUCCESS);
    }

    if detection.is_empty() {
        println!("No form fields detected in {:?}", sheet.name);
        return Ok(EXIT_SUCCESS);
    }

    println!("{} fields in {:?}:", detection.len(), sheet.name);
    for field in detection.fields() {
        let kind = if field.is_merged() { "merged" } else { "cell" };
        println!(
            "  {:<30} {:>5} -> {} ({})",
            field.label, field.label_cell, field.target, kind
        );
    }
    Ok(EXIT_SUCCESS)
}

// ============================================================================
// fill
// ============================================================================

fn cmd_fill(
    input: &Path,
    data: &Path,
    output: Option<PathBuf>,
    sheet_name: Option<&str>,
    config: Option<&Path>,
) -> Result<u8> {
    let config = load_config(config)?;
    let mut sheet = load_sheet(input, sheet_name)?;

    let raw = fs::read_to_string(data)
        .map_err(|e| ValueSourceError::Unavailable(format!("{}: {}", data.display(), e)))?;
    let source = StaticValueSource::from_json_str(&raw)
        .with_context(|| format!("reading values from {}", data.display()))?;

    let report = run(&mut sheet, &config, &source)?;

    if report.detection.is_empty() {
        println!("No form fields detected in {:?}; nothing written", sheet.name);
        return Ok(EXIT_SUCCESS);
    }

    let output = output.unwrap_or_else(|| default_output_path(input));
    write_into_template(input, &sheet, &report.fill.written, &output)
        .with_context(|| format!("saving {}", output.display()))?;

    print_summary(&report.fill, &output);
    if report.fill.success() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FORM_ERROR)
    }
}

fn print_summary(result: &FillResult, output: &Path) {
    println!(
        "Filled {} fields, skipped {} -> {}",
        result.filled_count,
        result.skipped_count,
        output.display()
    );
    for message in &result.errors {
        eprintln!("  {}", message);
    }
}

/// `dir/form.xlsx` -> `dir/form_output.xlsx`
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "form".to_string());
    input.with_file_name(format!("{}_output.xlsx", stem))
}

// ============================================================================
// helpers
// ============================================================================

fn load_sheet(input: &Path, sheet_name: Option<&str>) -> Result<Sheet> {
    let sheet = match sheet_name {
        Some(name) => load_xlsx_sheet(input, name),
        None => load_xlsx(input),
    };
    sheet.with_context(|| format!("loading {}", input.display()))
}

fn load_config(path: Option<&Path>) -> Result<DetectorConfig> {
    let Some(path) = path else {
        return Ok(DetectorConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
