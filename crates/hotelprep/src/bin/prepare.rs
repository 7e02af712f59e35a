//! Booking data preparation CLI tool.
//!
//! Reads a raw hotel booking CSV, runs the preparation pipeline and writes
//! the train, validation and holdout partitions plus the fitted statistics.
//!
//! Usage: `cargo run --bin prepare --features cli -- INPUT.csv OUTPUT_DIR [OPTIONS]`
//! Example: `cargo run --bin prepare --features cli -- hotel_bookings.csv out --scale robust`

use std::{
    env,
    fs::{self, File},
    path::{Path, PathBuf},
};

use hotelprep::{
    math::ScaleMethod,
    pipeline::{Pipeline, PipelineConfig, PreparedData, RunMode, Smote},
};
use polars::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: prepare INPUT.csv OUTPUT_DIR [--config FILE] [--scale METHOD] [--mode MODE] [--oversample]

Options:
  --config FILE     TOML pipeline configuration
  --scale METHOD    standard | minmax | robust (default: minmax)
  --mode MODE       fit_on_train | reference (default: fit_on_train)
  --oversample      also write SMOTE-oversampled training rows";

/// Placeholders for missing values in the raw export.
const NULL_MARKERS: &[&str] = &["NA", "NULL", ""];

/// Parsed command line.
#[derive(Debug)]
struct Args {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    scale: Option<ScaleMethod>,
    mode: Option<RunMode>,
    oversample: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut config = None;
    let mut scale = None;
    let mut mode = None;
    let mut oversample = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| iter.next().cloned().ok_or(format!("{flag} needs a value"));
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--scale" => scale = Some(value("--scale")?.parse().map_err(|e| format!("{e}"))?),
            "--mode" => mode = Some(value("--mode")?.parse().map_err(|e| format!("{e}"))?),
            "--oversample" => oversample = true,
            "-h" | "--help" => return Err(String::new()),
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            path => positional.push(PathBuf::from(path)),
        }
    }

    match <[PathBuf; 2]>::try_from(positional) {
        Ok([input, output]) => Ok(Args { input, output, config, scale, mode, oversample }),
        Err(_) => Err("expected INPUT.csv and OUTPUT_DIR".to_string()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let raw_args: Vec<String> = env::args().collect();
    let args = match parse_args(&raw_args) {
        Ok(args) => args,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("Error: {msg}\n");
            }
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(scale) = args.scale {
        config.scale = scale;
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }

    let raw = read_csv(&args.input)?;
    info!(path = %args.input.display(), rows = raw.height(), "read raw bookings");

    let pipeline = Pipeline::new(config);
    let prepared = pipeline.run(raw)?;
    let oversampled =
        if args.oversample { Some(prepared.oversample_train(&Smote::default())?) } else { None };

    // Nothing is written unless every stage succeeded.
    write_outputs(&args.output, prepared, oversampled)?;
    println!("Wrote prepared partitions to {}", args.output.display());
    Ok(())
}

fn read_csv(path: &Path) -> PolarsResult<DataFrame> {
    let nulls = NULL_MARKERS.iter().map(|&m| m.into()).collect();
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(10_000))
        .with_parse_options(
            CsvParseOptions::default().with_null_values(Some(NullValues::AllColumns(nulls))),
        )
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
}

fn write_csv(path: &Path, df: &mut DataFrame) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    info!(path = %path.display(), rows = df.height(), columns = df.width(), "wrote partition");
    Ok(())
}

fn write_outputs(
    dir: &Path,
    prepared: PreparedData,
    oversampled: Option<DataFrame>,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;

    let PreparedData { mut train, mut validation, mut holdout, fitted } = prepared;
    write_csv(&dir.join("train.csv"), &mut train)?;
    write_csv(&dir.join("validation.csv"), &mut validation)?;
    write_csv(&dir.join("holdout.csv"), &mut holdout)?;
    if let Some(mut df) = oversampled {
        write_csv(&dir.join("train_oversampled.csv"), &mut df)?;
    }
    fitted.save(&dir.join("fitted_state.json"))?;

    println!("\n{:<12} {:>8} {:>8}", "Partition", "Rows", "Columns");
    println!("{}", "-".repeat(30));
    for (name, df) in [("train", &train), ("validation", &validation), ("holdout", &holdout)] {
        println!("{:<12} {:>8} {:>8}", name, df.height(), df.width());
    }
    println!();
    Ok(())
}
