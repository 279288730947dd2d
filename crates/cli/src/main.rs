//! prodsynth CLI
//!
//! Generates synthetic product catalogs used as fixture data for semantic
//! search experiments

mod config;
mod progress;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use prodsynth_core::{
    DatasetGenerator, DatasetStats, GeneratorConfig, ProductRecord, Schema, DEFAULT_QUANTITY,
    DEFAULT_SEED,
};
use prodsynth_formats::{read_dataset, read_dataset_as, write_dataset, DatasetFormat};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use progress::ProgressReporter;

const DEFAULT_OUTPUT: &str = "data/products_synthetic.json";

#[derive(Parser)]
#[command(name = "prodsynth")]
#[command(version, about = "Generate synthetic product catalogs for semantic search testing", long_about = None)]
#[command(author = "prodsynth")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output statistics in JSON format
    #[arg(long, global = true)]
    json: bool,
}

/// Options for the default generate action
#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of products to generate
    #[arg(value_name = "QUANTITY", default_value_t = DEFAULT_QUANTITY)]
    quantity: usize,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Output format (defaults to the output file extension)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Master seed for all random draws
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Record fields to generate
    #[arg(long, value_enum, default_value_t = SchemaArg::Metrics)]
    schema: SchemaArg,

    /// Generator tables file (YAML or TOML) replacing the built-in catalog
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show records and statistics of a generated dataset
    Inspect {
        /// Path to the dataset file (JSON or JSONL)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Number of records to show
        #[arg(short = 'n', long, default_value = "5")]
        limit: usize,

        /// Dataset format (defaults to the file extension)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Write the built-in generator tables to a file for editing
    InitConfig {
        /// Destination file (.yaml, .yml or .toml)
        #[arg(value_name = "FILE")]
        output: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Jsonl,
}

impl From<FormatArg> for DatasetFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => DatasetFormat::Json,
            FormatArg::Jsonl => DatasetFormat::Jsonl,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SchemaArg {
    /// title, description, category, popularity, quality, ctr
    Metrics,
    /// title, description, category
    Basic,
}

impl From<SchemaArg> for Schema {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Metrics => Schema::Metrics,
            SchemaArg::Basic => Schema::Basic,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(!cli.json) // Disable colors if JSON output
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None => {
            generate_dataset(cli.generate, cli.json)?;
        }
        Some(Commands::Inspect {
            input,
            limit,
            format,
        }) => {
            inspect_dataset(&input, limit, format.map(Into::into), cli.json)?;
        }
        Some(Commands::InitConfig { output }) => {
            init_config(&output)?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
    }

    Ok(())
}

fn generate_dataset(args: GenerateArgs, json_output: bool) -> Result<()> {
    let format = match args.format {
        Some(format) => format.into(),
        None => DatasetFormat::from_path(&args.output)
            .with_context(|| format!("Cannot infer format of {}; pass --format", args.output.display()))?,
    };

    let config = match &args.config {
        Some(path) => config::load_generator_config(path)?,
        None => GeneratorConfig::builtin()?,
    };

    info!("Generating dataset with {} products", args.quantity);
    info!("  Output: {:?} ({})", args.output, format);
    info!("  Schema: {:?}", args.schema);
    info!("  Seed: {}", args.seed);
    if let Some(path) = &args.config {
        info!("  Config: {:?}", path);
    }

    let generator = DatasetGenerator::new(config)?
        .with_schema(args.schema.into())
        .with_seed(args.seed);

    let progress = ProgressReporter::new(args.quantity as u64, json_output);
    let records: Vec<ProductRecord> = generator
        .stream()
        .take(args.quantity)
        .inspect(|_| progress.inc())
        .collect();
    progress.finish();

    let bytes = write_dataset(&args.output, format, &records)
        .with_context(|| format!("Failed to write dataset: {}", args.output.display()))?;

    let stats = DatasetStats::from_records(&records);

    if json_output {
        let report = generation_report(&args.output, format, &generator, bytes, &stats);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        progress::print_summary_report("Dataset Generation Complete", &args.output, Some(bytes), &stats);
        progress::print_loader_hint(&args.output);
    }

    Ok(())
}

/// JSON document printed on stdout by `--json` after generation
fn generation_report(
    output: &Path,
    format: DatasetFormat,
    generator: &DatasetGenerator,
    bytes: u64,
    stats: &DatasetStats,
) -> serde_json::Value {
    serde_json::json!({
        "output": output.to_string_lossy().to_string(),
        "format": format,
        "schema": generator.schema(),
        "seed": generator.seed(),
        "bytes": bytes,
        "stats": stats,
    })
}

fn inspect_dataset(
    input: &Path,
    limit: usize,
    format: Option<DatasetFormat>,
    json_output: bool,
) -> Result<()> {
    info!("Inspecting dataset: {:?}", input);

    let records: Vec<ProductRecord> = match format {
        Some(format) => read_dataset_as(input, format),
        None => read_dataset(input),
    }
    .with_context(|| format!("Failed to read dataset: {}", input.display()))?;

    let stats = DatasetStats::from_records(&records);

    if json_output {
        let report = serde_json::json!({
            "input": input.to_string_lossy().to_string(),
            "records": &records[..limit.min(records.len())],
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (i, record) in records.iter().take(limit).enumerate() {
        println!("Record #{}: {}", i, serde_json::to_string_pretty(record)?);
    }

    let bytes = std::fs::metadata(input).ok().map(|m| m.len());
    progress::print_summary_report("Dataset Summary", input, bytes, &stats);

    Ok(())
}

fn init_config(output: &Path) -> Result<()> {
    let config = GeneratorConfig::builtin()?;
    config::save_generator_config(&config, output)?;

    info!(
        "Wrote generator tables ({} base products) to {:?}",
        config.catalog.len(),
        output
    );
    println!("Edit {} and pass it with --config", output.display());

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
