use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use validator_openapi_core::{
    convert, ConvertOptions, Converter, Direction, SchemaOrRef, Validator,
};

#[derive(Parser)]
#[command(name = "validator-openapi")]
#[command(about = "Convert validator definitions into OpenAPI 3.1 schemas")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Args)]
struct SchemaArgs {
    /// Input validator definition (JSON)
    input: PathBuf,

    /// Output schema file (defaults to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output component schemas file
    #[arg(long)]
    components: Option<PathBuf>,

    /// Max nesting depth of the validator tree
    #[arg(long, default_value_t = 50)]
    max_depth: usize,

    /// Prefix for component `$ref` pointers
    #[arg(long, default_value = "#/components/schemas/")]
    ref_prefix: String,

    /// Suffix for output variants of direction-dependent components
    #[arg(long, default_value = "Output")]
    output_id_suffix: String,

    /// Suffix for input variants of direction-dependent components
    #[arg(long, default_value = "Input")]
    input_id_suffix: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

impl SchemaArgs {
    fn options(&self, direction: Direction) -> ConvertOptions {
        ConvertOptions {
            direction,
            max_depth: self.max_depth,
            component_ref_prefix: self.ref_prefix.clone(),
            output_id_suffix: self.output_id_suffix.clone(),
            input_id_suffix: self.input_id_suffix.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a validator to the schema for one direction
    Convert {
        #[command(flatten)]
        args: SchemaArgs,

        /// Which side of transforms to render
        #[arg(short, long, value_enum, default_value_t = DirectionArg::Output)]
        direction: DirectionArg,
    },

    /// Convert a validator for both directions with shared components
    Both {
        #[command(flatten)]
        args: SchemaArgs,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum DirectionArg {
    Input,
    Output,
}

impl From<DirectionArg> for Direction {
    fn from(val: DirectionArg) -> Self {
        match val {
            DirectionArg::Input => Direction::Input,
            DirectionArg::Output => Direction::Output,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

/// Schemas for both sides of one validator.
#[derive(Serialize)]
struct BothSchemas {
    input: SchemaOrRef,
    output: SchemaOrRef,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert { args, direction } => {
            let validator = read_validator(&args.input)?;
            let options = args.options(direction.into());

            let result = convert(&validator, &options)
                .map_err(|e| anyhow::Error::from(e).context("Conversion failed"))?;

            write_json(&result.schema, args.output.as_ref(), args.format)?;
            write_components(&result.components, args.components.as_ref(), args.format)?;
        }
        Commands::Both { args } => {
            let validator = read_validator(&args.input)?;
            let options = args.options(Direction::Input);
            let mut converter = Converter::new(&options);

            let input = converter
                .create_schema(&validator, Direction::Input)
                .map_err(|e| anyhow::Error::from(e).context("Input conversion failed"))?;
            let output = converter
                .create_schema(&validator, Direction::Output)
                .map_err(|e| anyhow::Error::from(e).context("Output conversion failed"))?;

            let schemas = BothSchemas {
                input: input.schema,
                output: output.schema,
            };
            write_json(&schemas, args.output.as_ref(), args.format)?;
            write_components(&converter.components(), args.components.as_ref(), args.format)?;
        }
    }

    Ok(())
}

fn read_validator(input: &Path) -> Result<Validator> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse validator from: {}", input.display()))
}

fn write_components(
    components: &BTreeMap<String, SchemaOrRef>,
    path: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    match path {
        Some(path) => write_json(components, Some(path), format),
        None => {
            if !components.is_empty() {
                eprintln!(
                    "Warning: {} component schema(s) referenced but no --components file specified.",
                    components.len()
                );
            }
            Ok(())
        }
    }
}

fn write_json<T: Serialize>(val: &T, path: Option<&PathBuf>, format: OutputFormat) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut writer, val).context("Failed to write JSON")?;
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut writer, val).context("Failed to write JSON")?;
        }
    }

    // Ensure trailing newline
    writeln!(writer).context("Failed to write trailing newline")?;

    Ok(())
}
