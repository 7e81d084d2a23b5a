//! mdocx CLI - contract Markdown to Word conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdocx::parser;
use mdocx::{
    default_output_path, Batch, BatchJob, BatchOutcome, ConvertOptions, LineClassifier,
    OutputFormat,
};

#[derive(Parser)]
#[command(name = "mdocx")]
#[command(version)]
#[command(about = "Convert contract-style Markdown to Word documents", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (next to the input if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Font family for every run
    #[arg(long, env = "MDOCX_FONT", global = true)]
    font: Option<String>,

    /// Normalize the source to Unicode NFC before conversion
    #[arg(long, global = true)]
    normalize: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert Markdown files into an output directory
    Convert {
        /// Input Markdown files, converted in order
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "word")]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "docx")]
        format: FormatArg,

        /// Only report missing inputs, convert nothing
        #[arg(long)]
        check: bool,
    },

    /// Show how each line is classified
    Inspect {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Preview the document as plain text
    Text {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Word document
    Docx,
    /// JSON dump of the document model
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Docx => OutputFormat::Docx,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut options = ConvertOptions::new().with_normalization(cli.normalize);
    if let Some(font) = cli.font {
        options = options.with_font(font);
    }

    let result = match cli.command {
        Some(Commands::Convert {
            inputs,
            output,
            format,
            check,
        }) => {
            let options = options.with_format(format.into());
            if check {
                cmd_check(&inputs, &output, &options)
            } else {
                cmd_convert(&inputs, &output, &options)
            }
        }
        Some(Commands::Inspect { input, json }) => cmd_inspect(&input, json, &options),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref(), &options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_single(&input, cli.output.as_deref(), options)
            } else {
                println!("{}", "Usage: mdocx <FILE> [OUTPUT]".yellow());
                println!("       mdocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_single(
    input: &Path,
    output: Option<&Path>,
    options: ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let dir = input.parent().unwrap_or_else(|| Path::new(""));
            default_output_path(input, dir, OutputFormat::Docx)
        }
    };
    let format = OutputFormat::from_path(&output).unwrap_or_default();
    let options = options.with_format(format);

    let report = mdocx::convert_file(input, &output, &options)?;
    println!(
        "{} {} ({} blocks)",
        "Saved to".green(),
        report.output.display(),
        report.stats.block_count
    );

    Ok(())
}

fn cmd_convert(
    inputs: &[PathBuf],
    output_dir: &Path,
    options: &ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let jobs: Vec<BatchJob> = inputs
        .iter()
        .map(|input| BatchJob::into_dir(input.as_path(), output_dir, options.output_format))
        .collect();
    log::debug!("converting {} files into {}", jobs.len(), output_dir.display());

    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let batch = Batch::new(options.clone());
    let report = batch.run_with(&jobs, |outcome| {
        pb.set_message(outcome.input().display().to_string());
        let line = match outcome {
            BatchOutcome::Converted(report) => format!(
                "{} {} {} {}",
                "✓".green(),
                report.input.display(),
                "->".dimmed(),
                report.output.display()
            ),
            BatchOutcome::Missing(input) => {
                format!("{} {} (not found)", "-".yellow(), input.display())
            }
            BatchOutcome::Failed { input, error } => {
                format!("{} {}: {}", "✗".red(), input.display(), error)
            }
        };
        pb.println(line);
        pb.inc(1);
    });
    pb.finish_and_clear();

    let converted = report.converted().count();
    let missing = report.missing().count();
    let failed = report.failed().count();

    println!(
        "\n{} {} converted, {} missing, {} failed",
        "Done!".green().bold(),
        converted,
        missing,
        failed
    );

    if report.is_success() {
        Ok(())
    } else {
        Err(format!("{} of {} files not converted", missing + failed, jobs.len()).into())
    }
}

fn cmd_check(
    inputs: &[PathBuf],
    output_dir: &Path,
    options: &ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let jobs: Vec<BatchJob> = inputs
        .iter()
        .map(|input| BatchJob::into_dir(input.as_path(), output_dir, options.output_format))
        .collect();

    let missing = Batch::new(options.clone()).preflight(&jobs);
    for job in &jobs {
        if missing.contains(&job) {
            println!("{} {} (not found)", "-".yellow(), job.input.display());
        } else {
            println!(
                "{} {} {} {}",
                "✓".green(),
                job.input.display(),
                "->".dimmed(),
                job.output.display()
            );
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("{} of {} files not found", missing.len(), jobs.len()).into())
    }
}

fn cmd_inspect(
    input: &Path,
    json: bool,
    options: &ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = parser::read_source(input)?;
    let conversion = mdocx::convert_str(&source, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion.stats)?);
        return Ok(());
    }

    let text = if options.normalize_unicode {
        parser::normalize(&source)
    } else {
        source
    };

    println!("{}", "Line Classification".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let classifier = LineClassifier::new();
    for line in parser::lines(&text) {
        let (rule, classification) = classifier.classify_traced(line.text);
        println!(
            "{:>4} {:<10} {}",
            line.number.to_string().dimmed(),
            rule.bold(),
            classification.text().unwrap_or_default()
        );
    }

    let stats = &conversion.stats;
    println!();
    println!("{}", "Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if let Some(ref title) = conversion.document.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Checkboxes".bold(), stats.checkbox_count);
    println!("{}: {}", "Fields".bold(), stats.field_count);
    println!("{}: {}", "Table rows dropped".bold(), stats.table_rows_dropped);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = parser::read_source(input)?;
    let conversion = mdocx::convert_str(&source, options)?;
    let text = mdocx::to_text(&conversion.document);

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Contract Markdown to Word converter");
    println!();
    println!("Default font: {}", mdocx::render::DEFAULT_FONT_FAMILY);
    println!("License: MIT");
}
