use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use quizstruct::export::{read_json, to_json_string, Exporter, JsonExporter};

use quizstruct::extract::ExtractMode;
use quizstruct::migrate::migrate_file;
use quizstruct::parser::{is_pdf, open_source, PageRange, PdfReader};
use quizstruct::pipeline::{build_quiz, export_quiz, PipelineConfig, QualityReport};
use quizstruct::sample::{parse_responses, sample, score, SampleOptions};
use quizstruct::{try_extract_records, Record};

#[derive(Parser, Debug)]
#[command(name = "quizstruct")]
#[command(version, about = "Extract multiple-choice quiz questions from PDF text into JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract questions from a PDF (or a text file of extracted lines)
    Extract {
        /// Input PDF or text file
        input: PathBuf,

        /// Output JSON file (default: input path with a .json extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on the first malformed question instead of skipping it
        #[arg(long)]
        strict: bool,

        /// First page to read (1-based, PDF input only)
        #[arg(long)]
        first_page: Option<usize>,

        /// Last page to read (1-based, inclusive, PDF input only)
        #[arg(long)]
        last_page: Option<usize>,

        /// Only print warnings and errors
        #[arg(short, long)]
        quiet: bool,
    },

    /// Convert a scalar-answer question file to the list-answer layout
    Migrate {
        /// Legacy JSON file
        src: PathBuf,

        /// Destination JSON file
        dst: PathBuf,
    },

    /// Show page count and extraction statistics for an input
    Info {
        /// Input PDF or text file
        input: PathBuf,
    },

    /// Build a practice quiz from an extracted question file
    Sample {
        /// Extracted questions (JSON)
        input: PathBuf,

        /// Output JSON file (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// First question number to draw from (1-based)
        #[arg(long)]
        from: Option<usize>,

        /// Last question number to draw from (1-based, inclusive)
        #[arg(long)]
        to: Option<usize>,

        /// Draw this many questions at random instead of the whole range
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Shuffle the choices of every question
        #[arg(long)]
        shuffle_choices: bool,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score answers given to a quiz file
    Score {
        /// Quiz questions (JSON)
        quiz: PathBuf,

        /// Answer letters in question order, '-' for unanswered (e.g. "ABD-C")
        responses: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let quiet = matches!(cli.command, Commands::Extract { quiet: true, .. });
    init_tracing(quiet)?;

    match cli.command {
        Commands::Extract {
            input,
            output,
            strict,
            first_page,
            last_page,
            quiet,
        } => extract(
            input,
            output,
            strict,
            PageRange::new(first_page, last_page),
            quiet,
        ),
        Commands::Migrate { src, dst } => migrate(src, dst),
        Commands::Info { input } => show_info(input),
        Commands::Sample {
            input,
            output,
            from,
            to,
            count,
            shuffle_choices,
            seed,
        } => sample_quiz(
            input,
            output,
            SampleOptions {
                from,
                to,
                count,
                shuffle_choices,
            },
            seed,
        ),
        Commands::Score { quiz, responses } => score_quiz(quiz, &responses),
    }
}

fn init_tracing(quiet: bool) -> Result<()> {
    let default_level = if quiet { "quizstruct=warn" } else { "quizstruct=info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn check_input(input: &Path) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    if !input.is_file() {
        anyhow::bail!("Input is not a file: {}", input.display());
    }
    Ok(())
}

fn extract(
    input: PathBuf,
    output: Option<PathBuf>,
    strict: bool,
    pages: PageRange,
    quiet: bool,
) -> Result<()> {
    check_input(&input)?;

    let output = output.unwrap_or_else(|| input.with_extension("json"));
    let mode = if strict {
        ExtractMode::Strict
    } else {
        ExtractMode::Lenient
    };

    if !quiet {
        println!("[*] Processing: {}", input.display());
        println!("[*] Output: {}", output.display());
        println!("[*] Mode: {:?}", mode);
    }

    let config = PipelineConfig::new(input.clone(), output.clone())
        .with_mode(mode)
        .with_pages(pages);

    let records = build_quiz(&config)
        .with_context(|| format!("Failed to extract questions from: {}", input.display()))?;

    if !quiet {
        println!("[+] Found {} question(s)", records.len());
    }

    export_quiz(&records, &config.output)
        .with_context(|| format!("Failed to export to: {}", output.display()))?;

    if !quiet {
        println!("\n[✓] Done! Results saved to: {}", output.display());
    }

    Ok(())
}

fn migrate(src: PathBuf, dst: PathBuf) -> Result<()> {
    check_input(&src)?;

    let count = migrate_file(&src, &dst)
        .with_context(|| format!("Failed to migrate: {}", src.display()))?;

    println!(
        "Converted {} items from {} to {}",
        count,
        src.display(),
        dst.display()
    );
    Ok(())
}

fn show_info(input: PathBuf) -> Result<()> {
    check_input(&input)?;

    println!("Quiz Information");
    println!("================");
    println!("File: {}", input.display());

    if is_pdf(&input) {
        let reader = PdfReader::new(input.clone())
            .with_context(|| format!("Failed to open PDF: {}", input.display()))?;
        println!("Pages: {}", reader.page_count()?);
    }

    let lines = open_source(&input, PageRange::default())?.lines()?;
    let records = try_extract_records(&lines, ExtractMode::Lenient)?;
    let report = QualityReport::from_records(&records);

    println!("Lines: {}", lines.len());
    println!("Questions: {}", report.records);
    println!("Out-of-range answers: {}", report.out_of_range);
    println!("Empty questions: {}", report.empty_questions);

    if let Err(err) = try_extract_records(&lines, ExtractMode::Strict) {
        println!("First strict-mode problem: {err}");
    }

    Ok(())
}

fn sample_quiz(
    input: PathBuf,
    output: Option<PathBuf>,
    options: SampleOptions,
    seed: Option<u64>,
) -> Result<()> {
    check_input(&input)?;

    let records: Vec<Record> = read_json(&input)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let picked = sample(&records, &options, &mut rng);

    match output {
        Some(path) => {
            JsonExporter::new(path.clone())
                .export(&picked)
                .with_context(|| format!("Failed to export to: {}", path.display()))?;
            println!("[✓] {} question(s) saved to: {}", picked.len(), path.display());
        }
        None => println!("{}", to_json_string(&picked)?),
    }
    Ok(())
}

fn score_quiz(quiz: PathBuf, responses: &str) -> Result<()> {
    check_input(&quiz)?;

    let records: Vec<Record> = read_json(&quiz)?;
    let responses = parse_responses(responses).context("Invalid responses")?;
    if responses.len() != records.len() {
        tracing::warn!(
            "{} response(s) for {} question(s)",
            responses.len(),
            records.len()
        );
    }

    let result = score(&records, &responses);
    println!("Score: {}/{}", result.correct, result.total);
    if !result.missed.is_empty() {
        let missed = result
            .missed
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("Missed: {missed}");
    }
    Ok(())
}
