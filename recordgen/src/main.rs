use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use recordgen_codegen::Generator;
use recordgen_schema::{Diagnostic, Severity, lower, parse_source};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Input read when no path is given and the file exists.
const DEFAULT_INPUT: &str = "input.txt";

const PROMPT: &str = "Enter input C# record type: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// C# classes
    Csharp,
    /// Lowered type descriptors as JSON
    Descriptors,
}

#[derive(Debug, Parser)]
#[command(name = "recordgen", version, about)]
struct Opt {
    /// Input file (defaults to input.txt, then an interactive prompt)
    input: Option<PathBuf>,
    /// Output file (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// What to emit
    #[arg(long, value_enum, default_value = "csharp")]
    emit: Emit,
    /// Do not emit the using header
    #[arg(long)]
    no_usings: bool,
    /// Warning id suppressed around each class
    #[arg(long, default_value = "IDE0003")]
    suppress: String,
    /// Do not annotate nullable parameters with `?`
    #[arg(long)]
    no_nullable: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let opt = Opt::parse();
    match run(&opt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error!");
            eprintln!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(opt: &Opt) -> Result<()> {
    let generator = Generator::builder()
        .emit_usings(!opt.no_usings)
        .suppressed_warning(&opt.suppress)
        .nullable_annotations(!opt.no_nullable)
        .build()?;

    let source = read_input(opt.input.as_deref())?;

    tracing::info!("Parsing code...");
    let file = parse_source(&source).context("Failed to parse input")?;

    tracing::info!("Transforming...");
    let lowered = lower(&file);
    for diagnostic in &lowered.diagnostics {
        report(diagnostic);
    }

    let text = match opt.emit {
        Emit::Csharp => generator.generate_lowered(lowered).code,
        Emit::Descriptors => {
            let mut json = serde_json::to_string_pretty(&lowered.descriptors)
                .context("Failed to serialize descriptors")?;
            json.push('\n');
            json
        }
    };

    write_output(opt.output.as_deref(), &text)
}

/// Reads the source text from `path`, the default input file or the prompt.
fn read_input(path: Option<&Path>) -> Result<String> {
    read_input_from(path, Path::new(DEFAULT_INPUT), &mut io::stdin().lock(), &mut io::stdout())
}

fn read_input_from(
    path: Option<&Path>,
    default: &Path,
    prompt_in: &mut impl BufRead,
    prompt_out: &mut impl Write,
) -> Result<String> {
    if let Some(path) = path {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read `{}`.", path.display()));
    }
    if default.exists() {
        tracing::debug!("Reading {}", default.display());
        return std::fs::read_to_string(default)
            .with_context(|| format!("Failed to read `{}`.", default.display()));
    }

    write!(prompt_out, "{PROMPT}")?;
    prompt_out.flush()?;
    let mut line = String::new();
    prompt_in
        .read_line(&mut line)
        .context("Failed to read from the prompt")?;
    Ok(line)
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write `{}`.", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn report(diagnostic: &Diagnostic) {
    match diagnostic.severity {
        Severity::Error => tracing::error!("{}", diagnostic.message),
        Severity::Warning => tracing::warn!("{}", diagnostic.message),
        Severity::Info => tracing::info!("{}", diagnostic.message),
    }
}
