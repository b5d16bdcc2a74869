//! cc2olx - Common Cartridge to OLX converter

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cc2olx::{Cartridge, JsonCartridge, OlxConfig, OlxExporter};

#[derive(Parser)]
#[command(name = "cc2olx")]
#[command(version, about = "Common Cartridge to OLX converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    cc2olx course.json                 Print OLX to stdout
    cc2olx course.json -o course.xml   Write OLX to a file
    cc2olx -v course.json -o out.xml   Log each mapped element")]
struct Cli {
    /// Normalized cartridge (JSON)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Course run written to the `course` attribute
    #[arg(long, value_name = "ID")]
    course_run: Option<String>,

    /// Log debug output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match convert(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn convert(cli: &Cli) -> cc2olx::Result<()> {
    let cartridge = JsonCartridge::open(&cli.input)?;

    let mut config = OlxConfig::default();
    if let Some(ref course_run) = cli.course_run {
        config = config.with_course_run(course_run);
    }
    let exporter = OlxExporter::new().with_config(config);

    // Build before opening the output so a failed conversion leaves no file.
    let document = exporter.build(&cartridge)?;
    let (indent_char, indent_size) = (exporter.config().indent_char, exporter.config().indent_size);

    match cli.output {
        Some(ref path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            document.write_to(&mut writer, indent_char, indent_size)?;
            writer.flush()?;
            if !cli.quiet {
                eprintln!("Converted {} -> {}", cartridge.title(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            document.write_to(&mut writer, indent_char, indent_size)?;
            writer.flush()?;
        }
    }

    Ok(())
}
