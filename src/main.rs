use std::path::PathBuf;
use std::process;

//Error handling crate
use anyhow::Result;

//Command line parsing
use clap::error::ErrorKind;
use clap::Parser;

use libIntegrationScan::{analyze_file, load_options, AnalysisMode, AnalyzeError, Options};

#[derive(Parser, Debug)]
#[command(
    name = "analyze",
    about = "Per-track summaries of cdfIntegrate output",
    after_help = "<INPUT_FILE> must be the name of an output file created by cdfIntegrate"
)]
struct Cli {
    /// Output file created by cdfIntegrate.
    input_file: PathBuf,
    /// TOML configuration file with an [options] table.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Report to generate; overrides the configuration file.
    #[arg(long, value_enum)]
    mode: Option<AnalysisMode>,
    /// Output file prefix; defaults to the input file name.
    #[arg(long)]
    name: Option<String>,
    /// Report and skip malformed records instead of stopping.
    #[arg(long)]
    skip_malformed: bool,
    /// Also write <name>summary.output with per-track totals.
    #[arg(long)]
    summary: bool,
    /// Show a progress bar while reading the input.
    #[arg(long)]
    progress: bool,
}

impl Cli {
    /// Configuration file values, overridden by any flags given.
    fn options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(config_file) => load_options(config_file)?,
            None => Options::default(),
        };
        if let Some(mode) = self.mode {
            options.mode = mode;
        }
        if let Some(name) = &self.name {
            options.name = Some(name.clone());
        }
        options.skip_malformed |= self.skip_malformed;
        options.write_summary |= self.summary;
        options.progress |= self.progress;
        Ok(options)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options()?;
    let summary = analyze_file(&cli.input_file, &options)?;

    println!("Lines: {} Records: {} Skipped: {} Tracks: {}", summary.lines_read, summary.records,
        summary.skipped, summary.tracks);
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
            _ => {
                let usage = AnalyzeError::Usage(error.render().to_string());
                eprint!("{}", usage);
                process::exit(usage.exit_code());
            },
        },
    };

    if let Err(error) = run(&cli) {
        eprintln!("{:#}", error);
        let exit_code = error.downcast_ref::<AnalyzeError>().map_or(1, AnalyzeError::exit_code);
        process::exit(exit_code);
    }
}
