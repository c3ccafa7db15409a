//! Basketball records CLI
//!
//! Builds the per-game team record table and season standings from a
//! directory of results files.

use clap::{Parser, Subcommand};
use hoops::{Config, Result};

#[derive(Parser)]
#[command(name = "hoops")]
#[command(about = "Per-game team records and season standings from box scores", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the team-game table, write it, and show the top of the standings
    Build {
        /// Directory containing results files
        #[arg(long)]
        input: Option<String>,
        /// Output CSV path
        #[arg(long)]
        output: Option<String>,
        /// Number of standings rows to show
        #[arg(long)]
        top: Option<usize>,
    },
    /// Show full-season standings only
    Standings {
        /// Directory containing results files
        #[arg(long)]
        input: Option<String>,
        /// Number of standings rows to show
        #[arg(long)]
        top: Option<usize>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Write a default config file
    Init,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use table, json, or csv.", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    let result = match cli.command {
        Commands::Build { input, output, top } => commands::build(&config, input, output, top),
        Commands::Standings { input, top, format } => {
            commands::standings(&config, input, top, format)
        }
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use hoops::data::{self, CsvDirectorySource, GameSource};
    use hoops::pipeline::{self, standings::top as top_rows, PipelineOutput};
    use hoops::StandingRow;
    use std::time::Instant;

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);
        std::fs::create_dir_all(&config.data.input_dir)?;
        println!("Created {}/ for results files", config.data.input_dir);
        Ok(())
    }

    fn load_and_run(config: &Config, input: Option<String>) -> Result<PipelineOutput> {
        let dir = input.unwrap_or_else(|| config.data.input_dir.clone());
        let source = CsvDirectorySource::new(&dir, &config.data.pattern);
        log::info!("Loading results from {}", source.describe());
        let table = source.load()?;
        pipeline::run(&table, config)
    }

    pub fn build(
        config: &Config,
        input: Option<String>,
        output: Option<String>,
        top: Option<usize>,
    ) -> Result<()> {
        let started = Instant::now();
        let result = load_and_run(config, input)?;

        let output = output.unwrap_or_else(|| config.data.output_path.clone());
        data::write_team_games_file(&output, &result.team_games)?;
        println!(
            "Wrote {} team-game rows for {} games to {}",
            result.team_games.len(),
            result.games.len(),
            output
        );

        let n = top.unwrap_or(config.season.top_n);
        print_table(top_rows(&result.standings, n), config.season.length);

        println!("Completed in {:.2} seconds.", started.elapsed().as_secs_f64());
        Ok(())
    }

    pub fn standings(
        config: &Config,
        input: Option<String>,
        top: Option<usize>,
        format: OutputFormat,
    ) -> Result<()> {
        let result = load_and_run(config, input)?;
        let n = top.unwrap_or(config.season.top_n);
        let rows = top_rows(&result.standings, n);

        match format {
            OutputFormat::Table => print_table(rows, config.season.length),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
            OutputFormat::Csv => data::write_standings(std::io::stdout().lock(), rows)?,
        }
        Ok(())
    }

    fn print_table(rows: &[StandingRow], season_length: u32) {
        if rows.is_empty() {
            println!("No team has played a full {}-game season.", season_length);
            return;
        }

        println!();
        println!("{:>3}  {:<28} {:>4} {:>4} {:>6}", "#", "Team", "W", "L", "PCT");
        println!("──────────────────────────────────────────────────");
        for (i, s) in rows.iter().enumerate() {
            println!(
                "{:>3}  {:<28} {:>4} {:>4} {:>6.3}",
                i + 1,
                s.team,
                s.wins,
                s.losses,
                s.pct
            );
        }
        println!();
    }
}
