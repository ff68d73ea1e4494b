use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use balance_cli::config::{paths::BalancePaths, settings::Settings};
use balance_cli::display::format_balance_sheet;
use balance_cli::export::export_balance_csv;
use balance_cli::models::BalanceInput;
use balance_cli::pipeline::generate_balance_sheet;
use balance_cli::storage::{read_json_required, write_json_atomic};

#[derive(Parser)]
#[command(
    name = "balance",
    version,
    about = "Command-line monthly balance sheet generator",
    long_about = "balance-cli reads a JSON file of dated revenue and expense \
                  entries and produces a chronological balance sheet: one net \
                  amount per calendar month, with quiet months reported as zero."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a balance sheet from an input file
    #[command(alias = "gen")]
    Generate {
        /// Path to the input JSON file ({"revenueData": [...], "expenseData": [...]})
        file: PathBuf,

        /// Write the balance sheet JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export the balance sheet to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Print a terminal summary table instead of JSON
        #[arg(short, long)]
        summary: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BalancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Generate {
            file,
            output,
            csv,
            pretty,
            summary,
        }) => {
            handle_generate(&settings, file, output, csv, pretty, summary)?;
        }
        Some(Commands::Config) => {
            println!("balance-cli Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Pretty output:   {}", settings.pretty_output);
        }
        None => {
            println!("balance-cli - Monthly balance sheet generator");
            println!();
            println!("Run 'balance --help' for usage information.");
            println!("Run 'balance generate <input.json>' to generate a balance sheet.");
        }
    }

    Ok(())
}

/// Handle the generate command: read, run the pipeline, present
fn handle_generate(
    settings: &Settings,
    file: PathBuf,
    output: Option<PathBuf>,
    csv: Option<PathBuf>,
    pretty: bool,
    summary: bool,
) -> Result<()> {
    // A read or parse failure stops here; the pipeline never sees partial data
    let input: BalanceInput = read_json_required(&file)?;

    let sheet = generate_balance_sheet(input);

    let pretty = pretty || settings.pretty_output;

    if let Some(csv_path) = &csv {
        let csv_file = File::create(csv_path)?;
        let mut writer = BufWriter::new(csv_file);
        export_balance_csv(&sheet, &mut writer)?;
        writer.flush()?;
        eprintln!("CSV written to {}", csv_path.display());
    }

    if let Some(output_path) = &output {
        write_json_atomic(output_path, &sheet, pretty)?;
        eprintln!("Balance sheet written to {}", output_path.display());
    }

    if summary {
        print!(
            "{}",
            format_balance_sheet(&sheet, &settings.currency_symbol)
        );
    } else if output.is_none() {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if pretty {
            serde_json::to_writer_pretty(&mut handle, &sheet)?;
        } else {
            serde_json::to_writer(&mut handle, &sheet)?;
        }
        writeln!(handle)?;
    }

    Ok(())
}
