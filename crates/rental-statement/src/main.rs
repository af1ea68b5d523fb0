use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use rental_statement::{logging, resolve_formatter, RentalSheet, StatementConfig};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "rental-statement")]
#[command(about = "Compute a customer's rental bill and print the statement")]
struct Args {
    #[arg(short, long, help = "Path to the TOML rental sheet")]
    sheet: Option<PathBuf>,

    #[arg(short, long, help = "Output format: string, html or json")]
    format: Option<String>,

    #[arg(short, long, help = "Path to configuration file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Generate sample configuration file")]
    gen_config: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.gen_config {
        println!("{}", StatementConfig::generate_example()?);
        return Ok(());
    }

    let config = StatementConfig::load(args.config.as_deref())?;
    logging::init_logging(&args.verbosity, &config.logging.default_filter)?;

    let sheet_path = args
        .sheet
        .context("a rental sheet is required (--sheet <PATH>)")?;

    // Resolve first so an unsupported format fails before any output.
    let identifier = args
        .format
        .unwrap_or_else(|| config.output.default_format.clone());
    let formatter = resolve_formatter(&identifier)?;

    let customer = RentalSheet::from_path(&sheet_path)?.into_customer()?;
    info!(
        customer = customer.name(),
        rentals = customer.items().len(),
        format = formatter.format_id(),
        "Rendering statement"
    );

    let snapshot = customer.compute_snapshot();
    debug!(total_amount = %snapshot.total_amount(), "Snapshot ready");

    print!("{}", formatter.render(&snapshot)?);
    Ok(())
}
