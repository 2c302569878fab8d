use anyhow::Result;
use clap::Parser;
use colored::*;

use business_logic::logging;
use business_logic::{Config, OverflowPolicy};

#[derive(Parser)]
#[command(name = "double")]
#[command(author = "Business Logic Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Double integer values", long_about = None)]
struct Cli {
    #[arg(
        required = true,
        allow_negative_numbers = true,
        help = "Integer values to double"
    )]
    values: Vec<i32>,

    #[arg(
        short,
        long,
        value_name = "POLICY",
        help = "Overflow policy: wrap, saturate or checked [env: BUSINESS_LOGIC_OVERFLOW]"
    )]
    overflow: Option<OverflowPolicy>,

    #[arg(short, long, help = "Print one JSON object per value")]
    json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;
    logging::log_system_info();

    let config = Config::resolve(cli.overflow, cli.verbose, cli.json)?;
    run(&config, &cli.values)
}

fn run(config: &Config, values: &[i32]) -> Result<()> {
    let logic = config.business_logic();

    for &value in values {
        let result = logic.describe(value)?;
        if config.json {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            println!(
                "{} × 2 = {}",
                result.initial_value,
                result.doubled_value.to_string().green().bold()
            );
        }
    }

    if config.verbose {
        eprintln!(
            "{} Doubled {} value(s) with {} overflow",
            "ℹ".blue(),
            values.len(),
            config.policy.to_string().cyan()
        );
    }

    Ok(())
}
