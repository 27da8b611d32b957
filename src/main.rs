use clap::Parser;
use invoice_preflight::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(true) => process::exit(0),
        Ok(false) => {
            // Validation ran cleanly but the file failed its checks
            process::exit(2);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Invoice Preflight - CSV Upload Validator");
    println!("========================================");
    println!();
    println!("Validate tabular invoice files before they enter a data-import");
    println!("pipeline: row counts, duplicate invoice/position keys, date-age");
    println!("checks and compact dataset signatures.");
    println!();
    println!("USAGE:");
    println!("    invoice-preflight <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    validate     Run the full validation over one file (main command)");
    println!("    signature    Compute just the dataset signature for one file");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Validate an upload with defaults (Date/Quantity/Invoice columns):");
    println!("    invoice-preflight validate upload.csv");
    println!();
    println!("    # Gated validation with custom columns and a 3-month age limit:");
    println!("    invoice-preflight validate upload.csv --strict \\");
    println!("                      --date-column Posting_Date --max-months-age 3");
    println!();
    println!("    # Compare two uploads by signature:");
    println!("    invoice-preflight signature upload.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    invoice-preflight <COMMAND> --help");
}
