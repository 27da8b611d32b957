//! Command implementations for the preflight CLI
//!
//! Each command lives in its own module:
//! - `validate`: full validation run with human/JSON/CSV reports
//! - `signature`: dataset signature only
//! - `shared`: logging setup and input reading

pub mod shared;
pub mod signature;
pub mod validate;

use crate::cli::args::{Args, Commands};
use crate::error::Result;

/// Dispatch to the appropriate subcommand handler.
///
/// Returns whether the overall outcome should be treated as success: a
/// validation run that finds errors is a clean run with a negative
/// answer, surfaced through the exit code rather than as a fault.
pub fn run(args: Args) -> Result<bool> {
    match args.get_command() {
        Commands::Validate(validate_args) => {
            let result = validate::run_validate(validate_args)?;
            Ok(result.is_valid)
        }
        Commands::Signature(signature_args) => {
            signature::run_signature(signature_args)?;
            Ok(true)
        }
    }
}
