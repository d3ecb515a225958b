//! Command-line interface implementation for Carver.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for Carver.
#[derive(Parser, Debug)]
#[command(author, version, about = "Carver: declarative project skeleton generator", long_about = None)]
pub struct Args {
    /// Path to the root template file (YAML or JSON)
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Directory under which the project skeleton will be created
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Name for the generated project root.
    /// Defaults to the template's base name without extension.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Label substitution applied to entry names, as KEY=VALUE.
    /// May be given multiple times.
    #[arg(short, long = "label", value_name = "KEY=VALUE", value_parser = parse_label)]
    pub labels: Vec<(String, String)>,

    /// Print the resolved plan without creating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Replace the target directory if it already exists,
    /// without asking for confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_label(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
