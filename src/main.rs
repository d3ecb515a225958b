//! Carver's main application entry point and orchestration logic.
//! Handles command-line argument parsing, template parsing flow,
//! and materialization of the resolved plan.

use std::fs;
use std::path::PathBuf;

use carver::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    labels::Labels,
    logger::init_logger,
    materializer::materialize,
    parser::parse,
    plan::Plan,
};
use dialoguer::Confirm;
use indexmap::IndexMap;

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Collects the label set from the command line.
///
/// When a project name is given, the `name` and `module_name` labels are
/// derived from it unless explicitly provided, so templates can name the
/// module directory after the project.
fn collect_labels(args: &Args) -> IndexMap<String, String> {
    let mut labels: IndexMap<String, String> = args.labels.iter().cloned().collect();

    if let Some(name) = &args.name {
        labels.entry("name".to_string()).or_insert_with(|| name.clone());
        labels
            .entry("module_name".to_string())
            .or_insert_with(|| cruet::to_snake_case(name));
    }

    labels
}

/// Ensures the target directory under the output root is safe to create.
///
/// An existing target is replaced under `--force` or after an interactive
/// confirmation; a declined confirmation surfaces the path conflict.
fn prepare_target(args: &Args, root_name: &str) -> Result<PathBuf> {
    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir).map_err(Error::IoError)?;
    }

    let target = args.output_dir.join(root_name);
    if target.exists() {
        let replace = args.force
            || Confirm::new()
                .with_prompt(format!(
                    "Directory '{}' already exists. Replace it?",
                    target.display()
                ))
                .default(false)
                .interact()
                .map_err(|e| Error::PromptError(e.to_string()))?;

        if !replace {
            return Err(Error::PathConflictError { path: target.display().to_string() });
        }
        fs::remove_dir_all(&target).map_err(Error::IoError)?;
    }

    Ok(target)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects labels and parses the root template into a plan
/// 2. On --dry-run, prints the plan listing and stops
/// 3. Prepares the output directory (confirm-or-force replace)
/// 4. Materializes the plan
fn run(args: Args) -> Result<()> {
    let labels = Labels::new(collect_labels(&args))?;

    let root = parse(&args.template, args.name.as_deref(), &labels)?;
    let plan = Plan::Directory(root);

    if args.dry_run {
        print!("{}", plan);
        return Ok(());
    }

    let target = prepare_target(&args, plan.name())?;

    materialize(&plan, &args.output_dir)?;

    println!("Project skeleton created successfully in {}.", target.display());
    Ok(())
}
