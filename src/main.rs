mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, FlattenArgs};
use tfplan::{TfplanError, load_document_from_path, output, parse_plan_with_diagnostics};

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Flatten(args) => flatten(args)?,
        Command::Summary(args) => {
            let doc = load_document_from_path(&args.path)?;
            let parsed = parse_plan_with_diagnostics(&doc)?;
            println!("{}", output::render_summary(&parsed.model));
        }
        Command::Tree(args) => {
            let doc = load_document_from_path(&args.path)?;
            println!("{}", output::render_tree(&doc)?);
        }
    }

    Ok(())
}

fn flatten(args: FlattenArgs) -> Result<()> {
    let doc = load_document_from_path(&args.plan.path)?;
    let parsed = parse_plan_with_diagnostics(&doc)?;

    for skipped in &parsed.skipped {
        tracing::warn!(
            module = %skipped.module,
            index = ?skipped.index,
            reason = %skipped.reason,
            "skipped plan entry"
        );
    }

    tracing::info!(
        terraform_version = parsed.info.terraform_version.as_deref().unwrap_or("unknown"),
        resources = parsed.model.len(),
        types = parsed.model.types().count(),
        skipped = parsed.skipped.len(),
        "plan flattened"
    );

    if args.strict && !parsed.skipped.is_empty() {
        return Err(TfplanError::SkippedEntries {
            count: parsed.skipped.len(),
        }
        .into());
    }

    println!("{}", output::render_json(&parsed.model, !args.compact)?);
    Ok(())
}
