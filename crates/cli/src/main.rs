use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use inflow_cli::{DraftDocument, QuoteReport};
use inflow_invoicing::DraftDefaults;

/// Compute invoice totals for a draft and report whether it can be submitted.
#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"), version)]
struct Cli {
    /// Draft JSON document; read from stdin when omitted.
    path: Option<PathBuf>,

    /// Print a JSON report instead of the totals block.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    inflow_observability::init();
    let cli = Cli::parse();

    let raw = match &cli.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read draft from stdin")?;
            buf
        }
    };

    let document: DraftDocument =
        serde_json::from_str(&raw).context("draft is not a valid JSON document")?;
    let today = chrono::Utc::now().date_naive();
    let draft = document.into_draft(&DraftDefaults::from_env(), today)?;
    tracing::debug!(items = draft.items().len(), "draft loaded");

    let report = QuoteReport::for_draft(&draft);
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}
