//! Print the OpenAPI document as JSON.

use accounts::doc::ApiDoc;
use clap::Parser;
use color_eyre::eyre::Result;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the accounts OpenAPI document")]
struct Cli {
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let json = if cli.pretty {
        doc.to_pretty_json()?
    } else {
        doc.to_json()?
    };
    println!("{json}");
    Ok(())
}
