use std::{fs::File, io, process::ExitCode};

use anki_package::{
    config::{Cli, ExportConfigBuilder},
    logging, DeckError, DeckResult, ExportContext, RunReport,
};
use clap::Parser;
use gag::Redirect;
use tracing::info;

fn generate(cli: &Cli) -> DeckResult<String> {
    info!("Starting Anki deck generation");
    let mut config = ExportConfigBuilder::default();
    if let Some(description) = &cli.deck_description {
        config.deck_description(description.as_str());
    }
    let ctx = ExportContext::from_builder(&config)?;

    // genanki prints its field warnings to stdout; keep them off the result stream
    let _quiet = Redirect::stdout(io::stderr())
        .map_err(|e| DeckError::Environment(format!("cannot redirect stdout: {e}")))?;
    match &cli.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                DeckError::Environment(format!("cannot open {}: {e}", path.display()))
            })?;
            anki_package::run(file, &ctx)
        }
        None => anki_package::run(io::stdin().lock(), &ctx),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = logging::init(cli.effective_log_level()).and_then(|()| generate(&cli));

    let report = RunReport::from_result(result);
    println!("{}", report.to_json());
    ExitCode::from(report.exit_code())
}
