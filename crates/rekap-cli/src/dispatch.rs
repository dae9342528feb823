use rekap_core::commands::recap::{self, CheckOptions, RecapRunOptions};
use rekap_core::{RecapResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> RecapResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Run {
            daily,
            db,
            out_dir,
            no_export,
            json: _,
        } => recap::run_with_options(RecapRunOptions {
            daily_path: daily.clone(),
            db_path: db.clone(),
            out_dir: out_dir.clone(),
            export: !no_export,
        }),
        Commands::Check { daily, db, json: _ } => recap::check_with_options(CheckOptions {
            daily_path: daily.clone(),
            db_path: db.clone(),
        }),
    }
}
