//! Compare command

use crate::commands::StoreArgs;
use chrono::Utc;
use clap::Args;
use evrank_core::errors::{ExError, ExErrorKind};
use evrank_core::report::render_console_summary;
use evrank_engine::{apply_engine_command, EngineCommand, EngineCommandResult};

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Maximum number of alerts printed in the summary
    #[arg(long)]
    pub alert_limit: Option<usize>,
}

pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = args.store.load_config()?;
    if let Some(limit) = args.alert_limit {
        config.console.alert_limit = limit;
    }

    let cmd = EngineCommand::Compare {
        paths: config.paths.clone(),
        thresholds: config.thresholds,
    };
    let result = match apply_engine_command(cmd, Utc::now())? {
        EngineCommandResult::Compare(r) => r,
        EngineCommandResult::Archive(_) => {
            return Err(ExError::new(ExErrorKind::Internal)
                .with_op("compare")
                .with_message("engine returned an archive result for a compare command")
                .into())
        }
    };

    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("EV Rankings Delta Calculator");
    println!("{}", rule);
    print!(
        "{}",
        render_console_summary(&result.report, config.console.alert_limit)
    );
    println!();
    println!("Delta saved to: {}", result.location);
    println!("{}", rule);

    Ok(())
}
