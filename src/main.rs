use anyhow::Context;
use clap::Parser;
use ferret::cli::{self, Cli, Invocation};
use ferret::config::{self, RunConfig};
use ferret::pipeline::{ExecutionContext, Orchestrator};
use ferret::{logging, plugins};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    // Keep the guard alive so file logs are flushed on exit
    let _guard = logging::init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = plugins::catalog();

    if cli.list_plugins {
        for line in cli::describe_catalog(&catalog) {
            println!("{line}");
        }
        return Ok(());
    }

    let run_config = RunConfig::discover(cli.config.as_deref()).context("Failed to load run configuration")?;
    let Invocation { registry, mut flags } = cli::resolve(&cli, run_config, &catalog)?;
    config::apply_env_defaults(&mut flags);
    info!("Loaded plugins: {}", registry.names().collect::<Vec<_>>().join(", "));

    let orchestrator = Orchestrator::new(registry);

    if cli.dry_run {
        for stage in orchestrator.plan()? {
            println!("{stage}");
        }
        return Ok(());
    }

    orchestrator
        .run(ExecutionContext::new(flags))
        .await
        .context("Pipeline run failed")?;
    Ok(())
}
