use clap::Parser;
use solver::{Environment, RunOutcome, RuntimeConfig, Solver, TokioSleeper};
use tokio_util::sync::CancellationToken;

/// Requests a webhook token and submits the final query with it.
#[derive(Debug, Parser)]
#[command(name = "webhook-solver", version)]
struct Args {
    /// Configuration property, e.g. -Dgenerate.url=https://... or -Dfinal.query=42
    #[arg(short = 'D', long = "property", value_name = "KEY=VALUE", value_parser = parse_property)]
    properties: Vec<(String, String)>,
}

fn parse_property(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = RuntimeConfig::resolve(&Environment::from_process(args.properties));

    let solver = match Solver::new(config) {
        Ok(solver) => solver,
        Err(e) => {
            log::error!("Failed to initialize HTTP clients: {}", e);
            std::process::exit(1);
        }
    };

    // Single Ctrl-C listener for the whole run; the token reaches the backoff sleeps too.
    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    let sleeper = TokioSleeper::new(cancel.clone());
    match solver.run_until_cancelled(&sleeper, &cancel).await {
        Ok(RunOutcome::DryRun) => log::info!("Dry run complete"),
        Ok(RunOutcome::Submitted { status }) => {
            log::info!("Submission finished with status {}", status)
        }
        Err(e) => {
            let code = e.exit_code();
            log::error!("{}. Exiting with code {}.", e, code);
            std::process::exit(code);
        }
    }
}
