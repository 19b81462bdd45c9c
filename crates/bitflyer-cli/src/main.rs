/*
[INPUT]:  CLI arguments, YAML configuration file, BITFLYER_* environment
[OUTPUT]: Pretty-printed JSON response on stdout, logs on stderr
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bitflyer_cli::{CliConfig, Command, execute};

#[derive(Parser, Debug)]
#[command(name = "bitflyer", version, about = "bitFlyer Lightning REST API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    if let Command::Init { output } = &args.command {
        CliConfig::template()
            .write_yaml(output)
            .context("write config template")?;
        info!(path = %output.display(), "configuration template written");
        return Ok(());
    }

    let mut config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(base_url) = args.base_url {
        config.base_url = Some(base_url);
    }
    debug!(
        base_url = ?config.base_url,
        authenticated = config.credentials().is_some(),
        "configuration loaded"
    );

    let client = config.build_client()?;
    let response = execute(&client, &args.command).await?;

    let rendered = serde_json::to_string_pretty(&response).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
