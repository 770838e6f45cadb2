use anyhow::Result;
use clap::Parser;
use modest_bundle::cli::commands::Command;
use modest_bundle::cli::{BuildArgs, Cli, Commands};
use modest_bundle::{init_telemetry, BuildCommand, BundlerConfig};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error building bundle: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    BundlerConfig::load_env_file()?;
    let config = BundlerConfig::load()?;
    init_telemetry(&config.observability)?;

    let args = match cli.command {
        // Default behavior: no subcommand builds with configured paths
        None => BuildArgs::default(),
        Some(Commands::Build(args)) => args,
    };
    let command = BuildCommand::from_args(&config.paths, args);

    tokio::runtime::Runtime::new()?.block_on(async { command.execute().await })
}
