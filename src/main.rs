use anyhow::Result;
use clap::Parser;
use runner_horizon::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        runner_horizon::init_logging(path)?;
    }

    if cli.one_shot {
        println!("{}", runner_horizon::one_shot(&cli)?);
        return Ok(());
    }

    runner_horizon::run(cli).await
}
