use anyhow::Result;
use clap::Parser;
use pizza_builder::{
    cli::{Args, CliApp},
    utils::Config,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    CliApp::new(config).run(args)
}
