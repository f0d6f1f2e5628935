//! Yide CLI - share a ride from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(name = "yide-cli", version, about = "Post and preview Yide ride listings")]
struct Cli {
    #[command(subcommand)]
    command: yide_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    yide_cmd::run(cli.command).await
}
