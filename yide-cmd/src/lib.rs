//! Command implementations for the Yide CLI.
//!
//! Provides subcommands for posting a ride to the backend and for previewing
//! the JSON that would be posted.

use clap::Subcommand;
use yide_client::DEFAULT_API_URL;

pub mod draft_args;
pub mod preview;
pub mod share;

pub use draft_args::DraftArgs;

#[derive(Subcommand)]
pub enum Command {
    /// Post a new ride listing
    Share {
        #[command(flatten)]
        draft: DraftArgs,

        /// Base URL of the Yide site; rides are posted to <URL>/api/ride
        #[arg(long, env = "YIDE_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,
    },

    /// Print the ride JSON without posting it
    Preview {
        #[command(flatten)]
        draft: DraftArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Share { draft, api_url } => share::run_share(&draft, &api_url).await,
        Command::Preview { draft } => preview::run_preview(&draft),
    }
}
