//! Post a ride to the backend.

use crate::draft_args::DraftArgs;
use log::info;
use yide_client::{HttpRideService, ServiceConfig};
use yide_core::RideShareForm;

/// Fill the share form from `args` and submit it once to `api_url`.
pub async fn run_share(args: &DraftArgs, api_url: &str) -> anyhow::Result<()> {
    let service = HttpRideService::new(ServiceConfig::new(api_url)?);

    let mut form = RideShareForm::new();
    for (field, value) in args.fields() {
        form.update_field(field, value)?;
    }
    form.open();

    info!("Sharing ride via {}", service.config().endpoint());
    let created = form.submit(&service).await?;
    println!("{}", serde_json::to_string_pretty(&created)?);
    Ok(())
}
