use anyhow::Result;
use clap::Args;
use ivvy_api::Client;

use super::{fetch_pages, PageArgs};
use crate::output::{page_summary, print_rate_plans, print_rooms, print_venues, OutputFormat};

#[derive(Args)]
pub struct VenueArgs {
    /// Venue ID
    #[arg(long)]
    pub id: i64,
}

#[derive(Args)]
pub struct RoomsArgs {
    /// Venue ID
    #[arg(long)]
    pub venue_id: i64,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args)]
pub struct RatePlansArgs {
    /// Venue ID
    #[arg(long)]
    pub venue_id: i64,

    #[command(flatten)]
    pub page: PageArgs,
}

pub async fn run_venue(args: &VenueArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let venue = client.venues().get_venue(args.id).await?;
    print_venues(&[venue], format);
    Ok(())
}

pub async fn run_rooms(args: &RoomsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let venues = client.venues();
    let rooms = fetch_pages(&args.page, |page| venues.list_rooms(args.venue_id, page)).await?;
    eprintln!("{}", page_summary(&rooms));
    print_rooms(&rooms.items, format);
    Ok(())
}

pub async fn run_rate_plans(
    args: &RatePlansArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let venues = client.venues();
    let plans = fetch_pages(&args.page, |page| venues.list_rate_plans(args.venue_id, page)).await?;
    eprintln!("{}", page_summary(&plans));
    print_rate_plans(&plans.items, format);
    Ok(())
}
