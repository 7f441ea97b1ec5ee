use anyhow::Result;
use clap::Args;
use ivvy_api::Client;

use super::{fetch_pages, parse_filters, PageArgs};
use crate::output::{page_summary, print_bookings, OutputFormat};

#[derive(Args)]
pub struct BookingsArgs {
    /// Restrict to one venue; omit to list bookings across the account
    #[arg(long)]
    pub venue_id: Option<i64>,

    /// Get a single booking by ID (requires --venue-id)
    #[arg(long, requires = "venue_id")]
    pub id: Option<i64>,

    /// Filter as key=value (also >, >=, <, <=, != and ~ for like); repeatable
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

pub async fn run(args: &BookingsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let venues = client.venues();

    if let (Some(venue_id), Some(id)) = (args.venue_id, args.id) {
        let booking = venues.get_booking(venue_id, id).await?;
        print_bookings(&[booking], format);
        return Ok(());
    }

    let filter = parse_filters(&args.filters)?;
    let filter = (!filter.is_empty()).then_some(&filter);

    let bookings = match args.venue_id {
        Some(venue_id) => {
            fetch_pages(&args.page, |page| venues.list_bookings(venue_id, page, filter)).await?
        }
        None => fetch_pages(&args.page, |page| venues.list_account_bookings(page, filter)).await?,
    };

    eprintln!("{}", page_summary(&bookings));
    print_bookings(&bookings.items, format);
    Ok(())
}
