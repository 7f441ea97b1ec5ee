use anyhow::{anyhow, Result};
use clap::Args;
use ivvy_api::types::InvoiceStatus;
use ivvy_api::Client;

use super::{fetch_pages, parse_filters, PageArgs};
use crate::output::{page_summary, print_invoices, OutputFormat};

#[derive(Args)]
pub struct InvoicesArgs {
    /// Get a single invoice by ID
    #[arg(long)]
    pub id: Option<String>,

    /// Filter by status: not-paid, unconfirmed-paid, paid, written-off, cancelled, refunded
    #[arg(long)]
    pub status: Option<String>,

    /// Filter as key=value (also >, >=, <, <=, != and ~ for like); repeatable
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

pub async fn run(args: &InvoicesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let invoices = client.invoices();

    if let Some(id) = &args.id {
        let invoice = invoices.get_invoice(id).await?;
        print_invoices(&[invoice], format);
        return Ok(());
    }

    let mut filter = parse_filters(&args.filters)?;
    if let Some(status) = &args.status {
        let status: InvoiceStatus = status.parse().map_err(|_| {
            anyhow!(
                "unknown invoice status `{}` (expected one of: {})",
                status,
                InvoiceStatus::ALL
                    .iter()
                    .map(|s| s.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;
        filter.insert("currentStatus", i64::from(status));
    }
    let filter = (!filter.is_empty()).then_some(&filter);

    let page = fetch_pages(&args.page, |page| invoices.list_invoices(page, filter)).await?;
    eprintln!("{}", page_summary(&page));
    print_invoices(&page.items, format);
    Ok(())
}
