use anyhow::Result;
use clap::Args;
use ivvy_api::Client;

use super::{fetch_pages, parse_filters, PageArgs};
use crate::output::{page_summary, print_email_logs, OutputFormat};

#[derive(Args)]
pub struct EmailLogsArgs {
    /// Filter as key=value (also >, >=, <, <=, != and ~ for like); repeatable
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

pub async fn run(args: &EmailLogsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let filter = parse_filters(&args.filters)?;
    let filter = (!filter.is_empty()).then_some(&filter);

    let logs = client.email_logs();
    let page = fetch_pages(&args.page, |page| logs.list_email_logs(page, filter)).await?;
    eprintln!("{}", page_summary(&page));
    print_email_logs(&page.items, format);
    Ok(())
}
