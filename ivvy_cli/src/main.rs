mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ivvy_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "ivvy")]
#[command(about = "Query venues, bookings, invoices and email logs from iVvy")]
struct Cli {
    /// Output format: table, json or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a venue
    Venue(commands::venues::VenueArgs),
    /// List a venue's accommodation rooms
    Rooms(commands::venues::RoomsArgs),
    /// List a venue's rate plans
    RatePlans(commands::venues::RatePlansArgs),
    /// List bookings of a venue or of the whole account
    Bookings(commands::bookings::BookingsArgs),
    /// List invoices or show one
    Invoices(commands::invoices::InvoicesArgs),
    /// List the email log
    EmailLogs(commands::email_logs::EmailLogsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ivvy=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = Client::new(config::load()?)?;

    match &cli.command {
        Commands::Venue(args) => commands::venues::run_venue(args, &client, &format).await?,
        Commands::Rooms(args) => commands::venues::run_rooms(args, &client, &format).await?,
        Commands::RatePlans(args) => {
            commands::venues::run_rate_plans(args, &client, &format).await?
        }
        Commands::Bookings(args) => commands::bookings::run(args, &client, &format).await?,
        Commands::Invoices(args) => commands::invoices::run(args, &client, &format).await?,
        Commands::EmailLogs(args) => commands::email_logs::run(args, &client, &format).await?,
    }

    Ok(())
}
