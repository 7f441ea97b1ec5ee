use ivvy_api::types::{Booking, EmailLog, Invoice, PagedCollection, RatePlan, Room, Venue};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

#[derive(Tabled)]
struct VenueRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Timezone")]
    timezone: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Address")]
    address: String,
}

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Rooms")]
    num_rooms: String,
    #[tabled(rename = "Max Occupants")]
    max_occupants: String,
}

#[derive(Tabled)]
struct RatePlanRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Default")]
    is_default: String,
    #[tabled(rename = "Rooms")]
    rooms: usize,
}

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Venue")]
    venue_id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Starts")]
    starts: String,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct InvoiceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Due")]
    due: String,
}

#[derive(Tabled)]
struct EmailLogRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Sent")]
    sent: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Subject")]
    subject: String,
}

// -- Row builders --

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn yes_no(value: Option<bool>) -> String {
    match value {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => String::new(),
    }
}

/// Formats an optional amount with two decimals. Absent stays blank so it
/// cannot be mistaken for zero.
fn format_amount(value: Option<f64>, currency: Option<&str>) -> String {
    match (value, currency) {
        (Some(v), Some(c)) => format!("{:.2} {}", v, c),
        (Some(v), None) => format!("{:.2}", v),
        (None, _) => String::new(),
    }
}

fn build_venue_rows(venues: &[Venue]) -> Vec<VenueRow> {
    venues
        .iter()
        .map(|v| VenueRow {
            id: v.id,
            name: v.name.clone(),
            timezone: text(&v.timezone),
            currency: text(&v.currency),
            address: v.address.as_ref().map(|a| a.one_line()).unwrap_or_default(),
        })
        .collect()
}

fn build_room_rows(rooms: &[Room]) -> Vec<RoomRow> {
    rooms
        .iter()
        .map(|r| RoomRow {
            id: r.id,
            name: r.name.clone(),
            code: text(&r.code),
            num_rooms: number(r.num_rooms),
            max_occupants: number(r.max_occupants),
        })
        .collect()
}

fn build_rate_plan_rows(plans: &[RatePlan]) -> Vec<RatePlanRow> {
    plans
        .iter()
        .map(|p| RatePlanRow {
            id: p.id,
            name: p.name.clone(),
            code: text(&p.code),
            is_default: yes_no(p.is_default),
            rooms: p.room_ids.len(),
        })
        .collect()
}

fn build_booking_rows(bookings: &[Booking]) -> Vec<BookingRow> {
    bookings
        .iter()
        .map(|b| BookingRow {
            id: b.id,
            venue_id: b.venue_id,
            name: b.name.clone(),
            status: b.current_status.to_string(),
            starts: text(&b.date_event_start),
            total: format_amount(b.total_amount, None),
        })
        .collect()
}

fn build_invoice_rows(invoices: &[Invoice]) -> Vec<InvoiceRow> {
    invoices
        .iter()
        .map(|i| InvoiceRow {
            id: i.id.clone(),
            title: text(&i.title),
            status: i.current_status.to_string(),
            total: format_amount(i.total_cost, i.currency.as_deref()),
            paid: format_amount(i.amount_paid, i.currency.as_deref()),
            due: text(&i.payment_due_date),
        })
        .collect()
}

fn build_email_log_rows(logs: &[EmailLog]) -> Vec<EmailLogRow> {
    logs.iter()
        .map(|l| EmailLogRow {
            id: l.id.clone(),
            sent: text(&l.date_sent),
            to: text(&l.to_email),
            subject: text(&l.subject),
        })
        .collect()
}

fn render_table<R: Tabled>(rows: Vec<R>, format: &OutputFormat) -> String {
    let mut table = Table::new(rows);
    if *format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

fn print_rows<R: Tabled>(rows: Vec<R>, format: &OutputFormat) {
    println!("{}", render_table(rows, format));
}

// -- Public printers --

pub fn print_venues(venues: &[Venue], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&venues),
        _ => print_rows(build_venue_rows(venues), format),
    }
}

pub fn print_rooms(rooms: &[Room], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&rooms),
        _ => print_rows(build_room_rows(rooms), format),
    }
}

pub fn print_rate_plans(plans: &[RatePlan], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&plans),
        _ => print_rows(build_rate_plan_rows(plans), format),
    }
}

pub fn print_bookings(bookings: &[Booking], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&bookings),
        _ => print_rows(build_booking_rows(bookings), format),
    }
}

pub fn print_invoices(invoices: &[Invoice], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&invoices),
        _ => print_rows(build_invoice_rows(invoices), format),
    }
}

pub fn print_email_logs(logs: &[EmailLog], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&logs),
        _ => print_rows(build_email_log_rows(logs), format),
    }
}

/// Summary line for a page, e.g. "Showing 101-120 of 120".
pub fn page_summary<T>(page: &PagedCollection<T>) -> String {
    if page.is_empty() {
        return format!("Showing 0 of {}", page.total_count);
    }
    let first = page.start as u64 + 1;
    let last = page.start as u64 + page.len() as u64;
    format!("Showing {}-{} of {}", first, last, page.total_count)
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
