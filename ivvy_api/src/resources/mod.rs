mod email_log;
pub use self::email_log::EmailLogApi;

mod invoice;
pub use self::invoice::InvoiceApi;

mod venue;
pub use self::venue::VenueApi;
