//! Typed client for the iVvy venue and event management API.
//!
//! Every operation issues exactly one request and returns a [`Result`]:
//! either the decoded payload or an [`Error`] classified by [`ErrorKind`].
//! List operations return one [`types::PagedCollection`]; fetching the next
//! page is always an explicit call with [`types::PagedCollection::next_page`].

mod client;
mod codec;
mod config;
pub mod dispatcher;
mod errors;
mod query;
mod resources;
pub mod transport;
pub mod types;
pub use self::client::Client;
pub use self::codec::{Codec, JsonCodec};
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{Error, ErrorKind};
pub use self::query::{FilterOp, FilterSpec, FilterValue, Page, DEFAULT_PER_PAGE};
pub use self::resources::{EmailLogApi, InvoiceApi, VenueApi};

/// Outcome of every API operation.
pub type Result<T> = std::result::Result<T, Error>;
