//! HTTP client for the iVvy venue API.

use crate::{
    codec::{Codec, JsonCodec},
    config::ClientConfig,
    dispatcher::Dispatcher,
    resources::{EmailLogApi, InvoiceApi, VenueApi},
    transport::{ReqwestTransport, Transport},
    Error, Result,
};

/// Entry point of the library. Resource methods are grouped into façades:
/// [`Client::venues`], [`Client::invoices`] and [`Client::email_logs`].
///
/// The client keeps no session or cache; every method call is exactly one
/// request. It is `Send + Sync` and can be shared across tasks.
pub struct Client<T = ReqwestTransport, C = JsonCodec> {
    dispatcher: Dispatcher<T, C>,
}

impl Client {
    /// Creates a client using the default reqwest transport and JSON codec.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout, &config.user_agent)
            .map_err(|e| Error::configuration(format!("failed to build transport: {}", e)))?;
        Ok(Self::with_collaborators(config, transport, JsonCodec))
    }

    /// Creates a client with default settings and a custom base URL. Used for
    /// testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::new(ClientConfig::default().with_base_url(base_url))
    }
}

impl<T: Transport, C: Codec> Client<T, C> {
    /// Creates a client around caller-supplied collaborators.
    ///
    /// `config.timeout` and `config.user_agent` only apply to the default
    /// transport; a custom transport is responsible for its own.
    pub fn with_collaborators(config: ClientConfig, transport: T, codec: C) -> Self {
        let headers = config.default_headers();
        Self {
            dispatcher: Dispatcher::new(&config.base_url, headers, transport, codec),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<T, C> {
        &self.dispatcher
    }

    /// Venues, rooms, rate plans, bookings and inventory.
    pub fn venues(&self) -> VenueApi<'_, T, C> {
        VenueApi::new(&self.dispatcher)
    }

    pub fn invoices(&self) -> InvoiceApi<'_, T, C> {
        InvoiceApi::new(&self.dispatcher)
    }

    pub fn email_logs(&self) -> EmailLogApi<'_, T, C> {
        EmailLogApi::new(&self.dispatcher)
    }
}
