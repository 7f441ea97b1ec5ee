//! Error types for the API client.

use std::fmt;

use crate::transport::TransportErrorKind;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied invalid or missing parameters. Detected locally,
    /// nothing was sent over the wire.
    Configuration,
    /// The network exchange failed (timeout, connection, TLS, cancellation),
    /// or the server answered with an error status whose body was not a
    /// vendor error envelope.
    Transport,
    /// A success response whose body did not match the expected payload.
    Decode,
    /// The server answered with a decodable vendor error envelope.
    Api,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ErrorKind::Configuration => "configuration",
                ErrorKind::Transport => "transport",
                ErrorKind::Decode => "decode",
                ErrorKind::Api => "api",
            }
        )
    }
}

/// Errors that can occur when making API requests.
///
/// Every failed operation yields exactly one of these. The vendor fields
/// (`code`, and `message` for [`ErrorKind::Api`]) are only populated when
/// the server returned an error envelope.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", describe(.kind, .status, .code, .message))]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    code: Option<String>,
    status: Option<u16>,
    transport_kind: Option<TransportErrorKind>,
}

fn describe(
    kind: &ErrorKind,
    status: &Option<u16>,
    code: &Option<String>,
    message: &Option<String>,
) -> String {
    let mut out = format!("{} error", kind);
    if let Some(status) = status {
        out.push_str(&format!(" (HTTP {})", status));
    }
    if let Some(code) = code {
        out.push_str(&format!(" [{}]", code));
    }
    if let Some(message) = message {
        out.push_str(": ");
        out.push_str(message);
    }
    out
}

impl Error {
    /// A local, client-side failure. Never reaches the network.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Configuration,
            message: Some(message.into()),
            code: None,
            status: None,
            transport_kind: None,
        }
    }

    /// A failed network exchange with no HTTP response.
    pub fn transport(cause: TransportErrorKind) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: None,
            code: None,
            status: None,
            transport_kind: Some(cause),
        }
    }

    /// An HTTP error status whose body could not be read as a vendor envelope.
    pub fn transport_status(status: u16) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: None,
            code: None,
            status: Some(status),
            transport_kind: None,
        }
    }

    /// A success status whose body did not decode into the expected shape.
    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Decode,
            message: Some(message.into()),
            code: None,
            status: Some(status),
            transport_kind: None,
        }
    }

    /// A decoded vendor error envelope.
    pub fn api(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            kind: ErrorKind::Api,
            message,
            code,
            status: Some(status),
            transport_kind: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Vendor-supplied message for [`ErrorKind::Api`], or a local description
    /// for [`ErrorKind::Configuration`] and [`ErrorKind::Decode`].
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Vendor-supplied error code, if the server sent one.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// HTTP status code, if a response was received.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Why no response arrived, for transport failures without a status.
    /// A [`TransportErrorKind::Connect`] failure never reached the server;
    /// after a [`TransportErrorKind::Timeout`] a write may have been applied.
    pub fn transport_kind(&self) -> Option<TransportErrorKind> {
        self.transport_kind
    }

    pub fn is_configuration(&self) -> bool {
        self.kind == ErrorKind::Configuration
    }

    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::Transport
    }

    pub fn is_decode(&self) -> bool {
        self.kind == ErrorKind::Decode
    }

    pub fn is_api(&self) -> bool {
        self.kind == ErrorKind::Api
    }
}
