//! Turns one logical operation into one network exchange and a typed result.

use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::{
    codec::Codec,
    query::{FilterSpec, Page},
    transport::{Method, Transport, TransportRequest},
    types::{ListEnvelope, PagedCollection},
    Error, Result,
};

/// A resource path with `{name}` placeholders, e.g. `/venues/{venueId}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate(pub &'static str);

impl PathTemplate {
    /// Substitutes every placeholder, percent-encoding each value as a single
    /// path segment. A placeholder with no matching param is a configuration
    /// error.
    pub fn render(&self, params: &[(&str, String)]) -> Result<String> {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                Error::configuration(format!("unterminated placeholder in path `{}`", self.0))
            })?;
            let name = &after[..close];
            let value = params
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v)
                .ok_or_else(|| {
                    Error::configuration(format!(
                        "missing path parameter `{}` for `{}`",
                        name, self.0
                    ))
                })?;
            let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
            out.push_str(&encoded.replace('+', "%20"));
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything needed to issue one request, before rendering.
#[derive(Debug, Clone)]
pub struct Operation<'a> {
    pub method: Method,
    pub path: PathTemplate,
    pub path_params: Vec<(&'static str, String)>,
    pub query: Vec<(String, String)>,
    pub filter: Option<&'a FilterSpec>,
    pub body: Option<serde_json::Value>,
}

impl<'a> Operation<'a> {
    pub fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path: PathTemplate(path),
            path_params: Vec::new(),
            query: Vec::new(),
            filter: None,
            body: None,
        }
    }

    pub fn get(path: &'static str) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn put(path: &'static str) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: &'static str) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_path_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_filter(mut self, filter: Option<&'a FilterSpec>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The vendor's error body. Both fields are optional on the wire and the code
/// may arrive as a string or a number.
#[derive(Deserialize, Debug, Default)]
struct ErrorEnvelope {
    #[serde(alias = "errorCode")]
    code: Option<serde_json::Value>,
    #[serde(alias = "errorMessage")]
    message: Option<String>,
}

impl ErrorEnvelope {
    fn into_error(self, status: u16) -> Option<Error> {
        let code = match self.code {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            Some(_) => None,
        };
        if code.is_none() && self.message.is_none() {
            return None;
        }
        Some(Error::api(status, code, self.message))
    }
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX {
        text.into_owned()
    } else {
        let mut end = MAX;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &text[..end])
    }
}

/// Executes operations against one base URL through injected transport and
/// codec collaborators. Holds no per-call state.
pub struct Dispatcher<T, C> {
    base_url: String,
    headers: Vec<(String, String)>,
    transport: T,
    codec: C,
}

impl<T: Transport, C: Codec> Dispatcher<T, C> {
    pub fn new(base_url: &str, headers: Vec<(String, String)>, transport: T, codec: C) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers,
            transport,
            codec,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request(&self, op: &Operation<'_>, page: Option<Page>) -> Result<TransportRequest> {
        let path = op.path.render(&op.path_params)?;
        let mut url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
            Error::configuration(format!("invalid URL for `{}`: {}", op.path, e))
        })?;

        let mut pairs = op.query.clone();
        if let Some(page) = page {
            pairs.extend(page.to_query_pairs());
        }
        if let Some(filter) = op.filter {
            let filter_pairs = filter.to_query_pairs()?;
            for (key, _) in &filter_pairs {
                let field = key.split('[').next().unwrap_or(key.as_str());
                if pairs.iter().any(|(taken, _)| taken == field) {
                    return Err(Error::configuration(format!(
                        "filter field `{}` collides with the `{}` query parameter",
                        field, field
                    )));
                }
            }
            pairs.extend(filter_pairs);
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs.iter());
        }

        let body = match &op.body {
            Some(body) => Some(self.codec.encode(body).map_err(|e| {
                Error::configuration(format!("failed to encode request body: {}", e))
            })?),
            None => None,
        };

        let mut headers = self.headers.clone();
        headers.push(("accept".to_string(), self.codec.content_type().to_string()));
        if body.is_some() {
            headers.push((
                "content-type".to_string(),
                self.codec.content_type().to_string(),
            ));
        }

        Ok(TransportRequest {
            method: op.method,
            url,
            headers,
            body,
        })
    }

    /// Sends the request and decodes a success body into `R`.
    async fn send<R: DeserializeOwned>(
        &self,
        op: &Operation<'_>,
        page: Option<Page>,
    ) -> Result<R> {
        let request = self.build_request(op, page)?;
        tracing::debug!("{} {}", request.method, request.url);

        let resp = self.transport.send(request).await.map_err(|e| {
            tracing::error!("Request to {} failed: {}", op.path, e);
            Error::transport(e.kind)
        })?;

        if !(200..300).contains(&resp.status) {
            let snippet = truncate_body(&resp.body);
            tracing::warn!(
                "Request to {} failed with status {}: {}",
                op.path,
                resp.status,
                snippet
            );
            let envelope = self.codec.decode::<ErrorEnvelope>(&resp.body).ok();
            return Err(envelope
                .and_then(|env| env.into_error(resp.status))
                .unwrap_or_else(|| Error::transport_status(resp.status)));
        }

        self.codec.decode::<R>(&resp.body).map_err(|e| {
            tracing::error!(
                "Failed to parse {} response: {} | body: {}",
                op.path,
                e,
                truncate_body(&resp.body)
            );
            Error::decode(resp.status, e)
        })
    }

    /// Executes a single-resource or write operation.
    pub async fn execute<R: DeserializeOwned>(&self, op: Operation<'_>) -> Result<R> {
        self.send(&op, None).await
    }

    /// Executes a list operation. `page` is sent as `perPage`/`start` when
    /// given and recorded on the returned collection.
    pub async fn execute_list<R: DeserializeOwned>(
        &self,
        op: Operation<'_>,
        page: Option<Page>,
    ) -> Result<PagedCollection<R>> {
        let envelope = self.send::<ListEnvelope<R>>(&op, page).await?;
        Ok(PagedCollection::from_envelope(envelope, page))
    }
}
