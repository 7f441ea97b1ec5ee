//! CLI subcommand implementations.

use std::future::Future;

use anyhow::{bail, Result};
use clap::Args;
use ivvy_api::types::PagedCollection;
use ivvy_api::{FilterOp, FilterSpec, FilterValue, Page};

pub mod bookings;
pub mod email_logs;
pub mod invoices;
pub mod venues;

/// Upper bound on pages fetched by `--all`.
const MAX_PAGES: usize = 1000;

/// Pagination flags shared by every list command.
#[derive(Args)]
pub struct PageArgs {
    /// Results per page
    #[arg(long, default_value = "20")]
    pub per_page: u32,

    /// Zero-based offset of the first result
    #[arg(long, default_value = "0")]
    pub start: u32,

    /// Keep requesting pages until the collection is exhausted
    #[arg(long)]
    pub all: bool,
}

impl PageArgs {
    pub fn page(&self) -> Page {
        Page::new(self.per_page, self.start)
    }
}

/// Parses `key=value`, `key>value`, `key>=value`, `key<value`, `key<=value`,
/// `key!=value` and `key~value` into a [`FilterSpec`], keeping argument order.
pub fn parse_filters(raw: &[String]) -> Result<FilterSpec> {
    const OPS: [(&str, Option<FilterOp>); 7] = [
        (">=", Some(FilterOp::Gte)),
        ("<=", Some(FilterOp::Lte)),
        ("!=", Some(FilterOp::NotEq)),
        ("=", None),
        (">", Some(FilterOp::Gt)),
        ("<", Some(FilterOp::Lt)),
        ("~", Some(FilterOp::Like)),
    ];

    let mut spec = FilterSpec::new();
    for arg in raw {
        let found = OPS
            .iter()
            .filter_map(|(token, op)| arg.find(token).map(|pos| (pos, *token, *op)))
            .min_by_key(|(pos, token, _)| (*pos, std::cmp::Reverse(token.len())));
        let Some((pos, token, op)) = found else {
            bail!("filter `{}` must look like key=value", arg);
        };
        let key = arg[..pos].trim();
        let value = arg[pos + token.len()..].trim();
        if key.is_empty() {
            bail!("filter `{}` has an empty key", arg);
        }
        let value = FilterValue::Text(value.to_string());
        match op {
            Some(op) => spec.insert(key, FilterValue::op(op, value)),
            None => spec.insert(key, value),
        }
    }
    Ok(spec)
}

/// Requests `first` and then every following page, one explicit call per
/// page, stopping at the first failure.
pub async fn fetch_all_pages<T, F, Fut>(first: Page, mut fetch: F) -> Result<PagedCollection<T>>
where
    F: FnMut(Page) -> Fut,
    Fut: Future<Output = ivvy_api::Result<PagedCollection<T>>>,
{
    let mut collected = fetch(first).await?;
    let mut next = collected.next_page();
    let mut fetched = 1;
    while let Some(page) = next {
        if fetched >= MAX_PAGES {
            tracing::warn!("Stopped after {} pages", MAX_PAGES);
            break;
        }
        let batch = fetch(page).await?;
        fetched += 1;
        tracing::debug!("Fetched {} items at start={}", batch.len(), page.start);
        next = if batch.is_empty() { None } else { batch.next_page() };
        collected.total_count = batch.total_count;
        collected.items.extend(batch.items);
    }
    collected.per_page = u32::try_from(collected.items.len()).unwrap_or(u32::MAX);
    Ok(collected)
}

/// One page, or all of them when `--all` is set.
pub async fn fetch_pages<T, F, Fut>(args: &PageArgs, mut fetch: F) -> Result<PagedCollection<T>>
where
    F: FnMut(Page) -> Fut,
    Fut: Future<Output = ivvy_api::Result<PagedCollection<T>>>,
{
    if args.all {
        fetch_all_pages(args.page(), fetch).await
    } else {
        Ok(fetch(args.page()).await?)
    }
}
