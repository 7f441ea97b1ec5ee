//! Envelopes shared by every resource: list pages and write acknowledgements.

use serde::{Deserialize, Serialize};

use crate::query::Page;

/// Pagination metadata of a vendor list response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub total_results: u64,
    pub start: Option<u32>,
    pub per_page: Option<u32>,
    pub count: Option<u32>,
}

/// A vendor list response as it appears on the wire.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListEnvelope<T> {
    pub meta: ListMeta,
    pub results: Vec<T>,
}

/// One page of a remote collection.
///
/// `items` keeps the server's order. `per_page` and `start` describe the
/// request that produced this page; `total_count` is what the server
/// reports for the whole collection and may exceed `items.len()`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedCollection<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub per_page: u32,
    pub start: u32,
}

impl<T> PagedCollection<T> {
    /// Combines a decoded envelope with the window that was requested.
    ///
    /// Operations that send no window fall back to the server's meta, then to
    /// a single page holding everything returned.
    pub fn from_envelope(envelope: ListEnvelope<T>, requested: Option<Page>) -> Self {
        let ListEnvelope { meta, results } = envelope;
        let (per_page, start) = match requested {
            Some(page) => (page.per_page, page.start),
            None => (
                meta.per_page
                    .unwrap_or_else(|| u32::try_from(results.len()).unwrap_or(u32::MAX)),
                meta.start.unwrap_or(0),
            ),
        };
        Self {
            items: results,
            total_count: meta.total_results,
            per_page,
            start,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the server reports items past the end of this page.
    pub fn has_more(&self) -> bool {
        (self.start as u64) + (self.items.len() as u64) < self.total_count
    }

    /// The window to request next, or `None` when this page is the last one.
    pub fn next_page(&self) -> Option<Page> {
        if !self.has_more() || self.per_page == 0 {
            return None;
        }
        let next = Page::new(self.per_page, self.start).next();
        (next.start > self.start).then_some(next)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for PagedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Acknowledgement returned by write operations.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSuccess {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(total: u64, n: usize) -> ListEnvelope<u32> {
        ListEnvelope {
            meta: ListMeta {
                total_results: total,
                start: Some(7),
                per_page: Some(9),
                count: Some(n as u32),
            },
            results: (0..n as u32).collect(),
        }
    }

    #[test]
    fn requested_window_wins_over_server_meta() {
        let page = PagedCollection::from_envelope(envelope(120, 20), Some(Page::new(50, 100)));
        assert_eq!(page.per_page, 50);
        assert_eq!(page.start, 100);
        assert_eq!(page.total_count, 120);
        assert_eq!(page.len(), 20);
        assert!(!page.has_more());
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn falls_back_to_server_meta() {
        let page = PagedCollection::from_envelope(envelope(30, 9), None);
        assert_eq!(page.per_page, 9);
        assert_eq!(page.start, 7);
        assert!(page.has_more());
        assert_eq!(page.next_page(), Some(Page::new(9, 16)));
    }

    #[test]
    fn falls_back_to_result_count() {
        let env = ListEnvelope {
            meta: ListMeta {
                total_results: 3,
                start: None,
                per_page: None,
                count: None,
            },
            results: vec!["a", "b", "c"],
        };
        let page = PagedCollection::from_envelope(env, None);
        assert_eq!(page.per_page, 3);
        assert_eq!(page.start, 0);
        assert!(!page.has_more());
    }

    #[test]
    fn no_next_page_when_start_cannot_advance() {
        let page = PagedCollection {
            items: vec![1u8],
            total_count: u64::MAX,
            per_page: 10,
            start: u32::MAX,
        };
        assert!(page.has_more());
        assert_eq!(page.next_page(), None);

        let near_end = PagedCollection {
            start: u32::MAX - 4,
            ..page
        };
        assert_eq!(near_end.next_page(), Some(Page::new(10, u32::MAX)));
    }

    #[test]
    fn preserves_server_order() {
        let env = ListEnvelope {
            meta: ListMeta {
                total_results: 3,
                start: None,
                per_page: None,
                count: None,
            },
            results: vec![3, 1, 2],
        };
        let page = PagedCollection::from_envelope(env, Some(Page::default()));
        assert_eq!(page.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}
