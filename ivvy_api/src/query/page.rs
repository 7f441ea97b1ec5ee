/// Page size the vendor applies when none is requested.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Offset pagination window for list operations.
///
/// `start` is zero-based: `start = 0` begins at the first result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub per_page: u32,
    pub start: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            start: 0,
        }
    }
}

impl Page {
    pub fn new(per_page: u32, start: u32) -> Self {
        Self { per_page, start }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// The window directly after this one.
    pub fn next(&self) -> Page {
        Page {
            per_page: self.per_page,
            start: self.start.saturating_add(self.per_page),
        }
    }

    /// Query pairs in the order the vendor documents them.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("perPage".to_string(), self.per_page.to_string()),
            ("start".to_string(), self.start.to_string()),
        ]
    }
}
