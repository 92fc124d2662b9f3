use serde::{Deserialize, Serialize};

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: u32,
    pub page_size: u32,
}

impl Pageable {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Number of pages needed for `total` matches.
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        total.div_ceil(self.page_size as usize)
    }
}

impl Default for Pageable {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_elements: usize,
    pub total_elements: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page_number: u32, total_elements: usize) -> Self {
        Self {
            page_elements: content.len(),
            content,
            page_number,
            total_elements,
        }
    }

    pub fn empty(page_number: u32, total_elements: usize) -> Self {
        Self::new(Vec::new(), page_number, total_elements)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_elements: self.page_elements,
            total_elements: self.total_elements,
        }
    }
}

/// Slice `matches` into the requested page.
///
/// When every match fits in one page the whole set is returned whatever the
/// page number. Otherwise the page starts at `(page_number - 1) * page_size`
/// and is empty past the last page. `total_elements` always counts every match.
pub fn paginate<T>(matches: Vec<T>, pageable: &Pageable) -> Page<T> {
    let total = matches.len();
    let page_number = pageable.page_number;
    let page_size = pageable.page_size as usize;

    if page_size == 0 || total == 0 {
        return Page::empty(page_number, total);
    }
    if total <= page_size {
        return Page::new(matches, page_number, total);
    }

    let start = (page_number.max(1) as usize - 1).saturating_mul(page_size);
    if start >= total {
        return Page::empty(page_number, total);
    }
    let end = (start + page_size).min(total);

    let content = matches.into_iter().skip(start).take(end - start).collect();
    Page::new(content, page_number, total)
}
