use serde::Serialize;
use url::Url;
use utoipa::ToSchema;

use crate::queries::ListQuery;

/// One page of rows, plus the total matching row count when the caller
/// asked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total: Option<u64>,
}

impl<T> Page<T> {
    pub const fn new(rows: Vec<T>, total: Option<u64>) -> Self {
        Self { rows, total }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            rows: self.rows.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

#[derive(Serialize, ToSchema, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u64,
    pub page_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

#[derive(Serialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct Links {
    pub first: String,
    pub prev: String,
    pub next: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Metadata<F> {
    pub pagination: PaginationMeta,
    pub links: Links,
    pub query: F,
}

/// Envelope returned by every list endpoint.
#[derive(Serialize, Debug)]
pub struct ListResponse<T, F> {
    pub results: Vec<T>,
    pub metadata: Metadata<F>,
}

impl<T, F: Clone> ListResponse<T, F> {
    pub fn new<S, R>(page: Page<T>, query: &ListQuery<F, S, R>, url: &Url) -> Self {
        let metadata = make_metadata_from_query(query, &page, url);
        Self {
            results: page.rows,
            metadata,
        }
    }
}

/// `total` is only reported when the descriptor opted into a full count.
pub fn make_pagination<F, S, R, T>(query: &ListQuery<F, S, R>, page: &Page<T>) -> PaginationMeta {
    PaginationMeta {
        page: query.page(),
        page_size: query.page_size(),
        total: if query.return_full_count {
            page.total
        } else {
            None
        },
    }
}

/// Builds first/prev/next links by rewriting the `page` pair of `url`.
///
/// `prev` is not clamped: on page 1 it points at page 0.
pub fn make_links(url: &Url, page: u64) -> Links {
    let page = i64::try_from(page).unwrap_or(i64::MAX);
    Links {
        first: with_page(url, 1),
        prev: with_page(url, page - 1),
        next: with_page(url, page.saturating_add(1)),
    }
}

pub fn make_metadata_from_query<F: Clone, S, R, T>(
    query: &ListQuery<F, S, R>,
    page: &Page<T>,
    url: &Url,
) -> Metadata<F> {
    Metadata {
        pagination: make_pagination(query, page),
        links: make_links(url, query.page()),
        query: query.query.clone(),
    }
}

/// Replaces the first `page` pair in place (dropping duplicates) or appends
/// one. Every other pair is kept byte for byte, in its position.
fn with_page(url: &Url, page: i64) -> String {
    let page = format!("page={page}");
    let mut placed = false;
    let mut pairs: Vec<&str> = Vec::new();

    for pair in url.query().unwrap_or_default().split('&').filter(|p| !p.is_empty()) {
        let key = pair.split_once('=').map_or(pair, |(key, _)| key);
        if key == "page" {
            if !placed {
                pairs.push(&page);
                placed = true;
            }
        } else {
            pairs.push(pair);
        }
    }
    if !placed {
        pairs.push(&page);
    }

    let mut link = url.clone();
    link.set_query(Some(&pairs.join("&")));
    link.into()
}
