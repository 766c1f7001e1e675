//! Cursor-paginated collections.
//!
//! List endpoints return a list object:
//!
//! ```json
//! {"object": "list", "data": [...], "has_more": true, "url": "/v1/charges"}
//! ```
//!
//! [`Page<T>`] is that object decoded. [`PaginatedCollection<T>`] pairs a page
//! with the query that produced it so the next page can be requested with the
//! last item's id as the `starting_after` cursor (or the server's
//! `next_page` token when one is present).
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//!
//! let charges = Charge::list(&client, &ChargeListParams { limit: Some(2), ..Default::default() }, None).await?;
//!
//! // One page at a time
//! if let Some(next) = charges.next_page().await? {
//!     println!("second page has {} charges", next.items().len());
//! }
//!
//! // Every charge across all pages, lazily
//! let all: Vec<Charge> = charges.auto_paging_stream().try_collect().await?;
//! ```

use std::fmt;

use futures::stream::{self, Stream};
use serde::{Deserialize, Serialize};

use crate::clients::rest::ResourceClient;
use crate::rest::codec::null_as_default;
use crate::rest::errors::ResourceError;
use crate::rest::expandable::HasId;
use crate::rest::operation::OperationDescriptor;
use crate::rest::schema::ApiResource;

fn list_object() -> String {
    "list".to_string()
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Always `"list"`.
    #[serde(default = "list_object")]
    pub object: String,
    /// Items in server order.
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,
    /// Whether more items exist after this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
    /// The list endpoint's path, used to fetch further pages of embedded lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Opaque token for the next page, sent back as `page`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            object: list_object(),
            data: Vec::new(),
            has_more: false,
            url: None,
            next_page: None,
        }
    }
}

/// The cursor used to request the page after this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// Items after this identifier (`starting_after`).
    StartingAfter(String),
    /// A server-provided token (`page`).
    Token(String),
}

impl Cursor {
    /// Returns the query parameter name and value.
    #[must_use]
    pub fn as_param(&self) -> (&'static str, &str) {
        match self {
            Self::StartingAfter(id) => ("starting_after", id),
            Self::Token(token) => ("page", token),
        }
    }
}

impl<T: HasId> Page<T> {
    /// Returns the cursor for the next page, or `None` if this is the last.
    #[must_use]
    pub fn next_cursor(&self) -> Option<Cursor> {
        if !self.has_more {
            return None;
        }
        if let Some(token) = &self.next_page {
            return Some(Cursor::Token(token.clone()));
        }
        self.data
            .last()
            .map(|item| Cursor::StartingAfter(item.id().to_string()))
    }
}

/// A page of resources bound to the query that produced it.
pub struct PaginatedCollection<T> {
    page: Page<T>,
    request_id: Option<String>,
    query: OperationDescriptor,
    client: ResourceClient,
}

impl<T: fmt::Debug> fmt::Debug for PaginatedCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatedCollection")
            .field("page", &self.page)
            .field("request_id", &self.request_id)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl<T: ApiResource> PaginatedCollection<T> {
    pub(crate) const fn new(
        page: Page<T>,
        request_id: Option<String>,
        query: OperationDescriptor,
        client: ResourceClient,
    ) -> Self {
        Self {
            page,
            request_id,
            query,
            client,
        }
    }

    /// Returns the items of the current page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.page.data
    }

    /// Returns `true` if the server reported more items after this page.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.page.has_more
    }

    /// Returns the underlying page.
    #[must_use]
    pub const fn page(&self) -> &Page<T> {
        &self.page
    }

    /// Consumes the collection, returning the underlying page.
    #[must_use]
    pub fn into_page(self) -> Page<T> {
        self.page
    }

    /// Returns the request id of the response that produced this page.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns the query that produced this page.
    #[must_use]
    pub const fn query(&self) -> &OperationDescriptor {
        &self.query
    }

    fn next_query(&self) -> Option<OperationDescriptor> {
        let cursor = self.page.next_cursor()?;
        let (key, value) = cursor.as_param();
        Some(self.query.with_param(key, value))
    }

    /// Fetches the next page.
    ///
    /// Returns `Ok(None)` when `has_more` is false or the page is empty.
    ///
    /// # Errors
    ///
    /// Returns any [`ResourceError`] raised while fetching or decoding.
    pub async fn next_page(&self) -> Result<Option<Self>, ResourceError> {
        match self.next_query() {
            Some(query) => self.client.request_collection(query).await.map(Some),
            None => Ok(None),
        }
    }

    fn into_parts(self) -> (Vec<T>, Option<(ResourceClient, OperationDescriptor)>) {
        let next = self.next_query().map(|query| (self.client, query));
        (self.page.data, next)
    }

    /// Returns a lazy stream over every item of this and all following pages.
    ///
    /// Items are yielded in server order. At most one page is buffered; the
    /// next page is requested only once the current one is exhausted. The
    /// stream ends after `has_more` is false, or right after yielding an error.
    pub fn auto_paging_stream(self) -> impl Stream<Item = Result<T, ResourceError>> + Send {
        let (items, next) = self.into_parts();

        stream::try_unfold(
            (items.into_iter(), next),
            |(mut items, mut next)| async move {
                loop {
                    if let Some(item) = items.next() {
                        return Ok(Some((item, (items, next))));
                    }
                    let Some((client, query)) = next.take() else {
                        return Ok(None);
                    };
                    let collection = client.request_collection::<T>(query).await?;
                    let (page_items, following) = collection.into_parts();
                    items = page_items.into_iter();
                    next = following;
                }
            },
        )
    }
}
