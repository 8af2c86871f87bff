use crate::ports::outbound::{Page, PageRequest};
use crate::shared::error::OrgChartError;
use crate::shared::Result;
use futures::stream::{self, Stream, TryStreamExt};
use std::future::Future;

/// Page size requested from the directory (GitHub's maximum)
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Pages are numbered from 1
const FIRST_PAGE: u32 = 1;

/// Paginator for draining a paged listing into one ordered sequence
///
/// Items come out lazily, page order first and item order within a page
/// second. The listing ends when a page reports no successor, or when the
/// reported successor does not advance past the current page. A failing page
/// ends the sequence with `OrgChartError::Fetch`; there is no retry.
#[derive(Debug, Clone)]
pub struct Paginator {
    what: String,
    per_page: u32,
}

impl Paginator {
    /// Creates a paginator; `what` names the listing in error messages
    pub fn new(what: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Lazily yields the items of every page
    ///
    /// A page is only requested once the items of the previous one have been
    /// consumed. The stream is not restartable.
    pub fn items<T, F, Fut>(self, fetch: F) -> impl Stream<Item = Result<T>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        let Paginator { what, per_page } = self;

        Self::pages(per_page, fetch)
            .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, anyhow::Error>)))
            .try_flatten()
            .map_err(move |source| OrgChartError::fetch(what.clone(), source).into())
    }

    /// Drains every page into a vector
    ///
    /// # Errors
    /// Returns `OrgChartError::Fetch` if any page fails. Items from pages
    /// fetched before the failure are discarded.
    pub async fn collect_all<T, F, Fut>(self, fetch: F) -> Result<Vec<T>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        self.items(fetch).try_collect().await
    }

    fn pages<T, F, Fut>(per_page: u32, fetch: F) -> impl Stream<Item = Result<Vec<T>>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        stream::try_unfold(
            (fetch, Some(FIRST_PAGE)),
            move |(mut fetch, cursor)| async move {
                let Some(current) = cursor else {
                    return Ok(None);
                };

                let page = fetch(PageRequest::new(current, per_page)).await?;
                let next = page.next_page.filter(|next| *next > current);

                Ok::<_, anyhow::Error>(Some((page.items, (fetch, next))))
            },
        )
    }
}
