//! Pagination over list operations
//!
//! A [`Pager`] walks a collection page by page, feeding the continuation
//! token of each response into the next request.

use futures::future::BoxFuture;
use futures::stream::{self, Stream};

use crate::error::{Error, Result};
use crate::models::*;

/// One page of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Token of the following page; `None` on the last page.
    pub next_start: Option<String>,
}

/// A list response that is one page of a collection.
pub trait Paginated: Sized {
    type Item;

    /// Continuation token, taken from `next.start` or `next.href`.
    fn next_start(&self) -> Option<String>;

    fn into_items(self) -> Vec<Self::Item>;

    fn into_page(self) -> Page<Self::Item> {
        let next_start = self.next_start();
        Page {
            items: self.into_items(),
            next_start,
        }
    }
}

macro_rules! paginated {
    ($($list:ident => $items:ident: $item:ty),+ $(,)?) => {
        $(
            impl Paginated for $list {
                type Item = $item;

                fn next_start(&self) -> Option<String> {
                    self.next.as_ref().and_then(ListNextMetadata::start_token)
                }

                fn into_items(self) -> Vec<$item> {
                    self.$items
                }
            }
        )+
    };
}

paginated! {
    ProjectList => projects: Project,
    AllowedOutboundDestinationList => allowed_outbound_destinations: AllowedOutboundDestination,
    AppList => apps: App,
    AppRevisionList => revisions: AppRevision,
    AppInstanceList => instances: AppInstance,
    FunctionList => functions: Function,
    JobList => jobs: Job,
    JobRunList => job_runs: JobRun,
    BindingList => bindings: Binding,
    BuildList => builds: Build,
    BuildRunList => build_runs: BuildRun,
    DomainMappingList => domain_mappings: DomainMapping,
    ConfigMapList => config_maps: ConfigMap,
    SecretList => secrets: Secret,
}

type FetchPage<'a, T> = Box<dyn FnMut(Option<String>) -> BoxFuture<'a, Result<Page<T>>> + Send + 'a>;

/// Cursor over the pages of one collection.
///
/// Starts before the first page and is exhausted once a page comes back
/// without a continuation token. A failed fetch leaves the cursor where it
/// was, so the same page can be requested again. Not meant to be shared
/// between tasks.
pub struct Pager<'a, T> {
    fetch: FetchPage<'a, T>,
    next_start: Option<String>,
    has_more: bool,
}

impl<'a, T> Pager<'a, T> {
    /// `fetch` is called with the continuation token of the page to load
    /// (`None` for the first page).
    pub fn new<F>(fetch: F) -> Self
    where
        F: FnMut(Option<String>) -> BoxFuture<'a, Result<Page<T>>> + Send + 'a,
    {
        Self {
            fetch: Box::new(fetch),
            next_start: None,
            has_more: true,
        }
    }

    pub fn has_next(&self) -> bool {
        self.has_more
    }

    /// Load the next page.
    ///
    /// Fails with [`Error::NoMoreResults`] once the collection is exhausted.
    pub async fn get_next(&mut self) -> Result<Vec<T>> {
        if !self.has_more {
            return Err(Error::NoMoreResults);
        }

        let page = (self.fetch)(self.next_start.clone()).await?;
        tracing::trace!(
            items = page.items.len(),
            more = page.next_start.is_some(),
            "fetched page"
        );

        self.has_more = page.next_start.is_some();
        self.next_start = page.next_start;
        Ok(page.items)
    }

    /// Load every remaining page and concatenate the items.
    pub async fn get_all(&mut self) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        while self.has_more {
            all_items.extend(self.get_next().await?);
        }
        tracing::debug!("fetched {} items", all_items.len());
        Ok(all_items)
    }

    /// The remaining pages as a stream. It ends after the last page or
    /// right after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<T>>> + 'a
    where
        T: 'a,
    {
        stream::unfold(Some(self), |state| async move {
            let mut pager = state?;
            if !pager.has_next() {
                return None;
            }
            match pager.get_next().await {
                Ok(items) => Some((Ok(items), Some(pager))),
                Err(e) => Some((Err(e), None)),
            }
        })
    }
}

impl<T> std::fmt::Debug for Pager<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("next_start", &self.next_start)
            .field("has_more", &self.has_more)
            .finish_non_exhaustive()
    }
}
