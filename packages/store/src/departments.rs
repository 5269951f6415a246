//! # Department store
//!
//! Session cache of the department list, used by the navbar, the sidebar and
//! every department page.
//!
//! | Lifecycle | Meaning |
//! |-----------|---------|
//! | `Init` | Nothing fetched yet |
//! | `Loading` | A refresh is in flight (concurrent refreshes share it) |
//! | `Ready` | The list was loaded |
//! | `Invalidated` | The last load failed or [`invalidate`](DepartmentStore::invalidate) was called |
//!
//! A failed load leaves an empty list and an error message, never a stale or
//! wrongly shaped list.

use std::cell::RefCell;
use std::rc::Rc;

use api::{departments, ApiClient, ApiError, Department, Transport};
use futures::future::{FutureExt, LocalBoxFuture, Shared};

pub const INVALID_FORMAT: &str = "Invalid department data format";
pub const LOAD_FAILED: &str = "Failed to load departments";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Init,
    Loading,
    Ready,
    Invalidated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentSnapshot {
    pub departments: Vec<Department>,
    pub error: Option<String>,
    pub lifecycle: Lifecycle,
}

impl DepartmentSnapshot {
    pub fn loading(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Init | Lifecycle::Loading)
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.slug == slug)
    }
}

#[derive(Default)]
struct Inner {
    snapshot: DepartmentSnapshot,
    pending: Option<Shared<LocalBoxFuture<'static, ()>>>,
}

pub struct DepartmentStore<T: Transport> {
    client: ApiClient<T>,
    inner: Rc<RefCell<Inner>>,
}

impl<T: Transport + Clone> Clone for DepartmentStore<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport + Clone + 'static> DepartmentStore<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self {
            client,
            inner: Rc::new(RefCell::new(Inner::default())),
        }
    }

    pub fn snapshot(&self) -> DepartmentSnapshot {
        self.inner.borrow().snapshot.clone()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.inner.borrow().snapshot.lifecycle
    }

    pub fn by_slug(&self, slug: &str) -> Option<Department> {
        self.inner.borrow().snapshot.by_slug(slug).cloned()
    }

    pub async fn refresh(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            match &inner.pending {
                Some(pending) => pending.clone(),
                None => {
                    inner.snapshot.lifecycle = Lifecycle::Loading;
                    inner.snapshot.error = None;
                    let pending = self.load().boxed_local().shared();
                    inner.pending = Some(pending.clone());
                    pending
                }
            }
        };
        pending.await
    }

    fn load(&self) -> impl std::future::Future<Output = ()> + 'static {
        let client = self.client.clone();
        let state = Rc::clone(&self.inner);
        async move {
            let outcome = departments::list(&client).await;
            let mut inner = state.borrow_mut();
            inner.pending = None;
            let snapshot = &mut inner.snapshot;
            match outcome {
                Ok(list) => {
                    snapshot.departments = list;
                    snapshot.error = None;
                    snapshot.lifecycle = Lifecycle::Ready;
                }
                Err(e) => {
                    tracing::error!("Failed to fetch departments: {e}");
                    snapshot.departments.clear();
                    snapshot.error = Some(error_text(&e).to_string());
                    snapshot.lifecycle = Lifecycle::Invalidated;
                }
            }
        }
    }

    /// Load the list unless it is already cached.
    pub async fn ensure(&self) {
        if self.lifecycle() != Lifecycle::Ready {
            self.refresh().await;
        }
    }

    /// Mark the cached list stale. It stays readable until the next refresh.
    pub fn invalidate(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.snapshot.lifecycle == Lifecycle::Ready {
            inner.snapshot.lifecycle = Lifecycle::Invalidated;
        }
    }
}

fn error_text(err: &ApiError) -> &'static str {
    match err {
        ApiError::Malformed { .. } => INVALID_FORMAT,
        _ => LOAD_FAILED,
    }
}
