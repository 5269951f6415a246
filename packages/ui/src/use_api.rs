//! `use_api`: a [`CallState`] living in a signal.
//!
//! ```ignore
//! let articles = use_api::<Paginated<Article>>();
//! let client = use_client();
//! use_effect(move || {
//!     let client = client.clone();
//!     let page = page();
//!     spawn(async move {
//!         articles.execute(api::articles::list(&client, page, PAGE_SIZE)).await;
//!     });
//! });
//! ```

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;
use store::CallState;

use crate::navigation::follow_error_redirect;

pub struct UseApi<T: 'static> {
    state: Signal<CallState<T>>,
}

impl<T: 'static> Clone for UseApi<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for UseApi<T> {}

pub fn use_api<T: Clone + 'static>() -> UseApi<T> {
    let state = use_signal(CallState::<T>::new);
    UseApi { state }
}

impl<T: Clone + 'static> UseApi<T> {
    pub fn data(&self) -> Option<T> {
        self.state.read().data.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Run `call`, keeping its result only if no newer call was issued.
    ///
    /// Errors of the newest call may move the browser to the login or an
    /// error page.
    pub async fn execute<F>(mut self, call: F) -> Option<T>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let ticket = self.state.write().begin();
        let result = call.await;
        if let Err(err) = &result {
            if self.state.peek().is_current(ticket) {
                follow_error_redirect(err);
            }
        }
        self.state.write().settle(ticket, result)
    }

    pub fn reset(mut self) {
        self.state.write().reset();
    }
}
