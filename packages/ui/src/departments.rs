//! Department context: the session's department list.

use api::{Department, HttpTransport};
use dioxus::prelude::*;
use store::{DepartmentSnapshot, DepartmentStore};

use crate::client::use_client;

#[derive(Clone, Copy)]
pub struct DepartmentContext {
    store: CopyValue<DepartmentStore<HttpTransport>>,
    state: Signal<DepartmentSnapshot>,
}

impl DepartmentContext {
    pub fn departments(&self) -> Vec<Department> {
        self.state.read().departments.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn by_slug(&self, slug: &str) -> Option<Department> {
        self.state.read().by_slug(slug).cloned()
    }

    fn store(&self) -> DepartmentStore<HttpTransport> {
        self.store.cloned()
    }

    pub async fn refresh(mut self) {
        let store = self.store();
        store.refresh().await;
        self.state.set(store.snapshot());
    }

    pub async fn ensure(mut self) {
        let store = self.store();
        store.ensure().await;
        self.state.set(store.snapshot());
    }
}

pub fn use_departments() -> DepartmentContext {
    use_context::<DepartmentContext>()
}

#[component]
pub fn DepartmentProvider(children: Element) -> Element {
    let client = use_client();
    let store = use_hook(|| CopyValue::new(DepartmentStore::new(client)));
    let state = use_signal(|| store.read().snapshot());
    let departments = use_context_provider(|| DepartmentContext { store, state });

    let _ = use_resource(move || async move {
        departments.ensure().await;
    });

    rsx! {
        {children}
    }
}
