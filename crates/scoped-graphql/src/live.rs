//! Live Queries
//!
//! One read bound to a mounted view: `Loading -> Ready | Errored`, `Ready -> Ready`
//! on invalidation. Results arriving after unmount, or after a newer request
//! from the same view, are dropped.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::cache::FetchPolicy;
use crate::client::{ApiClient, Watcher};
use crate::error::ApiError;
use crate::operation::Operation;
use crate::tenant::TenantSlug;
use crate::transport::Transport;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Errored(ApiError),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            QueryState::Errored(e) => Some(e),
            _ => None,
        }
    }
}

/// Cleared when the owning view goes away; shareable across cleanup hooks
#[derive(Debug, Clone)]
pub struct MountFlag(Arc<AtomicBool>);

impl MountFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LiveQuery<Op: Operation, T> {
    client: ApiClient<T>,
    tenant: TenantSlug,
    variables: Op::Variables,
    policy: FetchPolicy,
    state: RefCell<QueryState<Op::Data>>,
    mount: MountFlag,
    issued: Cell<u64>,
    sink: Box<dyn Fn(&QueryState<Op::Data>)>,
    _op: PhantomData<fn() -> Op>,
}

impl<Op, T> LiveQuery<Op, T>
where
    Op: Operation + 'static,
    Op::Data: Clone + 'static,
    Op::Variables: 'static,
    T: Transport + 'static,
{
    /// Register with the client. Nothing is fetched until `refetch`.
    pub fn mount(
        client: ApiClient<T>,
        tenant: TenantSlug,
        variables: Op::Variables,
        policy: FetchPolicy,
        sink: impl Fn(&QueryState<Op::Data>) + 'static,
    ) -> Rc<Self> {
        let live = Rc::new(Self {
            client: client.clone(),
            tenant,
            variables,
            policy,
            state: RefCell::new(QueryState::Loading),
            mount: MountFlag::new(),
            issued: Cell::new(0),
            sink: Box::new(sink),
            _op: PhantomData,
        });
        let watcher: Rc<dyn Watcher> = live.clone();
        client.watch(Rc::downgrade(&watcher));
        live
    }

    pub fn state(&self) -> QueryState<Op::Data> {
        self.state.borrow().clone()
    }

    pub fn mount_flag(&self) -> MountFlag {
        self.mount.clone()
    }

    pub fn unmount(&self) {
        self.mount.unmount();
    }

    /// Explicit (re)load: mount and retry both pass through `Loading`
    pub async fn refetch(&self) {
        self.publish(QueryState::Loading);
        self.load().await;
    }

    async fn load(&self) {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);

        let result = self
            .client
            .query::<Op>(&self.tenant, &self.variables, self.policy)
            .await;

        if !self.mount.is_mounted() {
            log::debug!("{} [{}] view gone, result dropped", Op::NAME, self.tenant);
            return;
        }
        if self.issued.get() != ticket {
            log::debug!("{} [{}] superseded, result dropped", Op::NAME, self.tenant);
            return;
        }
        self.publish(match result {
            Ok(data) => QueryState::Ready(data),
            Err(e) => QueryState::Errored(e),
        });
    }

    fn publish(&self, next: QueryState<Op::Data>) {
        if !self.mount.is_mounted() {
            return;
        }
        *self.state.borrow_mut() = next;
        let state = self.state.borrow();
        (self.sink)(&state);
    }
}

#[async_trait(?Send)]
impl<Op, T> Watcher for LiveQuery<Op, T>
where
    Op: Operation + 'static,
    Op::Data: Clone + 'static,
    Op::Variables: 'static,
    T: Transport + 'static,
{
    fn operation(&self) -> &'static str {
        Op::NAME
    }

    fn tenant(&self) -> &TenantSlug {
        &self.tenant
    }

    fn wants_refetch(&self) -> bool {
        self.mount.is_mounted() && !matches!(*self.state.borrow(), QueryState::Errored(_))
    }

    async fn revalidate(&self) {
        self.load().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::NoVariables;
    use crate::testing::{slug, AddThing, AddThingVars, ListThings, ScriptedTransport, ThingsData};
    use serde_json::json;

    type Seen = Rc<RefCell<Vec<QueryState<ThingsData>>>>;

    fn mount(client: &ApiClient<ScriptedTransport>, tenant: &str) -> (Rc<LiveQuery<ListThings, ScriptedTransport>>, Seen) {
        let seen: Seen = Rc::default();
        let sink = seen.clone();
        let live = LiveQuery::<ListThings, _>::mount(
            client.clone(),
            slug(tenant),
            NoVariables {},
            FetchPolicy::NetworkOnly,
            move |s: &QueryState<ThingsData>| sink.borrow_mut().push(s.clone()),
        );
        (live, seen)
    }

    fn things(items: &[&str]) -> ThingsData {
        ThingsData {
            things: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_mount_loads_then_ready() {
        let client = ApiClient::new(ScriptedTransport::new());
        client.transport().push_data(json!({ "things": ["a"] }));
        let (live, seen) = mount(&client, "acme");

        live.refetch().await;

        assert_eq!(*seen.borrow(), vec![QueryState::Loading, QueryState::Ready(things(&["a"]))]);
    }

    #[tokio::test]
    async fn test_error_is_terminal_until_retry() {
        let client = ApiClient::new(ScriptedTransport::new());
        client.transport().push_error(ApiError::Network("offline".into()));
        client.transport().push_data(json!({ "addThing": {} }));
        client.transport().push_data(json!({ "things": ["a"] }));
        let (live, _seen) = mount(&client, "acme");

        live.refetch().await;
        assert!(live.state().error().is_some());

        // invalidation skips errored views
        client.mutate::<AddThing>(&slug("acme"), &AddThingVars { name: "x".into() }).await.unwrap();
        assert_eq!(client.transport().call_names(), vec!["ListThings", "AddThing"]);
        assert!(live.state().error().is_some());

        live.refetch().await;
        assert_eq!(live.state(), QueryState::Ready(things(&["a"])));
    }

    #[tokio::test]
    async fn test_mutation_refetches_each_live_view_once_after_completing() {
        let client = ApiClient::new(ScriptedTransport::new());
        client.transport().push_data(json!({ "things": [] }));
        client.transport().push_data(json!({ "addThing": {} }));
        client.transport().push_data(json!({ "things": ["x"] }));
        let (live, seen) = mount(&client, "acme");
        live.refetch().await;

        client.mutate::<AddThing>(&slug("acme"), &AddThingVars { name: "x".into() }).await.unwrap();

        assert_eq!(client.transport().call_names(), vec!["ListThings", "AddThing", "ListThings"]);
        // revalidation does not pass through Loading
        assert_eq!(
            *seen.borrow(),
            vec![
                QueryState::Loading,
                QueryState::Ready(things(&[])),
                QueryState::Ready(things(&["x"])),
            ]
        );
    }

    #[tokio::test]
    async fn test_other_tenant_views_are_not_refetched() {
        let client = ApiClient::new(ScriptedTransport::new());
        client.transport().push_data(json!({ "things": [] }));
        client.transport().push_data(json!({ "addThing": {} }));
        let (live, _seen) = mount(&client, "globex");
        live.refetch().await;

        client.mutate::<AddThing>(&slug("acme"), &AddThingVars { name: "x".into() }).await.unwrap();

        assert_eq!(client.transport().call_names(), vec!["ListThings", "AddThing"]);
    }

    #[tokio::test]
    async fn test_late_result_after_unmount_is_dropped() {
        let client = ApiClient::new(ScriptedTransport::new());
        client.transport().push_data(json!({ "things": ["late"] }));
        let (live, seen) = mount(&client, "acme");
        let flag = live.mount_flag();
        client.transport().on_next_request(move || flag.unmount());

        live.refetch().await;

        assert_eq!(*seen.borrow(), vec![QueryState::Loading]);
        assert!(live.state().is_loading());
    }

    #[tokio::test]
    async fn test_dropped_views_leave_the_registry() {
        let client = ApiClient::new(ScriptedTransport::new());
        client.transport().push_data(json!({ "addThing": {} }));
        let (live, _seen) = mount(&client, "acme");
        drop(live);

        client.mutate::<AddThing>(&slug("acme"), &AddThingVars { name: "x".into() }).await.unwrap();

        assert_eq!(client.transport().call_names(), vec!["AddThing"]);
    }
}
