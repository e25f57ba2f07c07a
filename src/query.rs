//! Live Query Hook
//!
//! Binds a [`LiveQuery`] to the calling component: state lands in a signal,
//! and the query stops publishing once the component is cleaned up.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use scoped_graphql::{FetchPolicy, HttpTransport, LiveQuery, Operation, QueryState};

use crate::context::AppContext;

/// Reactive view of one mounted read
pub struct QueryHandle<T: 'static> {
    pub state: ReadSignal<QueryState<T>>,
    reload: StoredValue<Rc<dyn Fn()>, LocalStorage>,
}

impl<T: 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for QueryHandle<T> {}

impl<T: Send + Sync + 'static> QueryHandle<T> {
    /// Back to `Loading`, then a fresh network read (the Retry action)
    pub fn refetch(&self) {
        self.reload.with_value(|reload| reload());
    }
}

/// Mount `Op` under the current organization and load it
pub fn use_live_query<Op>(variables: Op::Variables) -> QueryHandle<Op::Data>
where
    Op: Operation + 'static,
    Op::Data: Clone + Send + Sync + 'static,
    Op::Variables: 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (state, set_state) = signal(QueryState::<Op::Data>::Loading);

    let live = LiveQuery::<Op, HttpTransport>::mount(
        ctx.client(),
        ctx.tenant.get_untracked(),
        variables,
        FetchPolicy::NetworkOnly,
        move |next: &QueryState<Op::Data>| set_state.set(next.clone()),
    );

    let flag = live.mount_flag();
    on_cleanup(move || flag.unmount());

    let reload: Rc<dyn Fn()> = Rc::new(move || {
        let live = Rc::clone(&live);
        spawn_local(async move { live.refetch().await });
    });
    reload();

    QueryHandle {
        state,
        reload: StoredValue::new_local(reload),
    }
}
