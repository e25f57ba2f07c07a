//! Link Component
//!
//! In-app anchor that navigates through the router instead of reloading.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::router::Route;

#[component]
pub fn Link(
    to: Route,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let href = to.path();

    view! {
        <a
            class=class
            href=href
            on:click=move |ev: web_sys::MouseEvent| {
                // let the browser open new tabs/windows itself
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                ctx.navigate(to.clone());
            }
        >
            {children()}
        </a>
    }
}
