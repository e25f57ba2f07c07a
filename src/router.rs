//! History Router
//!
//! Maps `window.location` to a [`Route`] and pushes history entries. Each entry
//! may carry an organization hint in its state object.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const PROJECT_PREFIX: &str = "/project/";
const CHANGE_ORGANIZATION: &str = "/change-organization";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    /// Project detail by id
    Project(String),
    ChangeOrganization,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        if trimmed.is_empty() {
            return Route::Dashboard;
        }
        if trimmed == CHANGE_ORGANIZATION {
            return Route::ChangeOrganization;
        }
        if let Some(raw) = trimmed.strip_prefix(PROJECT_PREFIX) {
            if !raw.is_empty() && !raw.contains('/') {
                let id = percent_decode_str(raw).decode_utf8_lossy().into_owned();
                return Route::Project(id);
            }
        }
        Route::NotFound(path.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Project(id) => format!("{}{}", PROJECT_PREFIX, utf8_percent_encode(id, SEGMENT)),
            Route::ChangeOrganization => CHANGE_ORGANIZATION.to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

/// `?org=<slug>` on a location's query string
pub fn org_hint_from_query(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "org")
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().trim().to_string())
        .filter(|value| !value.is_empty())
}

/// History entry state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_hint: Option<String>,
}

impl NavState {
    pub fn from_js(state: &JsValue) -> Self {
        if state.is_null() || state.is_undefined() {
            return Self::default();
        }
        serde_wasm_bindgen::from_value(state.clone()).unwrap_or_else(|e| {
            log::debug!("ignoring foreign history state: {}", e);
            Self::default()
        })
    }
}

/// Organization hint of a history entry: its state, else `?org=` on its URL
pub fn entry_hint(state: NavState, search: &str) -> Option<String> {
    state.org_hint.or_else(|| org_hint_from_query(search))
}

/// Route and hint of the current history entry given its `state`
fn location_with_state(state: &JsValue) -> (Route, Option<String>) {
    let Some(window) = web_sys::window() else {
        return (Route::Dashboard, None);
    };
    let location = window.location();
    let route = Route::parse(&location.pathname().unwrap_or_default());
    let hint = entry_hint(NavState::from_js(state), &location.search().unwrap_or_default());
    (route, hint)
}

/// Route and hint of the page as loaded (reload keeps a pushed hint)
pub fn initial_location() -> (Route, Option<String>) {
    let state = web_sys::window()
        .and_then(|w| w.history().ok())
        .and_then(|h| h.state().ok())
        .unwrap_or(JsValue::NULL);
    location_with_state(&state)
}

/// Route and hint after back/forward landed on an entry with `state`
pub fn restored_location(state: &JsValue) -> (Route, Option<String>) {
    location_with_state(state)
}

/// Push a history entry for `route`
pub fn push(route: &Route, hint: Option<&str>) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let state = NavState {
        org_hint: hint.map(str::to_string),
    };
    let state = serde_wasm_bindgen::to_value(&state).unwrap_or(JsValue::NULL);
    if let Err(e) = history.push_state_with_url(&state, "", Some(&route.path())) {
        log::warn!("pushState to {} failed: {:?}", route.path(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/?org=acme"), Route::Dashboard);
        assert_eq!(Route::parse("/change-organization/"), Route::ChangeOrganization);
        assert_eq!(Route::parse("/project/12"), Route::Project("12".into()));
        assert_eq!(Route::parse("/project/12#tasks"), Route::Project("12".into()));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::parse("/projects"), Route::NotFound("/projects".into()));
        assert_eq!(Route::parse("/project/"), Route::NotFound("/project/".into()));
        assert_eq!(Route::parse("/project/1/tasks"), Route::NotFound("/project/1/tasks".into()));
    }

    #[test]
    fn test_project_id_is_escaped() {
        let route = Route::Project("a b/c".into());
        assert_eq!(route.path(), "/project/a%20b%2Fc");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn test_org_hint_from_query() {
        assert_eq!(org_hint_from_query("?org=acme"), Some("acme".into()));
        assert_eq!(org_hint_from_query("?tab=1&org=acme%2Dlabs"), Some("acme-labs".into()));
        assert_eq!(org_hint_from_query("?org="), None);
        assert_eq!(org_hint_from_query(""), None);
    }

    #[test]
    fn test_entry_hint_falls_back_to_query() {
        // first entry of a `?org=` load has no state of its own
        assert_eq!(entry_hint(NavState::default(), "?org=acme"), Some("acme".into()));
        let pushed = NavState {
            org_hint: Some("globex".into()),
        };
        assert_eq!(entry_hint(pushed, "?org=acme"), Some("globex".into()));
        assert_eq!(entry_hint(NavState::default(), ""), None);
    }

    #[test]
    fn test_nav_state_wire_shape() {
        let state = NavState {
            org_hint: Some("acme".into()),
        };
        assert_eq!(serde_json::to_value(&state).unwrap(), serde_json::json!({ "orgHint": "acme" }));
        assert_eq!(serde_json::to_value(NavState::default()).unwrap(), serde_json::json!({}));
    }
}
