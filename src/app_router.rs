use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;

use crate::content;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Project(&'static str),
}

/// Maps a location pathname onto a route. Unknown paths and unknown project
/// ids render home.
pub(crate) fn parse_route(path: &str) -> Route {
    let trimmed = path.trim_end_matches('/');
    let Some(raw_id) = trimmed.strip_prefix("/project/") else {
        return Route::Home;
    };
    match content::work_item(raw_id) {
        Some(item) => Route::Project(item.id),
        None => Route::Home,
    }
}

pub(crate) fn route_path(route: &Route) -> String {
    match route {
        Route::Home => "/".to_string(),
        Route::Project(id) => format!("/project/{id}"),
    }
}

pub(crate) fn current_route() -> Route {
    let Some(window) = web_sys::window() else {
        return Route::Home;
    };
    let path = window.location().pathname().unwrap_or_default();
    parse_route(&path)
}

/// Pushes `route` onto the session history without reloading.
pub(crate) fn push_route(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let path = route_path(route);
    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&path));
}

/// Calls `on_change` with the location route whenever the user navigates
/// through history. Dropping the returned listener detaches it.
pub(crate) fn listen_popstate(on_change: Rc<dyn Fn(Route)>) -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "popstate", move |_| {
        on_change(current_route());
    }))
}
