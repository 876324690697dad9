use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::hooks::SiteState;
use crate::interop;

/// Keep the router in sync with `window.location.hash`.
///
/// On mount, the fragment the page was opened with is dispatched once.
/// After that a `hashchange` listener feeds every external fragment change
/// (back/forward, manual edits, plain hash links) back into the router.
/// Fragment writes made by the router itself come back through the same
/// listener as an idempotent re-activation, never a second write.
pub fn use_hash_sync(state: SiteState) {
    use_hook(move || {
        let mut initial_state = state;
        spawn(async move {
            initial_state.initial_route(&interop::current_fragment());
        });

        let mut listener_state = state;
        let on_hashchange = Closure::<dyn FnMut()>::new(move || {
            listener_state.route_changed(&interop::current_fragment());
        });
        if let Some(window) = web_sys::window() {
            window.set_onhashchange(Some(on_hashchange.as_ref().unchecked_ref()));
        }
        // The listener lives for the whole page.
        on_hashchange.forget();
    });
}
