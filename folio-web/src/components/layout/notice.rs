use dioxus::prelude::*;

use crate::hooks::SiteState;
use crate::interop;
use crate::types::NOTICE_DURATION_MS;

/// Transient notice banner. Whatever lands in the notice signal is shown
/// for a fixed duration and then dismissed, unless a newer notice has
/// replaced it in the meantime.
#[component]
pub fn NoticeToast() -> Element {
    let state = use_context::<SiteState>();

    use_effect(move || {
        if let Some(msg) = state.notice.read().clone() {
            let mut notice = state.notice;
            spawn(async move {
                interop::sleep_ms(NOTICE_DURATION_MS).await;
                if notice.peek().as_deref() == Some(msg.as_str()) {
                    notice.set(None);
                }
            });
        }
    });

    let notice = state.notice.read().clone();
    match notice {
        Some(msg) => rsx! {
            div { class: "notice", role: "alert", "{msg}" }
        },
        None => rsx! {},
    }
}
