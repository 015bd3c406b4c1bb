use crate::layout::sidebar::Sidebar;
use leptos::prelude::*;

/// Application frame: fixed sidebar on the left, routed content on the
/// right.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <main class="shell__content">{children()}</main>
        </div>
    }
}
