use leptos::prelude::*;

/// Бейдж с готовым классом (`BookingStatus::badge_class` и т.п.)
#[component]
pub fn Badge(
    #[prop(into)] class: Signal<&'static str>,
    #[prop(into)] text: Signal<&'static str>,
) -> impl IntoView {
    view! { <span class=move || class.get()>{move || text.get()}</span> }
}
