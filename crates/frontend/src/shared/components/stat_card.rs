use leptos::prelude::*;

/// Small headline card for the overview dashboard.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    /// Visual variant: "default", "success" or "warning".
    #[prop(optional, into)]
    variant: Option<String>,
) -> impl IntoView {
    let variant = variant.unwrap_or_else(|| "default".to_string());

    view! {
        <div class=format!("stat-card stat-card--{}", variant)>
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{move || value.get()}</p>
        </div>
    }
}
