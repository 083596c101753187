use leptos::*;

/// Dashed placeholder for lists with nothing to show yet.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    /// Optional call to action rendered under the text.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="text-center py-10 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <p class="text-sm font-semibold text-fg">{title}</p>
            {description.map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
            {children.map(|action| view! { <div class="mt-4">{action()}</div> })}
        </div>
    }
}
