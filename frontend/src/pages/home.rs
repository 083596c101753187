use crate::components::layout::Layout;
use leptos::*;

const CARD_CLASS: &str =
    "block bg-surface-elevated shadow rounded-lg p-6 hover:bg-action-ghost-bg-hover";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <div class="py-6 space-y-6">
                <h1 class="text-3xl font-extrabold text-fg">"Store Admin"</h1>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <a href="/admin/prices" class=CARD_CLASS>
                        <h2 class="text-lg font-medium text-fg">"Prices"</h2>
                        <p class="text-sm text-fg-muted">"Manage SKUs and their prices."</p>
                    </a>
                    <a href="/admin/site-config" class=CARD_CLASS>
                        <h2 class="text-lg font-medium text-fg">"Site configuration"</h2>
                        <p class="text-sm text-fg-muted">"Store name, support contact and defaults."</p>
                    </a>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn links_to_admin_pages() {
        let html = render_to_string(|| view! { <HomePage /> });
        assert!(html.contains("href=\"/admin/prices\""));
        assert!(html.contains("href=\"/admin/site-config\""));
    }
}
