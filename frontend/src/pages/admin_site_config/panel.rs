use super::view_model::{use_site_config_view_model, SiteConfigViewModel};
use crate::components::layout::*;
use leptos::*;

const INPUT_CLASS: &str = "mt-1 w-full border border-form-control-border rounded px-2 py-1";

#[component]
pub fn SiteConfigPanel() -> impl IntoView {
    let vm = use_site_config_view_model();

    view! {
        <Layout>
            <div class="bg-surface-elevated shadow rounded-lg p-6 max-w-2xl">
                <h2 class="text-lg font-medium text-fg mb-4">"Site configuration"</h2>
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || {
                        vm.config_resource.get().map(|result| match result {
                            Ok(_) => view! { <SiteConfigForm vm=vm /> }.into_view(),
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}

#[component]
fn SiteConfigForm(vm: SiteConfigViewModel) -> impl IntoView {
    let form = vm.form;
    let saving = vm.save_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        {move || vm.message.get().map(|msg| view! { <SuccessMessage message=msg /> })}
        {move || vm.error.get().map(|err| view! { <ErrorMessage message=err.error /> })}
        <form class="space-y-4" on:submit=on_submit>
            <label class="block text-sm text-fg-muted">
                "Site name"
                <input
                    class=INPUT_CLASS
                    prop:value=move || form.site_name.get()
                    on:input=move |ev| form.site_name.set(event_target_value(&ev))
                />
            </label>
            <label class="block text-sm text-fg-muted">
                "Support email"
                <input
                    type="email"
                    class=INPUT_CLASS
                    prop:value=move || form.support_email.get()
                    on:input=move |ev| form.support_email.set(event_target_value(&ev))
                />
            </label>
            <label class="block text-sm text-fg-muted">
                "Default currency"
                <input
                    class=INPUT_CLASS
                    maxlength="3"
                    prop:value=move || form.default_currency.get()
                    on:input=move |ev| form.default_currency.set(event_target_value(&ev))
                />
            </label>
            <label class="flex items-center gap-2 text-sm text-fg-muted">
                <input
                    type="checkbox"
                    prop:checked=move || form.maintenance_mode.get()
                    on:change=move |ev| form.maintenance_mode.set(event_target_checked(&ev))
                />
                "Maintenance mode"
            </label>
            <button
                type="submit"
                class="px-4 py-2 bg-action-primary-bg text-action-primary-text rounded disabled:opacity-50"
                disabled=move || saving.get()
            >
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_renders_all_fields() {
        let html = render_to_string(|| {
            let vm = use_site_config_view_model();
            view! { <SiteConfigForm vm=vm /> }
        });
        assert!(html.contains("Site name"));
        assert!(html.contains("Support email"));
        assert!(html.contains("Default currency"));
        assert!(html.contains("Maintenance mode"));
    }

    #[test]
    fn panel_shows_heading() {
        let html = render_to_string(|| view! { <SiteConfigPanel /> });
        assert!(html.contains("Site configuration"));
    }
}
