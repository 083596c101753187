use super::{
    utils::format_amount,
    view_model::{use_prices_view_model, PricesViewModel},
};
use crate::{
    api::PriceResponse,
    components::{empty_state::EmptyState, layout::*},
};
use leptos::*;

const INPUT_CLASS: &str = "mt-1 w-full border border-form-control-border rounded px-2 py-1";

#[component]
pub fn PricesPanel() -> impl IntoView {
    let vm = use_prices_view_model();

    view! {
        <Layout>
            <div class="space-y-6">
                <PriceForm vm=vm />
                <PriceList vm=vm />
            </div>
        </Layout>
    }
}

#[component]
fn PriceForm(vm: PricesViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.create_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-fg mb-4">"Add price"</h2>
            {move || vm.message.get().map(|msg| view! { <SuccessMessage message=msg /> })}
            {move || {
                vm.form_error.get().map(|err| {
                    let details = err.detail_messages();
                    view! {
                        <ErrorMessage message=err.error.clone() />
                        <ul class="text-xs text-status-error-text mb-4">
                            {details.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                        </ul>
                    }
                })
            }}
            <form class="grid grid-cols-1 md:grid-cols-5 gap-3 items-end" on:submit=on_submit>
                <label class="block text-sm text-fg-muted">
                    "SKU"
                    <input
                        class=INPUT_CLASS
                        prop:value=move || form.sku.get()
                        on:input=move |ev| form.sku.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg-muted">
                    "Name"
                    <input
                        class=INPUT_CLASS
                        prop:value=move || form.name.get()
                        on:input=move |ev| form.name.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg-muted">
                    "Amount"
                    <input
                        class=INPUT_CLASS
                        inputmode="decimal"
                        placeholder="12.50"
                        prop:value=move || form.amount.get()
                        on:input=move |ev| form.amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg-muted">
                    "Currency"
                    <input
                        class=INPUT_CLASS
                        maxlength="3"
                        prop:value=move || form.currency.get()
                        on:input=move |ev| form.currency.set(event_target_value(&ev))
                    />
                </label>
                <div class="flex items-center gap-3">
                    <label class="flex items-center gap-1 text-sm text-fg-muted">
                        <input
                            type="checkbox"
                            prop:checked=move || form.active.get()
                            on:change=move |ev| form.active.set(event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <button
                        type="submit"
                        class="px-4 py-2 bg-action-primary-bg text-action-primary-text rounded disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Saving..." } else { "Add" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn PriceList(vm: PricesViewModel) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-fg mb-4">"Prices"</h2>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    vm.prices_resource.get().map(|result| match result {
                        Ok(prices) if prices.is_empty() => view! {
                            <EmptyState
                                title="No prices yet"
                                description="Add a SKU above to start selling."
                            />
                        }
                        .into_view(),
                        Ok(prices) => view! { <PriceTable prices=prices /> }.into_view(),
                        Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn PriceTable(prices: Vec<PriceResponse>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border text-sm">
            <thead>
                <tr class="text-left text-fg-muted">
                    <th class="py-2">"SKU"</th>
                    <th class="py-2">"Name"</th>
                    <th class="py-2">"Amount"</th>
                    <th class="py-2">"Status"</th>
                    <th class="py-2">"Updated"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {prices
                    .into_iter()
                    .map(|price| {
                        let amount = format_amount(price.amount_cents, &price.currency);
                        let updated = price.updated_at.format("%Y-%m-%d %H:%M").to_string();
                        view! {
                            <tr>
                                <td class="py-2 font-mono">{price.sku}</td>
                                <td class="py-2">{price.name}</td>
                                <td class="py-2">{amount}</td>
                                <td class="py-2">{if price.active { "Active" } else { "Inactive" }}</td>
                                <td class="py-2 text-fg-muted">{updated}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
