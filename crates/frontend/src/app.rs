use crate::shared::components::ui::{Tabs, TabsContent, TabsList, TabsTrigger, TabValue};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="demo">
            <AccountSettings />
            <ReportSwitcher />
        </main>
    }
}

/// Uncontrolled: the container keeps the selection itself.
#[component]
fn AccountSettings() -> impl IntoView {
    view! {
        <section class="demo__section">
            <h2>"Account"</h2>
            <Tabs default_value="account" class="demo__tabs">
                <TabsList>
                    <TabsTrigger value="account">"Account"</TabsTrigger>
                    <TabsTrigger value="password">"Password"</TabsTrigger>
                    <TabsTrigger value="billing" disabled=true>"Billing"</TabsTrigger>
                </TabsList>
                <TabsContent value="account">
                    <p>"Make changes to your account here."</p>
                </TabsContent>
                <TabsContent value="password">
                    <p>"Change your password here."</p>
                </TabsContent>
            </Tabs>
        </section>
    }
}

/// Controlled: the selection lives in this component and is fed back in.
#[component]
fn ReportSwitcher() -> impl IntoView {
    let selected = RwSignal::new(Some(TabValue::from("daily")));
    let on_value_change = Callback::new(move |value: TabValue| {
        log::info!("report tab changed to {}", value);
        selected.set(Some(value));
    });

    let label = move || {
        selected
            .get()
            .map(|value| value.to_string())
            .unwrap_or_else(|| "none".to_string())
    };

    view! {
        <section class="demo__section">
            <h2>"Reports"</h2>
            <div class="demo__toolbar">
                <span>"Selected: " {label}</span>
                <button type="button" on:click=move |_| selected.set(Some(TabValue::from("monthly")))>
                    "Jump to monthly"
                </button>
                <button type="button" on:click=move |_| selected.set(None)>
                    "Clear"
                </button>
            </div>
            <Tabs value=selected on_value_change=on_value_change>
                <TabsList>
                    <TabsTrigger value="daily">"Daily"</TabsTrigger>
                    <TabsTrigger value="weekly">"Weekly"</TabsTrigger>
                    <TabsTrigger value="monthly">"Monthly"</TabsTrigger>
                </TabsList>
                <TabsContent value="daily">
                    <p>"Daily totals."</p>
                </TabsContent>
                <TabsContent value="weekly">
                    <p>"Weekly totals."</p>
                </TabsContent>
                <TabsContent value="monthly">
                    <p>"Monthly totals."</p>
                </TabsContent>
            </Tabs>
        </section>
    }
}
