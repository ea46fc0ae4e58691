use super::context::{use_tabs_context, TabsContext};
use super::value::TabValue;
use leptos::context::Provider;
use leptos::prelude::*;

/// Joins BEM class fragments, skipping empty ones.
fn class_list(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn trigger_class(selected: bool, extra: &str) -> String {
    let state = if selected { "tabs__trigger--active" } else { "" };
    class_list(&["tabs__trigger", state, extra])
}

/// Click path of a trigger. Inert outside of a container.
fn activate(ctx: Option<TabsContext>, value: &TabValue) {
    if let Some(ctx) = ctx {
        ctx.request_change(value.clone());
    }
}

/// Tabs container. Owns the selection unless `value` is supplied, in which
/// case the caller owns it and receives requests through `on_value_change`.
#[component]
pub fn Tabs(
    /// Initially selected tab (uncontrolled mode)
    #[prop(optional, into)]
    default_value: Option<TabValue>,
    /// Externally owned selection; switches the container to controlled mode
    #[prop(optional, into)]
    value: Option<Signal<Option<TabValue>>>,
    /// Receives every selection request instead of the internal state
    #[prop(optional)]
    on_value_change: Option<Callback<TabValue>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// ID for the root element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let ctx = TabsContext::new(default_value, value, on_value_change);

    // Children get their own owner so the context stays inside this subtree.
    view! {
        <div
            id=move || id.get()
            class=move || class_list(&["tabs", &class.get().unwrap_or_default()])
        >
            <Provider value=ctx>{children()}</Provider>
        </div>
    }
}

/// Horizontal, scrollable row of triggers
#[component]
pub fn TabsList(
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=move || id.get()
            role="tablist"
            class=move || class_list(&["tabs__list", &class.get().unwrap_or_default()])
        >
            {children()}
        </div>
    }
}

/// Button selecting one tab, exposing its state through `aria-selected`
#[component]
pub fn TabsTrigger(
    /// Tab this trigger selects
    #[prop(into)]
    value: TabValue,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    children: Children,
) -> impl IntoView {
    let ctx = use_tabs_context();
    if ctx.is_none() {
        log::warn!("TabsTrigger `{}` rendered outside of Tabs", value);
    }

    let value_for_check = value.clone();
    let is_selected =
        Memo::new(move |_| ctx.is_some_and(|ctx| ctx.is_selected(&value_for_check)));

    view! {
        <button
            id=move || id.get()
            type="button"
            role="tab"
            aria-selected=move || if is_selected.get() { "true" } else { "false" }
            class=move || trigger_class(is_selected.get(), &class.get().unwrap_or_default())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |_| activate(ctx, &value)
        >
            {children()}
        </button>
    }
}

/// Panel shown only while its tab is selected. Otherwise nothing is
/// rendered and the previous subtree is dropped.
#[component]
pub fn TabsContent(
    /// Tab this panel belongs to
    #[prop(into)]
    value: TabValue,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = use_tabs_context();
    if ctx.is_none() {
        log::warn!("TabsContent `{}` rendered outside of Tabs", value);
    }

    let is_selected = Memo::new(move |_| ctx.is_some_and(|ctx| ctx.is_selected(&value)));

    move || {
        is_selected.get().then(|| {
            view! {
                <div
                    id=move || id.get()
                    role="tabpanel"
                    class=move || class_list(&["tabs__content", &class.get().unwrap_or_default()])
                >
                    {children()}
                </div>
            }
        })
    }
}
