use super::value::TabValue;
use leptos::prelude::*;

/// Who owns the selection. Resolved once when the container is created.
#[derive(Clone, Copy)]
pub enum SelectionMode {
    /// The container keeps its own slot, seeded from the initial value.
    Uncontrolled {
        selected: RwSignal<Option<TabValue>>,
    },
    /// The selection lives outside; the container only reads it.
    Controlled { value: Signal<Option<TabValue>> },
}

/// Shared selection state handed from `Tabs` to its triggers and panels.
#[derive(Clone, Copy)]
pub struct TabsContext {
    mode: SelectionMode,
    on_change: Option<Callback<TabValue>>,
}

impl TabsContext {
    pub fn new(
        default_value: Option<TabValue>,
        value: Option<Signal<Option<TabValue>>>,
        on_change: Option<Callback<TabValue>>,
    ) -> Self {
        let mode = match value {
            Some(value) => SelectionMode::Controlled { value },
            None => SelectionMode::Uncontrolled {
                selected: RwSignal::new(default_value),
            },
        };
        Self { mode, on_change }
    }

    pub fn uncontrolled(default_value: Option<TabValue>) -> Self {
        Self::new(default_value, None, None)
    }

    pub fn controlled(
        value: Signal<Option<TabValue>>,
        on_change: Option<Callback<TabValue>>,
    ) -> Self {
        Self::new(None, Some(value), on_change)
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, SelectionMode::Controlled { .. })
    }

    /// Effective selection. Tracked when read inside a reactive scope.
    pub fn current(&self) -> Option<TabValue> {
        match self.mode {
            SelectionMode::Uncontrolled { selected } => selected.get(),
            SelectionMode::Controlled { value } => value.get(),
        }
    }

    pub fn is_selected(&self, candidate: &TabValue) -> bool {
        match self.mode {
            SelectionMode::Uncontrolled { selected } => {
                selected.with(|current| current.as_ref() == Some(candidate))
            }
            SelectionMode::Controlled { value } => {
                value.with(|current| current.as_ref() == Some(candidate))
            }
        }
    }

    /// Single write entry point. A supplied callback takes over the change
    /// entirely; otherwise an uncontrolled container updates its own slot.
    pub fn request_change(&self, new_value: TabValue) {
        log::debug!("tabs: selection requested: {}", new_value);

        if let Some(handler) = self.on_change {
            handler.run(new_value);
            return;
        }

        match self.mode {
            SelectionMode::Uncontrolled { selected } => selected.set(Some(new_value)),
            SelectionMode::Controlled { .. } => {
                log::debug!("tabs: controlled without on_value_change, request dropped");
            }
        }
    }
}

/// Looks up the nearest `Tabs` container. `None` outside of one.
pub fn use_tabs_context() -> Option<TabsContext> {
    use_context::<TabsContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::{Arc, Mutex};

    fn tab(value: &str) -> TabValue {
        TabValue::from(value)
    }

    #[test]
    fn test_initial_value_selects_matching_tab() {
        Owner::new().with(|| {
            let ctx = TabsContext::uncontrolled(Some(tab("a")));
            assert!(!ctx.is_controlled());
            assert!(matches!(ctx.mode(), SelectionMode::Uncontrolled { .. }));
            assert!(ctx.is_selected(&tab("a")));
            assert!(!ctx.is_selected(&tab("b")));
        });
    }

    #[test]
    fn test_no_initial_value_selects_nothing() {
        Owner::new().with(|| {
            let ctx = TabsContext::uncontrolled(None);
            assert_eq!(ctx.current(), None);
            assert!(!ctx.is_selected(&tab("a")));
        });
    }

    #[test]
    fn test_uncontrolled_request_updates_selection() {
        Owner::new().with(|| {
            let ctx = TabsContext::uncontrolled(Some(tab("a")));
            ctx.request_change(tab("b"));
            assert!(!ctx.is_selected(&tab("a")));
            assert!(ctx.is_selected(&tab("b")));
            assert_eq!(ctx.current(), Some(tab("b")));
        });
    }

    #[test]
    fn test_request_for_selected_tab_is_idempotent() {
        Owner::new().with(|| {
            let ctx = TabsContext::uncontrolled(Some(tab("a")));
            let before = ctx.current();
            ctx.request_change(tab("a"));
            assert_eq!(ctx.current(), before);
            assert!(ctx.is_selected(&tab("a")));
        });
    }

    #[test]
    fn test_unknown_value_is_accepted_and_matches_nothing_else() {
        Owner::new().with(|| {
            let ctx = TabsContext::uncontrolled(Some(tab("a")));
            ctx.request_change(tab("missing"));
            assert_eq!(ctx.current(), Some(tab("missing")));
            assert!(!ctx.is_selected(&tab("a")));
        });
    }

    #[test]
    fn test_controlled_delegates_to_callback_once() {
        Owner::new().with(|| {
            let external = RwSignal::new(Some(tab("a")));
            let calls = Arc::new(Mutex::new(Vec::new()));
            let sink = calls.clone();
            let on_change = Callback::new(move |value: TabValue| {
                sink.lock().unwrap().push(value);
            });

            let ctx = TabsContext::controlled(external.into(), Some(on_change));
            assert!(ctx.is_controlled());
            assert!(matches!(ctx.mode(), SelectionMode::Controlled { .. }));

            ctx.request_change(tab("b"));
            assert_eq!(*calls.lock().unwrap(), vec![tab("b")]);
            // Nothing changes until the owner feeds the value back.
            assert!(ctx.is_selected(&tab("a")));

            external.set(Some(tab("b")));
            assert!(ctx.is_selected(&tab("b")));
            assert!(!ctx.is_selected(&tab("a")));
        });
    }

    #[test]
    fn test_callback_without_value_does_not_mutate() {
        Owner::new().with(|| {
            let calls = Arc::new(Mutex::new(0usize));
            let sink = calls.clone();
            let on_change = Callback::new(move |_: TabValue| {
                *sink.lock().unwrap() += 1;
            });

            let ctx = TabsContext::new(Some(tab("a")), None, Some(on_change));
            ctx.request_change(tab("b"));
            assert_eq!(*calls.lock().unwrap(), 1);
            assert!(ctx.is_selected(&tab("a")));
        });
    }

    #[test]
    fn test_controlled_without_callback_is_inert() {
        Owner::new().with(|| {
            let external = RwSignal::new(Some(tab("a")));
            let ctx = TabsContext::controlled(external.into(), None);
            ctx.request_change(tab("b"));
            assert!(ctx.is_selected(&tab("a")));
        });
    }

    #[test]
    fn test_external_round_trip_restores_initial_state() {
        Owner::new().with(|| {
            let external = RwSignal::new(Some(tab("x")));
            let ctx = TabsContext::controlled(external.into(), None);
            let initial = ctx.current();

            external.set(Some(tab("y")));
            external.set(Some(tab("y")));
            assert!(ctx.is_selected(&tab("y")));
            external.set(Some(tab("x")));

            assert_eq!(ctx.current(), initial);
            assert!(ctx.is_selected(&tab("x")));
            assert!(!ctx.is_selected(&tab("y")));
        });
    }

    #[test]
    fn test_missing_context_outside_container() {
        Owner::new().with(|| {
            assert!(use_tabs_context().is_none());
        });
    }

    #[test]
    fn test_context_provided_to_children() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(TabsContext::uncontrolled(Some(tab("a"))));
            let child = Owner::new();
            child.with(|| {
                let ctx = use_tabs_context();
                assert!(ctx.is_some_and(|ctx| ctx.is_selected(&tab("a"))));
            });
        });
    }
}
