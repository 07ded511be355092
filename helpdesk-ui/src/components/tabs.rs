//! Responsive tab groups
//!
//! Two ways in, one renderer:
//! - [`ItemTabs`] takes a flat list of [`TabItem`]s, each carrying its panel.
//! - [`ComposedTabs`] takes a [`TabListSpec`] for the triggers and free
//!   children; [`TabPanel`]s anywhere below read the active value from context.
//!
//! Inactive panels are not mounted.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use helpdesk_common::{
    adjacent_tab_value, duplicate_tab_value, SelectionMode, TabOrientation, TabSelection, TabSize,
    TabStyle, TabVariant,
};

static TABS_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One trigger in a tab list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabTriggerSpec {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl TabTriggerSpec {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Trigger strip of a [`ComposedTabs`] group
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabListSpec {
    pub triggers: Vec<TabTriggerSpec>,
    /// Accessible name of the tab list
    pub aria_label: Option<String>,
    /// Appended to the list's computed classes
    pub class: Option<String>,
    /// Appended to every trigger's computed classes
    pub trigger_class: Option<String>,
}

/// A tab of an [`ItemTabs`] group together with its panel
#[derive(Clone)]
pub struct TabItem {
    pub value: String,
    pub label: String,
    pub icon: Option<Element>,
    pub disabled: bool,
    pub content: Element,
}

impl PartialEq for TabItem {
    // Elements can't be compared, so items always re-render
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

/// Active value and element ids shared with panels
#[derive(Clone)]
struct TabsContext {
    active: Memo<Option<String>>,
    group_id: String,
}

impl TabsContext {
    fn trigger_id(&self, value: &str) -> String {
        format!("{}-trigger-{}", self.group_id, value)
    }

    fn panel_id(&self, value: &str) -> String {
        format!("{}-panel-{}", self.group_id, value)
    }
}

struct TriggerView {
    value: String,
    label: String,
    icon: Option<Element>,
    disabled: bool,
}

/// Tab group built from a list of items
#[component]
pub fn ItemTabs(
    items: Vec<TabItem>,
    selection: ReadSignal<SelectionMode>,
    #[props(default)] on_change: Option<EventHandler<String>>,
    #[props(default)] variant: TabVariant,
    #[props(default)] size: TabSize,
    #[props(default)] orientation: TabOrientation,
    #[props(default)] full_width: bool,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] list_class: Option<String>,
    #[props(default)] trigger_class: Option<String>,
) -> Element {
    let style = TabStyle {
        variant,
        size,
        orientation,
        full_width,
    };
    let triggers: Vec<TriggerView> = items
        .iter()
        .map(|item| TriggerView {
            value: item.value.clone(),
            label: item.label.clone(),
            icon: item.icon.clone(),
            disabled: item.disabled,
        })
        .collect();

    TabsFrame(TabsFrameProps {
        triggers,
        selection,
        on_change,
        style,
        aria_label,
        class,
        list_class,
        trigger_class,
        children: rsx! {
            for item in items {
                TabPanel { key: "{item.value}", value: item.value.clone(), {item.content} }
            }
        },
    })
}

/// Tab group whose panels are free children
#[component]
pub fn ComposedTabs(
    list: TabListSpec,
    selection: ReadSignal<SelectionMode>,
    #[props(default)] on_change: Option<EventHandler<String>>,
    #[props(default)] variant: TabVariant,
    #[props(default)] size: TabSize,
    #[props(default)] orientation: TabOrientation,
    #[props(default)] full_width: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let style = TabStyle {
        variant,
        size,
        orientation,
        full_width,
    };
    let triggers = list
        .triggers
        .into_iter()
        .map(|t| TriggerView {
            value: t.value,
            label: t.label,
            icon: None,
            disabled: t.disabled,
        })
        .collect();

    TabsFrame(TabsFrameProps {
        triggers,
        selection,
        on_change,
        style,
        aria_label: list.aria_label,
        class,
        list_class: list.class,
        trigger_class: list.trigger_class,
        children,
    })
}

/// Panel shown while `value` is the active tab of the nearest group
#[component]
pub fn TabPanel(value: String, #[props(default)] class: Option<String>, children: Element) -> Element {
    let ctx = use_context::<TabsContext>();
    let is_active = ctx.active.read().as_deref() == Some(value.as_str());
    if !is_active {
        return rsx! {};
    }

    rsx! {
        div {
            id: ctx.panel_id(&value),
            role: "tabpanel",
            tabindex: "0",
            aria_labelledby: ctx.trigger_id(&value),
            "data-state": "active",
            class: class.as_deref(),
            {children}
        }
    }
}

struct TabsFrameProps {
    triggers: Vec<TriggerView>,
    selection: ReadSignal<SelectionMode>,
    on_change: Option<EventHandler<String>>,
    style: TabStyle,
    aria_label: Option<String>,
    class: Option<String>,
    list_class: Option<String>,
    trigger_class: Option<String>,
    children: Element,
}

/// Shared renderer. Called as a function from the two entry points so its
/// hooks belong to the caller's scope.
#[allow(non_snake_case)]
fn TabsFrame(props: TabsFrameProps) -> Element {
    let TabsFrameProps {
        triggers,
        selection,
        on_change,
        style,
        aria_label,
        class,
        list_class,
        trigger_class,
        children,
    } = props;

    let group_id = use_hook(|| {
        let id = TABS_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("tabs-{}", id)
    });
    let mut own = use_signal(|| TabSelection::new(&selection.peek()));
    let active = use_memo(move || own.read().active(&selection.read()).map(str::to_string));
    let ctx = use_context_provider(|| TabsContext {
        active,
        group_id: group_id.clone(),
    });

    if cfg!(debug_assertions) {
        if let Some(dup) = duplicate_tab_value(triggers.iter().map(|t| t.value.as_str())) {
            tracing::warn!("Tab group {} has duplicate value {:?}", group_id, dup);
        }
    }

    let enabled: Vec<String> = triggers
        .iter()
        .filter(|t| !t.disabled)
        .map(|t| t.value.clone())
        .collect();
    let mut select = move |value: String| {
        own.write().select(&selection.peek(), &value);
        if let Some(handler) = on_change {
            handler.call(value);
        }
    };

    let list_class = style.list_class(list_class.as_deref());
    let trigger_class = style.trigger_class(trigger_class.as_deref());
    let active_value = active();

    rsx! {
        div {
            class: class.as_deref(),
            "data-orientation": style.orientation.aria(),
            div {
                role: "tablist",
                class: "{list_class}",
                aria_label: aria_label.as_deref(),
                aria_orientation: style.orientation.aria(),
                for trigger in triggers {
                    {
                        let is_active = active_value.as_deref() == Some(trigger.value.as_str());
                        let value = trigger.value.clone();
                        let key_value = trigger.value.clone();
                        let enabled = enabled.clone();
                        rsx! {
                            button {
                                key: "{trigger.value}",
                                id: ctx.trigger_id(&trigger.value),
                                r#type: "button",
                                role: "tab",
                                class: "{trigger_class}",
                                disabled: trigger.disabled,
                                tabindex: if is_active { "0" } else { "-1" },
                                aria_selected: if is_active { "true" } else { "false" },
                                aria_controls: ctx.panel_id(&trigger.value),
                                "data-state": if is_active { "active" } else { "inactive" },
                                onclick: move |_| select(value.clone()),
                                onkeydown: move |e| {
                                    let forward = match e.key().to_string().as_str() {
                                        "ArrowRight" | "ArrowDown" => true,
                                        "ArrowLeft" | "ArrowUp" => false,
                                        _ => return,
                                    };
                                    e.prevent_default();
                                    let values: Vec<&str> = enabled.iter().map(String::as_str).collect();
                                    if let Some(next) = adjacent_tab_value(&values, Some(&key_value), forward) {
                                        select(next.to_string());
                                    }
                                },
                                if let Some(icon) = trigger.icon {
                                    {icon}
                                }
                                "{trigger.label}"
                            }
                        }
                    }
                }
            }
            {children}
        }
    }
}
