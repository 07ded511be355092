//! Reusable button component

use dioxus::prelude::*;
use helpdesk_common::ClassList;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for special cases.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_expanded: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_expanded: aria_expanded.map(|e| if e { "true" } else { "false" }),
            aria_disabled: if is_disabled { Some("true") } else { None },
            aria_busy: if loading { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Primary color fill - for the main action of a pane
    Primary,
    /// Muted fill - for secondary actions
    Secondary,
    /// Bordered, transparent fill
    Outline,
    /// Destructive fill - for closing or deleting
    Danger,
    /// No background - text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-sm
    Small,
    /// Standard padding
    Medium,
    /// Square, icon only
    Icon,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let size_class = match size {
        ButtonSize::Small => "h-8 px-3 text-sm",
        ButtonSize::Medium => "h-9 px-4 text-sm",
        ButtonSize::Icon => "h-9 w-9 justify-center",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-primary text-primary-foreground hover:bg-primary/90",
        ButtonVariant::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
        ButtonVariant::Outline => "border border-input bg-background hover:bg-accent hover:text-accent-foreground",
        ButtonVariant::Danger => "bg-destructive text-destructive-foreground hover:bg-destructive/90",
        ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
    };

    let mut list = ClassList::base(
        "inline-flex items-center gap-2 rounded-md font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
    );
    list.push(size_class).push(variant_class);

    rsx! {
        ChromelessButton {
            id,
            disabled,
            loading,
            aria_label,
            class: Some(list.finish(class.as_deref())),
            onclick,
            {children}
        }
    }
}
