//! Master-detail shell
//!
//! Places up to four panes according to the viewport and whether the caller
//! is showing a list or a detail. The arrangement itself is decided by
//! [`helpdesk_common::arrange`]; this component only renders it.
//!
//! On mobile the detail view shows the thread inline and moves the right
//! pane into a [`BottomSheet`] opened from a trigger button.

use crate::components::bottom_sheet::BottomSheet;
use crate::components::icons::{ArrowLeftIcon, ChevronUpIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use helpdesk_common::{arrange, ClassList, Pane, PanePresence, ShellLabels};

#[component]
pub fn MasterDetailShell(
    is_mobile: bool,
    is_detail: bool,
    #[props(default)] left: Option<Element>,
    #[props(default)] center: Option<Element>,
    #[props(default)] detail_left: Option<Element>,
    #[props(default)] detail_right: Option<Element>,
    /// Called verbatim from the mobile back button
    #[props(default)]
    on_back: Option<EventHandler<()>>,
    #[props(default)] labels: ShellLabels,
    #[props(default)] class: Option<String>,
) -> Element {
    let mut sheet_open = use_signal(|| false);

    let presence = PanePresence {
        left: left.is_some(),
        center: center.is_some(),
        detail_left: detail_left.is_some(),
        detail_right: detail_right.is_some(),
    };
    let layout = arrange(is_mobile, is_detail, presence);

    // Closed whenever the sheet pane goes away, so it never reopens by itself
    let has_sheet = layout.sheet.is_some();
    use_effect(use_reactive((&has_sheet,), move |(has_sheet,)| {
        if !has_sheet && *sheet_open.peek() {
            sheet_open.set(false);
        }
    }));
    let sheet_visible = layout.sheet_visible(sheet_open());

    let pane = |pane: Pane| -> Option<Element> {
        match pane {
            Pane::Left => left.clone(),
            Pane::Center => center.clone(),
            Pane::DetailLeft => detail_left.clone(),
            Pane::DetailRight => detail_right.clone(),
        }
    };

    let mut grid = ClassList::base("grid h-full min-h-0 gap-0");
    grid.push(layout.grid_class);
    let grid_class = grid.finish(class.as_deref());

    let inline: Vec<(Pane, String, Element)> = layout
        .inline
        .iter()
        .filter_map(|p| Some((*p, labels.for_pane(*p).to_string(), pane(*p)?)))
        .collect();
    let sheet = layout.sheet.and_then(pane);
    let sheet_label = labels.sheet_trigger.clone();
    let sheet_title = labels.detail_right.clone();
    let back_label = labels.back.clone();

    rsx! {
        div { class: "flex h-full min-h-0 flex-col",
            if layout.show_back {
                div { class: "flex items-center border-b border-border px-2 py-1.5",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        aria_label: Some(back_label.clone()),
                        onclick: move |_| {
                            if let Some(handler) = on_back {
                                handler.call(());
                            }
                        },
                        ArrowLeftIcon {}
                        "{back_label}"
                    }
                }
            }
            div { class: "{grid_class}",
                for (p, label, content) in inline {
                    section {
                        key: "{p:?}",
                        class: "flex min-h-0 min-w-0 flex-col overflow-hidden border-border [&:not(:last-child)]:border-r",
                        aria_label: "{label}",
                        {content}
                    }
                }
            }
            if let Some(content) = sheet {
                div { class: "border-t border-border bg-background p-2",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        class: Some("w-full justify-center".to_string()),
                        aria_label: Some(sheet_label.clone()),
                        onclick: move |_| sheet_open.set(true),
                        ChevronUpIcon {}
                        "{sheet_label}"
                    }
                }
                BottomSheet {
                    is_open: sheet_visible,
                    on_close: move |_| sheet_open.set(false),
                    title: Some(sheet_title.clone()),
                    section { aria_label: "{sheet_title}", {content} }
                }
            }
        }
    }
}
