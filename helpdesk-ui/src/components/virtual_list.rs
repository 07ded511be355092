//! Virtual scrolling list
//!
//! Renders only the rows intersecting the scroll container plus a buffer,
//! with spacer padding keeping the full scroll height. Rows must all have
//! the same height.

use dioxus::prelude::*;
use helpdesk_common::VirtualWindow;
use std::rc::Rc;

/// Wrapper for row render functions that allows capturing state.
/// PartialEq returns false to ensure re-renders when the closure might have changed.
pub struct RenderFn<T>(pub Rc<dyn Fn(T, usize) -> Element>);

impl<T> Clone for RenderFn<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for RenderFn<T> {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

#[component]
pub fn VirtualList<T: Clone + PartialEq + 'static>(
    items: Vec<T>,
    render_item: RenderFn<T>,
    /// Fixed row height in pixels, including any gap
    row_height: f64,
    #[props(default = 4)] buffer_rows: usize,
    #[props(default)] aria_label: Option<String>,
    /// Must give the container a height constraint, or every row renders
    #[props(default = "h-full".to_string())]
    class: String,
) -> Element {
    let mut scroll_top = use_signal(|| 0.0_f64);
    let mut viewport_height = use_signal(|| 800.0_f64); // Default until measured
    let mut mounted_element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let window = VirtualWindow::calculate(
        items.len(),
        row_height,
        buffer_rows,
        viewport_height(),
        scroll_top(),
    );
    let visible: Vec<(usize, T)> = items[window.range()]
        .iter()
        .enumerate()
        .map(|(i, item)| (window.start_idx + i, item.clone()))
        .collect();

    if visible.len() > 200 {
        tracing::warn!(
            "VirtualList rendering {} of {} rows; is the container height constrained?",
            visible.len(),
            items.len()
        );
    }

    rsx! {
        div {
            class: "overflow-y-auto {class}",
            // Browser scroll anchoring fights virtual scrolling
            style: "overflow-anchor: none;",
            role: "list",
            aria_label: aria_label.as_deref(),
            onscroll: move |_| {
                if let Some(element) = mounted_element.read().clone() {
                    spawn(async move {
                        if let Ok(scroll) = element.get_scroll_offset().await {
                            scroll_top.set(scroll.y);
                        }
                    });
                }
            },
            onresize: move |evt| {
                if let Ok(size) = evt.get_content_box_size() {
                    if (viewport_height() - size.height).abs() > 1.0 {
                        viewport_height.set(size.height);
                    }
                }
            },
            onmounted: move |evt| {
                let data = evt.data();
                mounted_element.set(Some(data.clone()));
                spawn(async move {
                    if let Ok(rect) = data.get_client_rect().await {
                        viewport_height.set(rect.height());
                    }
                });
            },
            div { style: "height: {window.top_padding}px;" }
            for (idx, item) in visible {
                div {
                    key: "{idx}",
                    role: "listitem",
                    style: "height: {row_height}px;",
                    {(render_item.0)(item, idx)}
                }
            }
            div { style: "height: {window.bottom_padding}px;" }
        }
    }
}
