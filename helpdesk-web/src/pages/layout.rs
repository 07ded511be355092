use crate::config::AppConfig;
use crate::demo_data::DEMO_AGENT;
use crate::Route;
use dioxus::prelude::*;
use helpdesk_common::{Align, BadgeVariant, Breakpoint, Justify, MaxWidth, Spacing};
use helpdesk_ui::stores::use_toaster_provider;
use helpdesk_ui::{
    BadgePill, LayoutItem, MessageSquareIcon, ResponsiveContainer, ResponsiveFlex, ToastHost,
};

#[component]
pub fn AppLayout() -> Element {
    use_toaster_provider();
    let config = use_context::<AppConfig>();
    let demo = config.uses_demo_data();

    rsx! {
        div { class: "flex h-full flex-col bg-background text-foreground",
            header { class: "shrink-0 border-b border-border",
                ResponsiveContainer { max_width: MaxWidth::Full, class: Some("py-2".to_string()),
                    ResponsiveFlex {
                        align: Some(Align::Center.into()),
                        justify: Some(Justify::Between.into()),
                        gap: Some(Spacing::S3.into()),
                        LayoutItem { class: Some("flex items-center gap-2".to_string()),
                            MessageSquareIcon { class: "w-5 h-5 text-primary" }
                            h1 { class: "text-base font-semibold", "Helpdesk" }
                            if demo {
                                BadgePill { label: "Demo data".to_string(), variant: BadgeVariant::Warning }
                            }
                        }
                        if demo {
                            LayoutItem {
                                show_from: Some(Breakpoint::Sm),
                                class: Some("text-sm text-muted-foreground".to_string()),
                                "Signed in as {DEMO_AGENT}"
                            }
                        }
                    }
                }
            }
            main { class: "min-h-0 flex-1", Outlet::<Route> {} }
            ToastHost {}
        }
    }
}
