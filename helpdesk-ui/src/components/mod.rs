//! Shared UI components

pub mod badge;
pub mod bottom_sheet;
pub mod button;
pub mod conversation_list;
pub mod conversation_sidebar;
pub mod entity_list_row;
pub mod icons;
pub mod inbox_list;
pub mod layout;
pub mod master_detail;
pub mod message_thread;
pub mod reply_composer;
pub mod skeleton;
pub mod tabs;
pub mod toast;
pub mod utils;
pub mod virtual_list;

pub use badge::BadgePill;
pub use bottom_sheet::BottomSheet;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use conversation_list::ConversationList;
pub use conversation_sidebar::ConversationSidebar;
pub use entity_list_row::EntityListRow;
pub use icons::{
    ArrowLeftIcon, CheckCircleIcon, ChevronDownIcon, ChevronUpIcon, CircleDotIcon, ClockIcon,
    FileTextIcon, FilterIconView, InboxIcon, LanguagesIcon, LoaderIcon, MailIcon,
    MessageSquareIcon, SendIcon, SparklesIcon, UserIcon, UserXIcon, XIcon,
};
pub use inbox_list::InboxList;
pub use layout::{
    use_responsive_classes, AdaptiveSection, LayoutItem, ResponsiveContainer, ResponsiveFlex,
    ResponsiveGrid,
};
pub use master_detail::MasterDetailShell;
pub use message_thread::MessageThread;
pub use reply_composer::{ComposerActions, ReplyComposer};
pub use skeleton::{Skeleton, SkeletonRows};
pub use tabs::{ComposedTabs, ItemTabs, TabItem, TabListSpec, TabPanel, TabTriggerSpec};
pub use toast::ToastHost;
pub use utils::{format_message_time, format_relative_time, initials};
pub use virtual_list::{RenderFn, VirtualList};
