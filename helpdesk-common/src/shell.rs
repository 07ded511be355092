//! Master-detail arrangement
//!
//! The shell's only decision: which panes go where for a given viewport and
//! navigation state. Both inputs come from the caller on every render; the
//! shell holds no state of its own.

/// Named content slots of the shell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pane {
    Left,
    Center,
    DetailLeft,
    DetailRight,
}

/// Which slots the caller filled in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanePresence {
    pub left: bool,
    pub center: bool,
    pub detail_left: bool,
    pub detail_right: bool,
}

impl PanePresence {
    pub fn all() -> Self {
        Self {
            left: true,
            center: true,
            detail_left: true,
            detail_right: true,
        }
    }

    pub fn has(&self, pane: Pane) -> bool {
        match pane {
            Pane::Left => self.left,
            Pane::Center => self.center,
            Pane::DetailLeft => self.detail_left,
            Pane::DetailRight => self.detail_right,
        }
    }
}

/// Accessible labels for panes and shell controls
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellLabels {
    pub left: String,
    pub center: String,
    pub detail_left: String,
    pub detail_right: String,
    pub sheet_trigger: String,
    pub back: String,
}

impl Default for ShellLabels {
    fn default() -> Self {
        Self {
            left: "Inbox list".to_string(),
            center: "Conversation list".to_string(),
            detail_left: "Message thread".to_string(),
            detail_right: "Reply and actions".to_string(),
            sheet_trigger: "Actions & Reply".to_string(),
            back: "Back".to_string(),
        }
    }
}

impl ShellLabels {
    pub fn for_pane(&self, pane: Pane) -> &str {
        match pane {
            Pane::Left => &self.left,
            Pane::Center => &self.center,
            Pane::DetailLeft => &self.detail_left,
            Pane::DetailRight => &self.detail_right,
        }
    }
}

/// Result of [`arrange`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellLayout {
    /// Panes rendered inline, in order
    pub inline: Vec<Pane>,
    /// Pane relocated into the bottom sheet (mobile detail only)
    pub sheet: Option<Pane>,
    pub show_back: bool,
    /// Grid template for the inline panes; tracks match `inline.len()`
    pub grid_class: &'static str,
}

impl ShellLayout {
    /// Every pane the layout places somewhere, inline or in the sheet
    pub fn placed(&self) -> Vec<Pane> {
        self.inline.iter().copied().chain(self.sheet).collect()
    }

    /// Whether the bottom sheet shows, given the last open/close request.
    /// Always false when no pane is in the sheet.
    pub fn sheet_visible(&self, requested: bool) -> bool {
        requested && self.sheet.is_some()
    }
}

const LIST_SPLIT: &str = "grid-cols-[minmax(240px,320px)_minmax(0,1fr)]";
const DETAIL_SPLIT: &str = "grid-cols-[minmax(0,1fr)_minmax(320px,400px)]";
const SINGLE: &str = "grid-cols-1";

/// Decide the arrangement. Missing slots are dropped and the grid template
/// shrinks to the remaining panes; this is never an error.
pub fn arrange(is_mobile: bool, is_detail: bool, presence: PanePresence) -> ShellLayout {
    let keep = |panes: &[Pane]| -> Vec<Pane> {
        panes.iter().copied().filter(|p| presence.has(*p)).collect()
    };

    match (is_mobile, is_detail) {
        (false, false) => desktop(keep(&[Pane::Left, Pane::Center]), LIST_SPLIT),
        (false, true) => desktop(keep(&[Pane::DetailLeft, Pane::DetailRight]), DETAIL_SPLIT),
        (true, false) => ShellLayout {
            inline: keep(&[Pane::Center]),
            sheet: None,
            show_back: false,
            grid_class: SINGLE,
        },
        (true, true) => ShellLayout {
            inline: keep(&[Pane::DetailLeft]),
            sheet: Some(Pane::DetailRight).filter(|p| presence.has(*p)),
            show_back: true,
            grid_class: SINGLE,
        },
    }
}

fn desktop(inline: Vec<Pane>, split: &'static str) -> ShellLayout {
    let grid_class = if inline.len() == 2 { split } else { SINGLE };
    ShellLayout {
        inline,
        sheet: None,
        show_back: false,
        grid_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_list() {
        let layout = arrange(false, false, PanePresence::all());
        assert_eq!(layout.placed(), vec![Pane::Left, Pane::Center]);
        assert_eq!(layout.grid_class, LIST_SPLIT);
        assert!(!layout.show_back);
    }

    #[test]
    fn test_desktop_detail() {
        let layout = arrange(false, true, PanePresence::all());
        assert_eq!(layout.placed(), vec![Pane::DetailLeft, Pane::DetailRight]);
        assert_eq!(layout.grid_class, DETAIL_SPLIT);
        assert!(!layout.show_back);
    }

    #[test]
    fn test_mobile_list() {
        let layout = arrange(true, false, PanePresence::all());
        assert_eq!(layout.placed(), vec![Pane::Center]);
        assert_eq!(layout.sheet, None);
        assert!(!layout.show_back);
    }

    #[test]
    fn test_mobile_detail_moves_right_pane_into_sheet() {
        let layout = arrange(true, true, PanePresence::all());
        assert_eq!(layout.inline, vec![Pane::DetailLeft]);
        assert_eq!(layout.sheet, Some(Pane::DetailRight));
        assert!(layout.show_back);
    }

    #[test]
    fn test_missing_left_pane_collapses_grid() {
        let presence = PanePresence {
            left: false,
            ..PanePresence::all()
        };
        let layout = arrange(false, false, presence);
        assert_eq!(layout.inline, vec![Pane::Center]);
        assert_eq!(layout.grid_class, SINGLE);
    }

    #[test]
    fn test_mobile_detail_without_right_pane_has_no_sheet() {
        let presence = PanePresence {
            detail_right: false,
            ..PanePresence::all()
        };
        let layout = arrange(true, true, presence);
        assert_eq!(layout.sheet, None);
        assert!(layout.show_back);
    }

    #[test]
    fn test_empty_shell() {
        let layout = arrange(false, true, PanePresence::default());
        assert!(layout.placed().is_empty());
    }

    #[test]
    fn test_default_labels() {
        let labels = ShellLabels::default();
        assert_eq!(labels.for_pane(Pane::Left), "Inbox list");
        assert_eq!(labels.for_pane(Pane::DetailRight), "Reply and actions");
    }

    #[test]
    fn test_sheet_hidden_once_sheet_pane_leaves() {
        let mobile_detail = arrange(true, true, PanePresence::all());
        assert!(mobile_detail.sheet_visible(true));
        assert!(!mobile_detail.sheet_visible(false));

        let desktop = arrange(false, true, PanePresence::all());
        assert!(!desktop.sheet_visible(true));
        let mobile_list = arrange(true, false, PanePresence::all());
        assert!(!mobile_list.sheet_visible(true));
    }
}
