//! Fixed conversation filters shown under the inbox selector

/// The six filters every inbox offers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InboxFilter {
    Unassigned,
    Mine,
    #[default]
    All,
    Open,
    Snoozed,
    Closed,
}

/// Icon drawn next to a filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterIcon {
    UserX,
    User,
    Inbox,
    CircleDot,
    Clock,
    CheckCircle,
}

impl InboxFilter {
    pub const ALL: [InboxFilter; 6] = [
        InboxFilter::Unassigned,
        InboxFilter::Mine,
        InboxFilter::All,
        InboxFilter::Open,
        InboxFilter::Snoozed,
        InboxFilter::Closed,
    ];

    /// Stable id used by the backend and in URLs
    pub fn id(&self) -> &'static str {
        match self {
            InboxFilter::Unassigned => "unassigned",
            InboxFilter::Mine => "mine",
            InboxFilter::All => "all",
            InboxFilter::Open => "open",
            InboxFilter::Snoozed => "snoozed",
            InboxFilter::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InboxFilter::Unassigned => "Unassigned",
            InboxFilter::Mine => "Assigned to me",
            InboxFilter::All => "All conversations",
            InboxFilter::Open => "Open",
            InboxFilter::Snoozed => "Snoozed",
            InboxFilter::Closed => "Closed",
        }
    }

    pub fn icon(&self) -> FilterIcon {
        match self {
            InboxFilter::Unassigned => FilterIcon::UserX,
            InboxFilter::Mine => FilterIcon::User,
            InboxFilter::All => FilterIcon::Inbox,
            InboxFilter::Open => FilterIcon::CircleDot,
            InboxFilter::Snoozed => FilterIcon::Clock,
            InboxFilter::Closed => FilterIcon::CheckCircle,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }
}

/// Badge counts per filter, as reported by the backend
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCounts {
    counts: [u32; 6],
}

impl FilterCounts {
    /// Build from `(filter id, count)` pairs; unknown ids are ignored
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let mut counts = Self::default();
        for (id, count) in pairs {
            if let Some(filter) = InboxFilter::from_id(id) {
                counts.set(filter, count);
            }
        }
        counts
    }

    pub fn get(&self, filter: InboxFilter) -> u32 {
        self.counts[Self::index(filter)]
    }

    pub fn set(&mut self, filter: InboxFilter, count: u32) {
        self.counts[Self::index(filter)] = count;
    }

    fn index(filter: InboxFilter) -> usize {
        InboxFilter::ALL
            .iter()
            .position(|f| *f == filter)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for filter in InboxFilter::ALL {
            assert_eq!(InboxFilter::from_id(filter.id()), Some(filter));
        }
        assert_eq!(InboxFilter::from_id("spam"), None);
    }

    #[test]
    fn test_counts_from_pairs() {
        let counts = FilterCounts::from_pairs([("open", 12), ("mine", 3), ("bogus", 99)]);
        assert_eq!(counts.get(InboxFilter::Open), 12);
        assert_eq!(counts.get(InboxFilter::Mine), 3);
        assert_eq!(counts.get(InboxFilter::Closed), 0);
    }

    #[test]
    fn test_icons_are_fixed_per_filter() {
        assert_eq!(InboxFilter::Snoozed.icon(), FilterIcon::Clock);
        assert_eq!(InboxFilter::Unassigned.icon(), FilterIcon::UserX);
    }
}
