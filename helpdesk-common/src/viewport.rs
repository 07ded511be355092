//! Viewport classification
//!
//! The width itself is measured by the host (see `helpdesk-ui`'s
//! `use_viewport`); this only maps it onto the three classes the screens
//! branch on.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

/// Exclusive upper widths, in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportThresholds {
    pub mobile_max: f64,
    pub tablet_max: f64,
}

impl Default for ViewportThresholds {
    fn default() -> Self {
        Self {
            mobile_max: 768.0,
            tablet_max: 1024.0,
        }
    }
}

impl ViewportClass {
    pub fn classify(width: f64, thresholds: ViewportThresholds) -> Self {
        if width < thresholds.mobile_max {
            ViewportClass::Mobile
        } else if width < thresholds.tablet_max {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        *self == ViewportClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        *self == ViewportClass::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        *self == ViewportClass::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let t = ViewportThresholds::default();
        assert_eq!(ViewportClass::classify(375.0, t), ViewportClass::Mobile);
        assert_eq!(ViewportClass::classify(767.9, t), ViewportClass::Mobile);
        assert_eq!(ViewportClass::classify(768.0, t), ViewportClass::Tablet);
        assert_eq!(ViewportClass::classify(1023.0, t), ViewportClass::Tablet);
        assert_eq!(ViewportClass::classify(1024.0, t), ViewportClass::Desktop);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = ViewportThresholds {
            mobile_max: 600.0,
            tablet_max: 900.0,
        };
        assert!(ViewportClass::classify(700.0, t).is_tablet());
        assert!(ViewportClass::classify(599.0, t).is_mobile());
        assert!(ViewportClass::classify(900.0, t).is_desktop());
    }
}
