//! Responsive ordering rules for the main toolbar.

use serde::{Deserialize, Serialize};

/// Pairs a viewport width with the preferred main-bar ordering at that width.
///
/// A rule applies when the viewport is strictly wider than `width`. The
/// length of `order` is the number of main-bar slots available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRule {
    /// Minimum viewport width in pixels (exclusive)
    pub width: u32,
    /// Button keys in preferred main-bar order
    pub order: Vec<String>,
}

impl ThresholdRule {
    pub fn new<I, S>(width: u32, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            width,
            order: order.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of main-bar slots this rule provides.
    pub fn slots(&self) -> usize {
        self.order.len()
    }

    pub fn applies_to(&self, client_width: u32) -> bool {
        client_width > self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_only_above_width() {
        let rule = ThresholdRule::new(400, ["microphone", "camera"]);
        assert!(rule.applies_to(401));
        assert!(!rule.applies_to(400));
        assert_eq!(rule.slots(), 2);
    }
}
