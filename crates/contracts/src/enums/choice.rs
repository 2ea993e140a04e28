use crate::shared::filter::coerce::normalize;

/// Closed set of values offered by a filter select.
///
/// `None` at the use site plays the role of "Any".
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// All values in the order they are offered to the user
    fn all() -> &'static [Self];

    /// Human-readable label, also the value stored in the catalog
    fn display_name(&self) -> &'static str;

    /// Parse from a label, ignoring surrounding whitespace and case
    fn from_label(value: &str) -> Option<Self> {
        let wanted = normalize(value);
        if wanted.is_empty() {
            return None;
        }
        Self::all()
            .iter()
            .copied()
            .find(|c| normalize(c.display_name()) == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{GreaseCompatibility, LowFriction, YesNo};

    #[test]
    fn test_from_label_is_case_and_space_insensitive() {
        assert_eq!(LowFriction::from_label("  very low "), Some(LowFriction::VeryLow));
        assert_eq!(LowFriction::from_label("EXCELLENT"), Some(LowFriction::Excellent));
        assert_eq!(GreaseCompatibility::from_label("Best"), Some(GreaseCompatibility::Best));
        assert_eq!(YesNo::from_label("no"), Some(YesNo::No));
    }

    #[test]
    fn test_from_label_rejects_unknown_and_empty() {
        assert_eq!(LowFriction::from_label("Medium"), None);
        assert_eq!(LowFriction::from_label(""), None);
        assert_eq!(LowFriction::from_label("   "), None);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&LowFriction::VeryGood).unwrap();
        assert_eq!(json, "\"Very Good\"");
        let back: LowFriction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LowFriction::VeryGood);
    }
}
