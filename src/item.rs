//! The element type stored in the queues

/// An `(id, priority)` pair stored in a queue
///
/// The `id` is opaque to the heap. Callers that need to identify queued
/// elements must keep ids unique themselves; duplicates are accepted
/// without complaint.
///
/// Priorities compare as plain `f32`. A NaN priority has no defined place
/// in the ordering: pushing one does not panic, but the extraction order
/// of the whole heap becomes unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: u32,
    pub prio: f32,
}

impl Item {
    pub fn new(id: u32, prio: f32) -> Self {
        Self { id, prio }
    }
}

impl From<(u32, f32)> for Item {
    fn from((id, prio): (u32, f32)) -> Self {
        Self { id, prio }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        assert_eq!(Item::from((7, 1.5)), Item::new(7, 1.5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Item::new(3, 0.5)).unwrap();
        assert_eq!(json, r#"{"id":3,"prio":0.5}"#);

        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Item::new(3, 0.5));
    }
}
