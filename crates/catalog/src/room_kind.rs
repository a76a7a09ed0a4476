//! Room-kind presets: the furniture a host UI suggests for each kind of
//! room.

/// Kinds of room with curated furniture suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    /// Sleeping room.
    Bedroom,
    /// Lounge / living room.
    LivingRoom,
    /// Bathroom.
    Bathroom,
}

impl RoomKind {
    /// Parse a room kind from a string (e.g., "bedroom", "living room").
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bedroom" => Some(RoomKind::Bedroom),
            "living room" | "livingroom" => Some(RoomKind::LivingRoom),
            "bathroom" => Some(RoomKind::Bathroom),
            _ => None,
        }
    }

    /// Furniture types typically placed in this kind of room.
    pub fn suggested_furniture(self) -> &'static [&'static str] {
        match self {
            RoomKind::Bedroom => &["Bed", "Nightstand", "Dresser", "Wardrobe"],
            RoomKind::LivingRoom => &["Sofa", "Coffee Table", "TV Stand", "Armchair"],
            RoomKind::Bathroom => &["Toilet", "Sink", "Shower", "Bathtub"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FurnitureCatalog;

    #[test]
    fn parse_accepts_spaced_and_compact_forms() {
        assert_eq!(RoomKind::parse("Living Room"), Some(RoomKind::LivingRoom));
        assert_eq!(RoomKind::parse("bedroom"), Some(RoomKind::Bedroom));
        assert_eq!(RoomKind::parse("garage"), None);
    }

    #[test]
    fn every_suggestion_has_an_authored_catalog_entry() {
        let catalog = FurnitureCatalog::built_in();
        for kind in [RoomKind::Bedroom, RoomKind::LivingRoom, RoomKind::Bathroom] {
            for name in kind.suggested_furniture() {
                assert!(catalog.contains(name), "missing catalog entry for {name}");
            }
        }
    }
}
