use serde::{Deserialize, Serialize};

use crate::character::CharacterId;

/// Number of book slots in a character's layout.
pub const SLOT_COUNT: usize = 11;

/// Slots below this index hold combat books; the rest hold passive books.
/// The index is the sole discriminator of book kind.
pub const COMBAT_SLOTS: usize = 5;

/// A character's learned-skill record, one row per character.
///
/// `layout` is the opaque persisted document owned by the layout codec in
/// grimoire-core; `skill_points` is the unspent progression currency consumed
/// by the skill-tree logic elsewhere in the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRecord {
    pub character_id: CharacterId,
    pub skill_points: i32,
    pub layout: String,
}

/// Decoded form of a record's layout: eleven positionally meaningful book
/// slots. Indices 0-4 are combat books (several skills each), 5-10 passive
/// books (a single upgrade-level entry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLayout {
    pub slots: Vec<SkillSlot>,
}

impl SkillLayout {
    /// The layout a record starts with: every slot empty.
    pub fn empty() -> Self {
        Self {
            slots: vec![SkillSlot::default(); SLOT_COUNT],
        }
    }

    /// Enhancement level of `skill_id` wherever it is equipped, `0` when it
    /// is not present anywhere. Absence is a valid, silent outcome.
    pub fn plus_of(&self, skill_id: u32) -> u8 {
        self.slots
            .iter()
            .flat_map(|slot| &slot.skills)
            .find(|entry| entry.skill_id == skill_id)
            .map(|entry| entry.plus)
            .unwrap_or(0)
    }
}

/// One book slot. `book_id == 0` means the slot is empty and the encoder
/// emits nothing for it.
///
/// Serde defaults let the original servers' empty-object slots (`{}`) decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSlot {
    #[serde(rename = "book", default)]
    pub book_id: u32,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
}

/// A skill socketed into a book, in the order the player placed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub skill_id: u32,
    pub plus: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_layout_has_all_slots_vacant() {
        let layout = SkillLayout::empty();
        assert_eq!(layout.slots.len(), SLOT_COUNT);
        assert!(layout.slots.iter().all(|s| s.book_id == 0 && s.skills.is_empty()));
    }

    #[test]
    fn test_plus_of_finds_entry_in_any_slot() {
        let mut layout = SkillLayout::empty();
        layout.slots[6] = SkillSlot {
            book_id: 11,
            skills: vec![SkillEntry {
                skill_id: 41104,
                plus: 4,
            }],
        };

        assert_eq!(layout.plus_of(41104), 4);
    }

    #[test]
    fn test_plus_of_miss_is_zero() {
        assert_eq!(SkillLayout::empty().plus_of(90210), 0);
    }

    #[test]
    fn test_empty_object_slot_decodes() {
        let slot: SkillSlot = serde_json::from_str("{}").unwrap();
        assert_eq!(slot, SkillSlot::default());
    }
}
