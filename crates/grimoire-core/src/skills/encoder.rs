//! Skill book packet encoder.
//!
//! One pass per non-empty slot, concatenated in ascending slot order. Combat
//! books (slots 0-4) serialize every socketed skill at its catalog-defined
//! book position, zero-filling the positions in between. Passive books
//! (slots 5-10) emit an identity packet followed by the fixed upgrade
//! overlay. Empty slots (`book_id == 0`) emit nothing.

use grimoire_types::skills::{COMBAT_SLOTS, SkillLayout, SkillSlot};

use crate::catalog::SkillCatalog;
use crate::wire::PacketWriter;

/// Combat book packet opcode.
const OP_COMBAT_BOOK: u16 = 0x0181;

/// Passive book identity packet opcode.
const OP_PASSIVE_BOOK: u16 = 0x0182;

/// Width of one combat sub-slot on the wire: 4-byte skill id + 1-byte plus.
const SUB_SLOT_WIDTH: usize = 5;

/// Fixed upgrade overlay template owned by the client protocol; byte 8 takes
/// the passive slot index, byte 9 the plus level.
const PASSIVE_BOOK_UPGRADE: [u8; 12] = [
    0xAA, 0x55, 0x06, 0x00, 0x82, 0x05, 0x0A, 0x00, 0x00, 0x00, 0x55, 0xAA,
];

/// Encode every non-empty book slot of `layout` into one response buffer.
///
/// A fully empty layout produces an empty buffer. Never fails: entries with
/// a zero skill id or unknown to the catalog are skipped.
pub fn encode_books<C: SkillCatalog>(layout: &SkillLayout, catalog: &C) -> Vec<u8> {
    let mut response = Vec::new();
    for (index, slot) in layout.slots.iter().enumerate() {
        if slot.book_id == 0 {
            continue;
        }

        if index < COMBAT_SLOTS {
            response.extend(encode_combat_book(index as u8, slot, catalog));
        } else {
            response.extend(encode_passive_book((index - COMBAT_SLOTS) as u8, slot));
        }
    }
    response
}

fn encode_combat_book<C: SkillCatalog>(index: u8, slot: &SkillSlot, catalog: &C) -> Vec<u8> {
    let mut writer = PacketWriter::new(OP_COMBAT_BOOK);
    writer.write_u8(index);
    writer.write_u32_le(slot.book_id);
    writer.write_zeros(3);

    // Persisted order is player order; the wire wants catalog order.
    let mut entries: Vec<_> = slot
        .skills
        .iter()
        .filter(|entry| entry.skill_id != 0)
        .filter_map(|entry| {
            catalog
                .describe(entry.skill_id)
                .map(|info| (info.book_position, entry))
        })
        .collect();
    entries.sort_by_key(|(position, _)| *position);

    let mut next_position = 1;
    for (position, entry) in entries {
        while next_position < position {
            writer.write_zeros(SUB_SLOT_WIDTH);
            next_position += 1;
        }
        writer.write_u32_le(entry.skill_id);
        writer.write_u8(entry.plus);
        next_position += 1;
    }

    writer.finish()
}

fn encode_passive_book(passive_index: u8, slot: &SkillSlot) -> Vec<u8> {
    let mut writer = PacketWriter::new(OP_PASSIVE_BOOK);
    writer.write_u8(passive_index);
    writer.write_u32_le(slot.book_id);
    let mut packets = writer.finish();

    let plus = slot.skills.first().map(|entry| entry.plus).unwrap_or(0);
    let mut overlay = PASSIVE_BOOK_UPGRADE;
    overlay[8] = passive_index;
    overlay[9] = plus;
    packets.extend_from_slice(&overlay);

    packets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use grimoire_types::skills::SkillEntry;

    fn catalog() -> StaticCatalog {
        [(30001, 1), (30011, 2), (30021, 3), (30031, 4)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_all_empty_layout_encodes_to_nothing() {
        assert!(encode_books(&SkillLayout::empty(), &catalog()).is_empty());
    }

    #[test]
    fn test_combat_book_fills_gaps_up_to_catalog_position() {
        let mut layout = SkillLayout::empty();
        layout.slots[0] = SkillSlot {
            book_id: 7,
            skills: vec![SkillEntry {
                skill_id: 30021,
                plus: 2,
            }],
        };

        let mut expected = vec![
            0xAA, 0x55, // magic
            0x19, 0x00, // length: 10 + three 5-byte sub-slots
            0x81, 0x01, // opcode
            0x00, // slot index
            0x07, 0x00, 0x00, 0x00, // book id
            0x00, 0x00, 0x00, // reserved
        ];
        expected.extend_from_slice(&[0x00; 10]); // fillers for positions 1 and 2
        expected.extend_from_slice(&30021u32.to_le_bytes());
        expected.push(0x02); // plus
        expected.extend_from_slice(&[0x55, 0xAA]);

        assert_eq!(encode_books(&layout, &catalog()), expected);
    }

    #[test]
    fn test_combat_book_consecutive_positions_need_no_filler() {
        let mut layout = SkillLayout::empty();
        layout.slots[2] = SkillSlot {
            book_id: 9,
            skills: vec![
                SkillEntry {
                    skill_id: 30001,
                    plus: 1,
                },
                SkillEntry {
                    skill_id: 30011,
                    plus: 3,
                },
            ],
        };

        let packet = encode_books(&layout, &catalog());
        // length 10 + 2 entries, no fillers
        assert_eq!(&packet[2..4], &[0x14, 0x00]);
        assert_eq!(&packet[14..18], &30001u32.to_le_bytes());
        assert_eq!(packet[18], 0x01);
        assert_eq!(&packet[19..23], &30011u32.to_le_bytes());
        assert_eq!(packet[23], 0x03);
    }

    #[test]
    fn test_combat_book_sorts_player_order_before_encoding() {
        let sorted = {
            let mut layout = SkillLayout::empty();
            layout.slots[0] = SkillSlot {
                book_id: 7,
                skills: vec![
                    SkillEntry {
                        skill_id: 30011,
                        plus: 5,
                    },
                    SkillEntry {
                        skill_id: 30031,
                        plus: 6,
                    },
                ],
            };
            layout
        };
        let shuffled = {
            let mut layout = sorted.clone();
            layout.slots[0].skills.reverse();
            layout
        };

        assert_eq!(
            encode_books(&shuffled, &catalog()),
            encode_books(&sorted, &catalog()),
        );
    }

    #[test]
    fn test_combat_book_skips_unknown_and_zero_skills() {
        let mut layout = SkillLayout::empty();
        layout.slots[0] = SkillSlot {
            book_id: 7,
            skills: vec![
                SkillEntry {
                    skill_id: 0,
                    plus: 9,
                },
                SkillEntry {
                    skill_id: 99999,
                    plus: 9,
                },
            ],
        };

        let packet = encode_books(&layout, &catalog());
        // header only: nothing was socketed on the wire
        assert_eq!(&packet[2..4], &[0x0A, 0x00]);
        assert_eq!(packet.len(), 16);
    }

    #[test]
    fn test_passive_book_emits_identity_and_upgrade_overlay() {
        let mut layout = SkillLayout::empty();
        layout.slots[7] = SkillSlot {
            book_id: 11,
            skills: vec![SkillEntry {
                skill_id: 41104,
                plus: 4,
            }],
        };

        let expected = [
            // identity: passive index 2, book 11
            0xAA, 0x55, 0x07, 0x00, 0x82, 0x01, 0x02, 0x0B, 0x00, 0x00, 0x00, 0x55, 0xAA,
            // upgrade overlay: index 2, plus 4
            0xAA, 0x55, 0x06, 0x00, 0x82, 0x05, 0x0A, 0x00, 0x02, 0x04, 0x55, 0xAA,
        ];

        assert_eq!(encode_books(&layout, &catalog()), expected);
    }

    #[test]
    fn test_slots_concatenate_in_ascending_order() {
        let mut layout = SkillLayout::empty();
        layout.slots[6] = SkillSlot {
            book_id: 11,
            skills: vec![SkillEntry {
                skill_id: 41104,
                plus: 1,
            }],
        };
        layout.slots[1] = SkillSlot {
            book_id: 7,
            skills: vec![SkillEntry {
                skill_id: 30001,
                plus: 0,
            }],
        };

        let response = encode_books(&layout, &catalog());
        // combat packet for slot 1 first, then both passive packets
        assert_eq!(&response[..2], &[0xAA, 0x55]);
        assert_eq!(&response[4..6], &[0x81, 0x01]);
        assert_eq!(response[6], 0x01);
        let combat_end = 21;
        assert_eq!(&response[combat_end - 2..combat_end], &[0x55, 0xAA]);
        assert_eq!(&response[combat_end + 4..combat_end + 6], &[0x82, 0x01]);
        assert_eq!(response[combat_end + 6], 0x01);
    }
}
