//! Codec between a record's opaque persisted layout and `SkillLayout`.
//!
//! The persisted form is a JSON document (`{"slots": [...]}`). That choice is
//! internal; callers rely only on `decode(encode(x)) == x`.

use grimoire_types::error::CodecError;
use grimoire_types::skills::{SLOT_COUNT, SkillLayout};

/// The document a record starts with: eleven empty slots.
pub const DEFAULT_LAYOUT: &str = r#"{"slots": [{}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}]}"#;

/// Deserialize a persisted layout document.
pub fn decode(raw: &str) -> Result<SkillLayout, CodecError> {
    let layout: SkillLayout = serde_json::from_str(raw)?;
    if layout.slots.len() != SLOT_COUNT {
        return Err(CodecError::SlotCount {
            expected: SLOT_COUNT,
            got: layout.slots.len(),
        });
    }
    Ok(layout)
}

/// Serialize a layout back into its persisted form.
pub fn encode(layout: &SkillLayout) -> Result<String, CodecError> {
    Ok(serde_json::to_string(layout)?)
}
