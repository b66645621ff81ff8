use serde::{Deserialize, Serialize};

/// An entry of the directory service's decorative color palette.
///
/// Used purely as a card accent on the members pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: u64,
    pub name: String,
    pub year: u32,
    /// Hex value, e.g. `"#98B2D1"`.
    pub color: String,
    pub pantone_value: String,
}
