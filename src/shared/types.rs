use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// New random record id
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct ToolDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub path: String,
    pub icon: String,
}

// ============================================================================
// Unit Converter
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct ConvertUnitsRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct CategoryDTO {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub unit_count: usize,
}

// Rich Unit Data Transfer Object for frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct UnitDTO {
    pub id: String,
    pub name: String,
    pub category: String,
    pub region: String,
    pub description: Option<String>,
    pub is_base: bool,
    /// None for temperature scales
    pub factor: Option<f64>,
    /// Base unit the factor refers to, for units of mixed categories
    pub dimension: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct UnitSearchHit {
    pub unit: UnitDTO,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct ConversionHistoryEntry {
    pub id: String,
    pub from_value: f64,
    pub from_unit: String,
    pub from_unit_name: String,
    pub to_value: f64,
    pub to_unit: String,
    pub to_unit_name: String,
    pub category: String,
    #[ts(type = "string")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct FavoriteConversion {
    pub id: String,
    pub from_unit: String,
    pub from_unit_name: String,
    pub to_unit: String,
    pub to_unit_name: String,
    pub category: String,
}

// ============================================================================
// Random Decision Maker
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct DecisionOption {
    pub id: String,
    pub label: String,
    pub weight: f64,
}

impl DecisionOption {
    pub fn new(label: impl Into<String>, weight: f64) -> Self {
        Self {
            id: generate_id(),
            label: label.into(),
            weight,
        }
    }

    pub fn with_id(id: impl Into<String>, label: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            weight,
        }
    }
}

/// Result of a single weighted pick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct WeightedDraw {
    pub selected: DecisionOption,
    pub index: usize,
    pub cumulative_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "tools.ts")]
pub enum DecisionMethod {
    Wheel,
    Pick,
    Shuffle,
    Dice,
    Coin,
    Cards,
    Numbers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct DecisionHistoryItem {
    pub id: String,
    #[ts(type = "string")]
    pub date: DateTime<Utc>,
    pub method: DecisionMethod,
    pub options: Vec<DecisionOption>,
    pub result: String,
    pub result_option: Option<DecisionOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct DecisionSet {
    pub id: String,
    pub name: String,
    pub options: Vec<DecisionOption>,
    pub method: DecisionMethod,
    #[ts(type = "string")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct DiceRoll {
    pub sides: u32,
    pub values: Vec<u32>,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct CoinFlip {
    pub results: Vec<String>,
    pub heads: usize,
    pub tails: usize,
}

/// Angular slice of the decision wheel, in radians
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct WheelSlice {
    pub option_id: String,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

// ============================================================================
// Color Format Converter
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// One color in every supported notation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct ColorValue {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub cmyk: Cmyk,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct ContrastResult {
    pub ratio: f64,
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
    pub aaa_large: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct SavedColor {
    pub id: String,
    pub name: String,
    pub color: ColorValue,
    #[ts(type = "string")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct SavedPalette {
    pub id: String,
    pub name: String,
    pub colors: Vec<ColorValue>,
    #[ts(type = "string")]
    pub date: DateTime<Utc>,
}

// ============================================================================
// Alphabet Generator
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct GenerationHistoryItem {
    pub id: String,
    #[ts(type = "string")]
    pub date: DateTime<Utc>,
    pub combinations: Vec<String>,
}

// ============================================================================
// Regex Pattern Tester
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct NamedGroup {
    pub name: String,
    pub value: Option<String>,
}

/// A single match, with byte offsets into the tested text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct RegexMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub groups: Vec<Option<String>>,
    pub named_groups: Vec<NamedGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct PatternTestResult {
    pub matches: Vec<RegexMatch>,
    pub match_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct HighlightSegment {
    pub text: String,
    pub is_match: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tools.ts")]
pub struct SavedPattern {
    pub id: String,
    pub name: String,
    pub pattern: String,
    pub flags: String,
    pub description: String,
    #[ts(type = "string")]
    pub date: DateTime<Utc>,
}
