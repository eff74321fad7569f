//! Unit converter feature
//!
//! Category/base-unit registry with dimension-consistent conversions.
//! Linear categories scale through a single base unit, temperature routes
//! through Celsius, and mixed categories only convert between units that
//! share a dimension.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::ToolFeature;
use crate::core::storage::keys;
use crate::shared::error::{ToolError, ToolResult};
use crate::shared::types::{CategoryDTO, ConvertUnitsRequest, ToolDescriptor, UnitDTO, UnitSearchHit};

mod catalog;
mod session;
pub mod temperature;

pub use session::UnitConverterSession;
pub use temperature::TemperatureScale;

/// Decimals shown for converted values
pub const DEFAULT_DISPLAY_DECIMALS: usize = 8;

/// Queries shorter than this (in characters) match nothing
pub const MIN_SEARCH_LEN: usize = 2;

// ============================================================================
// Unit Registry - Data Model
// ============================================================================

/// Unit categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Length,
    Area,
    Volume,
    Mass,
    Time,
    Digital,
    Speed,
    Temperature,
    Pressure,
    Energy,
    Power,
    Angle,
    Historical,
    Obscure,
    Nautical,
    Typography,
    Radiation,
    Cooking,
}

impl CategoryId {
    pub const ALL: [CategoryId; 18] = [
        CategoryId::Length,
        CategoryId::Area,
        CategoryId::Volume,
        CategoryId::Mass,
        CategoryId::Time,
        CategoryId::Digital,
        CategoryId::Speed,
        CategoryId::Temperature,
        CategoryId::Pressure,
        CategoryId::Energy,
        CategoryId::Power,
        CategoryId::Angle,
        CategoryId::Historical,
        CategoryId::Obscure,
        CategoryId::Nautical,
        CategoryId::Typography,
        CategoryId::Radiation,
        CategoryId::Cooking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Length => "length",
            CategoryId::Area => "area",
            CategoryId::Volume => "volume",
            CategoryId::Mass => "mass",
            CategoryId::Time => "time",
            CategoryId::Digital => "digital",
            CategoryId::Speed => "speed",
            CategoryId::Temperature => "temperature",
            CategoryId::Pressure => "pressure",
            CategoryId::Energy => "energy",
            CategoryId::Power => "power",
            CategoryId::Angle => "angle",
            CategoryId::Historical => "historical",
            CategoryId::Obscure => "obscure",
            CategoryId::Nautical => "nautical",
            CategoryId::Typography => "typography",
            CategoryId::Radiation => "radiation",
            CategoryId::Cooking => "cooking",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ToolError::UnknownCategory {
                category: s.to_string(),
            })
    }
}

/// How units of a category relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// One base unit, every unit a multiple of it
    Linear,
    /// Affine scales converted through Celsius
    Temperature,
    /// Units grouped by theme, each expressed in its own dimension
    Mixed,
}

impl CategoryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKind::Linear => "linear",
            CategoryKind::Temperature => "temperature",
            CategoryKind::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitScale {
    /// Multiplier converting one unit into the base unit
    Linear(f64),
    Temperature(TemperatureScale),
}

/// Unit definition with its conversion scale
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub scale: UnitScale,
    pub is_base: bool,
    pub region: &'static str,
    pub description: Option<&'static str>,
    /// Base unit the factor refers to (mixed categories only)
    pub dimension: Option<&'static str>,
}

impl UnitDefinition {
    pub fn base(id: &'static str, name: &'static str, region: &'static str) -> Self {
        Self {
            is_base: true,
            ..Self::linear(id, name, 1.0, region)
        }
    }

    pub fn linear(id: &'static str, name: &'static str, factor: f64, region: &'static str) -> Self {
        Self {
            id,
            name,
            scale: UnitScale::Linear(factor),
            is_base: false,
            region,
            description: None,
            dimension: None,
        }
    }

    pub fn temperature(scale: TemperatureScale, name: &'static str, region: &'static str) -> Self {
        Self {
            id: scale.symbol(),
            name,
            scale: UnitScale::Temperature(scale),
            is_base: scale == TemperatureScale::Celsius,
            region,
            description: None,
            dimension: None,
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn in_dimension(mut self, dimension: &'static str) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Conversion factor to the base unit, `None` for temperature scales
    pub fn factor(&self) -> Option<f64> {
        match self.scale {
            UnitScale::Linear(factor) => Some(factor),
            UnitScale::Temperature(_) => None,
        }
    }

    /// Case-insensitive match on name, id, description or region.
    /// `query` must already be lowercase.
    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.id.to_lowercase().contains(query)
            || self
                .description
                .is_some_and(|d| d.to_lowercase().contains(query))
            || self.region.to_lowercase().contains(query)
    }

    pub fn to_dto(&self, category: CategoryId) -> UnitDTO {
        UnitDTO {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: category.as_str().to_string(),
            region: self.region.to_string(),
            description: self.description.map(str::to_string),
            is_base: self.is_base,
            factor: self.factor(),
            dimension: self.dimension.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitCategory {
    pub id: CategoryId,
    pub name: &'static str,
    pub kind: CategoryKind,
    pub units: Vec<UnitDefinition>,
}

impl UnitCategory {
    pub fn unit(&self, unit_id: &str) -> ToolResult<&UnitDefinition> {
        self.units
            .iter()
            .find(|unit| unit.id == unit_id)
            .ok_or_else(|| ToolError::UnknownUnit {
                category: self.id.as_str().to_string(),
                unit: unit_id.to_string(),
            })
    }

    pub fn base_unit(&self) -> Option<&UnitDefinition> {
        self.units.iter().find(|unit| unit.is_base)
    }

    pub fn to_dto(&self) -> CategoryDTO {
        CategoryDTO {
            id: self.id.as_str().to_string(),
            name: self.name.to_string(),
            kind: self.kind.as_str().to_string(),
            unit_count: self.units.len(),
        }
    }

    fn validate(&self) -> ToolResult<()> {
        let invalid = |reason: String| ToolError::InvalidRegistry(format!("{}: {}", self.id, reason));

        if self.units.is_empty() {
            return Err(invalid("category has no units".to_string()));
        }

        let mut seen = HashSet::new();
        for unit in &self.units {
            if !seen.insert(unit.id) {
                return Err(invalid(format!("duplicate unit id '{}'", unit.id)));
            }

            match (self.kind, unit.scale) {
                (CategoryKind::Temperature, UnitScale::Temperature(_)) => {}
                (CategoryKind::Temperature, UnitScale::Linear(_)) => {
                    return Err(invalid(format!("unit '{}' is not a temperature scale", unit.id)));
                }
                (_, UnitScale::Temperature(_)) => {
                    return Err(invalid(format!(
                        "temperature scale '{}' outside the temperature category",
                        unit.id
                    )));
                }
                (_, UnitScale::Linear(factor)) => {
                    if !factor.is_finite() || factor <= 0.0 {
                        return Err(invalid(format!("unit '{}' has invalid factor {}", unit.id, factor)));
                    }
                    if unit.is_base && factor != 1.0 {
                        return Err(invalid(format!("base unit '{}' must have factor 1", unit.id)));
                    }
                }
            }

            if self.kind == CategoryKind::Mixed && unit.dimension.is_none() {
                return Err(invalid(format!("unit '{}' declares no dimension", unit.id)));
            }
        }

        if self.kind == CategoryKind::Linear {
            let bases = self.units.iter().filter(|unit| unit.is_base).count();
            if bases != 1 {
                return Err(invalid(format!("expected exactly one base unit, found {}", bases)));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Unit Registry
// ============================================================================

/// Immutable, validated set of unit categories
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    categories: Vec<UnitCategory>,
}

/// Thread-safe built-in registry, validated once on first use
static BUILTIN_REGISTRY: Lazy<UnitRegistry> = Lazy::new(|| {
    UnitRegistry::new(catalog::builtin_categories()).expect("built-in unit catalog must be valid")
});

pub fn builtin_registry() -> &'static UnitRegistry {
    &BUILTIN_REGISTRY
}

impl UnitRegistry {
    pub fn new(categories: Vec<UnitCategory>) -> ToolResult<Self> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id) {
                return Err(ToolError::InvalidRegistry(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
            category.validate()?;
        }
        Ok(Self { categories })
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[UnitCategory] {
        &self.categories
    }

    pub fn category(&self, category_id: &str) -> ToolResult<&UnitCategory> {
        self.categories
            .iter()
            .find(|category| category.id.as_str() == category_id)
            .ok_or_else(|| ToolError::UnknownCategory {
                category: category_id.to_string(),
            })
    }

    pub fn units(&self, category_id: &str) -> ToolResult<&[UnitDefinition]> {
        Ok(&self.category(category_id)?.units)
    }

    pub fn find_unit(&self, category_id: &str, unit_id: &str) -> ToolResult<&UnitDefinition> {
        self.category(category_id)?.unit(unit_id)
    }

    /// Converts `value` between two units of one category
    pub fn convert(&self, category_id: &str, from_unit: &str, to_unit: &str, value: f64) -> ToolResult<f64> {
        let category = self.category(category_id)?;
        let from = category.unit(from_unit)?;
        let to = category.unit(to_unit)?;

        if !value.is_finite() {
            return Err(ToolError::InvalidValue { value });
        }

        // Same unit, no conversion needed
        if from.id == to.id {
            return Ok(value);
        }

        let result = match (from.scale, to.scale) {
            (UnitScale::Linear(from_factor), UnitScale::Linear(to_factor)) => {
                if category.kind == CategoryKind::Mixed && from.dimension != to.dimension {
                    return Err(ToolError::IncompatibleUnits {
                        from: from.id.to_string(),
                        to: to.id.to_string(),
                    });
                }
                value * (from_factor / to_factor)
            }
            (UnitScale::Temperature(from_scale), UnitScale::Temperature(to_scale)) => {
                from_scale.convert(value, to_scale)
            }
            _ => {
                return Err(ToolError::IncompatibleUnits {
                    from: from.id.to_string(),
                    to: to.id.to_string(),
                })
            }
        };

        debug!(
            category = category_id,
            from = from_unit,
            to = to_unit,
            value,
            result,
            "Converted units"
        );
        Ok(result)
    }

    pub fn convert_request(&self, request: &ConvertUnitsRequest) -> ToolResult<f64> {
        self.convert(&request.category, &request.from_unit, &request.to_unit, request.value)
    }

    /// Lazy search over every unit of every category
    pub fn search(&self, query: &str) -> UnitSearch<'_> {
        let categories = if query.chars().count() < MIN_SEARCH_LEN {
            &[][..]
        } else {
            &self.categories[..]
        };
        UnitSearch {
            categories,
            query: query.to_lowercase(),
            category_index: 0,
            unit_index: 0,
        }
    }

    /// Initial (from, to) pair when a category is selected: the base unit (or
    /// the first unit) converted into the next unit in display order
    pub fn default_units(&self, category_id: &str) -> ToolResult<(&UnitDefinition, &UnitDefinition)> {
        let category = self.category(category_id)?;
        let first = category
            .units
            .first()
            .ok_or_else(|| ToolError::InvalidRegistry(format!("{}: category has no units", category.id)))?;
        let second = category.units.get(1).unwrap_or(first);

        Ok(match category.base_unit() {
            Some(base) if base.id != second.id => (base, second),
            Some(base) => (base, first),
            None => (first, second),
        })
    }

    /// `1 unit` expressed in up to `limit` other units of the same category
    pub fn example_conversions(
        &self,
        category_id: &str,
        unit_id: &str,
        limit: usize,
    ) -> ToolResult<Vec<(&UnitDefinition, f64)>> {
        let category = self.category(category_id)?;
        let unit = category.unit(unit_id)?;

        let mut examples = Vec::new();
        for other in category.units.iter().filter(|other| other.id != unit.id) {
            if examples.len() == limit {
                break;
            }
            match self.convert(category_id, unit.id, other.id, 1.0) {
                Ok(result) => examples.push((other, result)),
                Err(ToolError::IncompatibleUnits { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(examples)
    }
}

/// Search results as `(unit, category)` pairs, categories then units in
/// insertion order. Cloning restarts from the clone's position.
#[derive(Debug, Clone)]
pub struct UnitSearch<'r> {
    categories: &'r [UnitCategory],
    query: String,
    category_index: usize,
    unit_index: usize,
}

impl<'r> Iterator for UnitSearch<'r> {
    type Item = (&'r UnitDefinition, &'r UnitCategory);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(category) = self.categories.get(self.category_index) {
            while let Some(unit) = category.units.get(self.unit_index) {
                self.unit_index += 1;
                if unit.matches(&self.query) {
                    return Some((unit, category));
                }
            }
            self.category_index += 1;
            self.unit_index = 0;
        }
        None
    }
}

impl<'r> UnitSearch<'r> {
    pub fn into_hits(self) -> Vec<UnitSearchHit> {
        self.map(|(unit, category)| UnitSearchHit {
            unit: unit.to_dto(category.id),
            category_name: category.name.to_string(),
        })
        .collect()
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Fixed `decimals`, with trailing zeros and a dangling point removed
/// Examples: 0.30000000 -> "0.3", 212.00000000 -> "212"
pub fn format_value(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

// ============================================================================
// Feature Implementation
// ============================================================================

#[derive(Clone)]
pub struct UnitConverterFeature;

impl ToolFeature for UnitConverterFeature {
    fn id(&self) -> &'static str {
        "unit_converter"
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            id: self.id().to_string(),
            name: "Unit Converter".to_string(),
            description: "Convert between different units of measurement with precision".to_string(),
            path: "/unit-converter".to_string(),
            icon: "📏".to_string(),
        }
    }

    fn storage_keys(&self) -> &'static [&'static str] {
        &[keys::UNIT_HISTORY, keys::UNIT_FAVORITES]
    }
}
