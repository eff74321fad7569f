//! Color format converter feature
//!
//! Conversions between HEX, RGB, HSL, HSV and CMYK, CSS color names,
//! WCAG contrast checks and palette harmonies. HSL, HSV and CMYK
//! components are whole degrees and percentages, so conversions through
//! them round the way the color pickers display them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use super::ToolFeature;
use crate::core::storage::keys;
use crate::shared::error::{ToolError, ToolResult};
use crate::shared::types::{Cmyk, ColorValue, ContrastResult, Hsl, Hsv, Rgb, ToolDescriptor};

mod names;
mod session;

use names::CSS_COLORS;
pub use session::{ColorSession, COLOR_HISTORY_LIMIT};

pub const DEFAULT_COLOR_HEX: &str = "#4A90E2";

// ============================================================================
// HEX and names
// ============================================================================

/// Parses `#RGB` or `#RRGGBB`, with or without the leading `#`
pub fn parse_hex(input: &str) -> ToolResult<Rgb> {
    let digits = input.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ToolError::InvalidColor(input.to_string()));
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(ToolError::InvalidColor(input.to_string())),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| ToolError::InvalidColor(input.to_string()))
    };
    Ok(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn from_packed(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    fn packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Uppercase `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    fn unit_channels(self) -> (f64, f64, f64) {
        (self.r as f64 / 255.0, self.g as f64 / 255.0, self.b as f64 / 255.0)
    }
}

/// CSS name of an exact color match
pub fn color_name(rgb: Rgb) -> Option<&'static str> {
    let packed = rgb.packed();
    CSS_COLORS
        .iter()
        .find(|(_, value)| *value == packed)
        .map(|(name, _)| *name)
}

/// Case-insensitive CSS color name lookup
pub fn color_from_name(name: &str) -> ToolResult<ColorValue> {
    let wanted = name.trim().to_lowercase();
    CSS_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == wanted)
        .map(|(candidate, value)| {
            let mut color = ColorValue::from_rgb(Rgb::from_packed(*value));
            color.name = Some(candidate.to_string());
            color
        })
        .ok_or_else(|| ToolError::InvalidColor(name.to_string()))
}

// ============================================================================
// Color space conversions
// ============================================================================

fn round_unit(value: f64, scale: f64) -> f64 {
    (value * scale).round()
}

/// Hue in `[0, 1)` for the given channels, 0 for grays
fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h / 6.0
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.unit_channels();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Hsl {
        h: round_unit(hue(r, g, b, max, delta), 360.0) as u16,
        s: round_unit(s, 100.0) as u8,
        l: round_unit(l, 100.0) as u8,
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_rgb(r: f64, g: f64, b: f64) -> Rgb {
    let channel = |v: f64| round_unit(v, 255.0).clamp(0.0, 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h as f64 / 360.0;
    let s = hsl.s as f64 / 100.0;
    let l = hsl.l as f64 / 100.0;

    if s == 0.0 {
        return to_rgb(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    to_rgb(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.unit_channels();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h: round_unit(hue(r, g, b, max, delta), 360.0) as u16,
        s: round_unit(s, 100.0) as u8,
        v: round_unit(max, 100.0) as u8,
    }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.h as f64 / 360.0;
    let s = hsv.s as f64 / 100.0;
    let v = hsv.v as f64 / 100.0;

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (i as u32) % 6 {
        0 => to_rgb(v, t, p),
        1 => to_rgb(q, v, p),
        2 => to_rgb(p, v, t),
        3 => to_rgb(p, q, v),
        4 => to_rgb(t, p, v),
        _ => to_rgb(v, p, q),
    }
}

pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let (r, g, b) = rgb.unit_channels();
    let k = 1.0 - r.max(g).max(b);
    let ink = |channel: f64| if k == 1.0 { 0.0 } else { (1.0 - channel - k) / (1.0 - k) };

    Cmyk {
        c: round_unit(ink(r), 100.0) as u8,
        m: round_unit(ink(g), 100.0) as u8,
        y: round_unit(ink(b), 100.0) as u8,
        k: round_unit(k, 100.0) as u8,
    }
}

pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let k = cmyk.k as f64 / 100.0;
    let channel = |ink: u8| (1.0 - ink as f64 / 100.0) * (1.0 - k);
    to_rgb(channel(cmyk.c), channel(cmyk.m), channel(cmyk.y))
}

fn check_percent(label: &str, value: u8) -> ToolResult<()> {
    if value > 100 {
        return Err(ToolError::InvalidColor(format!("{} must be 0-100, got {}", label, value)));
    }
    Ok(())
}

fn check_hue(value: u16) -> ToolResult<()> {
    if value > 360 {
        return Err(ToolError::InvalidColor(format!("hue must be 0-360, got {}", value)));
    }
    Ok(())
}

impl ColorValue {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb_to_hsl(rgb),
            hsv: rgb_to_hsv(rgb),
            cmyk: rgb_to_cmyk(rgb),
            name: color_name(rgb).map(str::to_string),
        }
    }

    pub fn from_hex(hex: &str) -> ToolResult<Self> {
        parse_hex(hex).map(Self::from_rgb)
    }

    /// Keeps the given HSL components rather than recomputing them
    pub fn from_hsl(hsl: Hsl) -> ToolResult<Self> {
        check_hue(hsl.h)?;
        check_percent("saturation", hsl.s)?;
        check_percent("lightness", hsl.l)?;
        Ok(Self {
            hsl,
            ..Self::from_rgb(hsl_to_rgb(hsl))
        })
    }

    pub fn from_hsv(hsv: Hsv) -> ToolResult<Self> {
        check_hue(hsv.h)?;
        check_percent("saturation", hsv.s)?;
        check_percent("value", hsv.v)?;
        Ok(Self {
            hsv,
            ..Self::from_rgb(hsv_to_rgb(hsv))
        })
    }

    pub fn from_cmyk(cmyk: Cmyk) -> ToolResult<Self> {
        check_percent("cyan", cmyk.c)?;
        check_percent("magenta", cmyk.m)?;
        check_percent("yellow", cmyk.y)?;
        check_percent("black", cmyk.k)?;
        Ok(Self {
            cmyk,
            ..Self::from_rgb(cmyk_to_rgb(cmyk))
        })
    }

    /// Accepts a hex code or a CSS color name
    pub fn parse(input: &str) -> ToolResult<Self> {
        Self::from_hex(input).or_else(|_| color_from_name(input))
    }

    pub fn rgb_css(&self) -> String {
        format!("rgb({}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b)
    }

    pub fn hsl_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hsl.h, self.hsl.s, self.hsl.l)
    }
}

// ============================================================================
// Accessibility
// ============================================================================

/// WCAG relative luminance
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let linear = |channel: u8| {
        let v = channel as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    linear(rgb.r) * 0.2126 + linear(rgb.g) * 0.7152 + linear(rgb.b) * 0.0722
}

/// Contrast ratio rounded to two decimals. Compliance flags use the exact ratio.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> ContrastResult {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let ratio = (la.max(lb) + 0.05) / (la.min(lb) + 0.05);

    ContrastResult {
        ratio: (ratio * 100.0).round() / 100.0,
        aa: ratio >= 4.5,
        aa_large: ratio >= 3.0,
        aaa: ratio >= 7.0,
        aaa_large: ratio >= 4.5,
    }
}

/// Black or white text, whichever reads better on `background`
pub fn readable_text_color(background: Rgb) -> &'static str {
    let brightness =
        (background.r as f64 * 299.0 + background.g as f64 * 587.0 + background.b as f64 * 114.0) / 1000.0;
    if brightness > 128.0 {
        "#000000"
    } else {
        "#FFFFFF"
    }
}

// ============================================================================
// Palettes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    Monochromatic,
}

impl FromStr for Harmony {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complementary" => Ok(Harmony::Complementary),
            "analogous" => Ok(Harmony::Analogous),
            "triadic" => Ok(Harmony::Triadic),
            "tetradic" => Ok(Harmony::Tetradic),
            "monochromatic" => Ok(Harmony::Monochromatic),
            _ => Err(ToolError::InvalidInput(format!("Unknown palette type: {}", s))),
        }
    }
}

fn with_hsl(hsl: Hsl) -> ColorValue {
    ColorValue {
        hsl,
        ..ColorValue::from_rgb(hsl_to_rgb(hsl))
    }
}

fn rotate_hue(hsl: Hsl, degrees: i32) -> Hsl {
    Hsl {
        h: (hsl.h as i32 + degrees).rem_euclid(360) as u16,
        ..hsl
    }
}

/// Colors that accompany `base`, excluding `base` itself
pub fn harmony(base: &ColorValue, kind: Harmony) -> Vec<ColorValue> {
    let hsl = base.hsl;
    let palette: Vec<ColorValue> = match kind {
        Harmony::Complementary => vec![with_hsl(rotate_hue(hsl, 180))],
        Harmony::Analogous => [-60, -30, 30, 60]
            .into_iter()
            .map(|degrees| with_hsl(rotate_hue(hsl, degrees)))
            .collect(),
        Harmony::Triadic => [120, 240]
            .into_iter()
            .map(|degrees| with_hsl(rotate_hue(hsl, degrees)))
            .collect(),
        Harmony::Tetradic => [180, 60, 240]
            .into_iter()
            .map(|degrees| with_hsl(rotate_hue(hsl, degrees)))
            .collect(),
        Harmony::Monochromatic => [-15, 0, 15, 30]
            .into_iter()
            .map(|step| {
                let l = (hsl.l as i32 + step).clamp(0, 100) as u8;
                with_hsl(Hsl { l, ..hsl })
            })
            .collect(),
    };
    debug!(base = %base.hex, ?kind, size = palette.len(), "Generated palette");
    palette
}

/// CSS custom properties: the first color is `--color-primary`, the rest
/// `--color-accent-N`
pub fn palette_to_css(colors: &[ColorValue]) -> String {
    let mut css = String::from(":root {\n");
    for (index, color) in colors.iter().enumerate() {
        let name = if index == 0 {
            "primary".to_string()
        } else {
            format!("accent-{}", index)
        };
        css.push_str(&format!("  --color-{}: {};\n", name, color.hex));
    }
    css.push('}');
    css
}

// ============================================================================
// Feature Implementation
// ============================================================================

#[derive(Clone)]
pub struct ColorConverterFeature;

impl ToolFeature for ColorConverterFeature {
    fn id(&self) -> &'static str {
        "color_converter"
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            id: self.id().to_string(),
            name: "Color Format Converter".to_string(),
            description: "Convert between HEX, RGB, HSL and other color formats effortlessly".to_string(),
            path: "/color-tools".to_string(),
            icon: "🎨".to_string(),
        }
    }

    fn storage_keys(&self) -> &'static [&'static str] {
        &[keys::COLOR_HISTORY, keys::SAVED_COLORS, keys::SAVED_PALETTES]
    }
}
