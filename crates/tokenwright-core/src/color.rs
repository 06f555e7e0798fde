//! Color parsing and CIELAB lightness math.
//!
//! Colors are held as floating-point sRGB channels in `0.0..=255.0` and only
//! rounded when serialized to hex. Lightness adjustments go through CIELAB
//! (D65 white) so that equal steps read as equal visual steps.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TokenwrightError;
use crate::named;

/// L* delta applied per unit of brighten/darken.
pub const LAB_STEP: f64 = 18.0;

// D65 reference white.
const XN: f64 = 0.950470;
const YN: f64 = 1.0;
const ZN: f64 = 1.088830;

// CIELAB piecewise constants.
const T0: f64 = 0.137931034; // 4 / 29
const T1: f64 = 0.206896552; // 6 / 29
const T2: f64 = 0.12841855; // 3 * T1^2
const T3: f64 = 0.008856452; // T1^3

// ── Regex patterns ──────────────────────────────────────────────

/// Functional notation: `rgb(...)`, `rgba(...)`, `hsl(...)`, `hsla(...)`.
static RE_FUNCTIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(rgba?|hsla?)\(\s*([^()]*?)\s*\)$").unwrap());

/// Legacy comma-separated arguments.
static RE_COMMA_SEP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());

/// An opaque sRGB color with unrounded channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// A color in CIELAB space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_u32(packed: u32) -> Self {
        Self::new(
            ((packed >> 16) & 0xFF) as f64,
            ((packed >> 8) & 0xFF) as f64,
            (packed & 0xFF) as f64,
        )
    }

    /// Parse any supported color notation.
    ///
    /// Accepts hex (3/4/6/8 digits, `#` optional), CSS color keywords,
    /// `rgb()`/`rgba()` and `hsl()`/`hsla()`. Alpha is accepted and dropped.
    pub fn parse(input: &str) -> Result<Self, TokenwrightError> {
        let s = input.trim().to_ascii_lowercase();
        let invalid = || TokenwrightError::InvalidColor(input.to_string());

        if s.is_empty() {
            return Err(invalid());
        }
        if let Some(packed) = named::lookup(&s) {
            return Ok(Self::from_u32(packed));
        }
        if let Some(rgb) = parse_hex(&s) {
            return Ok(rgb);
        }
        if let Some(caps) = RE_FUNCTIONAL.captures(&s) {
            let parsed = split_args(&caps[2]).and_then(|args| {
                if caps[1].starts_with("rgb") {
                    parse_rgb_args(&args)
                } else {
                    parse_hsl_args(&args)
                }
            });
            return parsed.ok_or_else(invalid);
        }

        Err(invalid())
    }

    /// Serialize as lowercase `#rrggbb`, clamping and rounding each channel.
    pub fn to_hex(&self) -> String {
        let r = channel_u8(self.r);
        let g = channel_u8(self.g);
        let b = channel_u8(self.b);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn to_lab(&self) -> Lab {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);

        let x = xyz_to_lab((0.4124564 * r + 0.3575761 * g + 0.1804375 * b) / XN);
        let y = xyz_to_lab((0.2126729 * r + 0.7151522 * g + 0.0721750 * b) / YN);
        let z = xyz_to_lab((0.0193339 * r + 0.1191920 * g + 0.9503041 * b) / ZN);

        Lab {
            l: (116.0 * y - 16.0).max(0.0),
            a: 500.0 * (x - y),
            b: 200.0 * (y - z),
        }
    }

    /// Convert back from CIELAB. Out-of-gamut channels are clamped to `0..=255`.
    pub fn from_lab(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let y = YN * lab_to_xyz(fy);
        let x = XN * lab_to_xyz(fx);
        let z = ZN * lab_to_xyz(fz);

        Self::new(
            linear_to_srgb(3.2404542 * x - 1.5371385 * y - 0.4985314 * z).clamp(0.0, 255.0),
            linear_to_srgb(-0.9692660 * x + 1.8760108 * y + 0.0415560 * z).clamp(0.0, 255.0),
            linear_to_srgb(0.0556434 * x - 0.2040259 * y + 1.0572252 * z).clamp(0.0, 255.0),
        )
    }

    /// Perceptual lightness L* (0 = black, 100 = white).
    pub fn lightness(&self) -> f64 {
        self.to_lab().l
    }

    /// Raise L* by `amount` steps of [`LAB_STEP`]. Negative amounts darken.
    pub fn brighten(&self, amount: f64) -> Self {
        let mut lab = self.to_lab();
        lab.l += LAB_STEP * amount;
        Self::from_lab(lab)
    }

    pub fn darken(&self, amount: f64) -> Self {
        self.brighten(-amount)
    }
}

impl FromStr for Rgb {
    type Err = TokenwrightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn channel_u8(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

// ── Notation parsers ────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 | 4 => Some(Rgb::new(
            (digit(0)? * 17) as f64,
            (digit(1)? * 17) as f64,
            (digit(2)? * 17) as f64,
        )),
        6 | 8 => Some(Rgb::new(pair(0)? as f64, pair(2)? as f64, pair(4)? as f64)),
        _ => None,
    }
}

/// Split a functional-notation body into its arguments.
///
/// Either all commas (`1, 2, 3, 0.5`) or all whitespace with an optional
/// `/ alpha` tail (`1 2 3 / 50%`). Mixing the two, or leaving any argument
/// empty, is rejected.
fn split_args(body: &str) -> Option<Vec<&str>> {
    if body.contains(',') {
        if body.contains('/') {
            return None;
        }
        let args: Vec<&str> = RE_COMMA_SEP.split(body).collect();
        return args.iter().all(|a| !a.is_empty()).then_some(args);
    }

    let (channels, alpha) = match body.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (body, None),
    };
    let mut args: Vec<&str> = channels.split_whitespace().collect();
    if let Some(alpha) = alpha {
        if alpha.is_empty() || alpha.contains(char::is_whitespace) || alpha.contains('/') {
            return None;
        }
        args.push(alpha);
    }
    Some(args)
}

fn parse_rgb_args(args: &[&str]) -> Option<Rgb> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let channel = |arg: &str| -> Option<f64> {
        let v = match arg.strip_suffix('%') {
            Some(pct) => parse_number(pct)? * 2.55,
            None => parse_number(arg)?,
        };
        Some(v.clamp(0.0, 255.0))
    };
    if let Some(alpha) = args.get(3) {
        parse_alpha(alpha)?;
    }
    Some(Rgb::new(channel(args[0])?, channel(args[1])?, channel(args[2])?))
}

fn parse_hsl_args(args: &[&str]) -> Option<Rgb> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let hue = parse_number(args[0].strip_suffix("deg").unwrap_or(args[0]))?;
    let percent = |arg: &str| -> Option<f64> {
        let v = parse_number(arg.strip_suffix('%').unwrap_or(arg))?;
        Some((v / 100.0).clamp(0.0, 1.0))
    };
    if let Some(alpha) = args.get(3) {
        parse_alpha(alpha)?;
    }
    Some(hsl_to_rgb(hue, percent(args[1])?, percent(args[2])?))
}

fn parse_alpha(arg: &str) -> Option<f64> {
    match arg.strip_suffix('%') {
        Some(pct) => parse_number(pct).map(|v| v / 100.0),
        None => parse_number(arg),
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `s` and `l` in `0.0..=1.0`, hue in degrees (any range).
fn hsl_to_rgb(hue: f64, s: f64, l: f64) -> Rgb {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Rgb::new((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
}

// ── Color space transfer functions ──────────────────────────────

fn srgb_to_linear(channel: f64) -> f64 {
    let c = channel / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    255.0
        * if c <= 0.00304 {
            12.92 * c
        } else {
            1.055 * c.powf(1.0 / 2.4) - 0.055
        }
}

fn xyz_to_lab(t: f64) -> f64 {
    if t > T3 {
        t.powf(1.0 / 3.0)
    } else {
        t / T2 + T0
    }
}

fn lab_to_xyz(t: f64) -> f64 {
    if t > T1 {
        t * t * t
    } else {
        T2 * (t - T0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(input: &str) -> String {
        Rgb::parse(input).unwrap().to_hex()
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(hex("#6366f1"), "#6366f1");
        assert_eq!(hex("#6366F1"), "#6366f1");
        assert_eq!(hex("6366f1"), "#6366f1");
        assert_eq!(hex("#abc"), "#aabbcc");
        assert_eq!(hex("#abcd"), "#aabbcc");
        assert_eq!(hex("#6366f180"), "#6366f1");
        assert_eq!(hex("  #6366f1  "), "#6366f1");
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(hex("rebeccapurple"), "#663399");
        assert_eq!(hex("White"), "#ffffff");
        assert_eq!(hex("NAVY"), "#000080");
    }

    #[test]
    fn test_parse_rgb_functional() {
        assert_eq!(hex("rgb(99, 102, 241)"), "#6366f1");
        assert_eq!(hex("rgb(99 102 241)"), "#6366f1");
        assert_eq!(hex("rgba(99, 102, 241, 0.5)"), "#6366f1");
        assert_eq!(hex("rgb(99 102 241 / 50%)"), "#6366f1");
        assert_eq!(hex("rgb(100%, 0%, 0%)"), "#ff0000");
        assert_eq!(hex("rgb(300, -4, 0)"), "#ff0000");
    }

    #[test]
    fn test_parse_hsl_functional() {
        assert_eq!(hex("hsl(0, 100%, 50%)"), "#ff0000");
        assert_eq!(hex("hsl(120deg 100% 25%)"), "#008000");
        assert_eq!(hex("hsla(240, 100%, 50%, 0.3)"), "#0000ff");
        assert_eq!(hex("hsl(-120, 100%, 50%)"), "#0000ff");
        assert_eq!(hex("hsl(0, 0%, 100%)"), "#ffffff");
    }

    #[test]
    fn test_parse_invalid() {
        for bad in [
            "",
            "   ",
            "#12",
            "#12345",
            "#ggg",
            "notacolor",
            "rgb(1, 2)",
            "rgb(1, 2, 3, 4, 5)",
            "rgb(a, b, c)",
            "hsl(0, 100%)",
            "rgb(1, 2, 3",
            "rgb(1,,2,3)",
            "rgb(1,2,3,)",
            "rgb(,1,2,3)",
            "rgb(1, 2 3)",
            "rgb(1 2 3 /)",
            "rgb(1 2 / 3 / 4)",
            "rgb(1, 2, 3 / 0.5)",
            "hsl(120,,50%,50%)",
            "rgb()",
        ] {
            match Rgb::parse(bad) {
                Err(TokenwrightError::InvalidColor(s)) => assert_eq!(s, bad),
                other => panic!("Expected InvalidColor for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_str() {
        let rgb: Rgb = "#ff0000".parse().unwrap();
        assert_eq!(rgb, Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(rgb.to_string(), "#ff0000");
    }

    #[test]
    fn test_lightness_extremes() {
        assert!(Rgb::new(0.0, 0.0, 0.0).lightness().abs() < 1e-6);
        assert!((Rgb::new(255.0, 255.0, 255.0).lightness() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_lab_roundtrip_preserves_hex() {
        for input in ["#6366f1", "#22c55e", "#f59e0b", "#ef4444", "#71717a", "#000000", "#ffffff"] {
            let rgb = Rgb::parse(input).unwrap();
            assert_eq!(Rgb::from_lab(rgb.to_lab()).to_hex(), input);
        }
    }

    #[test]
    fn test_brighten_and_darken_saturate() {
        let white = Rgb::new(255.0, 255.0, 255.0);
        assert_eq!(white.brighten(2.5).to_hex(), "#ffffff");
        let black = Rgb::new(0.0, 0.0, 0.0);
        assert_eq!(black.darken(2.5).to_hex(), "#000000");
    }

    #[test]
    fn test_brighten_moves_lightness() {
        let base = Rgb::parse("#64748b").unwrap();
        assert!(base.brighten(1.0).lightness() > base.lightness());
        assert!(base.darken(1.0).lightness() < base.lightness());
    }
}
