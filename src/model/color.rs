// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! RGB and HSL colors.
//!
//! [`Rgb`] is the canonical color value: every input format is parsed into it
//! and every output format is rendered from it. [`Hsl`] keeps hue, saturation
//! and lightness at full precision so that converting back to RGB recovers
//! the input channels; rounding only happens when an HSL value is
//! displayed.

use std::fmt;

use crate::{error::ConvertError, model::Format};

/// A color as three 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

/// A color in the hue, saturation, lightness model.
///
/// `hue` is in degrees within `[0, 360)`, `saturation` and `lightness` are
/// fractions within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Hsl {
    pub(crate) hue: f64,
    pub(crate) saturation: f64,
    pub(crate) lightness: f64,
}

impl Rgb {
    pub(crate) const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#rrggbb` or the short `#rgb` form, the `#` being optional.
    pub(crate) fn parse_hex(value: &str) -> Result<Self, ConvertError> {
        let invalid = || ConvertError::InvalidHex(value.to_string());

        let digits = value.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let digits = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };

        let channel = |start: usize| {
            digits
                .get(start..start + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Parses `rgb(r, g, b)`; the surrounding `rgb(` and `)` may be omitted.
    pub(crate) fn parse_rgb(value: &str) -> Result<Self, ConvertError> {
        let invalid = || ConvertError::InvalidRgb(value.to_string());

        let parts = components(value, "rgb(");
        let [red, green, blue] = parts[..] else {
            return Err(invalid());
        };

        let channel = |part: &str| part.parse::<u8>().map_err(|_| invalid());

        Ok(Self::new(channel(red)?, channel(green)?, channel(blue)?))
    }

    pub(crate) fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl Hsl {
    /// Parses `hsl(h, s%, l%)`. The `hsl(` and `)` wrapper and the percent
    /// signs are optional. Hue wraps around the color wheel, saturation and
    /// lightness must lie between 0 and 100.
    pub(crate) fn parse(value: &str) -> Result<Self, ConvertError> {
        let invalid = || ConvertError::InvalidHsl(value.to_string());

        let parts = components(value, "hsl(");
        let [hue, saturation, lightness] = parts[..] else {
            return Err(invalid());
        };

        let number = |part: &str| {
            part.trim_end_matches('%')
                .trim_end()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(invalid)
        };

        let hue = number(hue)?;
        let saturation = number(saturation)?;
        let lightness = number(lightness)?;

        let percent = 0.0..=100.0;
        if !percent.contains(&saturation) || !percent.contains(&lightness) {
            return Err(invalid());
        }

        Ok(Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation / 100.0,
            lightness: lightness / 100.0,
        })
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hue = (self.hue.round() as u32) % 360;
        let saturation = (self.saturation * 100.0).round() as u32;
        let lightness = (self.lightness * 100.0).round() as u32;
        write!(f, "hsl({hue}, {saturation}%, {lightness}%)")
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = hsl;

        if saturation == 0.0 {
            let grey = to_channel(lightness);
            return Self::new(grey, grey, grey);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;
        let h = hue / 360.0;

        Self::new(
            to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_channel(p, q, h)),
            to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.red) / 255.0;
        let g = f64::from(rgb.green) / 255.0;
        let b = f64::from(rgb.blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }

        let d = max - min;
        let saturation = if lightness > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Position on the color wheel in sixths, keyed by the dominant channel.
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            hue: sector * 60.0,
            saturation,
            lightness,
        }
    }
}

// Piecewise-linear ramp for one channel; `t` is the hue offset for that
// channel as a fraction of the wheel.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

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

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

// Splits `prefix(a, b, c)` into its trimmed, comma separated parts.
fn components<'a>(value: &'a str, prefix: &str) -> Vec<&'a str> {
    let inner = value.trim();
    let inner = inner.strip_prefix(prefix).unwrap_or(inner);
    let inner = inner.strip_suffix(')').unwrap_or(inner);
    inner.split(',').map(str::trim).collect()
}

/// The textual color encodings understood by the `color` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

impl Format for ColorFormat {
    const ALL: &'static [Self] = &[Self::Hex, Self::Rgb, Self::Hsl];

    fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Hex => "Hex",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
        }
    }
}

impl ColorFormat {
    pub(crate) fn parse(self, value: &str) -> Result<Rgb, ConvertError> {
        match self {
            Self::Hex => Rgb::parse_hex(value),
            Self::Rgb => Rgb::parse_rgb(value),
            Self::Hsl => Hsl::parse(value).map(Rgb::from),
        }
    }

    pub(crate) fn render(self, rgb: Rgb) -> String {
        match self {
            Self::Hex => rgb.to_hex(),
            Self::Rgb => rgb.to_string(),
            Self::Hsl => Hsl::from(rgb).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("#ff0000", Rgb::new(255, 0, 0))]
    #[case("ff0000", Rgb::new(255, 0, 0))]
    #[case("#F0A", Rgb::new(255, 0, 170))]
    #[case("  #0080ff ", Rgb::new(0, 128, 255))]
    #[case("#000", Rgb::new(0, 0, 0))]
    fn parses_hex(#[case] input: &str, #[case] expected: Rgb) {
        assert_eq!(Rgb::parse_hex(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("#")]
    #[case("#ff00")]
    #[case("#ff00000")]
    #[case("#gg0000")]
    #[case("#+f0000")]
    #[case("#ééé")]
    fn rejects_bad_hex(#[case] input: &str) {
        assert!(matches!(
            Rgb::parse_hex(input),
            Err(ConvertError::InvalidHex(_))
        ));
    }

    #[rstest]
    #[case("rgb(255, 0, 0)", Rgb::new(255, 0, 0))]
    #[case("rgb(1,2,3)", Rgb::new(1, 2, 3))]
    #[case("10, 20, 30", Rgb::new(10, 20, 30))]
    fn parses_rgb(#[case] input: &str, #[case] expected: Rgb) {
        assert_eq!(Rgb::parse_rgb(input).unwrap(), expected);
    }

    #[rstest]
    #[case("rgb(256, 0, 0)")]
    #[case("rgb(-1, 0, 0)")]
    #[case("rgb(1, 2)")]
    #[case("rgb(1, 2, 3, 4)")]
    #[case("rgb(a, b, c)")]
    fn rejects_bad_rgb(#[case] input: &str) {
        assert!(matches!(
            Rgb::parse_rgb(input),
            Err(ConvertError::InvalidRgb(_))
        ));
    }

    #[rstest]
    #[case("hsl(0, 100%, 50%)", Rgb::new(255, 0, 0))]
    #[case("hsl(120, 100%, 50%)", Rgb::new(0, 255, 0))]
    #[case("hsl(240, 100%, 50%)", Rgb::new(0, 0, 255))]
    #[case("hsl(600, 100%, 50%)", Rgb::new(0, 0, 255))]
    #[case("hsl(-120, 100%, 50%)", Rgb::new(0, 0, 255))]
    #[case("0, 0, 100", Rgb::new(255, 255, 255))]
    #[case("hsl(0, 0%, 0%)", Rgb::new(0, 0, 0))]
    #[case("hsl(60, 100%, 50%)", Rgb::new(255, 255, 0))]
    fn parses_hsl(#[case] input: &str, #[case] expected: Rgb) {
        assert_eq!(ColorFormat::Hsl.parse(input).unwrap(), expected);
    }

    #[rstest]
    #[case("hsl(0, 101%, 50%)")]
    #[case("hsl(0, 50%, -1%)")]
    #[case("hsl(NaN, 50%, 50%)")]
    #[case("hsl(inf, 50%, 50%)")]
    #[case("hsl(0, 50%)")]
    fn rejects_bad_hsl(#[case] input: &str) {
        assert!(matches!(Hsl::parse(input), Err(ConvertError::InvalidHsl(_))));
    }

    #[test]
    fn red_is_the_same_in_every_format() {
        let hex = ColorFormat::Hex.parse("#ff0000").unwrap();
        let rgb = ColorFormat::Rgb.parse("rgb(255,0,0)").unwrap();
        let hsl = ColorFormat::Hsl.parse("hsl(0,100%,50%)").unwrap();
        assert_eq!(hex, rgb);
        assert_eq!(rgb, hsl);
    }

    #[rstest]
    #[case(Rgb::new(255, 0, 0), "#ff0000", "rgb(255, 0, 0)", "hsl(0, 100%, 50%)")]
    #[case(Rgb::new(0, 128, 255), "#0080ff", "rgb(0, 128, 255)", "hsl(210, 100%, 50%)")]
    #[case(Rgb::new(128, 128, 128), "#808080", "rgb(128, 128, 128)", "hsl(0, 0%, 50%)")]
    #[case(Rgb::new(255, 0, 255), "#ff00ff", "rgb(255, 0, 255)", "hsl(300, 100%, 50%)")]
    fn renders_every_format(
        #[case] rgb: Rgb,
        #[case] hex: &str,
        #[case] functional: &str,
        #[case] hsl: &str,
    ) {
        assert_eq!(ColorFormat::Hex.render(rgb), hex);
        assert_eq!(ColorFormat::Rgb.render(rgb), functional);
        assert_eq!(ColorFormat::Hsl.render(rgb), hsl);
    }

    #[test]
    fn hsl_round_trips_every_rgb_color() {
        for red in 0..=255u8 {
            for green in 0..=255u8 {
                for blue in 0..=255u8 {
                    let rgb = Rgb::new(red, green, blue);
                    let back = Rgb::from(Hsl::from(rgb));
                    assert!(
                        red.abs_diff(back.red) <= 1
                            && green.abs_diff(back.green) <= 1
                            && blue.abs_diff(back.blue) <= 1,
                        "{rgb} came back as {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn hsl_stays_within_bounds() {
        for rgb in [
            Rgb::new(255, 0, 1),
            Rgb::new(1, 0, 0),
            Rgb::new(255, 255, 254),
            Rgb::new(3, 2, 1),
        ] {
            let hsl = Hsl::from(rgb);
            assert!((0.0..360.0).contains(&hsl.hue), "{hsl:?}");
            assert!((0.0..=1.0).contains(&hsl.saturation), "{hsl:?}");
            assert!((0.0..=1.0).contains(&hsl.lightness), "{hsl:?}");
        }
    }
}
