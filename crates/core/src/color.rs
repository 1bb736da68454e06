//! RGB color type, hex conversion, and the color arithmetic behind hover decay.
//!
//! Colors are 8-bit per channel. The hex form is always `#rrggbb`: seven
//! characters, lowercase on output, case-insensitive on input. Because both
//! sides are 8-bit the hex round-trip is lossless.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GridError;
use crate::prng::RandomSource;

/// An sRGB color with 8-bit channels.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const LIGHT_GREY: Rgb = Rgb::new(0xf5, 0xf5, 0xf5);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const GREEN: Rgb = Rgb::new(0x00, 0xff, 0x00);
    /// Cell border color used by the snapshot renderer.
    pub const BORDER: Rgb = Rgb::new(0xee, 0xee, 0xee);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color of the exact form `#rrggbb` (hex digits in either case).
    ///
    /// Returns `GridError::InvalidFormat` on a wrong length, a missing `#`,
    /// or any non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Rgb, GridError> {
        if hex.len() != 7 {
            return Err(GridError::InvalidFormat(format!(
                "expected 7 characters (#rrggbb), got {} in {hex:?}",
                hex.len()
            )));
        }
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| GridError::InvalidFormat(format!("missing leading '#' in {hex:?}")))?;
        // from_str_radix tolerates a leading '+', so check the digits ourselves.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GridError::InvalidFormat(format!(
                "non-hex character in {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| GridError::InvalidFormat(format!("{hex:?}: {e}")))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Formats the color as `#rrggbb`, two lowercase digits per channel.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The channels as an `[r, g, b]` array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Darkens `color` toward black by `fraction`.
///
/// Each channel becomes `floor(channel * (1 - fraction))`. `fraction` is
/// clamped to `[0, 1]`, so 0 is the identity and 1 is pure black.
pub fn blend_to_black(color: Rgb, fraction: f64) -> Rgb {
    let keep = 1.0 - fraction.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f64 * keep).floor() as u8;
    Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Draws a channel value in `[min, max]` inclusive.
///
/// Computes `round(random * (max - min) + min)`. Rounding rather than
/// truncation means `max` itself is reachable. Reversed bounds are swapped.
pub fn random_channel(min: u8, max: u8, rng: &mut impl RandomSource) -> u8 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let value = rng.next_f64() * f64::from(hi - lo) + f64::from(lo);
    value.round().clamp(f64::from(lo), f64::from(hi)) as u8
}

/// Inclusive channel range used for rainbow sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRange {
    pub min: u8,
    pub max: u8,
}

impl ChannelRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Draws one channel from this range.
    pub fn sample(self, rng: &mut impl RandomSource) -> u8 {
        random_channel(self.min, self.max, rng)
    }
}

impl Default for ChannelRange {
    /// `0x88..=0xff`, biased toward lighter colors.
    fn default() -> Self {
        Self::new(0x88, 0xff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Xorshift64;

    /// Replays a fixed list of values.
    struct Scripted(Vec<f64>);

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            self.0.remove(0)
        }
    }

    // -- Hex parsing --

    #[test]
    fn from_hex_parses_lowercase() {
        assert_eq!(Rgb::from_hex("#1e88e5").unwrap(), Rgb::new(0x1e, 0x88, 0xe5));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        assert_eq!(Rgb::from_hex("#F5F5F5").unwrap(), Rgb::LIGHT_GREY);
        assert_eq!(Rgb::from_hex("#fFfFfF").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        for bad in ["", "#fff", "#ffffff0", "#12345"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(GridError::InvalidFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_hex_rejects_missing_hash() {
        assert!(matches!(
            Rgb::from_hex("ff00aa0"),
            Err(GridError::InvalidFormat(_))
        ));
        assert!(matches!(
            Rgb::from_hex("ff00aa"),
            Err(GridError::InvalidFormat(_))
        ));
    }

    #[test]
    fn from_hex_rejects_non_hex_characters() {
        for bad in ["#gg0000", "#00 000", "#+f0000", "#00ff0z"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(GridError::InvalidFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_hex_rejects_multibyte_input_of_seven_bytes() {
        // "#ffé00" is 7 bytes but not 6 hex digits.
        assert!(Rgb::from_hex("#ff\u{e9}00").is_err());
    }

    // -- to_hex --

    #[test]
    fn to_hex_zero_pads_each_channel() {
        assert_eq!(Rgb::new(0, 10, 1).to_hex(), "#000a01");
    }

    #[test]
    fn to_hex_named_colors() {
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::LIGHT_GREY.to_hex(), "#f5f5f5");
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
        assert_eq!(Rgb::GREEN.to_hex(), "#00ff00");
    }

    #[test]
    fn display_matches_to_hex() {
        let c = Rgb::new(0xad, 0x4d, 0x00);
        assert_eq!(c.to_string(), c.to_hex());
    }

    #[test]
    fn from_str_delegates_to_from_hex() {
        let c: Rgb = "#e57b1e".parse().unwrap();
        assert_eq!(c, Rgb::new(0xe5, 0x7b, 0x1e));
        assert!("e57b1e".parse::<Rgb>().is_err());
    }

    // -- Serde --

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 170)).unwrap();
        assert_eq!(json, "\"#ff00aa\"");
    }

    #[test]
    fn rgb_deserialize_rejects_invalid_hex() {
        assert!(serde_json::from_str::<Rgb>("\"ff00aa\"").is_err());
    }

    // -- blend_to_black --

    #[test]
    fn blend_ten_percent_of_light_grey() {
        assert_eq!(blend_to_black(Rgb::LIGHT_GREY, 0.1).to_hex(), "#dcdcdc");
    }

    #[test]
    fn blend_floors_each_channel() {
        // 255 * 0.5 = 127.5, 1 * 0.5 = 0.5
        assert_eq!(blend_to_black(Rgb::new(255, 1, 2), 0.5), Rgb::new(127, 0, 1));
    }

    #[test]
    fn blend_of_black_stays_black() {
        assert_eq!(blend_to_black(Rgb::BLACK, 0.1), Rgb::BLACK);
    }

    #[test]
    fn blend_clamps_fraction_outside_unit_interval() {
        let c = Rgb::new(10, 20, 30);
        assert_eq!(blend_to_black(c, -0.5), c);
        assert_eq!(blend_to_black(c, 3.0), Rgb::BLACK);
    }

    #[test]
    fn blend_leaves_input_untouched() {
        let c = Rgb::new(200, 100, 50);
        let _ = blend_to_black(c, 0.7);
        assert_eq!(c, Rgb::new(200, 100, 50));
    }

    // -- random_channel --

    #[test]
    fn random_channel_rounds_to_nearest() {
        // 0.5 * (0xff - 0x88) + 0x88 = 195.5 -> 196
        let mut rng = Scripted(vec![0.5]);
        assert_eq!(random_channel(0x88, 0xff, &mut rng), 196);
        // 0.004 * 119 + 136 = 136.476 -> 136
        let mut rng = Scripted(vec![0.004]);
        assert_eq!(random_channel(0x88, 0xff, &mut rng), 136);
    }

    #[test]
    fn random_channel_reaches_max_near_one() {
        let mut rng = Scripted(vec![0.9999]);
        assert_eq!(random_channel(0x88, 0xff, &mut rng), 0xff);
    }

    #[test]
    fn random_channel_equal_bounds_returns_min() {
        let mut rng = Xorshift64::new(5);
        for _ in 0..100 {
            assert_eq!(random_channel(42, 42, &mut rng), 42);
        }
    }

    #[test]
    fn random_channel_swaps_reversed_bounds() {
        let mut rng = Xorshift64::new(11);
        for _ in 0..1000 {
            let v = random_channel(200, 100, &mut rng);
            assert!((100..=200).contains(&v), "{v} outside [100, 200]");
        }
    }

    #[test]
    fn default_channel_range_is_light_half() {
        assert_eq!(ChannelRange::default(), ChannelRange::new(0x88, 0xff));
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rgb() -> impl Strategy<Value = Rgb> {
            any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgb::new(r, g, b))
        }

        proptest! {
            #[test]
            fn hex_round_trip_is_lossless(c in rgb()) {
                prop_assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
            }

            #[test]
            fn blend_endpoints(c in rgb()) {
                prop_assert_eq!(blend_to_black(c, 0.0), c);
                prop_assert_eq!(blend_to_black(c, 1.0), Rgb::BLACK);
            }

            #[test]
            fn blend_decays_monotonically(c in rgb(), a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
                let (f1, f2) = if a <= b { (a, b) } else { (b, a) };
                let lighter = blend_to_black(c, f1);
                let darker = blend_to_black(c, f2);
                prop_assert!(darker.r <= lighter.r);
                prop_assert!(darker.g <= lighter.g);
                prop_assert!(darker.b <= lighter.b);
            }

            #[test]
            fn random_channel_stays_in_bounds(seed: u64, min: u8, max: u8) {
                let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
                let mut rng = Xorshift64::new(seed);
                for _ in 0..50 {
                    let v = random_channel(lo, hi, &mut rng);
                    prop_assert!(lo <= v && v <= hi, "{v} outside [{lo}, {hi}]");
                }
            }
        }
    }
}
