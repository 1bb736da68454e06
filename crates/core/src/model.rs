//! Maps a [`ColorSetting`] to the concrete color a hover paints.

use serde::{Deserialize, Serialize};

use crate::color::{ChannelRange, Rgb};
use crate::prng::RandomSource;
use crate::setting::{ColorMode, ColorSetting};

/// Resolves brush settings into colors.
///
/// Every mode is deterministic except rainbow, which draws from the
/// caller-supplied [`RandomSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorModel {
    pub rainbow: ChannelRange,
    /// What the eraser paints: the grid's unset cell color.
    #[serde(default = "default_unset")]
    pub unset: Rgb,
}

fn default_unset() -> Rgb {
    Rgb::WHITE
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::new(ChannelRange::default(), default_unset())
    }
}

impl ColorModel {
    pub fn new(rainbow: ChannelRange, unset: Rgb) -> Self {
        Self { rainbow, unset }
    }

    /// Returns the color `setting` paints.
    ///
    /// Rainbow draws red, green, then blue, each independently from the
    /// rainbow range. Eraser paints the unset cell color.
    pub fn resolve(&self, setting: &ColorSetting, rng: &mut impl RandomSource) -> Rgb {
        match setting.mode {
            ColorMode::Black => Rgb::BLACK,
            ColorMode::Grey => Rgb::LIGHT_GREY,
            ColorMode::Eraser => self.unset,
            ColorMode::Custom => setting.custom,
            ColorMode::Rainbow => {
                let r = self.rainbow.sample(rng);
                let g = self.rainbow.sample(rng);
                let b = self.rainbow.sample(rng);
                Rgb::new(r, g, b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Xorshift64;

    /// Always returns the same value.
    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn fixed_modes_ignore_random_source() {
        let model = ColorModel::default();
        let mut rng = Fixed(0.5);
        assert_eq!(model.resolve(&ColorMode::Black.into(), &mut rng), Rgb::BLACK);
        assert_eq!(model.resolve(&ColorMode::Grey.into(), &mut rng), Rgb::LIGHT_GREY);
        assert_eq!(model.resolve(&ColorMode::Eraser.into(), &mut rng), Rgb::WHITE);
    }

    #[test]
    fn eraser_paints_configured_unset_color() {
        let model = ColorModel::new(ChannelRange::default(), Rgb::BORDER);
        let color = model.resolve(&ColorMode::Eraser.into(), &mut Fixed(0.0));
        assert_eq!(color, Rgb::BORDER);
    }

    #[test]
    fn custom_mode_returns_picker_color() {
        let model = ColorModel::default();
        let picked = Rgb::new(0x6a, 0xb7, 0xff);
        let color = model.resolve(&ColorSetting::custom(picked), &mut Fixed(0.0));
        assert_eq!(color, picked);
    }

    #[test]
    fn custom_mode_defaults_to_green() {
        let model = ColorModel::default();
        let color = model.resolve(&ColorMode::Custom.into(), &mut Fixed(0.0));
        assert_eq!(color, Rgb::GREEN);
    }

    #[test]
    fn rainbow_with_fixed_source_is_deterministic() {
        let model = ColorModel::default();
        let rainbow = ColorSetting::new(ColorMode::Rainbow);
        assert_eq!(model.resolve(&rainbow, &mut Fixed(0.0)), Rgb::new(0x88, 0x88, 0x88));
        assert_eq!(model.resolve(&rainbow, &mut Fixed(0.9999)), Rgb::WHITE);
    }

    #[test]
    fn rainbow_stays_inside_configured_range() {
        let model = ColorModel::new(ChannelRange::new(10, 20), Rgb::WHITE);
        let mut rng = Xorshift64::new(99);
        for _ in 0..1000 {
            let c = model.resolve(&ColorSetting::new(ColorMode::Rainbow), &mut rng);
            for channel in c.to_array() {
                assert!((10..=20).contains(&channel), "{channel} outside [10, 20]");
            }
        }
    }

    #[test]
    fn rainbow_with_same_seed_repeats() {
        let model = ColorModel::default();
        let rainbow = ColorSetting::new(ColorMode::Rainbow);
        let mut a = Xorshift64::new(2024);
        let mut b = Xorshift64::new(2024);
        for _ in 0..20 {
            assert_eq!(model.resolve(&rainbow, &mut a), model.resolve(&rainbow, &mut b));
        }
    }
}
