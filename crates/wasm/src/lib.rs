#![deny(unsafe_code)]
//! WASM bindings for hovergrid.
//!
//! [`Sketchpad`] is what the page script talks to. It holds the live brush
//! state the buttons and color picker edit, and on every hover hands the grid
//! an immutable `ColorSetting` snapshot of it. Everything the page needs back
//! is a `#rrggbb` string it can assign to `style.backgroundColor`.
//!
//! Errors cross the boundary as plain strings.

use hovergrid_core::{ColorMode, ColorSetting, GridConfig, GridState, Rgb, Sketch, Xorshift64};
use wasm_bindgen::prelude::*;

/// Strokes a session records before recording stops.
pub const MAX_RECORDED_STROKES: usize = 1 << 16;

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // A second init (hot reload) is harmless.
        let _ = console_log::init_with_level(log::Level::Info);
    }
}

/// A grid plus the brush state the page controls.
#[wasm_bindgen]
pub struct Sketchpad {
    grid: GridState,
    mode: ColorMode,
    custom: Rgb,
    rng: Xorshift64,
    sketch: Sketch,
    recording: bool,
}

#[wasm_bindgen]
impl Sketchpad {
    /// A default-size grid in rainbow mode. `seed` drives rainbow colors.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<Sketchpad, String> {
        let config = GridConfig::default();
        let grid = GridState::new(config).map_err(|e| e.to_string())?;
        let setting = ColorSetting::default();
        Ok(Self {
            sketch: Sketch {
                config,
                ..Sketch::new(grid.size(), seed)
            },
            grid,
            mode: setting.mode,
            custom: setting.custom,
            rng: Xorshift64::new(seed),
            recording: true,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn max_size(&self) -> usize {
        self.grid.config().max_size
    }

    /// Rebuilds the grid at `n x n`. On error the grid is unchanged.
    pub fn resize(&mut self, n: usize) -> Result<(), String> {
        self.grid.resize(n).map_err(|e| e.to_string())?;
        self.restart_sketch();
        Ok(())
    }

    /// Resizes from the size text box.
    pub fn resize_from_text(&mut self, text: &str) -> Result<(), String> {
        self.grid.resize_from_str(text).map_err(|e| e.to_string())?;
        self.restart_sketch();
        Ok(())
    }

    /// Clears every cell (the reset button).
    pub fn reset(&mut self) {
        self.grid.reset();
        self.restart_sketch();
    }

    /// Switches brush mode by button name (`black`, `grey`, `rainbow`, `custom`, `eraser`).
    pub fn set_mode(&mut self, name: &str) -> Result<(), String> {
        self.mode = name.parse::<ColorMode>().map_err(|e| e.to_string())?;
        log::info!("setting color: {}", self.mode);
        Ok(())
    }

    pub fn mode(&self) -> String {
        self.mode.to_string()
    }

    /// Takes the picker value and switches to custom mode.
    pub fn set_custom_color(&mut self, hex: &str) -> Result<(), String> {
        self.custom = Rgb::from_hex(hex).map_err(|e| e.to_string())?;
        self.mode = ColorMode::Custom;
        log::info!("setting color: custom, {}", self.custom);
        Ok(())
    }

    pub fn custom_color(&self) -> String {
        self.custom.to_hex()
    }

    /// Applies a hover and returns the cell's new background color.
    ///
    /// Hovers that change nothing (a saturated cell, erasing a blank cell)
    /// are not recorded.
    pub fn hover(&mut self, row: usize, col: usize) -> Result<String, String> {
        let setting = self.setting();
        let before = (self.grid.cell(row, col).copied(), self.rng.clone());
        let color = self
            .grid
            .apply_hover(row, col, &setting, &mut self.rng)
            .map_err(|e| e.to_string())?;
        let unchanged = before == (self.grid.cell(row, col).copied(), self.rng.clone());
        if self.recording && !unchanged {
            self.record(row, col, setting);
        }
        Ok(color.to_hex())
    }

    /// Current background color of a cell, if it exists.
    pub fn color_at(&self, row: usize, col: usize) -> Option<String> {
        self.grid.display_color(row, col).map(Rgb::to_hex)
    }

    /// Every cell's color, row-major.
    pub fn colors(&self) -> Vec<String> {
        self.grid.display_colors().into_iter().map(Rgb::to_hex).collect()
    }

    /// The session since the last resize or reset, as sketch JSON.
    ///
    /// Fails once the session outgrew [`MAX_RECORDED_STROKES`]; the grid
    /// keeps working, but only a reset or resize starts a new recording.
    pub fn export_sketch(&self) -> Result<String, String> {
        if !self.recording {
            return Err(format!(
                "session exceeded {MAX_RECORDED_STROKES} strokes; reset to record again"
            ));
        }
        serde_json::to_string(&self.sketch).map_err(|e| e.to_string())
    }
}

impl Sketchpad {
    fn setting(&self) -> ColorSetting {
        ColorSetting::new(self.mode).with_custom(self.custom)
    }

    fn record(&mut self, row: usize, col: usize, setting: ColorSetting) {
        if self.sketch.strokes.len() >= MAX_RECORDED_STROKES {
            log::warn!("recording stopped after {MAX_RECORDED_STROKES} strokes");
            self.recording = false;
            self.sketch.strokes = Vec::new();
            return;
        }
        self.sketch.push(row, col, setting);
    }

    /// Starts a new recording whose seed is the generator's next state, so
    /// replaying it reproduces the rainbow colors from here on.
    fn restart_sketch(&mut self) {
        let seed = self.rng.next_u64();
        self.rng = Xorshift64::new(seed);
        self.sketch = Sketch {
            config: *self.grid.config(),
            ..Sketch::new(self.grid.size(), seed)
        };
        self.recording = true;
        log::debug!("new {0}x{0} session, seed {seed}", self.grid.size());
    }
}
