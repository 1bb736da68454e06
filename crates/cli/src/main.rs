#![deny(unsafe_code)]
//! CLI binary for hovergrid.
//!
//! Subcommands:
//! - `replay <sketch.json>` — replay a recorded sketch, write PNG or print hex grid
//! - `resolve <mode>` — print the color a mode paints
//! - `blend <#rrggbb> <fraction>` — darken a color toward black
//! - `hex <r> <g> <b>` — format a color as `#rrggbb`
//! - `list` — print color modes and config defaults

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use hovergrid_core::{
    blend_to_black, ColorMode, ColorSetting, GridConfig, GridState, Rgb, Sketch, Xorshift64,
};
use hovergrid_snapshot::{Raster, BOARD_PX};
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "hovergrid", about = "Hover-to-paint grid toolkit")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Grid config JSON file (overrides a sketch's embedded config).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a recorded sketch and write a PNG (or print the grid).
    Replay {
        /// Sketch JSON file.
        sketch: PathBuf,

        /// Output PNG path. Prints the hex grid when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Cell edge in pixels. Defaults to fitting a 600px board.
        #[arg(long)]
        cell_px: Option<usize>,

        /// Do not draw cell borders.
        #[arg(long)]
        no_border: bool,
    },
    /// Print the color a mode paints.
    Resolve {
        /// Mode name (black, grey, rainbow, custom, eraser).
        mode: String,

        /// Picker color for custom mode.
        #[arg(long, default_value = "#00ff00")]
        custom: String,

        /// PRNG seed for rainbow mode.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Darken a color toward black by a fraction in [0, 1].
    Blend {
        /// Color as #rrggbb.
        color: String,

        /// Fraction blended toward black.
        fraction: f64,
    },
    /// Format channel values as #rrggbb.
    Hex { r: u8, g: u8, b: u8 },
    /// List color modes and config defaults.
    List,
}

fn load_config(path: &Path) -> Result<GridConfig, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("reading {}: {e}", path.display())))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid config JSON: {e}")))?;
    let config = GridConfig::from_json(&value);
    config.validate()?;
    Ok(config)
}

fn load_sketch(path: &Path) -> Result<Sketch, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("reading {}: {e}", path.display())))?;
    serde_json::from_str(&text).map_err(|e| CliError::Input(format!("invalid sketch JSON: {e}")))
}

fn parse_color(s: &str) -> Result<Rgb, CliError> {
    Rgb::from_hex(s).map_err(|e| CliError::Input(e.to_string()))
}

fn hex_rows(grid: &GridState) -> Vec<Vec<String>> {
    grid.display_colors()
        .chunks(grid.size())
        .map(|row| row.iter().map(|c| c.to_hex()).collect())
        .collect()
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config.as_deref().map(load_config).transpose()?;

    match cli.command {
        Command::Replay {
            sketch,
            output,
            cell_px,
            no_border,
        } => {
            let mut sketch = load_sketch(&sketch)?;
            if let Some(config) = config {
                sketch.config = config;
            }
            let grid = sketch.replay()?;

            match output {
                Some(path) => {
                    let mut raster = Raster::fitted(grid.size(), BOARD_PX);
                    if let Some(px) = cell_px {
                        raster.cell_px = px;
                    }
                    raster.border = !no_border;
                    hovergrid_snapshot::write_png(&grid, &raster, &path)?;

                    if cli.json {
                        let info = serde_json::json!({
                            "size": grid.size(),
                            "strokes": sketch.strokes.len(),
                            "seed": sketch.seed,
                            "output": path.display().to_string(),
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        eprintln!(
                            "replayed {0} strokes ({1}x{1} grid, seed {2}) -> {3}",
                            sketch.strokes.len(),
                            grid.size(),
                            sketch.seed,
                            path.display()
                        );
                    }
                }
                None => {
                    let rows = hex_rows(&grid);
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&rows)?);
                    } else {
                        for row in rows {
                            println!("{}", row.join(" "));
                        }
                    }
                }
            }
        }
        Command::Resolve { mode, custom, seed } => {
            let mode: ColorMode = mode.parse()?;
            let setting = ColorSetting::new(mode).with_custom(parse_color(&custom)?);
            let model = config.unwrap_or_default().color_model();
            let color = model.resolve(&setting, &mut Xorshift64::new(seed));
            if cli.json {
                let info = serde_json::json!({ "setting": setting, "color": color });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{color}");
            }
        }
        Command::Blend { color, fraction } => {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(CliError::Input(format!(
                    "fraction must be in [0, 1], got {fraction}"
                )));
            }
            let color = parse_color(&color)?;
            let blended = blend_to_black(color, fraction);
            if cli.json {
                let info = serde_json::json!({
                    "color": color,
                    "fraction": fraction,
                    "blended": blended,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{blended}");
            }
        }
        Command::Hex { r, g, b } => {
            let color = Rgb::new(r, g, b);
            if cli.json {
                println!("{}", serde_json::to_string(&color)?);
            } else {
                println!("{color}");
            }
        }
        Command::List => {
            let modes: Vec<&str> = ColorMode::ALL.iter().map(|m| m.name()).collect();
            let config = config.unwrap_or_default();
            if cli.json {
                let info = serde_json::json!({
                    "modes": modes,
                    "config": config,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Modes:");
                println!("  {}", modes.join(", "));
                println!("Config:");
                println!("  default size  {}", config.default_size);
                println!("  max size      {}", config.max_size);
                println!("  unset color   {}", config.unset_color);
                println!(
                    "  rainbow range {:#04x}..={:#04x}",
                    config.rainbow.min, config.rainbow.max
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
