use anyhow::{Context, Result};
use icon_slicer::{CropMargin, IconProcessor, InputMode, Preset};
use std::env;
use std::path::PathBuf;
use std::process;

const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_SOURCE: &str = "assets/icons_source.png";

fn print_usage(program: &str) {
    eprintln!("Tray Icon Slicer");
    eprintln!();
    eprintln!("Usage: {} <preset> [path] [OPTIONS]", program);
    eprintln!();
    eprintln!("Presets:");
    eprintln!("  split <image>        Split a combined image into 3 icons (path required)");
    eprintln!("  resize [dir]         Resize icon_*.png in dir to 48x48 (default dir: assets)");
    eprintln!("  circle [dir]         Resize and apply a circular mask");
    eprintln!("  crop-circle [dir]    Crop center 65%, resize, circular mask");
    eprintln!("  process [image]      Split, crop 70%, 2x resize, soft circular mask");
    eprintln!("                       (default image: {})", DEFAULT_SOURCE);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --out <DIR>          Output directory (default: the input dir for resize,");
    eprintln!("                       circle and crop-circle; the image's dir for split;");
    eprintln!("                       {} for process)", DEFAULT_ASSETS_DIR);
    eprintln!("  --size <N>           Final icon size in pixels");
    eprintln!("  --crop <R>           Keep the centered fraction R of each slice, 0 < R <= 1");
    eprintln!("  --no-crop            Disable center cropping");
    eprintln!("  --margin <MODE>      Crop margin: per-axis, or uniform (width margin on all sides)");
    eprintln!("  --mask / --no-mask   Enable or disable the circular mask");
    eprintln!("  --soften <R>         Blur radius for the mask edge (0 = hard edge)");
    eprintln!("  --padding <N>        Inset of the mask circle from the border");
    eprintln!("  --two-pass           Resize at 2x, mask, then scale down");
    eprintln!("  --single-pass        Resize straight to the final size");
    eprintln!("  --log                Show detailed processing information");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} split icons.png", program);
    eprintln!("  {} crop-circle assets --crop 0.7", program);
    eprintln!("  {} process icons.png --out assets --size 64", program);
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", flag))
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("icon-slicer");

    if args.len() < 2 {
        print_usage(program);
        return Err(anyhow::anyhow!("Missing preset"));
    }
    if args[1] == "--help" || args[1] == "-h" {
        print_usage(program);
        return Ok(());
    }

    let preset = match Preset::from_name(&args[1]) {
        Some(p) => p,
        None => {
            print_usage(program);
            return Err(anyhow::anyhow!("Unknown preset: {}", args[1]));
        }
    };

    let mut i = 2;
    let mut input_path: Option<PathBuf> = None;
    if let Some(arg) = args.get(2) {
        if !arg.starts_with("--") {
            input_path = Some(PathBuf::from(arg));
            i = 3;
        }
    }

    let mut processor = IconProcessor::from_preset(preset);
    let mut out_dir: Option<PathBuf> = None;
    let mut log_enabled = false;

    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                out_dir = Some(PathBuf::from(value(&args, i, "--out")?));
                i += 2;
            }
            "--size" => {
                let size = value(&args, i, "--size")?
                    .parse::<u32>()
                    .context("Invalid size")?;
                if size == 0 {
                    return Err(anyhow::anyhow!("Size must be >= 1"));
                }
                processor = processor.with_size(size);
                i += 2;
            }
            "--crop" => {
                let ratio = value(&args, i, "--crop")?
                    .parse::<f32>()
                    .context("Invalid crop ratio")?;
                processor = processor.with_crop_ratio(ratio);
                i += 2;
            }
            "--margin" => {
                let name = value(&args, i, "--margin")?;
                let margin = CropMargin::from_name(name)
                    .ok_or_else(|| anyhow::anyhow!("Unknown crop margin: {}", name))?;
                processor = processor.with_crop_margin(margin);
                i += 2;
            }
            "--no-crop" => {
                processor = processor.without_crop();
                i += 1;
            }
            "--mask" => {
                processor = processor.with_circle_mask();
                i += 1;
            }
            "--no-mask" => {
                processor = processor.without_mask();
                i += 1;
            }
            "--soften" => {
                let radius = value(&args, i, "--soften")?
                    .parse::<f32>()
                    .context("Invalid soften radius")?;
                processor = processor.with_soften_radius(radius);
                i += 2;
            }
            "--padding" => {
                let padding = value(&args, i, "--padding")?
                    .parse::<u32>()
                    .context("Invalid padding")?;
                processor = processor.with_mask_padding(padding);
                i += 2;
            }
            "--two-pass" => {
                processor = processor.with_two_pass(true);
                i += 1;
            }
            "--single-pass" => {
                processor = processor.with_two_pass(false);
                i += 1;
            }
            "--log" => {
                log_enabled = true;
                i += 1;
            }
            "--help" | "-h" => {
                print_usage(program);
                return Ok(());
            }
            _ => {
                return Err(anyhow::anyhow!("Unknown option: {}", args[i]));
            }
        }
    }

    env_logger::Builder::from_default_env()
        .filter_level(if log_enabled {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    processor.validate()?;

    let report = match preset.input_mode() {
        InputMode::Source => {
            let source = match input_path {
                Some(p) => p,
                None if preset == Preset::Split => {
                    print_usage(program);
                    return Err(anyhow::anyhow!("split requires an image path"));
                }
                None => PathBuf::from(DEFAULT_SOURCE),
            };
            // Split writes next to its input; process defaults to the assets dir
            let out = out_dir.unwrap_or_else(|| match preset {
                Preset::Split => source
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(".")),
                _ => PathBuf::from(DEFAULT_ASSETS_DIR),
            });
            log::debug!("Preset {} on {} -> {}", preset.name(), source.display(), out.display());
            log::debug!("Config: {:?}", processor.config());
            processor.process_source(&source, &out)?
        }
        InputMode::Directory => {
            let in_dir = input_path.unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));
            let out = out_dir.unwrap_or_else(|| in_dir.clone());
            log::debug!("Preset {} on {} -> {}", preset.name(), in_dir.display(), out.display());
            log::debug!("Config: {:?}", processor.config());
            processor.process_directory(&in_dir, &out)?
        }
    };

    log::debug!(
        "{} written, {} missing",
        report.written.len(),
        report.missing.len()
    );
    println!("Done!");

    Ok(())
}
