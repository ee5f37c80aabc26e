use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use png::{Decoder, Transformations};

use crate::config::TargetConfig;
use crate::presentation::IconSelector;

const BUILTIN_SIZE: u32 = 22;
const ON_COLOR: (u8, u8, u8) = (52, 199, 89);
const OFF_COLOR: (u8, u8, u8) = (142, 142, 147);

/// Decoded RGBA pixels, ready to hand to the tray backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// The two icons the affordance switches between.
#[derive(Clone, Debug)]
pub struct IconSet {
    pub on: IconImage,
    pub off: IconImage,
}

impl IconSet {
    /// Loads configured icon files, falling back to the built-in icons when a
    /// path is not set. A configured path that cannot be loaded is an error.
    pub fn load(config: &TargetConfig) -> Result<Self> {
        let on = match &config.icon_on {
            Some(path) => load_icon_file(path).context("Failed to load IconOn")?,
            None => builtin_icon(IconSelector::On),
        };
        let off = match &config.icon_off {
            Some(path) => load_icon_file(path).context("Failed to load IconOff")?,
            None => builtin_icon(IconSelector::Off),
        };
        Ok(Self { on, off })
    }
}

pub fn load_icon_file(path: &Path) -> Result<IconImage> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read icon '{}'", path.display()))?;
    load_png_icon(&bytes).with_context(|| format!("invalid icon '{}'", path.display()))
}

pub fn load_png_icon(png_data: &[u8]) -> Result<IconImage> {
    let mut decoder = Decoder::new(png_data);
    // Palette and 16-bit images come out as 8-bit gray/RGB(A).
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| anyhow!("failed to read PNG header: {e}"))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| anyhow!("failed to decode PNG: {e}"))?;

    let width = info.width;
    let height = info.height;
    let pixels = &buf[..info.buffer_size()];

    // After normalisation every pixel is 1-4 bytes: gray, gray+alpha, RGB
    // or RGBA. Even counts carry alpha last.
    let samples = info.color_type.samples();
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for px in pixels.chunks_exact(samples) {
        let [r, g, b] = if samples >= 3 {
            [px[0], px[1], px[2]]
        } else {
            [px[0]; 3]
        };
        let alpha = if samples % 2 == 0 { px[samples - 1] } else { 255 };
        rgba.extend_from_slice(&[r, g, b, alpha]);
    }

    Ok(IconImage {
        rgba,
        width,
        height,
    })
}

/// Drawn icons used when no asset is configured: a filled dot for "on",
/// a hollow ring for "off".
pub fn builtin_icon(selector: IconSelector) -> IconImage {
    let size = BUILTIN_SIZE as i32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];
    let ((r, g, b), filled) = match selector {
        IconSelector::On => (ON_COLOR, true),
        IconSelector::Off => (OFF_COLOR, false),
    };

    let center = size / 2;
    let outer = 8 * 8;
    let inner = 5 * 5;
    for y in 0..size {
        for x in 0..size {
            let dx = x - center;
            let dy = y - center;
            let dist = dx * dx + dy * dy;
            let alpha = if dist > outer {
                0
            } else if filled || dist >= inner {
                255
            } else {
                0
            };
            if alpha > 0 {
                let idx = ((y * size + x) * 4) as usize;
                pixels[idx] = r;
                pixels[idx + 1] = g;
                pixels[idx + 2] = b;
                pixels[idx + 3] = alpha;
            }
        }
    }

    IconImage {
        rgba: pixels,
        width: BUILTIN_SIZE,
        height: BUILTIN_SIZE,
    }
}
