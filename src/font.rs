//! HUD text rasterisation.
//!
//! A TTF/OTF file is rendered through ab_glyph when one can be loaded; otherwise a
//! built-in 5x7 bitmap face is used so the HUD never depends on an asset being shipped.

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use std::fs;
use std::path::Path;

use crate::error::{LifeError, Result};

const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;

pub enum HudFont {
    Outline { font: FontVec, scale: PxScale },
    Bitmap { scale: i32 },
}

impl HudFont {
    pub fn load(path: &Path, size_px: f32) -> Result<Self> {
        let data = fs::read(path).map_err(|e| LifeError::Font {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let font = FontVec::try_from_vec(data).map_err(|e| LifeError::Font {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(HudFont::Outline {
            font,
            scale: PxScale::from(size_px),
        })
    }

    pub fn builtin(scale: i32) -> Self {
        HudFont::Bitmap {
            scale: scale.max(1),
        }
    }

    /// Falls back to the bitmap face, logging why.
    pub fn load_or_builtin(path: &Path, size_px: f32) -> Self {
        match Self::load(path, size_px) {
            Ok(font) => {
                log::info!("HUD font loaded from {}", path.display());
                font
            }
            Err(err) => {
                log::warn!("{}; using built-in bitmap font", err);
                Self::builtin(1)
            }
        }
    }

    /// Width and height of the text's box in pixels.
    pub fn measure(&self, text: &str) -> (i32, i32) {
        match self {
            HudFont::Outline { font, scale } => {
                let scaled = font.as_scaled(*scale);
                let mut width = 0.0;
                let mut previous = None;
                for ch in text.chars() {
                    let id = scaled.glyph_id(ch);
                    if let Some(prev) = previous {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    previous = Some(id);
                }
                let height = scaled.ascent() - scaled.descent();
                (width.ceil() as i32, height.ceil() as i32)
            }
            HudFont::Bitmap { scale } => {
                let count = text.chars().count() as i32;
                if count == 0 {
                    return (0, GLYPH_HEIGHT * scale);
                }
                // 1px gap between glyphs, none after the last
                ((count * (GLYPH_WIDTH + 1) - 1) * scale, GLYPH_HEIGHT * scale)
            }
        }
    }

    /// Rasterises `text` with its box's top-left at (x, y). `plot` receives every covered
    /// pixel with a coverage in (0, 1].
    pub fn draw<F>(&self, text: &str, x: i32, y: i32, mut plot: F)
    where
        F: FnMut(i32, i32, f32),
    {
        match self {
            HudFont::Outline { font, scale } => {
                let scaled = font.as_scaled(*scale);
                let baseline = y as f32 + scaled.ascent();
                let mut caret = x as f32;
                let mut previous = None;

                for ch in text.chars() {
                    let id = scaled.glyph_id(ch);
                    if let Some(prev) = previous {
                        caret += scaled.kern(prev, id);
                    }
                    let glyph = id.with_scale_and_position(*scale, point(caret, baseline));
                    caret += scaled.h_advance(id);
                    previous = Some(id);

                    if let Some(outlined) = font.outline_glyph(glyph) {
                        let bounds = outlined.px_bounds();
                        outlined.draw(|gx, gy, coverage| {
                            if coverage > 0.0 {
                                plot(
                                    bounds.min.x as i32 + gx as i32,
                                    bounds.min.y as i32 + gy as i32,
                                    coverage.min(1.0),
                                );
                            }
                        });
                    }
                }
            }
            HudFont::Bitmap { scale } => {
                let mut caret = x;
                for ch in text.chars() {
                    let rows = glyph_5x7(ch.to_ascii_uppercase());
                    for (row, bits) in rows.iter().enumerate() {
                        for col in 0..GLYPH_WIDTH {
                            if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                                continue;
                            }
                            for sy in 0..*scale {
                                for sx in 0..*scale {
                                    plot(caret + col * scale + sx, y + row as i32 * scale + sy, 1.0);
                                }
                            }
                        }
                    }
                    caret += (GLYPH_WIDTH + 1) * scale;
                }
            }
        }
    }
}

fn glyph_5x7(c: char) -> [u8; 7] {
    match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b11111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],

        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b10000, 0b11110, 0b00001, 0b00001, 0b11110],
        '6' => [0b01110, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110],

        ':' => [0b00000, 0b00100, 0b00100, 0b00000, 0b00100, 0b00100, 0b00000],
        '/' => [0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000, 0b00000],
        '[' => [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
        ']' => [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => [0; 7],
    }
}
