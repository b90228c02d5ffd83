use crate::config::{PIXEL_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::font::HudFont;
use crate::session::Mode;
use crate::viewport::ScreenRect;

pub const TEXT_COLOR: [u8; 4] = [0x00, 0xFF, 0x00, 0xFF];
const PANEL_COLOR: [u8; 4] = [0x22, 0x22, 0x22, 0x99];
const SELECTED_COLOR: [u8; 4] = [0x55, 0x55, 0x55, 0x99];
const PADDING: i32 = PIXEL_SIZE as i32;

pub const RESET_LEGEND: &str = "Reset: [Space]    Pause/Play: [Enter]    Exit: [Esc]";
pub const CAMERA_LEGEND: &str = "Zoom: [Scroll Wheel]    Pan Camera: [Arrow Keys or WASD]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// A translucent backing rectangle with text drawn over it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub rect: ScreenRect,
    pub fill: [u8; 4],
    pub lines: Vec<TextLine>,
}

/// Where a line of text sits relative to its anchor point
#[derive(Debug, Clone, Copy)]
enum Anchor {
    MidLeft,
    MidRight,
    Center,
}

fn place(font: &HudFont, text: &str, anchor: Anchor, ax: i32, ay: i32) -> (TextLine, ScreenRect) {
    let (w, h) = font.measure(text);
    let x = match anchor {
        Anchor::MidLeft => ax,
        Anchor::MidRight => ax - w,
        Anchor::Center => ax - w / 2,
    };
    let y = ay - h / 2;
    let line = TextLine {
        text: text.to_string(),
        x,
        y,
    };
    (line, ScreenRect::new(x, y, w, h))
}

fn bounding(rects: &[ScreenRect]) -> ScreenRect {
    let left = rects.iter().map(|r| r.x).min().unwrap_or(0);
    let top = rects.iter().map(|r| r.y).min().unwrap_or(0);
    let right = rects.iter().map(ScreenRect::right).max().unwrap_or(0);
    let bottom = rects.iter().map(ScreenRect::bottom).max().unwrap_or(0);
    ScreenRect::new(left, top, right - left, bottom - top)
}

fn padded(rect: ScreenRect, pad: i32) -> ScreenRect {
    ScreenRect::new(rect.x - pad, rect.y - pad, rect.w + pad * 2, rect.h + pad * 2)
}

/// Generation and population, top-left.
fn counters_panel(font: &HudFont, generation: u64, population: usize) -> Panel {
    let h = WINDOW_HEIGHT as i32;
    let (gen_line, gen_rect) = place(font, &format!("Generation: {}", generation), Anchor::MidLeft, 0, h / 32);
    let (pop_line, pop_rect) = place(font, &format!("Population: {}", population), Anchor::MidLeft, 0, h / 16);

    let mut rect = padded(bounding(&[gen_rect, pop_rect]), PADDING * 2);
    // Flush with the window's left edge
    rect.w += rect.x;
    rect.x = 0;

    Panel {
        rect,
        fill: PANEL_COLOR,
        lines: vec![gen_line, pop_line],
    }
}

/// Edit / Blank / Random selector, top-right, with the active entry highlighted.
fn mode_panels(font: &HudFont, mode: Mode) -> Vec<Panel> {
    let w = WINDOW_WIDTH as i32;
    let h = WINDOW_HEIGHT as i32;
    let entries = [
        ("Edit: [E]", Mode::Edit, h / 32),
        ("Blank: [B]", Mode::Blank, h / 16),
        ("Random: [R]", Mode::Random, h * 3 / 32),
    ];

    let placed: Vec<_> = entries
        .iter()
        .map(|&(text, entry_mode, y)| (place(font, text, Anchor::MidRight, w, y), entry_mode))
        .collect();
    let left = placed.iter().map(|((_, rect), _)| rect.x).min().unwrap_or(w) - PADDING * 2;

    placed
        .into_iter()
        .map(|((line, rect), entry_mode)| Panel {
            rect: ScreenRect::new(left, rect.y - PADDING * 2, w - left, rect.h + PADDING * 3),
            fill: if entry_mode == mode { SELECTED_COLOR } else { PANEL_COLOR },
            lines: vec![line],
        })
        .collect()
}

/// Two-line control legend, bottom centre.
fn legend_panel(font: &HudFont) -> Panel {
    let w = WINDOW_WIDTH as i32;
    let h = WINDOW_HEIGHT as i32;
    let (reset_line, reset_rect) = place(font, RESET_LEGEND, Anchor::Center, w / 2, h * 15 / 16);
    let (camera_line, camera_rect) = place(font, CAMERA_LEGEND, Anchor::Center, w / 2, h * 31 / 32);

    Panel {
        rect: padded(bounding(&[reset_rect, camera_rect]), PADDING * 2),
        fill: PANEL_COLOR,
        lines: vec![reset_line, camera_line],
    }
}

pub fn layout(font: &HudFont, generation: u64, population: usize, mode: Mode) -> Vec<Panel> {
    let mut panels = vec![legend_panel(font), counters_panel(font, generation, population)];
    panels.extend(mode_panels(font, mode));
    panels
}

/// Screen areas that swallow clicks instead of painting.
pub fn exclusion_zones(panels: &[Panel]) -> Vec<ScreenRect> {
    panels.iter().map(|panel| panel.rect).collect()
}
