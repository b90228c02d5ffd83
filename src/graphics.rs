use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalPosition;
use winit::window::Window;

use crate::error::Result;
use crate::font::HudFont;
use crate::hud::{self, Panel, TEXT_COLOR};
use crate::session::Session;
use crate::viewport::{origin_on_screen, ScreenRect};

const BACKGROUND: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];
const CELL_COLOR: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
const OUTLINE_COLOR: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

/// RGBA8 frame buffer view with clipped drawing primitives
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: i32,
    height: i32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), (width * height * 4) as usize);
        Self {
            frame,
            width: width as i32,
            height: height as i32,
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(((y * self.width + x) * 4) as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let index = self.index(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.frame[index..index + 4]);
        Some(rgba)
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Alpha-blends `color` over the pixel, scaled by `coverage`.
    pub fn blend(&mut self, x: i32, y: i32, color: [u8; 4], coverage: f32) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let alpha = (color[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        for channel in 0..3 {
            let under = self.frame[index + channel] as f32;
            self.frame[index + channel] = (under + (color[channel] as f32 - under) * alpha).round() as u8;
        }
        self.frame[index + 3] = 0xFF;
    }

    pub fn fill_rect(&mut self, rect: ScreenRect, color: [u8; 4]) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width);
        let y1 = rect.bottom().min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                if color[3] == 0xFF {
                    let index = ((y * self.width + x) * 4) as usize;
                    self.frame[index..index + 4].copy_from_slice(&color);
                } else {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    /// One-pixel border just inside `rect`.
    pub fn outline_rect(&mut self, rect: ScreenRect, color: [u8; 4]) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        self.fill_rect(ScreenRect::new(rect.x, rect.y, rect.w, 1), color);
        self.fill_rect(ScreenRect::new(rect.x, rect.bottom() - 1, rect.w, 1), color);
        self.fill_rect(ScreenRect::new(rect.x, rect.y, 1, rect.h), color);
        self.fill_rect(ScreenRect::new(rect.right() - 1, rect.y, 1, rect.h), color);
    }
}

fn draw_cells(canvas: &mut Canvas, session: &Session) {
    let viewport = session.viewport();
    for (col, row) in session.grid().live_cells() {
        let rect = viewport.cell_rect(col as i32, row as i32);
        if origin_on_screen(&rect, canvas.width, canvas.height) {
            canvas.fill_rect(rect, CELL_COLOR);
        }
    }
}

fn draw_grid_outline(canvas: &mut Canvas, session: &Session) {
    let viewport = session.viewport();
    let grid = session.grid();
    let origin = viewport.cell_rect(0, 0);
    let extent = ScreenRect::new(
        origin.x,
        origin.y,
        grid.width() as i32 * viewport.zoom,
        grid.height() as i32 * viewport.zoom,
    );
    canvas.outline_rect(extent, OUTLINE_COLOR);
}

fn draw_panels(canvas: &mut Canvas, panels: &[Panel], font: &HudFont) {
    for panel in panels {
        canvas.fill_rect(panel.rect, panel.fill);
        for line in &panel.lines {
            font.draw(&line.text, line.x, line.y, |x, y, coverage| {
                canvas.blend(x, y, TEXT_COLOR, coverage)
            });
        }
    }
}

/// Paints one full frame and returns the HUD rectangles that should swallow clicks.
pub fn draw_scene(canvas: &mut Canvas, session: &Session, font: &HudFont) -> Vec<ScreenRect> {
    canvas.clear(BACKGROUND);
    draw_cells(canvas, session);
    draw_grid_outline(canvas, session);

    let panels = hud::layout(font, session.generation(), session.population(), session.mode());
    draw_panels(canvas, &panels, font);
    hud::exclusion_zones(&panels)
}

pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
    font: HudFont,
}

impl GraphicsRenderer {
    /// The logical buffer stays `width` x `height`; the window surface may be any size.
    pub fn new(window: &Window, width: u32, height: u32, font: HudFont) -> Result<Self> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
            font,
        })
    }

    /// Minimised windows report a zero size; those are skipped.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)?;
        Ok(())
    }

    /// Maps a window position to frame-buffer pixels. Positions past the buffer edge keep
    /// their out-of-range coordinates.
    pub fn window_to_buffer(&self, position: PhysicalPosition<f64>) -> (i32, i32) {
        let position = (position.x as f32, position.y as f32);
        match self.pixels.window_pos_to_pixel(position) {
            Ok((x, y)) => (x as i32, y as i32),
            Err((x, y)) => (x as i32, y as i32),
        }
    }

    pub fn render(&mut self, session: &Session) -> Vec<ScreenRect> {
        let mut canvas = Canvas::new(self.pixels.frame_mut(), self.width, self.height);
        draw_scene(&mut canvas, session, &self.font)
    }

    pub fn present(&mut self) -> Result<()> {
        self.pixels.render()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Command, InputEvent};

    fn buffer(width: u32, height: u32) -> Vec<u8> {
        vec![0; (width * height * 4) as usize]
    }

    #[test]
    fn fill_rect_clips_to_frame() {
        let mut frame = buffer(8, 8);
        let mut canvas = Canvas::new(&mut frame, 8, 8);
        canvas.fill_rect(ScreenRect::new(6, 6, 10, 10), CELL_COLOR);
        assert_eq!(canvas.pixel(7, 7), Some(CELL_COLOR));
        assert_eq!(canvas.pixel(5, 5), Some([0; 4]));
        assert_eq!(canvas.pixel(8, 8), None);
    }

    #[test]
    fn blend_mixes_toward_color() {
        let mut frame = buffer(2, 2);
        let mut canvas = Canvas::new(&mut frame, 2, 2);
        canvas.clear(BACKGROUND);
        canvas.blend(0, 0, [200, 100, 0, 0xFF], 0.5);
        assert_eq!(canvas.pixel(0, 0), Some([100, 50, 0, 0xFF]));
        canvas.blend(1, 1, [200, 100, 0, 0xFF], 1.0);
        assert_eq!(canvas.pixel(1, 1), Some([200, 100, 0, 0xFF]));
    }

    #[test]
    fn outline_leaves_interior_untouched() {
        let mut frame = buffer(10, 10);
        let mut canvas = Canvas::new(&mut frame, 10, 10);
        canvas.clear(BACKGROUND);
        canvas.outline_rect(ScreenRect::new(1, 1, 6, 6), OUTLINE_COLOR);
        assert_eq!(canvas.pixel(1, 1), Some(OUTLINE_COLOR));
        assert_eq!(canvas.pixel(6, 6), Some(OUTLINE_COLOR));
        assert_eq!(canvas.pixel(3, 3), Some(BACKGROUND));
        assert_eq!(canvas.pixel(7, 7), Some(BACKGROUND));
    }

    #[test]
    fn scene_draws_live_cells_at_zoom() {
        let mut session = Session::new(Some(3));
        session.grid_mut().set(50, 60, true);
        let mut frame = buffer(512, 512);
        let mut canvas = Canvas::new(&mut frame, 512, 512);
        let font = HudFont::builtin(1);

        let zones = draw_scene(&mut canvas, &session, &font);
        assert_eq!(zones.len(), 5);
        // zoom 4: cell (50,60) covers pixels 200..204 x 240..244
        assert_eq!(canvas.pixel(200, 240), Some(CELL_COLOR));
        assert_eq!(canvas.pixel(203, 243), Some(CELL_COLOR));
        assert_eq!(canvas.pixel(204, 240), Some(BACKGROUND));
    }

    #[test]
    fn scene_skips_cells_left_of_window() {
        let mut session = Session::new(Some(3));
        session.grid_mut().set(100, 100, true);
        session.grid_mut().set(1, 100, true);
        session.viewport_mut().offset_x = -2;
        let mut frame = buffer(512, 512);
        let mut canvas = Canvas::new(&mut frame, 512, 512);

        draw_scene(&mut canvas, &session, &HudFont::builtin(1));
        // (1,100) would start at x = -4; nothing may be drawn for it
        assert_eq!(canvas.pixel(0, 400), Some(BACKGROUND));
        assert_eq!(canvas.pixel(392, 400), Some(CELL_COLOR));
    }

    #[test]
    fn mode_highlight_follows_session() {
        let mut session = Session::new(Some(3));
        session.handle_event(InputEvent::Command(Command::ToggleEdit));
        let mut frame = buffer(512, 512);
        let mut canvas = Canvas::new(&mut frame, 512, 512);
        let zones = draw_scene(&mut canvas, &session, &HudFont::builtin(1));

        // Panel backgrounds are translucent over black, so the selected one is brighter
        let edit = zones.iter().find(|r| r.contains(511, 16)).copied().unwrap();
        let blank = zones.iter().find(|r| r.contains(511, 32)).copied().unwrap();
        let edit_px = canvas.pixel(edit.x, edit.y).unwrap();
        let blank_px = canvas.pixel(blank.x, blank.bottom() - 1).unwrap();
        assert!(edit_px[0] > blank_px[0]);
    }
}
