use crate::config::{DEFAULT_PAN_SPEED, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl ScreenRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open on the right and bottom edges.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

pub fn screen_to_cell(pixel_x: i32, pixel_y: i32, zoom: i32, offset_x: i32, offset_y: i32) -> (i32, i32) {
    (
        pixel_x.div_euclid(zoom) - offset_x,
        pixel_y.div_euclid(zoom) - offset_y,
    )
}

pub fn cell_to_screen_rect(col: i32, row: i32, zoom: i32, offset_x: i32, offset_y: i32) -> ScreenRect {
    ScreenRect::new((col + offset_x) * zoom, (row + offset_y) * zoom, zoom, zoom)
}

/// A cell is drawn when its top-left corner lands inside the window, edges inclusive.
pub fn origin_on_screen(rect: &ScreenRect, window_width: i32, window_height: i32) -> bool {
    (0..=window_width).contains(&rect.x) && (0..=window_height).contains(&rect.y)
}

/// One wheel event's effect on zoom. Scaling is proportional to the current zoom, and a
/// result outside the range snaps to the nearer bound (the maximum on a tie). A zoom already
/// outside the range is left alone.
pub fn adjust_zoom(current_zoom: i32, wheel_delta: i32) -> i32 {
    if !(MIN_ZOOM..=MAX_ZOOM).contains(&current_zoom) {
        return current_zoom;
    }

    let step = (i64::from(wheel_delta) * i64::from(current_zoom)).div_euclid(6);
    let zoomed = i64::from(current_zoom) + step;

    if (i64::from(MIN_ZOOM)..=i64::from(MAX_ZOOM)).contains(&zoomed) {
        zoomed as i32
    } else if (i64::from(MAX_ZOOM) - zoomed).abs() <= (i64::from(MIN_ZOOM) - zoomed).abs() {
        MAX_ZOOM
    } else {
        MIN_ZOOM
    }
}

/// Pan controls held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub zoom: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub pan_speed: i32,
    zoom_changed: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset_x: 0,
            offset_y: 0,
            pan_speed: DEFAULT_PAN_SPEED,
            zoom_changed: false,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom_changed(&self) -> bool {
        self.zoom_changed
    }

    pub fn screen_to_cell(&self, pixel_x: i32, pixel_y: i32) -> (i32, i32) {
        screen_to_cell(pixel_x, pixel_y, self.zoom, self.offset_x, self.offset_y)
    }

    pub fn cell_rect(&self, col: i32, row: i32) -> ScreenRect {
        cell_to_screen_rect(col, row, self.zoom, self.offset_x, self.offset_y)
    }

    /// Applies a wheel event, remembering that the user touched zoom this session.
    pub fn scroll(&mut self, wheel_delta: i32) {
        let zoom = adjust_zoom(self.zoom, wheel_delta);
        if zoom != self.zoom {
            log::debug!("Zoom {} -> {}", self.zoom, zoom);
            self.zoom = zoom;
            self.zoom_changed = true;
        }
    }

    /// Moving "left" shifts the view so the board slides right, and so on.
    pub fn pan(&mut self, input: PanInput) {
        if input.left {
            self.offset_x += self.pan_speed;
        }
        if input.right {
            self.offset_x -= self.pan_speed;
        }
        if input.up {
            self.offset_y += self.pan_speed;
        }
        if input.down {
            self.offset_y -= self.pan_speed;
        }
    }

    /// Grid reset: default zoom unless the user zoomed, default pan speed. Offsets persist.
    pub fn reset(&mut self) {
        if !self.zoom_changed {
            self.zoom = DEFAULT_ZOOM;
        }
        self.pan_speed = DEFAULT_PAN_SPEED;
    }
}
