use crate::grid::GridState;
use crate::viewport::{ScreenRect, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drag {
    /// Button up
    Released,
    /// Button held, but only over HUD so far
    Pending,
    /// Drag started off the board; nothing happens until release
    Ignored,
    Painting {
        erase: bool,
        last_cell: Option<(i32, i32)>,
    },
}

/// Freehand painting for one held primary button. The first board cell a drag touches fixes
/// whether the whole drag paints or erases.
#[derive(Debug, Clone)]
pub struct PaintSession {
    drag: Drag,
}

impl Default for PaintSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintSession {
    pub fn new() -> Self {
        Self {
            drag: Drag::Released,
        }
    }

    /// True while a drag is painting or erasing board cells.
    pub fn is_active(&self) -> bool {
        matches!(self.drag, Drag::Painting { .. })
    }

    /// `Some(true)` while erasing, `Some(false)` while painting.
    pub fn erase_mode(&self) -> Option<bool> {
        match self.drag {
            Drag::Painting { erase, .. } => Some(erase),
            _ => None,
        }
    }

    pub fn release(&mut self) {
        self.drag = Drag::Released;
    }

    /// Runs one frame of the drag. `held` is the primary button state this frame and
    /// `pointer` the pointer position in screen pixels. Frames where the pointer sits on one
    /// of the `exclusions` are skipped.
    pub fn update(
        &mut self,
        grid: &mut GridState,
        viewport: &Viewport,
        pointer: (i32, i32),
        held: bool,
        exclusions: &[ScreenRect],
    ) {
        if !held {
            self.release();
            return;
        }

        let (px, py) = pointer;
        if exclusions.iter().any(|rect| rect.contains(px, py)) {
            if self.drag == Drag::Released {
                self.drag = Drag::Pending;
            }
            return;
        }

        let cell = viewport.screen_to_cell(px, py);

        if matches!(self.drag, Drag::Released | Drag::Pending) {
            if !grid.contains(cell.0, cell.1) {
                log::debug!("Drag started off the board at {:?}", cell);
                self.drag = Drag::Ignored;
                return;
            }
            let erase = grid.get(cell.0 as usize, cell.1 as usize);
            log::debug!("Drag started at {:?}, {}", cell, if erase { "erasing" } else { "painting" });
            self.drag = Drag::Painting {
                erase,
                last_cell: None,
            };
        }

        if let Drag::Painting { erase, last_cell } = &mut self.drag {
            if *last_cell != Some(cell) && grid.contains(cell.0, cell.1) {
                grid.set(cell.0 as usize, cell.1 as usize, !*erase);
            }
            *last_cell = Some(cell);
        }
    }
}
