use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine;
use crate::grid::{Fill, GridState};
use crate::paint::PaintSession;
use crate::viewport::{PanInput, ScreenRect, Viewport};

/// Which of the three selectable modes is active, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Edit,
    Blank,
    Random,
    #[default]
    Interim,
}

/// Discrete commands produced from key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleEdit,
    ToggleBlank,
    ToggleRandom,
    Reset,
    PlayPause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// Discrete input events, one per occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Command(Command),
    MouseWheel(i32),
    MouseButtonDown { button: MouseButton, x: i32, y: i32 },
}

/// Continuous input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub pan: PanInput,
    pub pointer: (i32, i32),
    pub primary_held: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Mode selection and play flag. Transitions are pure so they can be checked without a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub mode: Mode,
    pub playing: bool,
}

impl Controls {
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::ToggleEdit => self.toggle(Mode::Edit),
            Command::ToggleBlank => self.toggle(Mode::Blank),
            Command::ToggleRandom => self.toggle(Mode::Random),
            Command::PlayPause => Self {
                mode: Mode::Interim,
                playing: !self.playing,
            },
            Command::Reset => self,
        }
    }

    fn toggle(self, mode: Mode) -> Self {
        let mode = if self.mode == mode { Mode::Interim } else { mode };
        Self { mode, ..self }
    }

    /// What a reset fills the new grid with. Only Random mode randomizes.
    pub fn reset_fill(&self) -> Fill {
        if self.mode == Mode::Random {
            Fill::Random
        } else {
            Fill::Empty
        }
    }
}

/// Everything one interactive run owns: the board, the view onto it and the controls.
pub struct Session {
    grid: GridState,
    viewport: Viewport,
    controls: Controls,
    generation: u64,
    paint: PaintSession,
    probe: bool,
    rng: StdRng,
}

impl Session {
    /// Starts with an empty full-size board, `Interim` mode, paused.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            grid: GridState::empty(0, 0),
            viewport: Viewport::new(),
            controls: Controls::default(),
            generation: 0,
            paint: PaintSession::new(),
            probe: false,
            rng,
        }
    }

    pub fn with_probe(mut self, probe: bool) -> Self {
        self.probe = probe;
        self
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridState {
        &mut self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn mode(&self) -> Mode {
        self.controls.mode
    }

    pub fn is_playing(&self) -> bool {
        self.controls.playing
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::Quit => return Flow::Exit,
            InputEvent::MouseWheel(delta) => self.viewport.scroll(delta),
            InputEvent::MouseButtonDown { button, x, y } => {
                if self.probe && button == MouseButton::Primary {
                    let (col, row) = self.viewport.screen_to_cell(x, y);
                    log::info!("Probe: cell ({}, {})", col, row);
                }
            }
            InputEvent::Command(command) => self.handle_command(command),
        }
        Flow::Continue
    }

    fn handle_command(&mut self, command: Command) {
        let before = self.controls;
        self.controls = before.apply(command);

        if command == Command::Reset {
            self.reset();
        }

        if self.controls != before {
            log::debug!(
                "{:?}: mode {:?} -> {:?}, playing {} -> {}",
                command,
                before.mode,
                self.controls.mode,
                before.playing,
                self.controls.playing
            );
        }
        if self.controls.mode != Mode::Edit {
            self.paint.release();
        }
    }

    fn reset(&mut self) {
        let fill = self.controls.reset_fill();
        self.grid = GridState::create(0, 0, fill, &mut self.rng);
        self.generation = 0;
        self.viewport.reset();
        log::info!(
            "New {:?} grid {}x{}, population {}",
            fill,
            self.grid.width(),
            self.grid.height(),
            self.grid.population()
        );
    }

    /// Continuous per-frame work after events: pan, paint while editing, then one
    /// generation if playing. `hud` holds last frame's overlay rectangles.
    pub fn update(&mut self, input: &FrameInput, hud: &[ScreenRect]) {
        self.viewport.pan(input.pan);

        if self.controls.mode == Mode::Edit {
            self.paint.update(
                &mut self.grid,
                &self.viewport,
                input.pointer,
                input.primary_held,
                hud,
            );
        }

        if self.controls.playing {
            self.grid = engine::step(&self.grid);
            self.generation += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Some(11))
    }

    #[test]
    fn initial_state() {
        let s = session();
        assert_eq!(s.mode(), Mode::Interim);
        assert!(!s.is_playing());
        assert_eq!(s.generation(), 0);
        assert_eq!(s.population(), 0);
    }

    #[test]
    fn edit_toggles_back_to_interim() {
        let c = Controls::default().apply(Command::ToggleEdit);
        assert_eq!(c.mode, Mode::Edit);
        assert_eq!(c.apply(Command::ToggleEdit).mode, Mode::Interim);
    }

    #[test]
    fn mode_selection_is_exclusive() {
        let c = Controls::default()
            .apply(Command::ToggleBlank)
            .apply(Command::ToggleRandom)
            .apply(Command::ToggleBlank);
        assert_eq!(c.mode, Mode::Blank);
    }

    #[test]
    fn selecting_mode_keeps_play_flag() {
        let playing = Controls {
            mode: Mode::Interim,
            playing: true,
        };
        assert!(playing.apply(Command::ToggleEdit).playing);
        assert!(playing.apply(Command::ToggleRandom).playing);
    }

    #[test]
    fn play_pause_clears_mode() {
        let c = Controls::default().apply(Command::ToggleEdit).apply(Command::PlayPause);
        assert_eq!(c, Controls { mode: Mode::Interim, playing: true });
        let c = c.apply(Command::ToggleRandom).apply(Command::PlayPause);
        assert_eq!(c, Controls { mode: Mode::Interim, playing: false });
    }

    #[test]
    fn reset_fill_depends_only_on_random() {
        for (mode, fill) in [
            (Mode::Edit, Fill::Empty),
            (Mode::Blank, Fill::Empty),
            (Mode::Interim, Fill::Empty),
            (Mode::Random, Fill::Random),
        ] {
            assert_eq!(Controls { mode, playing: false }.reset_fill(), fill);
        }
    }

    #[test]
    fn quit_exits() {
        assert_eq!(session().handle_event(InputEvent::Quit), Flow::Exit);
    }

    #[test]
    fn reset_in_random_mode_fills_grid() {
        let mut s = session();
        s.handle_event(InputEvent::Command(Command::ToggleRandom));
        s.handle_event(InputEvent::Command(Command::Reset));
        assert!(s.population() > 0);
        assert_eq!(s.population(), s.grid().count_alive());
        assert_eq!(s.mode(), Mode::Random);
    }

    #[test]
    fn reset_clears_generation_and_keeps_pan() {
        let mut s = session();
        s.handle_event(InputEvent::Command(Command::PlayPause));
        s.update(&FrameInput { pan: PanInput { left: true, ..Default::default() }, ..Default::default() }, &[]);
        s.update(&FrameInput::default(), &[]);
        assert_eq!(s.generation(), 2);
        assert_eq!(s.viewport().offset_x, 1);

        s.viewport_mut().pan_speed = 4;
        s.handle_event(InputEvent::Command(Command::Reset));
        assert_eq!(s.generation(), 0);
        assert_eq!(s.viewport().offset_x, 1);
        assert_eq!(s.viewport().pan_speed, 1);
        assert!(s.is_playing());
    }

    #[test]
    fn wheel_changes_zoom() {
        let mut s = session();
        s.handle_event(InputEvent::MouseWheel(6));
        assert_eq!(s.viewport().zoom, 8);
        s.handle_event(InputEvent::Command(Command::Reset));
        assert_eq!(s.viewport().zoom, 8);
    }

    #[test]
    fn painting_only_in_edit_mode() {
        let mut s = session();
        let press = FrameInput {
            pointer: (100, 100),
            primary_held: true,
            ..Default::default()
        };

        s.update(&press, &[]);
        assert_eq!(s.population(), 0);

        s.handle_event(InputEvent::Command(Command::ToggleEdit));
        s.update(&press, &[]);
        assert_eq!(s.population(), 1);
        assert!(s.grid().get(25, 25));
    }

    #[test]
    fn probe_never_mutates() {
        let mut s = session().with_probe(true);
        s.handle_event(InputEvent::Command(Command::ToggleEdit));
        let flow = s.handle_event(InputEvent::MouseButtonDown {
            button: MouseButton::Primary,
            x: 10,
            y: 10,
        });
        assert_eq!(flow, Flow::Continue);
        assert_eq!(s.population(), 0);
    }

    #[test]
    fn paused_session_does_not_step() {
        let mut s = session();
        s.grid_mut().set(3, 3, true);
        s.update(&FrameInput::default(), &[]);
        assert_eq!(s.generation(), 0);
        assert_eq!(s.population(), 1);
    }

    #[test]
    fn playing_session_steps_once_per_frame() {
        let mut s = session();
        for col in 10..13 {
            s.grid_mut().set(col, 10, true);
        }
        s.handle_event(InputEvent::Command(Command::PlayPause));
        s.update(&FrameInput::default(), &[]);
        assert_eq!(s.generation(), 1);
        assert!(s.grid().get(11, 9) && s.grid().get(11, 11));
        assert_eq!(s.population(), 3);
    }
}
