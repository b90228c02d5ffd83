use std::collections::HashSet;
use winit::event::{ElementState, KeyboardInput, MouseScrollDelta, VirtualKeyCode};

use crate::session::{Command, FrameInput, InputEvent, MouseButton};
use crate::viewport::PanInput;

/// Turns winit window events into discrete `InputEvent`s and keeps the held-key,
/// held-button and pointer state sampled once per frame.
pub struct InputHandler {
    pressed_keys: HashSet<VirtualKeyCode>,
    primary_held: bool,
    pointer: (i32, i32),
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            primary_held: false,
            pointer: (0, 0),
        }
    }

    pub fn handle_keyboard_input(&mut self, input: &KeyboardInput) -> Option<InputEvent> {
        let key_code = input.virtual_keycode?;
        match input.state {
            ElementState::Pressed => self.key_pressed(key_code),
            ElementState::Released => {
                self.key_released(key_code);
                None
            }
        }
    }

    /// Auto-repeat presses of a key already held are not new key-downs.
    pub fn key_pressed(&mut self, key_code: VirtualKeyCode) -> Option<InputEvent> {
        if !self.pressed_keys.insert(key_code) {
            return None;
        }
        key_event(key_code)
    }

    pub fn key_released(&mut self, key_code: VirtualKeyCode) {
        self.pressed_keys.remove(&key_code);
    }

    pub fn handle_mouse_input(
        &mut self,
        state: ElementState,
        button: winit::event::MouseButton,
    ) -> Option<InputEvent> {
        let button = match button {
            winit::event::MouseButton::Left => MouseButton::Primary,
            winit::event::MouseButton::Right => MouseButton::Secondary,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            winit::event::MouseButton::Other(_) => return None,
        };

        let pressed = state == ElementState::Pressed;
        if button == MouseButton::Primary {
            self.primary_held = pressed;
        }

        pressed.then_some(InputEvent::MouseButtonDown {
            button,
            x: self.pointer.0,
            y: self.pointer.1,
        })
    }

    pub fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) -> Option<InputEvent> {
        let notches = match delta {
            MouseScrollDelta::LineDelta(_, y) => y.round() as i32,
            // Touchpads report pixels; one event counts as one notch
            MouseScrollDelta::PixelDelta(position) if position.y > 0.0 => 1,
            MouseScrollDelta::PixelDelta(position) if position.y < 0.0 => -1,
            MouseScrollDelta::PixelDelta(_) => 0,
        };
        (notches != 0).then_some(InputEvent::MouseWheel(notches))
    }

    /// Pointer position, already mapped into frame-buffer pixels.
    pub fn set_pointer(&mut self, x: i32, y: i32) {
        self.pointer = (x, y);
    }

    /// Focus loss means release events may never arrive.
    pub fn clear_held(&mut self) {
        self.pressed_keys.clear();
        self.primary_held = false;
    }

    pub fn frame_input(&self) -> FrameInput {
        let held = |keys: [VirtualKeyCode; 2]| keys.iter().any(|key| self.pressed_keys.contains(key));

        FrameInput {
            pan: PanInput {
                left: held([VirtualKeyCode::A, VirtualKeyCode::Left]),
                right: held([VirtualKeyCode::D, VirtualKeyCode::Right]),
                up: held([VirtualKeyCode::W, VirtualKeyCode::Up]),
                down: held([VirtualKeyCode::S, VirtualKeyCode::Down]),
            },
            pointer: self.pointer,
            primary_held: self.primary_held,
        }
    }
}

fn key_event(key_code: VirtualKeyCode) -> Option<InputEvent> {
    let command = match key_code {
        VirtualKeyCode::Escape => return Some(InputEvent::Quit),
        VirtualKeyCode::Space => Command::Reset,
        VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => Command::PlayPause,
        VirtualKeyCode::E => Command::ToggleEdit,
        VirtualKeyCode::B => Command::ToggleBlank,
        VirtualKeyCode::R => Command::ToggleRandom,
        _ => return None,
    };
    Some(InputEvent::Command(command))
}
