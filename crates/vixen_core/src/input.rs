//! Platform-agnostic input state
//!
//! Windowing adapters (see `vixen_app::winit::input_adapter`) translate
//! platform events into these types; the orbit controls only ever read
//! [`Input`].

use glam::Vec2;
use std::collections::HashSet;

/// Mouse button enumeration
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Button state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Pointer and viewport input accumulated between two frame ticks.
#[derive(Debug, Clone, Default)]
pub struct Input {
    pressed_mouse: HashSet<MouseButton>,
    mouse_position: Option<Vec2>,
    mouse_delta: Vec2,
    scroll_delta: Vec2,
    screen_size: Vec2,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== System API (called by the frame loop / adapters) ==========

    /// Clears per-frame deltas. Called once at the end of every tick.
    pub fn start_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    pub fn inject_mouse_button(&mut self, button: MouseButton, state: ButtonState) {
        match state {
            ButtonState::Pressed => {
                self.pressed_mouse.insert(button);
            }
            ButtonState::Released => {
                self.pressed_mouse.remove(&button);
            }
        }
    }

    pub fn inject_mouse_position(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        // The first reported position only establishes the origin.
        if let Some(previous) = self.mouse_position {
            self.mouse_delta += position - previous;
        }
        self.mouse_position = Some(position);
    }

    pub fn inject_scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.scroll_delta += Vec2::new(delta_x, delta_y);
    }

    pub fn inject_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    // ========== Query API ==========

    #[inline]
    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_mouse.contains(&button)
    }

    /// Pointer movement since the previous frame, in pixels.
    #[inline]
    #[must_use]
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Wheel movement since the previous frame, in lines.
    #[inline]
    #[must_use]
    pub fn scroll_delta(&self) -> Vec2 {
        self.scroll_delta
    }

    #[inline]
    #[must_use]
    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }
}
