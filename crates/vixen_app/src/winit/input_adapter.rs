//! winit events to [`Input`].

use vixen_core::{ButtonState, Input, MouseButton};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

/// Pixel wheel deltas (touchpads) are scaled into line units.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

#[must_use]
pub fn translate_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n),
    }
}

#[must_use]
pub fn translate_element_state(state: ElementState) -> ButtonState {
    match state {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

/// Feeds pointer and wheel events into `input`. Positions are converted to
/// logical pixels with `scale_factor`.
pub fn process_window_event(input: &mut Input, event: &WindowEvent, scale_factor: f64) {
    match event {
        WindowEvent::MouseInput { state, button, .. } => {
            input.inject_mouse_button(translate_mouse_button(*button), translate_element_state(*state));
        }
        WindowEvent::CursorMoved { position, .. } => {
            let logical = position.to_logical::<f32>(scale_factor);
            input.inject_mouse_position(logical.x, logical.y);
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let (dx, dy) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                MouseScrollDelta::PixelDelta(pos) => (pos.x as f32 * PIXEL_SCROLL_SCALE, pos.y as f32 * PIXEL_SCROLL_SCALE),
            };
            input.inject_scroll(dx, dy);
        }
        _ => {}
    }
}
