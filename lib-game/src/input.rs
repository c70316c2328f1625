use macroquad::prelude::*;

/// Input for one frame. The game only knows a single button: jump,
/// which also confirms on the menus.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputModel {
    pub jump_pressed: bool,
}

impl InputModel {
    pub fn capture() -> Self {
        // NOTE: macroquad reports taps as left clicks
        let jump_pressed =
            is_key_pressed(KeyCode::Space) || is_mouse_button_pressed(MouseButton::Left);

        Self { jump_pressed }
    }
}
