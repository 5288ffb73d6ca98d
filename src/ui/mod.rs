mod button;

pub use button::Button;

// Layout constants; positions are functions so the window can be resized
use macroquad::prelude::{screen_width, screen_height};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const TILE_SIZE: f32 = 100.0;
pub const TILE_GAP: f32 = 12.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the area left of the panel
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Side length in pixels of a board with `size` tiles per row
pub fn board_pixels(size: usize) -> f32 {
    size as f32 * TILE_SIZE + (size as f32 + 1.0) * TILE_GAP
}

/// Top-left corner that centers the board in its area
pub fn board_origin(size: usize) -> (f32, f32) {
    let side = board_pixels(size);
    (
        ((board_area_width() - side) / 2.0).max(0.0),
        ((screen_height() - side) / 2.0).max(0.0),
    )
}

/// Index of each button in `create_buttons`
pub const START_BUTTON: usize = 0;
pub const RESTART_BUTTON: usize = 1;

/// Create the Start and Restart buttons
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    vec![
        Button::new(px, 160.0, width, BUTTON_HEIGHT, "Start"),
        Button::new(px, 210.0, width, BUTTON_HEIGHT, "Restart"),
    ]
}
