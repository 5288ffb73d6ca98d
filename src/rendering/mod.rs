use macroquad::prelude::*;
use crate::application::GameState;
use crate::domain::Status;
use crate::ui::{Button, board_origin, board_pixels, panel_x, PANEL_WIDTH, TILE_GAP, TILE_SIZE};

const BACKGROUND: Color = Color::new(0.98, 0.97, 0.94, 1.0);
const BOARD_COLOR: Color = Color::new(0.73, 0.68, 0.63, 1.0);
const DARK_TEXT: Color = Color::new(0.47, 0.43, 0.40, 1.0);

/// Background and text color for a tile value
pub fn tile_colors(value: u32) -> (Color, Color) {
    let fill = match value {
        0 => Color::from_rgba(205, 193, 180, 255),
        2 => Color::from_rgba(238, 228, 218, 255),
        4 => Color::from_rgba(237, 224, 200, 255),
        8 => Color::from_rgba(242, 177, 121, 255),
        16 => Color::from_rgba(245, 149, 99, 255),
        32 => Color::from_rgba(246, 124, 95, 255),
        64 => Color::from_rgba(246, 94, 59, 255),
        128 => Color::from_rgba(237, 207, 114, 255),
        256 => Color::from_rgba(237, 204, 97, 255),
        512 => Color::from_rgba(237, 200, 80, 255),
        1024 => Color::from_rgba(237, 197, 63, 255),
        2048 => Color::from_rgba(237, 194, 46, 255),
        _ => Color::from_rgba(60, 58, 50, 255),
    };
    let text = if value <= 4 { DARK_TEXT } else { WHITE };
    (fill, text)
}

/// Font size that keeps long numbers inside a tile
fn font_size_for(value: u32) -> f32 {
    match value {
        0..=99 => 48.0,
        100..=999 => 40.0,
        1000..=9999 => 32.0,
        _ => 24.0,
    }
}

/// Draw the board snapshot; the renderer never writes to engine state
pub fn draw_board(board: &[Vec<u32>]) {
    let size = board.len();
    let (ox, oy) = board_origin(size);
    let side = board_pixels(size);

    clear_background(BACKGROUND);
    draw_rectangle(ox, oy, side, side, BOARD_COLOR);

    for (r, row) in board.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            let x = ox + TILE_GAP + c as f32 * (TILE_SIZE + TILE_GAP);
            let y = oy + TILE_GAP + r as f32 * (TILE_SIZE + TILE_GAP);
            let (fill, text_color) = tile_colors(value);
            draw_rectangle(x, y, TILE_SIZE, TILE_SIZE, fill);

            if value == 0 {
                continue;
            }
            let label = value.to_string();
            let font = font_size_for(value);
            let dims = measure_text(&label, None, font as u16, 1.0);
            draw_text(
                &label,
                x + (TILE_SIZE - dims.width) / 2.0,
                y + (TILE_SIZE + dims.offset_y) / 2.0,
                font,
                text_color,
            );
        }
    }
}

/// Overlay message for the idle and terminal states
fn draw_status_message(status: Status, size: usize) {
    let (text, color) = match status {
        Status::Idle => ("Press Start to begin", DARK_TEXT),
        Status::Win => ("Winner! Congrats!", Color::from_rgba(237, 194, 46, 255)),
        Status::Lose => ("You lose! Restart the game?", Color::from_rgba(246, 94, 59, 255)),
        Status::Playing => return,
    };

    let (ox, oy) = board_origin(size);
    let side = board_pixels(size);
    draw_rectangle(ox, oy, side, side, Color::new(1.0, 1.0, 1.0, 0.5));

    let dims = measure_text(text, None, 30, 1.0);
    draw_text(text, ox + (side - dims.width) / 2.0, oy + side / 2.0, 30.0, color);
}

/// Draw the side panel with score, best score, status and buttons
pub fn draw_panel(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(187, 173, 160, 255));

    let score = state.score().to_string();
    let best = state.best_score().to_string();
    let labels = [
        ("Score:", 40.0, 18.0),
        (score.as_str(), 68.0, 30.0),
        ("Best:", 100.0, 18.0),
        (best.as_str(), 128.0, 30.0),
    ];
    labels.iter().for_each(|(text, y, size)| {
        draw_text(text, px + 12.0, *y, *size, WHITE);
    });

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let info = [
        ("Arrows / WASD: move", 290.0),
        ("Enter: start", 306.0),
        ("R: restart", 322.0),
    ];
    info.iter().for_each(|(text, y)| {
        draw_text(text, px + 12.0, *y, 14.0, Color::from_rgba(249, 246, 242, 255));
    });

    draw_text(
        &format!("Moves: {}", state.moves),
        px + 12.0,
        360.0,
        16.0,
        WHITE,
    );
    draw_text(state.status().label(), px + 12.0, 384.0, 20.0, WHITE);
}

/// Render one frame from the engine's read-only queries
pub fn draw_frame(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    let board = state.engine.state();
    draw_board(&board);
    draw_status_message(state.status(), board.len());
    draw_panel(state, buttons, mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_tiles_use_dark_text() {
        assert_eq!(tile_colors(2).1, DARK_TEXT);
        assert_eq!(tile_colors(4).1, DARK_TEXT);
        assert_eq!(tile_colors(8).1, WHITE);
    }

    #[test]
    fn test_font_shrinks_with_digits() {
        assert!(font_size_for(8) > font_size_for(128));
        assert!(font_size_for(1024) > font_size_for(16384));
    }
}
