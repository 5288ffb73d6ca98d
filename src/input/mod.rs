use macroquad::prelude::*;
use crate::application::GameState;
use crate::domain::Direction;
use crate::ui::{Button, START_BUTTON, RESTART_BUTTON};

/// Map a key to the move it triggers (arrows and WASD)
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        _ => None,
    }
}

const MOVE_KEYS: [KeyCode; 8] = [
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::A,
    KeyCode::D,
    KeyCode::W,
    KeyCode::S,
];

/// Process keyboard input functionally.
/// Moves are only forwarded while the game is running.
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let commands: [KeyAction; 3] = [
        (KeyCode::Enter, GameState::start),
        (KeyCode::Space, GameState::start),
        (KeyCode::R, GameState::restart),
    ];

    let state = commands.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    MOVE_KEYS
        .iter()
        .filter(|key| is_key_pressed(**key))
        .filter_map(|key| direction_for_key(*key))
        .fold(state, |s, dir| {
            if s.status().accepts_moves() { s.apply(dir) } else { s }
        })
}

/// Process Start/Restart clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32)
) -> GameState {
    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                START_BUTTON => s.start(),
                RESTART_BUTTON => s.restart(),
                _ => s,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_agree() {
        assert_eq!(direction_for_key(KeyCode::Left), direction_for_key(KeyCode::A));
        assert_eq!(direction_for_key(KeyCode::Right), direction_for_key(KeyCode::D));
        assert_eq!(direction_for_key(KeyCode::Up), direction_for_key(KeyCode::W));
        assert_eq!(direction_for_key(KeyCode::Down), Some(Direction::Down));
    }

    #[test]
    fn test_every_move_key_maps() {
        assert!(MOVE_KEYS.iter().all(|key| direction_for_key(*key).is_some()));
        assert_eq!(direction_for_key(KeyCode::R), None);
    }
}
