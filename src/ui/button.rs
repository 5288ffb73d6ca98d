use macroquad::prelude::*;

/// Clickable panel button; a disabled button is drawn greyed out and
/// ignores clicks
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    enabled: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
            enabled: true,
        }
    }

    /// Builder-style toggle used by the renderer each frame
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = match (self.enabled, self.is_hovered(mouse_pos)) {
            (false, _) => Color::from_rgba(90, 84, 76, 255),
            (true, true) => Color::from_rgba(160, 132, 104, 255),
            (true, false) => Color::from_rgba(143, 122, 102, 255),
        };

        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, fill);

        let text_size = measure_text(&self.label, None, 22, 1.0);
        draw_text(
            &self.label,
            self.rect.x + (self.rect.w - text_size.width) / 2.0,
            self.rect.y + (self.rect.h + text_size.height) / 2.0,
            22.0,
            if self.enabled { WHITE } else { GRAY },
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
