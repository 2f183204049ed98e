/// Pointer state for a single grid cell
///
/// A cell becomes "pressed" when the pointer goes down on it. Releasing
/// while still pressed is a click; leaving the cell cancels the press.

/// Scale applied to a pressed cell
pub const PRESSED_SCALE: f32 = 1.03;

/// State for press interactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressState {
    pub is_pressed: bool,
}

impl PressState {
    /// Pointer went down on the cell
    pub fn press(&mut self) {
        self.is_pressed = true;
    }

    /// Pointer went up on the cell.
    /// Returns true if this completes a click.
    pub fn release(&mut self) -> bool {
        let clicked = self.is_pressed;
        self.is_pressed = false;
        clicked
    }

    /// Pointer left the cell
    pub fn cancel(&mut self) {
        self.is_pressed = false;
    }

    /// Current scale factor for drawing
    pub fn scale(&self) -> f32 {
        if self.is_pressed {
            PRESSED_SCALE
        } else {
            1.0
        }
    }
}
