use pxr::{Color, Key};

/// Brush colors selected by the digit keys 1 to 7.
pub const PALETTE: [(Key, Color); 7] = [
    (Key::Num1, Color::BLACK),
    (Key::Num2, Color::RED),
    (Key::Num3, Color::GREEN),
    (Key::Num4, Color::BLUE),
    (Key::Num5, Color::YELLOW),
    (Key::Num6, Color::MAGENTA),
    (Key::Num7, Color::CYAN),
];

/// Eraser color; matches the canvas background.
pub const ERASER: Color = Color::WHITE;

/// Brush color for `key`, if it selects one.
pub fn color_for_key(key: Key) -> Option<Color> {
    PALETTE.iter().find(|(k, _)| *k == key).map(|&(_, c)| c)
}
