//! Glyph constants for the zodiac layer.

/// The twelve zodiac signs followed by two decorative glyphs.
pub const ZODIAC_SYMBOLS: [&str; 14] = [
    "♈", "♉", "♊", "♋", "♌", "♍", "♎", "♏", "♐", "♑", "♒", "♓", "🕉️", "✨",
];
