use unicode_segmentation::UnicodeSegmentation;

/// A raw platform key code, as reported by a browser or terminal key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const BACKSPACE: KeyCode = KeyCode(8);
    pub const LEFT_ARROW: KeyCode = KeyCode(37);
    pub const RIGHT_ARROW: KeyCode = KeyCode(39);
    pub const ACCENT: KeyCode = KeyCode(222);

    const LETTERS: std::ops::RangeInclusive<u32> = 65..=90;
    const DIGITS: std::ops::RangeInclusive<u32> = 48..=57;
    const NUMPAD: std::ops::RangeInclusive<u32> = 96..=105;

    /// Letters, digits (top row or numpad) and the accent key count as input.
    pub fn is_accepted_symbol(&self) -> bool {
        Self::LETTERS.contains(&self.0)
            || Self::DIGITS.contains(&self.0)
            || Self::NUMPAD.contains(&self.0)
            || *self == Self::ACCENT
    }
}

/// A keystroke after platform translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key deletes (backspace).
    pub is_delete: bool,
    /// The key produces a character the game accepts.
    pub is_symbol_accepted: bool,
    /// The text the key produced.
    pub key: String,
    /// The key is the left arrow.
    pub is_left_nav: bool,
    /// The key is the right arrow.
    pub is_right_nav: bool,
}

impl KeyEvent {
    /// Normalize a raw platform event.
    pub fn from_raw(code: KeyCode, key: &str) -> Self {
        KeyEvent {
            is_delete: code == KeyCode::BACKSPACE,
            is_symbol_accepted: code.is_accepted_symbol(),
            key: key.to_owned(),
            is_left_nav: code == KeyCode::LEFT_ARROW,
            is_right_nav: code == KeyCode::RIGHT_ARROW,
        }
    }

    /// The event produced by typing the given grapheme.
    pub fn typed(grapheme: &str) -> Self {
        Self::from_raw(key_code_for(grapheme), grapheme)
    }

    pub fn delete() -> Self {
        Self::from_raw(KeyCode::BACKSPACE, "Backspace")
    }

    #[allow(dead_code)]
    pub fn left() -> Self {
        Self::from_raw(KeyCode::LEFT_ARROW, "ArrowLeft")
    }

    #[allow(dead_code)]
    pub fn right() -> Self {
        Self::from_raw(KeyCode::RIGHT_ARROW, "ArrowRight")
    }

    /// The first grapheme cluster of the key text, if any.
    pub fn grapheme(&self) -> Option<&str> {
        self.key.graphemes(true).next()
    }
}

/// Pick a raw key code that would plausibly produce `grapheme`.
/// Layouts map non-latin letters onto the latin letter keys, so anything that
/// isn't an ASCII digit is treated as a letter key.
pub fn key_code_for(grapheme: &str) -> KeyCode {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => KeyCode(48 + c as u32 - '0' as u32),
        (Some(c), None) if c.is_ascii_alphabetic() => {
            KeyCode(65 + c.to_ascii_uppercase() as u32 - 'A' as u32)
        }
        (Some(_), _) => KeyCode(65),
        (None, _) => KeyCode(0),
    }
}
