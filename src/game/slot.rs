use crate::input::KeyEvent;

/// A request to move input focus relative to the slot that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Previous,
    Next,
}

/// Something a slot needs its round controller to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSignal {
    Focus(FocusMove),
    /// The slot's typed character just became the expected one.
    BecameCorrect,
}

/// The input box for a single character of the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSlot {
    /// The grapheme cluster the player must type.
    expected: String,
    /// What the player typed. Zero or one grapheme cluster.
    typed: String,
    /// Revealed answer, empty unless help was given.
    help: String,
}

impl LetterSlot {
    pub fn new(expected: &str) -> Self {
        LetterSlot {
            expected: expected.to_owned(),
            typed: String::new(),
            help: String::new(),
        }
    }

    #[allow(dead_code)]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn help_text(&self) -> &str {
        &self.help
    }

    pub fn is_empty(&self) -> bool {
        self.typed.is_empty()
    }

    pub fn is_correct(&self) -> bool {
        self.typed == self.expected
    }

    pub fn has_help(&self) -> bool {
        !self.help.is_empty()
    }

    /// Whether the UI should flag the slot as wrong.
    #[allow(dead_code)]
    pub fn show_invalid(&self) -> bool {
        !self.is_empty() && !self.is_correct()
    }

    /// Handle a full keystroke: the key-down input update, then key-up navigation.
    pub fn press(&mut self, event: &KeyEvent) -> Vec<SlotSignal> {
        let mut signals = Vec::new();
        let was_correct = self.is_correct();

        if event.is_delete {
            if self.typed.is_empty() {
                signals.push(SlotSignal::Focus(FocusMove::Previous));
            } else {
                self.typed.clear();
            }
        } else if event.is_symbol_accepted {
            if let Some(grapheme) = event.grapheme() {
                // Always overwrite, a slot never holds more than one character
                self.typed = grapheme.to_owned();
            }
        }

        if let Some(signal) = self.check_became_correct(was_correct) {
            signals.push(signal);
        }

        if event.is_left_nav {
            signals.push(SlotSignal::Focus(FocusMove::Previous));
        } else if event.is_right_nav {
            signals.push(SlotSignal::Focus(FocusMove::Next));
        }
        if !self.typed.is_empty() && !event.is_delete {
            signals.push(SlotSignal::Focus(FocusMove::Next));
        }

        signals
    }

    /// Clear the typed character. Help text is kept.
    pub fn reset(&mut self) {
        self.typed.clear();
    }

    pub fn reveal_help(&mut self) {
        self.help = self.expected.clone();
    }

    pub fn hide_help(&mut self) {
        self.help.clear();
    }

    fn check_became_correct(&mut self, was_correct: bool) -> Option<SlotSignal> {
        if !was_correct && self.is_correct() {
            self.hide_help();
            Some(SlotSignal::BecameCorrect)
        } else {
            None
        }
    }
}
