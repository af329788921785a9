//! Reaction emoji used as navigation controls.

use super::state::NavAction;

pub const PREV_EMOJI: &str = "\u{2B05}\u{FE0F}";
pub const NEXT_EMOJI: &str = "\u{27A1}\u{FE0F}";
pub const DESTROY_EMOJI: &str = "\u{1F5D1}\u{FE0F}";

/// Controls in the order they are attached to a message.
pub const CONTROLS: [(NavAction, &str); 3] = [
    (NavAction::Prev, PREV_EMOJI),
    (NavAction::Next, NEXT_EMOJI),
    (NavAction::Destroy, DESTROY_EMOJI),
];

const VARIATION_SELECTOR: char = '\u{FE0F}';

impl NavAction {
    /// Map a unicode reaction to a control.
    ///
    /// Clients differ in whether they send the emoji variation selector, so
    /// it is ignored on both sides.
    pub fn from_emoji(name: &str) -> Option<Self> {
        let wanted = name.trim_end_matches(VARIATION_SELECTOR);

        CONTROLS
            .into_iter()
            .find(|(_, emoji)| emoji.trim_end_matches(VARIATION_SELECTOR) == wanted)
            .map(|(action, _)| action)
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Prev => PREV_EMOJI,
            Self::Next => NEXT_EMOJI,
            Self::Destroy => DESTROY_EMOJI,
        }
    }
}
