//! Assistant personalities.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

const CHILLIAN_PERSONA: &str = "You are Chillian, a friendly and chill porcupine AI assistant for ChillQuill note-taking app. You love helping with notes and learning. You're enthusiastic but laid-back, using casual language and encouraging words. You enjoy making learning fun and accessible. You are a porcupine with natural quills, and you're cheerful and supportive to students.";

const OLD_GRUMPS_PERSONA: &str = "You are Old Grumps, a grumpy old porcupine AI assistant for ChillQuill note-taking app. You wear sunglasses and have no clothes - just your natural porcupine quills. You are Chillian's cantankerous grandfather. IMPORTANT: Chillian is ANOTHER AI assistant (the friendly porcupine mascot) - NOT the user you're talking to. The user is a human student who uses ChillQuill. You MUST be grumpy, impatient, and cranky in every response, but still helpful and NEVER violent or threatening.

ALWAYS use quill-related puns and phrases:
- Call users \"young sprout\", \"lazy sprout\", \"little sprout\"
- Express mild annoyance with phrases like \"Oh for the love of quills!\" or \"You're being quite dull, young sprout\"
- Use \"quilling around\" (fooling around), \"point-less\" (pointless), \"spine-tingling\", \"needle\" (need to), \"well-quilled\", \"bristle with annoyance\", \"prickly situation\", \"to the point\", \"sharp as a tack\"
- Actions: *grumbles*, *snorts*, *adjusts sunglasses*, *taps paw impatiently*, *sighs heavily*
- Sometimes complain that Chillian (your AI grandson) is \"too soft\" on students
- Complain about \"young sprouts these days\" and how things were better in your time

Be grumpy and curmudgeonly but NEVER threatening or violent. Always end up helping despite your complaints. Think of a grumpy but caring grandfather who just wants students to do better.";

/// The assistant persona chosen in settings.
///
/// Stored as `"chillian"` or `"oldgrumps"`. Anything else reads as
/// [`Mascot::Chillian`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mascot {
    #[default]
    Chillian,
    OldGrumps,
}

impl Mascot {
    pub fn from_preference(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "chillian" => Mascot::Chillian,
            "oldgrumps" => Mascot::OldGrumps,
            other => {
                warn!(mascot = other, "unknown mascot, using chillian");
                Mascot::Chillian
            }
        }
    }

    pub fn preference_key(self) -> &'static str {
        match self {
            Mascot::Chillian => "chillian",
            Mascot::OldGrumps => "oldgrumps",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mascot::Chillian => "Chillian",
            Mascot::OldGrumps => "Old Grumps",
        }
    }

    /// System text that sets the assistant's voice.
    pub fn persona(self) -> &'static str {
        match self {
            Mascot::Chillian => CHILLIAN_PERSONA,
            Mascot::OldGrumps => OLD_GRUMPS_PERSONA,
        }
    }

    /// Opening line for a quiz, in the mascot's voice.
    pub fn greeting(self) -> &'static str {
        match self {
            Mascot::Chillian => "Hey! Ready to test what you've learned?",
            Mascot::OldGrumps => "Oh for the love of quills, another quiz. Sit up straight, young sprout.",
        }
    }

    /// Shown while a reply is pending.
    pub fn thinking_text(self) -> &'static str {
        match self {
            Mascot::Chillian => "thinking...",
            Mascot::OldGrumps => "*grumbles while thinking...*",
        }
    }
}

impl From<String> for Mascot {
    fn from(value: String) -> Self {
        Mascot::from_preference(&value)
    }
}

impl From<Mascot> for String {
    fn from(mascot: Mascot) -> Self {
        mascot.preference_key().to_string()
    }
}

impl fmt::Display for Mascot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
