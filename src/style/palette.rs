use std::collections::BTreeMap;

use crate::{
    foundation::error::{MotionError, MotionResult},
    style::color::Rgba,
    timeline::model::MoodTag,
};

/// Colors used by the lyric panel for one mood.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoodColors {
    /// Accent color: chorus text, section labels.
    pub primary: Rgba,
    /// Text-shadow glow color.
    pub glow: Rgba,
    /// Faint panel background tint.
    pub bg: Rgba,
}

impl MoodColors {
    const fn new(r: u8, g: u8, b: u8, glow_a: f64, bg_a: f64) -> Self {
        let primary = Rgba::rgb8(r, g, b);
        Self {
            primary,
            glow: primary.with_alpha(glow_a),
            bg: primary.with_alpha(bg_a),
        }
    }
}

// Used only if a palette was never validated and lacks its default mood.
const FALLBACK: MoodColors = MoodColors::new(255, 215, 0, 0.6, 0.05);

/// Mood name -> colors, with a fallback mood for names that are not listed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    #[serde(default = "default_mood")]
    pub default_mood: String,
    #[serde(default = "default_moods")]
    pub moods: BTreeMap<String, MoodColors>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default_mood: default_mood(),
            moods: default_moods(),
        }
    }
}

fn default_mood() -> String {
    "funny".to_owned()
}

fn default_moods() -> BTreeMap<String, MoodColors> {
    [
        ("funny", MoodColors::new(0xFF, 0xD7, 0x00, 0.6, 0.05)),
        ("happy", MoodColors::new(0x00, 0xFF, 0x88, 0.6, 0.05)),
        ("sad", MoodColors::new(0x66, 0x99, 0xFF, 0.6, 0.05)),
        ("angry", MoodColors::new(0xFF, 0x44, 0x44, 0.6, 0.05)),
        ("energetic", MoodColors::new(0xFF, 0x6B, 0x00, 0.7, 0.08)),
        ("sarcastic", MoodColors::new(0xFF, 0x66, 0xFF, 0.6, 0.05)),
        ("dreamy", MoodColors::new(0xBB, 0x88, 0xFF, 0.6, 0.05)),
        ("hopeful", MoodColors::new(0x88, 0xDD, 0xFF, 0.6, 0.05)),
        ("panic", MoodColors::new(0xFF, 0x22, 0x22, 0.8, 0.1)),
        ("calm", MoodColors::new(0xAA, 0xDD, 0xAA, 0.5, 0.05)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v))
    .collect()
}

impl Palette {
    pub fn validate(&self) -> MotionResult<()> {
        if !self.moods.contains_key(&self.default_mood) {
            return Err(MotionError::validation(format!(
                "palette default_mood '{}' has no colors",
                self.default_mood
            )));
        }
        for (name, colors) in &self.moods {
            if name.trim().is_empty() || name.trim().to_ascii_lowercase() != *name {
                return Err(MotionError::validation(format!(
                    "palette mood '{name}' must be a trimmed lowercase name"
                )));
            }
            for (field, c) in [
                ("primary", colors.primary),
                ("glow", colors.glow),
                ("bg", colors.bg),
            ] {
                if !c.is_valid() {
                    return Err(MotionError::validation(format!(
                        "palette mood '{name}' {field} channels must be finite and within [0, 1]"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Colors for `mood`, falling back to the default mood when it is not listed.
    pub fn lookup(&self, mood: &MoodTag) -> &MoodColors {
        self.moods
            .get(mood.as_str())
            .or_else(|| self.moods.get(&self.default_mood))
            .unwrap_or(&FALLBACK)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/palette.rs"]
mod tests;
