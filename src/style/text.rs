use crate::timeline::model::SectionTag;

/// Per-section typography of the lyric line.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    pub font_size_px: f64,
    pub font_weight: u16,
    pub uppercase: bool,
    pub letter_spacing_px: f64,
    /// Whether the text is painted in the mood's primary color instead of white.
    pub accent_color: bool,
}

impl TextStyle {
    pub fn for_section(section: SectionTag) -> Self {
        let base = Self {
            font_size_px: 44.0,
            font_weight: 700,
            uppercase: false,
            letter_spacing_px: 1.5,
            accent_color: false,
        };
        match section {
            SectionTag::Chorus => Self {
                font_size_px: 52.0,
                font_weight: 900,
                uppercase: true,
                letter_spacing_px: 3.0,
                accent_color: true,
            },
            SectionTag::Bridge => Self {
                font_size_px: 50.0,
                ..base
            },
            SectionTag::Intro => Self {
                font_size_px: 46.0,
                ..base
            },
            SectionTag::Outro => Self {
                font_size_px: 42.0,
                ..base
            },
            SectionTag::Verse | SectionTag::None => base,
        }
    }
}

/// Overlay text announcing a section, e.g. `verse2` -> `VERSE 2`.
pub fn section_label(section_name: &str) -> String {
    let name = section_name.trim().to_ascii_uppercase();
    let digits_at = name
        .find(|c: char| c.is_ascii_digit())
        .filter(|&i| i > 0 && name[i..].bytes().all(|b| b.is_ascii_digit()));
    match digits_at {
        Some(i) => format!("{} {}", &name[..i], &name[i..]),
        None => name,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/text.rs"]
mod tests;
