use crate::foundation::error::{MotionError, MotionResult};

/// Coarse structural tag selecting a motion profile.
///
/// `None` never appears on an authored entry; it is the resolution of a frame that falls into a
/// gap between entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionTag {
    Intro,
    Verse,
    Chorus,
    Bridge,
    Outro,
    None,
}

impl SectionTag {
    /// Parse an authored section name.
    ///
    /// Numbered verses (`verse1`, `verse2`, ...) collapse onto [`SectionTag::Verse`]. `none` is
    /// not an authorable section.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "intro" => Some(Self::Intro),
            "chorus" => Some(Self::Chorus),
            "bridge" => Some(Self::Bridge),
            "outro" => Some(Self::Outro),
            "verse" => Some(Self::Verse),
            _ => {
                let digits = name.strip_prefix("verse")?;
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                    Some(Self::Verse)
                } else {
                    None
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Verse => "verse",
            Self::Chorus => "chorus",
            Self::Bridge => "bridge",
            Self::Outro => "outro",
            Self::None => "none",
        }
    }
}

/// Free-form mood name; only used to pick a palette.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MoodTag(String);

impl MoodTag {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One authored lyric line on the timeline, `[start, end)` in seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimelineEntry {
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub section: SectionTag,
    /// Section name as authored (`verse1`, `chorus`, ...); drives label text and change detection.
    pub section_name: String,
    pub mood: MoodTag,
    pub asset_index: u32,
}

impl TimelineEntry {
    pub fn new(
        start: f64,
        end: f64,
        text: impl Into<String>,
        section: SectionTag,
        mood: MoodTag,
        asset_index: u32,
    ) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            section,
            section_name: section.as_str().to_owned(),
            mood,
            asset_index,
        }
    }

    pub fn contains(&self, time_secs: f64) -> bool {
        self.start <= time_secs && time_secs < self.end
    }

    pub fn duration_secs(&self) -> f64 {
        self.end - self.start
    }
}

/// Timeline entry as authored in the lyrics JSON document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimelineEntry {
    pub start: f64,
    pub end: f64,
    pub line: String,
    pub section: String,
    pub mood: String,
    pub image_index: i64,
}

impl RawTimelineEntry {
    /// Convert one authored entry; `index` is its position in the document, for messages.
    pub fn into_entry(self, index: usize) -> MotionResult<TimelineEntry> {
        let section = SectionTag::parse(&self.section).ok_or_else(|| {
            MotionError::malformed_timeline(format!(
                "entry {index}: unknown section '{}'",
                self.section
            ))
        })?;
        let asset_index = u32::try_from(self.image_index).map_err(|_| {
            MotionError::malformed_timeline(format!(
                "entry {index}: imageIndex must be a non-negative integer, got {}",
                self.image_index
            ))
        })?;

        Ok(TimelineEntry {
            start: self.start,
            end: self.end,
            text: self.line,
            section,
            section_name: self.section.trim().to_ascii_lowercase(),
            mood: MoodTag::new(&self.mood),
            asset_index,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
