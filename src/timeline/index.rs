use std::io::Read;

use crate::{
    foundation::core::FrameContext,
    foundation::error::{MotionError, MotionResult},
    timeline::model::{RawTimelineEntry, SectionTag, TimelineEntry},
};

/// Immutable, validated, start-sorted sequence of lyric entries.
///
/// Entries satisfy `start < end`, are sorted by `start` and do not overlap
/// (`end[i] <= start[i + 1]`), which makes [`Timeline::lookup`] a binary search.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

/// Which entry (if any) is active for a frame, plus its transition context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveEntryResolution<'a> {
    /// Active entry; `None` when the frame falls into a gap.
    pub current: Option<&'a TimelineEntry>,
    /// Entry immediately preceding `current` in sequence order.
    pub previous: Option<&'a TimelineEntry>,
    /// Position of `current` in the timeline.
    pub index: Option<usize>,
    /// Frames elapsed since `current.start` (fractional for non-integral start times).
    pub local_frame: f64,
    /// Length of `current` in frames.
    pub entry_duration_frames: f64,
}

impl ActiveEntryResolution<'_> {
    pub fn is_gap(&self) -> bool {
        self.current.is_none()
    }
}

impl Timeline {
    /// Build from already-typed entries, enforcing every timeline invariant.
    pub fn new(entries: Vec<TimelineEntry>) -> MotionResult<Self> {
        validate_entries(&entries)?;
        Ok(Self { entries })
    }

    /// Build from authored entries (the lyrics JSON shape).
    pub fn from_raw(raw: Vec<RawTimelineEntry>) -> MotionResult<Self> {
        let entries = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.into_entry(i))
            .collect::<MotionResult<Vec<_>>>()?;
        Self::new(entries)
    }

    #[tracing::instrument(skip(s), fields(bytes = s.len()))]
    pub fn from_json_str(s: &str) -> MotionResult<Self> {
        let raw: Vec<RawTimelineEntry> = serde_json::from_str(s)
            .map_err(|e| MotionError::serde(format!("parse timeline JSON: {e}")))?;
        let timeline = Self::from_raw(raw)?;
        timeline.log_loaded();
        Ok(timeline)
    }

    #[tracing::instrument(skip(reader))]
    pub fn from_reader(reader: impl Read) -> MotionResult<Self> {
        let raw: Vec<RawTimelineEntry> = serde_json::from_reader(reader)
            .map_err(|e| MotionError::serde(format!("parse timeline JSON: {e}")))?;
        let timeline = Self::from_raw(raw)?;
        timeline.log_loaded();
        Ok(timeline)
    }

    fn log_loaded(&self) {
        tracing::debug!(
            entries = self.entries.len(),
            duration_secs = self.duration_secs(),
            "timeline loaded"
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter()
    }

    pub fn entry(&self, index: usize) -> Option<&TimelineEntry> {
        self.entries.get(index)
    }

    /// The entry immediately before `index` in sequence order.
    pub fn previous(&self, index: usize) -> Option<&TimelineEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// End of the last entry in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.entries.last().map_or(0.0, |e| e.end)
    }

    /// Entry with `start <= time_secs < end`, and its position; `None` inside a gap.
    pub fn lookup(&self, time_secs: f64) -> Option<(usize, &TimelineEntry)> {
        let idx = self.entries.partition_point(|e| e.start <= time_secs);
        let i = idx.checked_sub(1)?;
        let entry = &self.entries[i];
        entry.contains(time_secs).then_some((i, entry))
    }

    /// Resolve the active entry for one frame.
    pub fn resolve(&self, ctx: FrameContext) -> ActiveEntryResolution<'_> {
        let Some((index, current)) = self.lookup(ctx.time_secs) else {
            return ActiveEntryResolution {
                current: None,
                previous: None,
                index: None,
                local_frame: 0.0,
                entry_duration_frames: 0.0,
            };
        };

        let start_frame = ctx.fps.secs_to_frames(current.start);
        let end_frame = ctx.fps.secs_to_frames(current.end);
        ActiveEntryResolution {
            current: Some(current),
            previous: self.previous(index),
            index: Some(index),
            local_frame: ctx.frame.0 as f64 - start_frame,
            entry_duration_frames: end_frame - start_frame,
        }
    }
}

fn validate_entries(entries: &[TimelineEntry]) -> MotionResult<()> {
    if entries.is_empty() {
        return Err(MotionError::malformed_timeline(
            "timeline must contain at least one entry",
        ));
    }

    for (i, e) in entries.iter().enumerate() {
        if !e.start.is_finite() || !e.end.is_finite() {
            return Err(MotionError::malformed_timeline(format!(
                "entry {i}: start and end must be finite"
            )));
        }
        if e.start < 0.0 {
            return Err(MotionError::malformed_timeline(format!(
                "entry {i}: start ({}) must be >= 0",
                e.start
            )));
        }
        if e.section == SectionTag::None {
            return Err(MotionError::malformed_timeline(format!(
                "entry {i}: section 'none' is not authorable"
            )));
        }
        if e.start >= e.end {
            return Err(MotionError::malformed_timeline(format!(
                "entry {i}: start ({}) must be < end ({})",
                e.start, e.end
            )));
        }
    }

    for (i, w) in entries.windows(2).enumerate() {
        let (a, b) = (&w[0], &w[1]);
        if b.start < a.start {
            return Err(MotionError::malformed_timeline(format!(
                "entry {}: start ({}) is before entry {i} start ({}); entries must be sorted by start",
                i + 1,
                b.start,
                a.start
            )));
        }
        if a.end > b.start {
            return Err(MotionError::malformed_timeline(format!(
                "entry {i} [{}, {}) overlaps entry {} starting at {}",
                a.start,
                a.end,
                i + 1,
                b.start
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/index.rs"]
mod tests;
