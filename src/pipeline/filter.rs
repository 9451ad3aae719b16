use crate::{pipeline::view, types::PlaylistEntry};

/// Decides whether a row stays in the filtered view.
pub trait FilterPredicate {
    fn accepts(&self, entry: &PlaylistEntry) -> bool;
}

/// Tempo window on the displayed (rounded) BPM.
///
/// A row passes when its BPM lies within `[min_bpm, max_bpm]` (either bound
/// may be absent), or, with `include_double`, when twice its BPM does, which
/// lets half-time tracks through. Rows without a tempo count as 0 BPM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempoFilter {
    pub min_bpm: Option<u32>,
    pub max_bpm: Option<u32>,
    pub include_double: bool,
}

impl Default for TempoFilter {
    fn default() -> Self {
        Self {
            min_bpm: None,
            max_bpm: None,
            include_double: true,
        }
    }
}

impl TempoFilter {
    fn in_range(&self, bpm: f64) -> bool {
        self.min_bpm.is_none_or(|min| f64::from(min) <= bpm)
            && self.max_bpm.is_none_or(|max| bpm <= f64::from(max))
    }

    pub fn accepts_bpm(&self, bpm: f64) -> bool {
        self.in_range(bpm) || (self.include_double && self.in_range(bpm * 2.0))
    }
}

impl FilterPredicate for TempoFilter {
    fn accepts(&self, entry: &PlaylistEntry) -> bool {
        let bpm = view::bpm(entry).unwrap_or(0);
        self.accepts_bpm(bpm as f64)
    }
}
