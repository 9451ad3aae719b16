//! Sorted and filtered views over the working playlist, and the rows shown
//! for them.

use std::cmp::Ordering;

use clap::ValueEnum;
use rand::Rng;

use crate::{
    pipeline::filter::FilterPredicate,
    types::{PlaylistEntry, TrackTableRow},
    utils,
};

/// Only catalog tracks can be written back; local files and episodes are not.
pub const TRACK_URI_PREFIX: &str = "spotify:track:";

/// Upper bound (exclusive) of the random shuffle key.
pub const RANDOM_KEY_RANGE: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Order,
    Title,
    Artist,
    Date,
    Bpm,
    Energy,
    Danceability,
    Loudness,
    Valence,
    Duration,
    Acousticness,
    Popularity,
    ArtistSeparation,
    Rnd,
}

impl SortColumn {
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Order => "order",
            SortColumn::Title => "title",
            SortColumn::Artist => "artist",
            SortColumn::Date => "Date",
            SortColumn::Bpm => "BPM",
            SortColumn::Energy => "energy",
            SortColumn::Danceability => "danceability",
            SortColumn::Loudness => "loudness",
            SortColumn::Valence => "valence",
            SortColumn::Duration => "duration",
            SortColumn::Acousticness => "acousticness",
            SortColumn::Popularity => "popularity",
            SortColumn::ArtistSeparation => "artist separation",
            SortColumn::Rnd => "rnd",
        }
    }

    /// Whether "increasing"/"decreasing" means anything to a reader.
    pub fn direction_matters(&self) -> bool {
        !matches!(self, SortColumn::ArtistSeparation | SortColumn::Rnd)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSpec<F> {
    pub column: SortColumn,
    pub direction: SortDirection,
    pub filter: F,
}

impl<F> ViewSpec<F> {
    /// Human name of the ordering, e.g. "increasing BPM" or "artist separation".
    pub fn sort_name(&self) -> String {
        if self.column.direction_matters() {
            let prefix = match self.direction {
                SortDirection::Ascending => "increasing",
                SortDirection::Descending => "decreasing",
            };
            format!("{} {}", prefix, self.column.label())
        } else {
            self.column.label().to_string()
        }
    }
}

enum SortKey {
    Number(Option<f64>),
    Text(String),
}

fn sort_key(entry: &PlaylistEntry, column: SortColumn) -> SortKey {
    let features = entry.track.enrichment.features();

    match column {
        SortColumn::Order => SortKey::Number(Some(entry.which as f64)),
        SortColumn::Title => SortKey::Text(entry.track.name.to_lowercase()),
        SortColumn::Artist => SortKey::Text(
            entry
                .track
                .primary_artist()
                .unwrap_or_default()
                .to_lowercase(),
        ),
        SortColumn::Date => SortKey::Text(entry.release_date.clone().unwrap_or_default()),
        SortColumn::Bpm => SortKey::Number(bpm(entry).map(|b| b as f64)),
        SortColumn::Energy => SortKey::Number(features.map(|f| f.energy)),
        SortColumn::Danceability => SortKey::Number(features.map(|f| f.danceability)),
        SortColumn::Loudness => SortKey::Number(features.map(|f| f.loudness)),
        SortColumn::Valence => SortKey::Number(features.map(|f| f.valence)),
        SortColumn::Duration => SortKey::Number(features.map(|f| f.duration_ms)),
        SortColumn::Acousticness => SortKey::Number(features.map(|f| f.acousticness)),
        SortColumn::Popularity => SortKey::Number(Some(f64::from(entry.track.popularity))),
        SortColumn::ArtistSeparation => {
            SortKey::Number(entry.track.fair_order.map(|o| o as f64))
        }
        SortColumn::Rnd => SortKey::Number(Some(f64::from(entry.rnd))),
    }
}

fn compare(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Number(a), SortKey::Number(b)) => match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.total_cmp(b),
        },
        (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Applies the filter and the sort of `spec` to `entries`.
///
/// The sort is stable, so rows with equal keys keep their playlist order.
pub fn ordered_view<'a, F: FilterPredicate>(
    entries: &'a [PlaylistEntry],
    spec: &ViewSpec<F>,
) -> Vec<&'a PlaylistEntry> {
    let mut rows: Vec<(SortKey, &PlaylistEntry)> = entries
        .iter()
        .filter(|e| spec.filter.accepts(e))
        .map(|e| (sort_key(e, spec.column), e))
        .collect();

    rows.sort_by(|(a, _), (b, _)| {
        let ord = compare(a, b);
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    rows.into_iter().map(|(_, e)| e).collect()
}

/// Catalog track URIs of `rows`, in row order.
pub fn track_uris(rows: &[&PlaylistEntry]) -> Vec<String> {
    rows.iter()
        .filter(|e| e.track.uri.starts_with(TRACK_URI_PREFIX))
        .map(|e| e.track.uri.clone())
        .collect()
}

/// Tempo as displayed: rounded to whole BPM, `None` without features.
pub fn bpm(entry: &PlaylistEntry) -> Option<i64> {
    entry
        .track
        .enrichment
        .features()
        .map(|f| f.tempo.round() as i64)
}

/// Gives every entry a fresh random shuffle key.
pub fn assign_random_keys(entries: &mut [PlaylistEntry]) {
    let mut rng = rand::rng();
    for entry in entries.iter_mut() {
        entry.rnd = rng.random_range(0..RANDOM_KEY_RANGE);
    }
}

fn percent(value: f64) -> String {
    format!("{}", (value * 100.0).round() as i64)
}

pub fn table_row(entry: &PlaylistEntry) -> TrackTableRow {
    let track = &entry.track;
    let mut row = TrackTableRow {
        order: (entry.which + 1).to_string(),
        title: track.name.clone(),
        artist: track.primary_artist().unwrap_or_default().to_string(),
        date: entry.release_date.clone().unwrap_or_default(),
        bpm: String::new(),
        energy: String::new(),
        danceability: String::new(),
        loudness: String::new(),
        valence: String::new(),
        duration: String::new(),
        acousticness: String::new(),
        popularity: track.popularity.to_string(),
        separation: track
            .fair_order
            .map(|o| o.to_string())
            .unwrap_or_default(),
        rnd: entry.rnd.to_string(),
    };

    if let Some(f) = track.enrichment.features() {
        row.bpm = format!("{}", f.tempo.round() as i64);
        row.energy = percent(f.energy);
        row.danceability = percent(f.danceability);
        row.loudness = format!("{}", f.loudness.round() as i64);
        row.valence = percent(f.valence);
        row.duration = utils::format_duration((f.duration_ms / 1000.0).round() as u64);
        row.acousticness = percent(f.acousticness);
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pipeline::filter::TempoFilter,
        types::{AlbumRef, ArtistRef, AudioFeatures, Enrichment, Track},
    };

    fn entry(which: usize, name: &str, tempo: Option<f64>, uri: &str) -> PlaylistEntry {
        PlaylistEntry {
            which,
            is_local: false,
            release_date: None,
            rnd: 0,
            track: Track {
                id: Some(format!("t{which}")),
                name: name.to_string(),
                artists: vec![ArtistRef {
                    id: None,
                    name: "Artist".to_string(),
                }],
                album: AlbumRef::default(),
                popularity: 50,
                preview_url: None,
                duration_ms: 0,
                uri: uri.to_string(),
                enrichment: tempo
                    .map(|tempo| {
                        Enrichment::Features(AudioFeatures {
                            id: format!("t{which}"),
                            tempo,
                            duration_ms: 185_400.0,
                            energy: 0.456,
                            ..Default::default()
                        })
                    })
                    .unwrap_or_default(),
                fair_order: None,
            },
        }
    }

    fn spec(column: SortColumn, direction: SortDirection) -> ViewSpec<TempoFilter> {
        ViewSpec {
            column,
            direction,
            filter: TempoFilter::default(),
        }
    }

    #[test]
    fn sort_names() {
        assert_eq!(
            spec(SortColumn::Bpm, SortDirection::Ascending).sort_name(),
            "increasing BPM"
        );
        assert_eq!(
            spec(SortColumn::Energy, SortDirection::Descending).sort_name(),
            "decreasing energy"
        );
        assert_eq!(
            spec(SortColumn::ArtistSeparation, SortDirection::Descending).sort_name(),
            "artist separation"
        );
        assert_eq!(spec(SortColumn::Rnd, SortDirection::Ascending).sort_name(), "rnd");
    }

    #[test]
    fn sorts_by_tempo_with_missing_first() {
        let entries = vec![
            entry(0, "fast", Some(140.2), "spotify:track:a"),
            entry(1, "blank", None, "spotify:track:b"),
            entry(2, "slow", Some(90.0), "spotify:track:c"),
        ];

        let asc = ordered_view(&entries, &spec(SortColumn::Bpm, SortDirection::Ascending));
        let names: Vec<&str> = asc.iter().map(|e| e.track.name.as_str()).collect();
        assert_eq!(names, vec!["blank", "slow", "fast"]);

        let desc = ordered_view(&entries, &spec(SortColumn::Bpm, SortDirection::Descending));
        let names: Vec<&str> = desc.iter().map(|e| e.track.name.as_str()).collect();
        assert_eq!(names, vec!["fast", "slow", "blank"]);
    }

    #[test]
    fn filter_is_applied_before_sorting() {
        let entries = vec![
            entry(0, "fast", Some(140.0), "spotify:track:a"),
            entry(1, "half", Some(64.0), "spotify:track:b"),
            entry(2, "slow", Some(90.0), "spotify:track:c"),
        ];
        let view = ViewSpec {
            column: SortColumn::Order,
            direction: SortDirection::Ascending,
            filter: TempoFilter {
                min_bpm: Some(120),
                max_bpm: Some(140),
                include_double: true,
            },
        };

        let rows = ordered_view(&entries, &view);
        let names: Vec<&str> = rows.iter().map(|e| e.track.name.as_str()).collect();
        assert_eq!(names, vec!["fast", "half"]);
    }

    #[test]
    fn only_catalog_track_uris_are_kept() {
        let entries = vec![
            entry(0, "a", None, "spotify:track:a"),
            entry(1, "local", None, "spotify:local:artist:album:song:200"),
            entry(2, "c", None, "spotify:track:c"),
        ];
        let rows: Vec<&PlaylistEntry> = entries.iter().collect();
        assert_eq!(
            track_uris(&rows),
            vec!["spotify:track:a".to_string(), "spotify:track:c".to_string()]
        );
    }

    #[test]
    fn row_rounds_features_and_blanks_missing_ones() {
        let enriched = table_row(&entry(4, "song", Some(127.6), "spotify:track:x"));
        assert_eq!(enriched.order, "5");
        assert_eq!(enriched.bpm, "128");
        assert_eq!(enriched.energy, "46");
        assert_eq!(enriched.duration, "3:05");

        let blank = table_row(&entry(0, "song", None, "spotify:track:y"));
        assert_eq!(blank.bpm, "");
        assert_eq!(blank.energy, "");
        assert_eq!(blank.duration, "");
        assert_eq!(blank.artist, "Artist");
    }
}
