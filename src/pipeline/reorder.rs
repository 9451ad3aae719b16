//! Fair artist spacing.
//!
//! Greedy reordering: at every step the candidate whose artist would end up
//! closest to its overall share of the playlist is placed next. Only the
//! first-listed artist of a track counts. Ties go to the candidate that comes
//! first in the original order, which makes the result reproducible.
//!
//! Quadratic in the number of entries; it runs once per playlist load.

use std::collections::HashMap;

use crate::types::PlaylistEntry;

/// Occurrence counter that reads zero for keys it has never seen.
#[derive(Debug, Default)]
struct Tally<'a> {
    counts: HashMap<&'a str, usize>,
}

impl<'a> Tally<'a> {
    fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    fn bump(&mut self, key: &'a str) {
        *self.counts.entry(key).or_insert(0) += 1;
    }
}

/// Computes the fair output order for a sequence of artist keys.
///
/// Returns indices into `keys`; position `p` of the result holds the key
/// placed at output position `p`.
pub fn fair_sequence(keys: &[&str]) -> Vec<usize> {
    let n = keys.len();
    let mut totals = Tally::default();
    for &key in keys {
        totals.bump(key);
    }

    let mut placed = Tally::default();
    let mut pool: Vec<usize> = (0..n).collect();
    let mut out = Vec::with_capacity(n);

    while !pool.is_empty() {
        let emitted = out.len();
        let mut best_deviation = f64::INFINITY;
        let mut best_pos = 0;

        for (pos, &idx) in pool.iter().enumerate() {
            let key = keys[idx];
            let target = totals.get(key) as f64 / n as f64;
            let predicted = (placed.get(key) + 1) as f64 / (emitted + 1) as f64;
            let deviation = (predicted - target).abs();
            if deviation < best_deviation {
                best_deviation = deviation;
                best_pos = pos;
            }
        }

        let idx = pool.remove(best_pos);
        placed.bump(keys[idx]);
        out.push(idx);
    }

    out
}

/// Assigns `fair_order` to every entry whose track has a primary artist.
///
/// Entries without an artist are left with `fair_order = None` and do not
/// count towards any artist's share. Returns indices into `entries` in fair
/// order.
pub fn reorder(entries: &mut [PlaylistEntry]) -> Vec<usize> {
    let eligible: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.track.primary_artist().is_some())
        .map(|(i, _)| i)
        .collect();

    let sequence = {
        let keys: Vec<&str> = eligible
            .iter()
            .filter_map(|&i| entries[i].track.primary_artist())
            .collect();
        fair_sequence(&keys)
    };

    for entry in entries.iter_mut() {
        entry.track.fair_order = None;
    }

    let order: Vec<usize> = sequence.into_iter().map(|k| eligible[k]).collect();
    for (position, &idx) in order.iter().enumerate() {
        entries[idx].track.fair_order = Some(position);
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlbumRef, ArtistRef, Enrichment, Track};

    fn entry(which: usize, artist: Option<&str>) -> PlaylistEntry {
        PlaylistEntry {
            which,
            is_local: false,
            release_date: None,
            rnd: 0,
            track: Track {
                id: Some(format!("t{which}")),
                name: format!("song {which}"),
                artists: artist
                    .map(|name| {
                        vec![ArtistRef {
                            id: None,
                            name: name.to_string(),
                        }]
                    })
                    .unwrap_or_default(),
                album: AlbumRef::default(),
                popularity: 0,
                preview_url: None,
                duration_ms: 0,
                uri: format!("spotify:track:t{which}"),
                enrichment: Enrichment::Empty,
                fair_order: None,
            },
        }
    }

    fn keys(s: &str) -> Vec<String> {
        s.chars().map(|c| c.to_string()).collect()
    }

    fn sequence_of(s: &str) -> Vec<usize> {
        let owned = keys(s);
        let refs: Vec<&str> = owned.iter().map(String::as_str).collect();
        fair_sequence(&refs)
    }

    fn spelled(s: &str) -> String {
        let chars: Vec<char> = s.chars().collect();
        sequence_of(s).into_iter().map(|i| chars[i]).collect()
    }

    #[test]
    fn two_a_one_b() {
        // step 0: A deviates 1/3, B 2/3 -> A; step 1: A 1/3, B 1/6 -> B
        assert_eq!(sequence_of("AAB"), vec![0, 2, 1]);
    }

    #[test]
    fn ties_go_to_the_earlier_candidate() {
        // at step 1 both A (2/2 vs 3/4) and B (1/2 vs 1/4) deviate by 1/4
        assert_eq!(sequence_of("AAAB"), vec![0, 1, 3, 2]);
    }

    #[test]
    fn known_interleavings() {
        assert_eq!(spelled("AABB"), "ABAB");
        assert_eq!(spelled("AAAAB"), "AABAA");
        assert_eq!(spelled("AAAABBBCCD"), "ABCADBACBA");
        assert_eq!(spelled("ABCABCAAB"), "ABCABACBA");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(fair_sequence(&[]).is_empty());
        let mut entries: Vec<PlaylistEntry> = Vec::new();
        assert!(reorder(&mut entries).is_empty());
    }

    #[test]
    fn output_is_a_permutation() {
        let s = "AAAABBBCCDEEFAAB";
        let mut seq = sequence_of(s);
        seq.sort_unstable();
        assert_eq!(seq, (0..s.len()).collect::<Vec<_>>());
    }

    #[test]
    fn deterministic_across_runs() {
        let s = "ZZYXXXWZYYX";
        assert_eq!(sequence_of(s), sequence_of(s));
    }

    #[test]
    fn repeated_artists_are_not_left_contiguous() {
        for s in ["AAB", "AAAB", "AABB", "AAAAB", "AAAABBBCCD", "AAAAAAB", "AAABBBCCC"] {
            let out = spelled(s);
            let total = s.len();
            for artist in s.chars() {
                let k = s.chars().filter(|&c| c == artist).count();
                if k < 2 || k == total {
                    continue;
                }
                let positions: Vec<usize> = out
                    .chars()
                    .enumerate()
                    .filter(|&(_, c)| c == artist)
                    .map(|(p, _)| p)
                    .collect();
                let span = positions.last().unwrap() - positions.first().unwrap() + 1;
                assert!(span > k, "{artist} is contiguous in {out} (from {s})");
            }
        }
    }

    #[test]
    fn assigns_fair_order_on_entries() {
        let mut entries = vec![
            entry(0, Some("A")),
            entry(1, Some("A")),
            entry(2, Some("B")),
        ];
        let order = reorder(&mut entries);

        assert_eq!(order, vec![0, 2, 1]);
        assert_eq!(entries[0].track.fair_order, Some(0));
        assert_eq!(entries[1].track.fair_order, Some(2));
        assert_eq!(entries[2].track.fair_order, Some(1));
    }

    #[test]
    fn entries_without_artist_are_excluded() {
        let mut entries = vec![
            entry(0, Some("A")),
            entry(1, None),
            entry(2, Some("A")),
            entry(3, Some("B")),
        ];
        let order = reorder(&mut entries);

        assert_eq!(order, vec![0, 3, 2]);
        assert_eq!(entries[1].track.fair_order, None);
        let mut positions: Vec<usize> = entries
            .iter()
            .filter_map(|e| e.track.fair_order)
            .collect();
        positions.sort_unstable();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn only_the_first_listed_artist_counts() {
        let mut entries = vec![
            entry(0, Some("A")),
            entry(1, Some("A")),
            entry(2, Some("B")),
        ];
        entries[1].track.artists.push(ArtistRef {
            id: None,
            name: "B".to_string(),
        });
        assert_eq!(reorder(&mut entries), vec![0, 2, 1]);
    }
}
