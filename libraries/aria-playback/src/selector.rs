//! Track selection policy
//!
//! Pure functions of (ordered catalog, current id, shuffle flag). Shuffled
//! picks resample until they land off the current index, so with more than
//! one song the same track never plays twice in a row. A current id no
//! longer in the catalog (it was trashed) is treated as index -1: `next`
//! selects the first song, `previous` wraps to the last.

use aria_core::{Song, SongId};
use rand::Rng;

/// Select the song to play after `current`
pub fn next_song<R: Rng>(
    songs: &[Song],
    current: Option<SongId>,
    shuffled: bool,
    rng: &mut R,
) -> Option<SongId> {
    if songs.is_empty() {
        return None;
    }

    let current_index = index_of(songs, current);

    if shuffled {
        return Some(songs[shuffled_pick(songs.len(), current_index, rng)].id);
    }

    let next_index = (current_index + 1).rem_euclid(songs.len() as i64);
    Some(songs[next_index as usize].id)
}

/// Select the song to play before `current`
pub fn previous_song<R: Rng>(
    songs: &[Song],
    current: Option<SongId>,
    shuffled: bool,
    rng: &mut R,
) -> Option<SongId> {
    if songs.is_empty() {
        return None;
    }

    let current_index = index_of(songs, current);

    if shuffled {
        return Some(songs[shuffled_pick(songs.len(), current_index, rng)].id);
    }

    let prev_index = if current_index > 0 {
        (current_index - 1) as usize
    } else {
        songs.len() - 1
    };
    Some(songs[prev_index].id)
}

/// Position of the current song, or -1 if absent
fn index_of(songs: &[Song], current: Option<SongId>) -> i64 {
    current
        .and_then(|id| songs.iter().position(|s| s.id == id))
        .map_or(-1, |i| i as i64)
}

/// Uniform random index, resampled off the current index when len > 1
fn shuffled_pick<R: Rng>(len: usize, current_index: i64, rng: &mut R) -> usize {
    let mut pick = rng.gen_range(0..len);
    if len > 1 {
        while pick as i64 == current_index {
            pick = rng.gen_range(0..len);
        }
    }
    pick
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_core::SongKind;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_test_song(id: i64, title: &str) -> Song {
        Song {
            id: SongId::new(id),
            title: title.to_string(),
            creator: "Test Artist".to_string(),
            ai_version: "Suno AI v3.5".to_string(),
            duration: "3:00".to_string(),
            kind: SongKind::Upload,
            prompt: String::new(),
            description: String::new(),
            lyrics: String::new(),
            date_created: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            artwork: String::new(),
            suno_link: None,
            cdn_link: format!("https://cdn1.suno.ai/{}.mp3", id),
            original_link: None,
        }
    }

    fn abc() -> Vec<Song> {
        vec![
            create_test_song(1, "A"),
            create_test_song(2, "B"),
            create_test_song(3, "C"),
        ]
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn sequential_next_wraps_at_the_end() {
        let songs = abc();
        let mut rng = rng();

        // From B -> C
        let next = next_song(&songs, Some(SongId::new(2)), false, &mut rng);
        assert_eq!(next, Some(SongId::new(3)));

        // From C wraps -> A
        let next = next_song(&songs, Some(SongId::new(3)), false, &mut rng);
        assert_eq!(next, Some(SongId::new(1)));
    }

    #[test]
    fn sequential_previous_wraps_backward() {
        let songs = abc();
        let mut rng = rng();

        // From A wraps backward -> C
        let prev = previous_song(&songs, Some(SongId::new(1)), false, &mut rng);
        assert_eq!(prev, Some(SongId::new(3)));
    }

    #[test]
    fn next_then_previous_returns_to_start() {
        let songs = abc();
        let mut rng = rng();

        let start = SongId::new(2);
        let next = next_song(&songs, Some(start), false, &mut rng).unwrap();
        let back = previous_song(&songs, Some(next), false, &mut rng).unwrap();
        assert_eq!(back, start);
    }

    #[test]
    fn missing_current_selects_first_for_next() {
        let songs = abc();
        let mut rng = rng();

        // Current song was trashed; id 99 is nowhere in the catalog
        let next = next_song(&songs, Some(SongId::new(99)), false, &mut rng);
        assert_eq!(next, Some(SongId::new(1)));
    }

    #[test]
    fn missing_current_wraps_to_last_for_previous() {
        let songs = abc();
        let mut rng = rng();

        let prev = previous_song(&songs, Some(SongId::new(99)), false, &mut rng);
        assert_eq!(prev, Some(SongId::new(3)));
    }

    #[test]
    fn no_current_behaves_like_missing_current() {
        let songs = abc();
        let mut rng = rng();

        assert_eq!(
            next_song(&songs, None, false, &mut rng),
            Some(SongId::new(1))
        );
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let songs: Vec<Song> = Vec::new();
        let mut rng = rng();

        assert_eq!(next_song(&songs, Some(SongId::new(1)), false, &mut rng), None);
        assert_eq!(previous_song(&songs, None, true, &mut rng), None);
    }

    #[test]
    fn shuffle_never_repeats_the_current_song() {
        let songs = abc();
        let mut rng = rng();
        let current = SongId::new(2);

        for _ in 0..200 {
            let pick = next_song(&songs, Some(current), true, &mut rng).unwrap();
            assert_ne!(pick, current);
        }
    }

    #[test]
    fn shuffle_on_a_single_song_returns_it() {
        let songs = vec![create_test_song(1, "Only")];
        let mut rng = rng();

        let pick = next_song(&songs, Some(SongId::new(1)), true, &mut rng);
        assert_eq!(pick, Some(SongId::new(1)));
    }

    #[test]
    fn shuffle_reaches_every_other_song() {
        let songs = abc();
        let mut rng = rng();
        let current = SongId::new(1);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(next_song(&songs, Some(current), true, &mut rng).unwrap());
        }
        assert!(seen.contains(&SongId::new(2)));
        assert!(seen.contains(&SongId::new(3)));
        assert!(!seen.contains(&current));
    }
}
