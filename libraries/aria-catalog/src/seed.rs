//! Fallback sample catalog
//!
//! Demo records the seed-source collaborator can substitute when the real
//! seed fails to load. The engine itself degrades to an empty catalog on
//! load failure; using these instead is the collaborator's choice.

use aria_core::{CatalogSeed, Song, SongId, SongKind};
use chrono::NaiveDate;

fn sample_song(
    id: i64,
    title: &str,
    creator: &str,
    duration: &str,
    kind: SongKind,
    prompt: &str,
    date: (i32, u32, u32),
    description: &str,
    lyrics: &str,
    suno_id: &str,
    artwork_seed: &str,
) -> Song {
    Song {
        id: SongId::new(id),
        title: title.to_string(),
        creator: creator.to_string(),
        ai_version: "Suno AI v3.5".to_string(),
        duration: duration.to_string(),
        kind,
        prompt: prompt.to_string(),
        description: description.to_string(),
        lyrics: lyrics.to_string(),
        date_created: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        artwork: format!("https://picsum.photos/seed/{artwork_seed}/400/400"),
        suno_link: Some(format!("https://suno.ai/song/{suno_id}")),
        cdn_link: format!("https://cdn1.suno.ai/{suno_id}.mp3"),
        original_link: None,
    }
}

/// Build the demo catalog (no trash entries)
pub fn sample_catalog() -> CatalogSeed {
    let songs = vec![
        sample_song(
            1,
            "Electric Dreams",
            "AI Composer",
            "2:35",
            SongKind::Upload,
            "Electronic music with futuristic synths and driving beat",
            (2024, 3, 15),
            "A futuristic electronic track with pulsating synths and energetic beats.",
            "Electric dreams are calling\nThrough the digital night\nNeon lights are falling\nEverything feels right",
            "5b0e75b9-ad00-41cb-8202-240e50466009",
            "electric",
        ),
        sample_song(
            2,
            "Midnight City",
            "Night Producer",
            "3:12",
            SongKind::Cover,
            "Chill electronic music with city vibes and smooth transitions",
            (2024, 3, 14),
            "Smooth electronic track perfect for late night city drives.",
            "Midnight city lights\nReflecting in my eyes\nUrban paradise\nUnder neon skies",
            "45025dc5-610c-4a24-80c0-c66fb127790a",
            "midnight",
        ),
        sample_song(
            3,
            "Cosmic Journey",
            "Space Artist",
            "4:28",
            SongKind::Extended,
            "Ambient space music with ethereal pads and cosmic soundscapes",
            (2024, 3, 13),
            "An ethereal journey through space with ambient textures and cosmic sounds.",
            "Floating through the stars\nNebula painting the sky\nCosmic dust and solar winds\nTake me high",
            "1ae0eb1b-99e7-4e57-a05d-043c3dc2d0ea",
            "cosmic",
        ),
        sample_song(
            4,
            "Summer Breeze",
            "Beach Vibes",
            "2:56",
            SongKind::Upload,
            "Upbeat summer pop with tropical vibes and catchy melody",
            (2024, 3, 12),
            "Feel-good summer track with tropical elements and catchy hooks.",
            "Summer breeze is blowing\nThrough the palm trees\nOcean waves are flowing\nPut your mind at ease",
            "ed922062-5a4b-4da4-a032-ace364be74f6",
            "summer",
        ),
    ];

    CatalogSeed::new(songs, Vec::new())
}
