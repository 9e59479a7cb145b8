/// Song domain type
use crate::types::SongId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog entry for one AI-generated song
///
/// Identity (`id`, `date_created`) is fixed at creation; the remaining
/// metadata is editable through [`SongPatch`]. Field names serialize in
/// camelCase so the on-disk blobs match the seed format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Who prompted the generation
    pub creator: String,

    /// Generator model label (e.g. "Suno AI v3.5")
    pub ai_version: String,

    /// Display duration ("3:12"); the transport's reported duration is
    /// authoritative during playback
    pub duration: String,

    /// How the song was produced
    #[serde(rename = "type")]
    pub kind: SongKind,

    /// Generation prompt
    pub prompt: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Lyrics, newline-delimited
    #[serde(default)]
    pub lyrics: String,

    /// Calendar date the song was created (date-only, ISO 8601)
    pub date_created: NaiveDate,

    /// Artwork image URI
    pub artwork: String,

    /// Link to the song page on the generator site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suno_link: Option<String>,

    /// Authoritative audio source URI
    pub cdn_link: String,

    /// Link to the originally uploaded file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_link: Option<String>,
}

impl Song {
    /// Iterate over the lyrics one line at a time
    pub fn lyric_lines(&self) -> impl Iterator<Item = &str> {
        self.lyrics.lines()
    }
}

/// How a song entered the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongKind {
    /// Uploaded audio
    Upload,
    /// Cover of an existing song
    Cover,
    /// Extended version of an earlier generation
    Extended,
}

impl SongKind {
    /// Lowercase label, as serialized
    pub fn as_str(self) -> &'static str {
        match self {
            SongKind::Upload => "upload",
            SongKind::Cover => "cover",
            SongKind::Extended => "extended",
        }
    }
}

impl std::fmt::Display for SongKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data for creating a song (id and creation date assigned by the store)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSong {
    /// Song title
    pub title: String,
    /// Who prompted the generation
    pub creator: String,
    /// Generator model label
    pub ai_version: String,
    /// Display duration
    pub duration: String,
    /// How the song was produced
    #[serde(rename = "type")]
    pub kind: SongKind,
    /// Generation prompt
    pub prompt: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Lyrics, newline-delimited
    #[serde(default)]
    pub lyrics: String,
    /// Artwork image URI
    pub artwork: String,
    /// Link to the song page on the generator site
    #[serde(default)]
    pub suno_link: Option<String>,
    /// Authoritative audio source URI
    pub cdn_link: String,
    /// Link to the originally uploaded file
    #[serde(default)]
    pub original_link: Option<String>,
}

impl CreateSong {
    /// Build the full record with a store-assigned id and creation date
    pub fn into_song(self, id: SongId, date_created: NaiveDate) -> Song {
        Song {
            id,
            title: self.title,
            creator: self.creator,
            ai_version: self.ai_version,
            duration: self.duration,
            kind: self.kind,
            prompt: self.prompt,
            description: self.description,
            lyrics: self.lyrics,
            date_created,
            artwork: self.artwork,
            suno_link: self.suno_link,
            cdn_link: self.cdn_link,
            original_link: self.original_link,
        }
    }
}

/// Data for updating a song (all fields optional)
///
/// `None` leaves the field untouched. Identity fields (`id`,
/// `date_created`) cannot be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPatch {
    /// New title
    pub title: Option<String>,
    /// New creator
    pub creator: Option<String>,
    /// New generator model label
    pub ai_version: Option<String>,
    /// New display duration
    pub duration: Option<String>,
    /// New song kind
    #[serde(rename = "type")]
    pub kind: Option<SongKind>,
    /// New prompt
    pub prompt: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New lyrics
    pub lyrics: Option<String>,
    /// New artwork URI
    pub artwork: Option<String>,
    /// New generator-site link
    pub suno_link: Option<String>,
    /// New audio source URI
    pub cdn_link: Option<String>,
    /// New original-file link
    pub original_link: Option<String>,
}

impl SongPatch {
    /// Check whether the patch changes anything
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.creator.is_none()
            && self.ai_version.is_none()
            && self.duration.is_none()
            && self.kind.is_none()
            && self.prompt.is_none()
            && self.description.is_none()
            && self.lyrics.is_none()
            && self.artwork.is_none()
            && self.suno_link.is_none()
            && self.cdn_link.is_none()
            && self.original_link.is_none()
    }

    /// Merge the patch into an existing record in place
    pub fn apply(&self, song: &mut Song) {
        if let Some(title) = &self.title {
            song.title = title.clone();
        }
        if let Some(creator) = &self.creator {
            song.creator = creator.clone();
        }
        if let Some(ai_version) = &self.ai_version {
            song.ai_version = ai_version.clone();
        }
        if let Some(duration) = &self.duration {
            song.duration = duration.clone();
        }
        if let Some(kind) = self.kind {
            song.kind = kind;
        }
        if let Some(prompt) = &self.prompt {
            song.prompt = prompt.clone();
        }
        if let Some(description) = &self.description {
            song.description = description.clone();
        }
        if let Some(lyrics) = &self.lyrics {
            song.lyrics = lyrics.clone();
        }
        if let Some(artwork) = &self.artwork {
            song.artwork = artwork.clone();
        }
        if let Some(suno_link) = &self.suno_link {
            song.suno_link = Some(suno_link.clone());
        }
        if let Some(cdn_link) = &self.cdn_link {
            song.cdn_link = cdn_link.clone();
        }
        if let Some(original_link) = &self.original_link {
            song.original_link = Some(original_link.clone());
        }
    }
}
