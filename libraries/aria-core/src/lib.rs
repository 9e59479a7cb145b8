//! Aria Player Core
//!
//! Core types, traits, and error handling for Aria Player.
//!
//! This crate provides the foundational building blocks shared by the
//! catalog and playback engines:
//! - **Domain Types**: [`Song`], [`SongId`], [`SongKind`], [`CreateSong`],
//!   [`SongPatch`]
//! - **Persistence Boundary**: the [`CatalogPersistence`] trait and the
//!   [`CatalogSeed`] snapshot it reads and writes
//! - **Error Handling**: unified [`AriaError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use aria_core::{CreateSong, SongId, SongKind};
//! use chrono::NaiveDate;
//!
//! let record = CreateSong {
//!     title: "Electric Dreams".to_string(),
//!     creator: "AI Composer".to_string(),
//!     ai_version: "Suno AI v3.5".to_string(),
//!     duration: "2:35".to_string(),
//!     kind: SongKind::Upload,
//!     prompt: "Electronic music with futuristic synths".to_string(),
//!     description: String::new(),
//!     lyrics: String::new(),
//!     artwork: "https://picsum.photos/seed/electric/400/400".to_string(),
//!     suno_link: None,
//!     cdn_link: "https://cdn1.suno.ai/example.mp3".to_string(),
//!     original_link: None,
//! };
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let song = record.into_song(SongId::new(1), date);
//! assert_eq!(song.title, "Electric Dreams");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod persist;
pub mod types;

// Re-export commonly used types
pub use error::{AriaError, Result};
pub use persist::{CatalogPersistence, CatalogSeed};
pub use types::{CreateSong, Scope, Song, SongId, SongKind, SongPatch};
