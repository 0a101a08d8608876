//! soundstage — typed client SDK for a dialog-audio studio backend.
//!
//! The backend manages personas (speaker profiles), synthetic acoustic
//! rooms, generated dialogs, and a three-step audio pipeline (TTS, mixing,
//! room-acoustics rendering). This crate wraps its JSON-over-HTTP API with
//! typed endpoint methods, owns the session-scoped state the interactive
//! surface needs (staged placement edits, synthesized-audio markers), and
//! persists the two small preference blobs that survive across sessions.
//!
//! # Quick start
//!
//! ```no_run
//! use soundstage::prelude::*;
//!
//! # async fn example() -> soundstage::error::Result<()> {
//! let client = StudioClient::from_env()?;
//! let mut session = SessionState::new();
//!
//! for room in client.list_rooms().await? {
//!     let (form, source) = soundstage::session::seed_speaker_form(&room, &mut session);
//!     println!("{}: seeded from {source:?}, speaker 1 at x={}", room.name, form.speakers[0].x);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod prefs;
pub mod prelude;
pub mod session;
pub mod types;
pub mod workflow;

#[cfg(feature = "cli")]
pub mod cli;
