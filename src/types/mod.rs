//! Core data model shared between the client, session state, and CLI.

pub mod audio;
pub mod dialog;
pub mod persona;
pub mod room;
pub mod voice;

pub use audio::*;
pub use dialog::*;
pub use persona::*;
pub use room::*;
pub use voice::*;
