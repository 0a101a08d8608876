//! CLI command definitions.

pub mod run;

use clap::{Args, Parser, Subcommand};

/// soundstage studio CLI
#[derive(Parser, Debug)]
#[command(name = "soundstage", version, about = "Client for the dialog-audio studio backend")]
pub struct Cli {
    /// Backend base URL (defaults to SOUNDSTAGE_BASE_URL or localhost)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage personas
    Persona(PersonaArgs),
    /// Inspect voices and assignments
    Voice(VoiceArgs),
    /// Manage rooms and their placement configuration
    Room(RoomArgs),
    /// Generate a dialog (optionally rendering audio right after)
    Dialog(DialogArgs),
    /// Render audio for an existing dialog
    Audio(AudioArgs),
    /// Show or change persisted preferences
    Prefs(PrefsArgs),
}

#[derive(Args, Debug)]
pub struct PersonaArgs {
    #[command(subcommand)]
    pub command: PersonaCommands,
}

#[derive(Subcommand, Debug)]
pub enum PersonaCommands {
    /// List personas
    List,
    /// Create a persona from explicit fields
    Create {
        name: String,
        #[arg(long)]
        role: Option<String>,
        /// Additional key=value attributes
        #[arg(long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
    /// Generate two personas via the configured model
    Generate,
}

#[derive(Args, Debug)]
pub struct VoiceArgs {
    #[command(subcommand)]
    pub command: VoiceCommands,
}

#[derive(Subcommand, Debug)]
pub enum VoiceCommands {
    /// List the voice catalog
    List,
    /// Show current persona-voice assignments
    Assignments,
    /// Recompute assignments for all personas
    AutoAssign,
    /// Pin one persona to a voice
    Assign { persona: String, voice: String },
}

#[derive(Args, Debug)]
pub struct RoomArgs {
    #[command(subcommand)]
    pub command: RoomCommands,
}

#[derive(Subcommand, Debug)]
pub enum RoomCommands {
    /// List rooms
    List,
    /// Create a room
    Create {
        name: String,
        #[command(subcommand)]
        geometry: GeometryCommands,
    },
    /// Delete a room by id
    Delete { id: String },
    /// Add a furniture item to a room
    Furniture {
        id: String,
        name: String,
        /// Additional key=value attributes
        #[arg(long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
    /// Set both speakers' placement for a room
    Speakers {
        id: String,
        /// Speaker 1: "abs:X,Y,Z" or "rel:OBJECT[:SIDE[:MAX_DIST]]"
        speaker1: String,
        /// Speaker 2, same format
        speaker2: String,
    },
    /// Set the microphone placement for a room
    Mic {
        id: String,
        /// Named placement (center, ceiling, wall, corner, custom)
        position: String,
        #[arg(long, requires = "y", requires = "z")]
        x: Option<f64>,
        #[arg(long)]
        y: Option<f64>,
        #[arg(long)]
        z: Option<f64>,
    },
    /// Print the cache-busted layout image URL
    ImageUrl {
        id: String,
        #[arg(long, default_value_t = 640)]
        width: u32,
        #[arg(long, default_value_t = 480)]
        height: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum GeometryCommands {
    /// Explicit dimensions in meters
    Custom {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        length: f64,
        #[arg(long)]
        height: f64,
    },
    /// Named size bucket (small, medium, large)
    Basic {
        #[arg(long)]
        size: String,
    },
    /// Named medical room type
    Medical {
        #[arg(long)]
        room_type: String,
    },
}

#[derive(Args, Debug)]
pub struct DialogArgs {
    pub persona1: String,
    pub persona2: String,
    #[arg(long)]
    pub location: Option<String>,
    /// Comma-separated topic list
    #[arg(long, default_value = "")]
    pub topics: String,
    #[arg(long, default_value_t = 10)]
    pub max_turns: u32,
    /// Render audio in this room right after generating the dialog
    #[arg(long)]
    pub render_room: Option<String>,
}

#[derive(Args, Debug)]
pub struct AudioArgs {
    pub dialog_id: String,
    pub room: String,
    /// Reuse TTS output from an earlier run of this dialog
    #[arg(long)]
    pub reuse_tts: bool,
}

#[derive(Args, Debug)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub command: PrefsCommands,
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Print both preference blobs (defaults where unset)
    Show,
    /// Update the LLM provider settings
    SetLlm {
        #[arg(long)]
        provider: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        bearer_token: Option<String>,
    },
    /// Update the audio-effect settings
    SetAudio {
        #[arg(long)]
        background_effect: Option<String>,
        #[arg(long)]
        foreground_effect: Option<String>,
        #[arg(long)]
        background_volume: Option<f64>,
        #[arg(long)]
        foreground_volume: Option<f64>,
        #[arg(long)]
        ray_tracing: Option<bool>,
        #[arg(long)]
        air_absorption: Option<bool>,
    },
}
