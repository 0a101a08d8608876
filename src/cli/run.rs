//! CLI command handlers.
//!
//! Each invocation is one request-response exchange: no retries, no
//! background work. A failed request prints the backend's error once and
//! the process exits non-zero.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::client::StudioClient;
use crate::config::StudioConfig;
use crate::error::{Result, StudioError};
use crate::prefs::{self, FilePrefStore};
use crate::session::{MicForm, PlacementKind, SessionState, SpeakerFields, SpeakerForm};
use crate::types::{
    AudioDialog, CreateRoomRequest, Dialog, DialogContext, FurnitureRequest, MicPosition,
    PlacementSide, Persona, RoomGeometry,
};
use crate::workflow;

use super::{
    AudioArgs, DialogArgs, GeometryCommands, PersonaCommands, PrefsCommands, RoomCommands,
    VoiceCommands,
};

fn build_client(base_url: Option<&str>) -> Result<StudioClient> {
    let config = match base_url {
        Some(url) => StudioConfig::new(url),
        None => StudioConfig::from_env(),
    };
    StudioClient::new(&config)
}

/// Parse `key=value` attribute arguments. Values that parse as JSON are
/// kept typed (numbers, booleans), everything else stays a string.
fn parse_fields(raw: &[String]) -> Result<BTreeMap<String, serde_json::Value>> {
    let mut fields = BTreeMap::new();
    for entry in raw {
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            StudioError::precondition(format!("expected KEY=VALUE, got {entry:?}"))
        })?;
        let value = serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
        fields.insert(key.to_string(), value);
    }
    Ok(fields)
}

/// Parse a user-supplied mic placement name. Unlike
/// [`MicPosition::normalize`], which tolerates whatever a stored room
/// carries, typos on the command line are rejected rather than coerced.
fn parse_mic_position(raw: &str) -> Result<MicPosition> {
    MicPosition::from_str(raw.trim()).map_err(|_| {
        StudioError::precondition(format!(
            "unknown mic position {raw:?} (use center, ceiling, wall, corner, or custom)"
        ))
    })
}

/// Parse a speaker spec: `abs:X,Y,Z` or `rel:OBJECT[:SIDE[:MAX_DIST]]`.
fn parse_speaker_spec(spec: &str) -> Result<SpeakerFields> {
    let mut fields = SpeakerFields::default();
    let (kind, rest) = spec.split_once(':').ok_or_else(|| {
        StudioError::precondition(format!(
            "expected abs:X,Y,Z or rel:OBJECT[:SIDE[:MAX_DIST]], got {spec:?}"
        ))
    })?;
    match kind {
        "abs" => {
            let coords: Vec<&str> = rest.split(',').map(str::trim).collect();
            if coords.len() != 3 {
                return Err(StudioError::precondition(format!(
                    "absolute placement needs three coordinates, got {rest:?}"
                )));
            }
            fields.placement = PlacementKind::Absolute;
            fields.x = coords[0].to_string();
            fields.y = coords[1].to_string();
            fields.z = coords[2].to_string();
        }
        "rel" => {
            let mut parts = rest.split(':');
            fields.placement = PlacementKind::Relative;
            fields.object = parts.next().unwrap_or_default().trim().to_string();
            if let Some(side) = parts.next() {
                fields.side = PlacementSide::from_str(side).map_err(|_| {
                    StudioError::precondition(format!("unknown side {side:?}"))
                })?;
            }
            if let Some(distance) = parts.next() {
                fields.max_distance = distance.trim().to_string();
            }
        }
        other => {
            return Err(StudioError::precondition(format!(
                "unknown placement kind {other:?} (use abs or rel)"
            )))
        }
    }
    Ok(fields)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_dialog(dialog: &Dialog) {
    println!("dialog {}", dialog.id);
    for turn in &dialog.turns {
        println!("  {}: {}", turn.speaker, turn.text);
    }
}

fn print_rendered(rendered: &AudioDialog) {
    if let Some(path) = &rendered.audio_step_1_filepath {
        println!("utterances: {path}");
    }
    if let Some(renders) = &rendered.audio_step_3_filepaths {
        for (room, render) in renders {
            if let Some(path) = &render.audio_path {
                println!("room acoustics ({room}): {path}");
            }
        }
    }
}

pub async fn handle_persona(base_url: Option<&str>, command: PersonaCommands) -> Result<()> {
    let client = build_client(base_url)?;
    match command {
        PersonaCommands::List => print_json(&client.list_personas().await?),
        PersonaCommands::Create { name, role, fields } => {
            let mut persona = Persona::new(name);
            persona.role = role;
            persona.extra = parse_fields(&fields)?;
            print_json(&client.create_persona(&persona).await?)
        }
        PersonaCommands::Generate => {
            let store = FilePrefStore::new_default();
            let model = prefs::load_llm(&store)?;
            print_json(&client.generate_personas(&model).await?)
        }
    }
}

pub async fn handle_voice(base_url: Option<&str>, command: VoiceCommands) -> Result<()> {
    let client = build_client(base_url)?;
    match command {
        VoiceCommands::List => print_json(&client.list_voices().await?),
        VoiceCommands::Assignments => print_json(&client.persona_voices().await?),
        VoiceCommands::AutoAssign => {
            let mut session = SessionState::new();
            let assignments = workflow::auto_assign_voices(&client, &mut session).await?;
            print_json(&assignments)
        }
        VoiceCommands::Assign { persona, voice } => {
            print_json(&client.assign_voice(&persona, &voice).await?)
        }
    }
}

pub async fn handle_room(base_url: Option<&str>, command: RoomCommands) -> Result<()> {
    let client = build_client(base_url)?;
    match command {
        RoomCommands::List => print_json(&client.list_rooms().await?),
        RoomCommands::Create { name, geometry } => {
            let geometry = match geometry {
                GeometryCommands::Custom {
                    width,
                    length,
                    height,
                } => RoomGeometry::Custom {
                    width,
                    length,
                    height,
                },
                GeometryCommands::Basic { size } => RoomGeometry::Basic { room_size: size },
                GeometryCommands::Medical { room_type } => RoomGeometry::Medical { room_type },
            };
            print_json(&client.create_room(&CreateRoomRequest { name, geometry }).await?)
        }
        RoomCommands::Delete { id } => {
            let mut session = SessionState::new();
            workflow::delete_room(&client, &mut session, &id).await?;
            println!("deleted room {id}");
            Ok(())
        }
        RoomCommands::Furniture { id, name, fields } => {
            let furniture = FurnitureRequest {
                name,
                fields: parse_fields(&fields)?,
            };
            print_json(&client.add_furniture(&id, &furniture).await?)
        }
        RoomCommands::Speakers { id, speaker1, speaker2 } => {
            let form = SpeakerForm {
                speakers: [parse_speaker_spec(&speaker1)?, parse_speaker_spec(&speaker2)?],
            };
            let mut session = SessionState::new();
            workflow::submit_speaker_positions(&client, &mut session, &id, &form).await?;
            println!("updated speaker positions for room {id}");
            Ok(())
        }
        RoomCommands::Mic { id, position, x, y, z } => {
            let form = MicForm {
                position: parse_mic_position(&position)?,
                x: x.map(|v| v.to_string()).unwrap_or_else(|| "0.00".to_string()),
                y: y.map(|v| v.to_string()).unwrap_or_else(|| "0.00".to_string()),
                z: z.map(|v| v.to_string()).unwrap_or_else(|| "0.00".to_string()),
            };
            print_json(&client.set_mic_position(&id, &form.to_request()?).await?)
        }
        RoomCommands::ImageUrl { id, width, height } => {
            println!("{}", client.room_image_url(&id, width, height));
            Ok(())
        }
    }
}

pub async fn handle_dialog(base_url: Option<&str>, args: DialogArgs) -> Result<()> {
    let client = build_client(base_url)?;
    let store = FilePrefStore::new_default();
    let model = prefs::load_llm(&store)?;
    let mut session = SessionState::new();

    let context = DialogContext {
        location: args.location,
        topics: Vec::new(),
    }
    .with_topics_csv(&args.topics);

    let request = workflow::dialog_request(
        args.persona1,
        args.persona2,
        context,
        args.max_turns,
        &model,
    );
    let dialog = workflow::create_dialog(&client, &mut session, &request).await?;
    print_dialog(&dialog);

    if let Some(room) = args.render_room {
        let effects = prefs::load_audio(&store)?;
        let rendered = workflow::generate_audio(&client, &mut session, &room, &effects).await?;
        print_rendered(&rendered);
    }
    Ok(())
}

pub async fn handle_audio(base_url: Option<&str>, args: AudioArgs) -> Result<()> {
    let client = build_client(base_url)?;
    let store = FilePrefStore::new_default();
    let effects = prefs::load_audio(&store)?;

    let mut session = SessionState::new();
    session.set_current_dialog(args.dialog_id.clone());
    if args.reuse_tts {
        session.mark_synthesized(&args.dialog_id);
    }

    let rendered = workflow::generate_audio(&client, &mut session, &args.room, &effects).await?;
    print_rendered(&rendered);
    Ok(())
}

pub async fn handle_prefs(command: PrefsCommands) -> Result<()> {
    let store = FilePrefStore::new_default();
    match command {
        PrefsCommands::Show => {
            let llm = prefs::load_llm(&store)?;
            let audio = prefs::load_audio(&store)?;
            println!("llm: {}", serde_json::to_string_pretty(&llm)?);
            if llm.needs_aws_fields() {
                println!("(provider {:?} uses the region and bearer-token fields)", llm.provider);
            }
            println!("audio: {}", serde_json::to_string_pretty(&audio)?);
            Ok(())
        }
        PrefsCommands::SetLlm {
            provider,
            model,
            region,
            bearer_token,
        } => {
            let mut llm = prefs::load_llm(&store)?;
            if let Some(provider) = provider {
                llm.provider = provider;
            }
            if let Some(model) = model {
                llm.model_name = model;
            }
            if let Some(region) = region {
                llm.region_name = region;
            }
            if let Some(token) = bearer_token {
                llm.aws_bearer_token = token;
            }
            prefs::save_llm(&store, &llm)?;
            if llm.needs_aws_fields() {
                println!("(provider {:?} uses the region and bearer-token fields)", llm.provider);
            }
            print_json(&llm)
        }
        PrefsCommands::SetAudio {
            background_effect,
            foreground_effect,
            background_volume,
            foreground_volume,
            ray_tracing,
            air_absorption,
        } => {
            let mut audio = prefs::load_audio(&store)?;
            if background_effect.is_some() {
                audio.background_effect = background_effect.filter(|e| !e.is_empty());
            }
            if foreground_effect.is_some() {
                audio.foreground_effect = foreground_effect.filter(|e| !e.is_empty());
            }
            if let Some(volume) = background_volume {
                audio.background_volume = volume;
            }
            if let Some(volume) = foreground_volume {
                audio.foreground_volume = volume;
            }
            if let Some(enabled) = ray_tracing {
                audio.ray_tracing = enabled;
            }
            if let Some(enabled) = air_absorption {
                audio.air_absorption = enabled;
            }
            prefs::save_audio(&store, &audio)?;
            print_json(&audio)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_spec_absolute() {
        let fields = parse_speaker_spec("abs:1.0, 2.5, 1.6").unwrap();
        assert_eq!(fields.placement, PlacementKind::Absolute);
        assert_eq!(fields.y, "2.5");
    }

    #[test]
    fn speaker_spec_relative_with_defaults() {
        let fields = parse_speaker_spec("rel:bed").unwrap();
        assert_eq!(fields.placement, PlacementKind::Relative);
        assert_eq!(fields.object, "bed");
        assert_eq!(fields.side, PlacementSide::Any);
        assert_eq!(fields.max_distance, "0.3");

        let fields = parse_speaker_spec("rel:bed:LEFT:0.5").unwrap();
        assert_eq!(fields.side, PlacementSide::Left);
        assert_eq!(fields.max_distance, "0.5");
    }

    #[test]
    fn speaker_spec_rejects_garbage() {
        assert!(parse_speaker_spec("abs:1,2").is_err());
        assert!(parse_speaker_spec("somewhere").is_err());
        assert!(parse_speaker_spec("mid:bed").is_err());
    }

    #[test]
    fn mic_position_accepts_named_placements_any_case() {
        assert_eq!(parse_mic_position("CEILING").unwrap(), MicPosition::Ceiling);
        assert_eq!(parse_mic_position(" custom ").unwrap(), MicPosition::Custom);
    }

    #[test]
    fn mic_position_typo_is_rejected_not_coerced() {
        let err = parse_mic_position("ceilin").unwrap_err();
        assert!(matches!(err, StudioError::Precondition(_)));
    }

    #[test]
    fn fields_keep_json_types() {
        let fields =
            parse_fields(&["width=1.2".to_string(), "label=night stand".to_string()]).unwrap();
        assert_eq!(fields["width"], serde_json::json!(1.2));
        assert_eq!(fields["label"], serde_json::json!("night stand"));
    }
}
