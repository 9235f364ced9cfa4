//! SWML document builder
//!
//! Builds the call-control document the platform fetches at call start: the
//! AI verb with Santa's prompt, voice, video/background media URLs derived
//! from the request host, speech hints, and the SWAIG function signatures.

use serde_json::{json, Value};

use santa_agent_config::Settings;
use santa_agent_tools::ToolSchema;

use crate::prompt;

/// ElevenLabs Santa voice
const SANTA_VOICE: &str = "elevenlabs.uDsPstFWFBUXjIBimV7s";

/// Derive the externally-visible base URL from the request headers.
///
/// Behind a proxy the scheme comes from x-forwarded-proto; local development
/// is always plain http regardless of what the proxy claims.
pub fn base_url(host: &str, forwarded_proto: Option<&str>) -> String {
    let proto = if host.contains("localhost") || host.contains("127.0.0.1") {
        "http"
    } else {
        forwarded_proto.unwrap_or("https")
    };
    format!("{}://{}", proto, host)
}

/// Build the SWML document for one incoming call.
pub fn build_document(base_url: &str, settings: &Settings, tools: &[ToolSchema]) -> Value {
    let functions: Vec<Value> = tools
        .iter()
        .map(|tool| {
            json!({
                "function": tool.name,
                "description": tool.description,
                "parameters": tool.input_schema,
            })
        })
        .collect();

    let mut ai = json!({
        "prompt": {
            "text": prompt::build_prompt_text(),
        },
        "params": {
            "video_idle_file": format!("{}/santa_idle.mp4", base_url),
            "video_talking_file": format!("{}/santa_talking.mp4", base_url),
            "background_file": format!("{}/background.mp3", base_url),
            "background_file_volume": -10,
        },
        "languages": [{
            "name": "English",
            "code": "en-US",
            "voice": SANTA_VOICE,
        }],
        "hints": prompt::SPEECH_HINTS,
        "SWAIG": {
            "defaults": {
                "web_hook_url": format!("{}/swml/swaig", base_url),
            },
            "functions": functions,
        },
    });

    if let Some(url) = &settings.agent.post_prompt_url {
        ai["post_prompt"] = json!({ "text": prompt::POST_PROMPT });
        ai["post_prompt_url"] = json!(url);
    }

    json!({
        "version": "1.0.0",
        "sections": {
            "main": [
                { "answer": {} },
                { "record_call": { "format": "wav", "stereo": true } },
                { "ai": ai },
            ],
        },
    })
}
