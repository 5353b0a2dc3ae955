// src/session.rs: who is signed in (if anyone)
use serde::Deserialize;
use web_sys::window;

/// Id given to profiles created without a signed-in user.
pub const GUEST_FOUNDER_ID: &str = "demo-founder";

pub const SESSION_SCRIPT_ID: &str = "portal-session";

pub trait SessionSource {
    fn current_user_id(&self) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct SessionUser {
    #[serde(default)]
    uid: Option<String>,
}

/// Reads `<script id="portal-session" type="application/json">{"uid": ...}</script>`
/// written into the page by the host's auth layer.
pub struct EmbeddedSession;

impl SessionSource for EmbeddedSession {
    fn current_user_id(&self) -> Option<String> {
        read_embedded_json(SESSION_SCRIPT_ID).and_then(|raw| parse_user_id(&raw))
    }
}

fn read_embedded_json(script_id: &str) -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(script_id)?;
    el.text_content()
}

fn parse_user_id(raw: &str) -> Option<String> {
    let user = serde_json::from_str::<SessionUser>(raw).ok()?;
    let uid = user.uid?.trim().to_string();
    (!uid.is_empty()).then_some(uid)
}
