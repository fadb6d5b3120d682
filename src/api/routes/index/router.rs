//! Router for the chat page. `GET /` shows the whole chat log and
//! `POST /` sends a message to Maya then redirects back.

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    response::{Html, Redirect},
    routing::get,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use super::public::{self, SESSION_COOKIE};
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::api::templates::Template;
use crate::chat::{TurnOutcome, find_all_chat_records, run_turn};

/// Read the session ID from the cookie jar, starting a new session
/// if the browser doesn't have one yet or sent something that isn't
/// a session ID we issued.
fn session_id(jar: CookieJar) -> (CookieJar, String) {
    if let Some(id) = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
    {
        return (jar, id.to_string());
    }

    let id = Uuid::new_v4().to_string();
    let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), id)
}

/// Render every saved exchange
async fn chat_log(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), ApiError> {
    let (jar, _) = session_id(jar);
    let db = state.read().expect("Unable to read share state").db.clone();
    let records = find_all_chat_records(&db).await?;

    let page = {
        let shared_state = state.read().expect("Unable to read share state");
        shared_state.templates.render(
            &Template::ChatLog.to_string(),
            &public::ChatLogContext { records },
        )?
    };

    Ok((jar, Html(page)))
}

/// Send the submitted message to Maya and save the exchange. Errors
/// are logged and never shown to the user, the browser is always
/// redirected back to the chat log so a refresh doesn't resubmit.
async fn send_message(
    State(state): State<SharedState>,
    jar: CookieJar,
    form: Result<Form<public::ChatForm>, FormRejection>,
) -> (CookieJar, Redirect) {
    let (jar, session_id) = session_id(jar);

    let message = match form {
        Ok(Form(form)) => form.message.unwrap_or_default(),
        Err(rejection) => {
            tracing::warn!("Invalid chat form: {}", rejection);
            String::new()
        }
    };

    // Nothing to send so don't start a conversation for it
    if message.trim().is_empty() {
        tracing::debug!("Ignoring empty message for session {}", session_id);
        return (jar, Redirect::to("/"));
    }

    let (db, assistant, sessions) = {
        let shared_state = state.read().expect("Unable to read share state");
        (
            shared_state.db.clone(),
            shared_state.assistant.clone(),
            shared_state.sessions.clone(),
        )
    };

    let transcript = sessions.get_or_create(&session_id);
    let mut transcript = transcript.lock().await;

    match run_turn(&assistant, &mut transcript, &db, &message).await {
        TurnOutcome::Skipped => {
            tracing::debug!("Ignoring empty message for session {}", session_id);
        }
        TurnOutcome::Saved(record) => {
            tracing::info!("Saved chat record {} for session {}", record.id, session_id);
        }
        TurnOutcome::AssistantFailed(e) => {
            tracing::error!("Assistant error: {}. Root cause: {}", e, e.root_cause());
        }
        TurnOutcome::StorageFailed(e) => {
            tracing::error!("Failed to save chat record: {}. Root cause: {}", e, e.root_cause());
        }
    }

    (jar, Redirect::to("/"))
}

/// Create the chat page router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(chat_log).post(send_message))
}
