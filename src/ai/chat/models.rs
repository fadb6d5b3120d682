//! The running conversation that gets sent to the LLM on every turn.
use crate::gemini::{Content, Role};

pub const GREETING: &str = "Hi there! I'm Maya. What's on your mind today?";

// Gemini has no system role so the persona is sent as the first user
// message followed by the greeting from the model.
const SEED_LEN: usize = 2;

#[derive(Clone, Debug)]
pub struct Transcript(Vec<Content>);

impl Transcript {
    /// A fresh transcript containing the persona instructions and
    /// the greeting.
    pub fn seeded(system_message: &str) -> Self {
        Self(vec![
            Content::new(Role::User, system_message),
            Content::new(Role::Model, GREETING),
        ])
    }

    pub fn messages(&self) -> &[Content] {
        &self.0
    }

    pub fn push(&mut self, msg: Content) {
        self.0.push(msg)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Remove the most recent user/model exchange. Never touches the
    /// seed messages. Returns `None` if the transcript doesn't end
    /// with a complete exchange.
    pub fn pop_exchange(&mut self) -> Option<(Content, Content)> {
        let n = self.0.len();
        if n < SEED_LEN + 2 {
            return None;
        }
        if self.0[n - 2].role != Role::User || self.0[n - 1].role != Role::Model {
            return None;
        }
        let model_msg = self.0.pop()?;
        let user_msg = self.0.pop()?;
        Some((user_msg, model_msg))
    }
}
