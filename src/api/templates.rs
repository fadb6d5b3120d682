//! HTML templates rendered with Handlebars. Double-stash expressions
//! are HTML escaped so the only way for markup to reach the page is
//! the `markdown` helper, which escapes any raw HTML in the source
//! text before rendering.

use std::fmt;

use anyhow::Result;
use handlebars::{Handlebars, handlebars_helper};

use crate::core::markdown::markdown_to_html;

// Render a chat message from Markdown, use with a triple-stash so
// the output isn't escaped a second time.
handlebars_helper!(markdown: |text: str| markdown_to_html(text));

#[derive(Debug)]
pub enum Template {
    ChatLog,
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const CHAT_LOG_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Chat with Maya</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <main class="chat">
    <h1>Maya</h1>
    <section class="chat-log">
      {{#each records}}
      <article class="exchange" id="record-{{id}}">
        <div class="message user">{{{markdown user_message}}}</div>
        <div class="message maya">{{{markdown maya_response}}}</div>
      </article>
      {{else}}
      <p class="empty">Hi there! I'm Maya. What's on your mind today?</p>
      {{/each}}
    </section>
    <form class="chat-form" method="post" action="/">
      <textarea name="message" rows="3" placeholder="Say something to Maya" required autofocus></textarea>
      <button type="submit">Send</button>
    </form>
  </main>
</body>
</html>
"#;

pub fn templates<'a>() -> Result<Handlebars<'a>> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_helper("markdown", Box::new(markdown));
    registry.register_template_string(&Template::ChatLog.to_string(), CHAT_LOG_TEMPLATE)?;
    Ok(registry)
}
