use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::models::GREETING;
use crate::ai::chat::{Assistant, Transcript};
use crate::core::AppConfig;

/// Interactive chat in the terminal. Nothing is saved, the
/// conversation only lasts as long as the process.
pub async fn run(config: AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let assistant = Assistant::from_config(&config);
    let mut transcript = Transcript::seeded(&config.system_message);

    println!("{}", GREETING);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                match assistant.converse(&mut transcript, &line).await {
                    Ok(reply) => println!("{}", reply),
                    Err(err) => eprintln!("Error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
