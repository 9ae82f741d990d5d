use clap::Subcommand;
use habitloop_core::{CoreError, Database};
use serde_json::json;

use crate::common;

#[derive(Subcommand)]
pub enum NotesAction {
    /// Print the saved notes
    Show,
    /// Replace the saved notes
    Set { text: String },
}

pub fn run(action: NotesAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let mut engine = common::load_engine(&db);

    match action {
        NotesAction::Show => {
            common::print_json(&json!({"notes": engine.notes()}))?;
        }
        NotesAction::Set { text } => {
            engine.set_notes(&text);
            common::save_engine(&db, &engine);
            common::print_json(&json!({"notes": engine.notes()}))?;
        }
    }
    Ok(())
}
