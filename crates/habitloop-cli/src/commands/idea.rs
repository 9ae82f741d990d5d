use habitloop_core::{prompts, CoreError};
use serde_json::json;

pub fn run() -> Result<(), CoreError> {
    println!("{}", json!({"idea": prompts::random_idea()}));
    Ok(())
}
