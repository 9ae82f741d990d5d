use habitloop_core::{CoreError, Database};

use crate::common;

pub fn run(points: u32, reason: &str) -> Result<(), CoreError> {
    let db = Database::open()?;
    let mut engine = common::load_engine(&db);
    let event = engine.award(points, reason);
    common::save_engine(&db, &engine);
    common::print_json(&event)
}
