//! Screen-break idea prompts.
//!
//! A static lookup table of short activity suggestions the UI offers as an
//! alternative to screen time. Pure content; nothing here scores points.

use rand::Rng;

/// Fixed idea catalog.
pub const IDEAS: [&str; 10] = [
    "Take 100 steps around the room or hallway.",
    "Breathe with the 4-7-8 method, three rounds.",
    "Spend 5 minutes on stretching exercises.",
    "Drink a glass of water and do 20 squats.",
    "Read 5 pages of a book.",
    "Dribble or pass a ball for 2 minutes.",
    "Take 60 mindful breaths in and out.",
    "Do 10 push-ups (against a wall counts).",
    "Tidy your workspace for 2 minutes.",
    "Write down 3 things you are grateful for today.",
];

/// A uniformly random idea from the catalog.
pub fn random_idea() -> &'static str {
    let idx = rand::thread_rng().gen_range(0..IDEAS.len());
    IDEAS[idx]
}
