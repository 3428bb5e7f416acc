mod loader;

pub use loader::{
    LoadError, STDIN_PATH, export_questions_json, load_questions_from_json, load_quiz_text,
    read_text,
};
