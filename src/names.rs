pub const QUIZ_URL: &str = "/";
pub const STATIC_URL: &str = "/static";

pub const PROMPT_FILENAME: &str = "question.rs";
pub const HINT_FILENAME: &str = "hint.md";
pub const EXPLANATION_FILENAME: &str = "explanation.md";
pub const SOLUTION_FILENAME: &str = "solution.txt";

// Quiz defaults
pub const DEFAULT_QUESTIONS_DIR: &str = "questions";
pub const DEFAULT_QUIZ_LEN: usize = 5;
pub const DEFAULT_BANK: &[u32] = &[1, 2, 3, 4, 6, 8, 9];

pub fn stylesheet_url() -> String {
    format!("{STATIC_URL}/common.css")
}
