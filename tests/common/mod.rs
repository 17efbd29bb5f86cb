#![allow(dead_code)]

use std::{fs, path::Path};

use crabby_quiz::{config::QuizConfig, models::QuestionId, names, store::QuizStore};
use tempfile::TempDir;

pub const BANK: &[QuestionId] = &[1, 2, 3, 4, 6, 8, 9];
pub const QUIZ_LEN: usize = 5;

pub struct Fixture {
    // Keeps the directory alive for the duration of the test.
    pub dir: TempDir,
    pub config: QuizConfig,
}

impl Fixture {
    pub fn store(&self) -> QuizStore {
        QuizStore::new(&self.config)
    }

    pub fn question_dir(&self, id: QuestionId) -> std::path::PathBuf {
        self.dir.path().join(id.to_string())
    }
}

/// Official answer of fixture question `id`.
pub fn solution_for(id: QuestionId) -> String {
    match id % 3 {
        0 => "0".to_string(),
        1 => "1".to_string(),
        _ => format!("2:out{id}"),
    }
}

pub fn write_question(root: &Path, id: QuestionId, prompt: &str, solution: &str) {
    let dir = root.join(id.to_string());
    fs::create_dir_all(&dir).expect("create question dir");
    fs::write(dir.join(names::PROMPT_FILENAME), prompt).expect("write prompt");
    fs::write(dir.join(names::HINT_FILENAME), format!("Hint for **{id}**")).expect("write hint");
    fs::write(
        dir.join(names::EXPLANATION_FILENAME),
        format!("Explanation of *question {id}*."),
    )
    .expect("write explanation");
    fs::write(dir.join(names::SOLUTION_FILENAME), format!("{solution}\n")).expect("write solution");
}

pub fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    for &id in BANK {
        write_question(
            dir.path(),
            id,
            &format!("fn main() {{\n    println!(\"{id}\");\n}}\n"),
            &solution_for(id),
        );
    }

    let config = QuizConfig::new(dir.path(), BANK.iter().copied(), QUIZ_LEN)
        .expect("valid fixture config");

    Fixture { dir, config }
}
