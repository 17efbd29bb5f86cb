use maud::{html, Markup};

use crate::{models::QuestionId, names};

pub struct ResultRow {
    pub question_id: QuestionId,
    pub prompt: String,
    pub given: String,
    pub expected: String,
    pub explanation: Markup,
    pub is_correct: bool,
}

pub struct ResultsData {
    pub rows: Vec<ResultRow>,
    pub correct: usize,
    pub quiz_len: usize,
}

pub fn results(data: &ResultsData) -> Markup {
    html! {
        div.summary {
            h1 { "Results are in \u{2728}\u{1F980}" }
            h2 { "You got " (data.correct) "/" (data.quiz_len) " questions correct." }
        }

        table.results {
            thead {
                tr {
                    th { "Question" }
                    th { "Your answer" }
                    th { "Correct answer" }
                    th { "Explanation" }
                }
            }
            tbody {
                @for row in &data.rows {
                    @let class = if row.is_correct { "option-correct" } else { "option-incorrect" };
                    tr class=(class) data-question=(row.question_id) {
                        td { pre { code.language-rust { (row.prompt) } } }
                        td {
                            (row.given)
                            @if row.is_correct {
                                span.badge-correct { "Correct" }
                            } @else {
                                span.badge-incorrect { "Incorrect" }
                            }
                        }
                        td { (row.expected) }
                        td { (row.explanation) }
                    }
                }
            }
        }

        footer {
            a href=(names::QUIZ_URL) { "Reset Quiz" }
        }
    }
}
