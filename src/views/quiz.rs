use maud::{html, Markup};

use crate::{
    markdown::render_markdown,
    models::{AnswerChoice, Question, QuestionId},
    names,
};

pub struct QuizData {
    pub question_id: QuestionId,
    pub question: Question,
    pub remaining: usize,
}

fn choice_id(choice: AnswerChoice) -> String {
    format!("choice-{}", choice.index())
}

/// One unanswered question with the three fixed choices.
///
/// `static/quiz.js` reads `data-question` and appends
/// `<question>=<choice>[:<payload>]` to the query string on submit.
pub fn quiz(data: &QuizData) -> Markup {
    let key = data.question_id.to_string();

    html! {
        h1.prompt-title { "What is the output of this Rust program?" }
        div.quiz {
            div.prompt {
                // maud escapes the program text, which routinely contains `<`, `>` and `&`.
                pre { code.language-rust { (data.question.prompt) } }
            }
            div.answers id="answers" data-question=(key) {
                fieldset {
                    @for choice in AnswerChoice::ALL {
                        div {
                            input type="radio" name=(key) id=(choice_id(choice)) value=(choice.index());
                            label for=(choice_id(choice)) { (choice) }
                            @if choice.takes_payload() {
                                " "
                                input type="text" id="userinput" autocomplete="off" disabled;
                            }
                        }
                    }
                }
                div.actions {
                    button type="button" id="submit" { "Submit" }
                    button type="button" id="skip" { "Skip" }
                    button type="button" id="show-hint" class="secondary" { "Hint" }
                }
                div.hint id="hint" hidden {
                    (render_markdown(&data.question.hint))
                }
            }
        }
        footer {
            div { (data.remaining) " questions remaining" }
        }
        script src=(format!("{}/quiz.js", names::STATIC_URL)) defer {}
    }
}
