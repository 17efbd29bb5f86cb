use std::fmt;

/// Identifier of a question directory inside the question bank.
pub type QuestionId = u32;

/// A question as read from the content repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub hint: String,
    pub explanation: String,
    /// The official answer, encoded as an answer token.
    pub solution: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerChoice {
    UndefinedBehavior,
    DoesNotCompile,
    OutputsValue,
}

impl AnswerChoice {
    pub const ALL: [AnswerChoice; 3] = [
        AnswerChoice::UndefinedBehavior,
        AnswerChoice::DoesNotCompile,
        AnswerChoice::OutputsValue,
    ];

    pub fn index(self) -> u8 {
        match self {
            AnswerChoice::UndefinedBehavior => 0,
            AnswerChoice::DoesNotCompile => 1,
            AnswerChoice::OutputsValue => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(AnswerChoice::UndefinedBehavior),
            1 => Some(AnswerChoice::DoesNotCompile),
            2 => Some(AnswerChoice::OutputsValue),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnswerChoice::UndefinedBehavior => "The program exhibits undefined behavior",
            AnswerChoice::DoesNotCompile => "The program does not compile",
            AnswerChoice::OutputsValue => "The program is guaranteed to output:",
        }
    }

    /// Only "outputs" answers carry the predicted output as free text.
    pub fn takes_payload(self) -> bool {
        self == AnswerChoice::OutputsValue
    }
}

impl fmt::Display for AnswerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A decoded answer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub choice: AnswerChoice,
    pub payload: Option<String>,
}

impl Answer {
    pub fn new(choice: AnswerChoice, payload: Option<String>) -> Self {
        Self { choice, payload }
    }

    /// Human readable form, also used to decide whether two answers agree.
    ///
    /// Payloads are only shown for [`AnswerChoice::OutputsValue`]; an empty
    /// payload renders as the bare label.
    pub fn display_text(&self) -> String {
        match (&self.payload, self.choice.takes_payload()) {
            (Some(payload), true) if !payload.is_empty() => {
                format!("{} {payload}", self.choice.label())
            }
            _ => self.choice.label().to_owned(),
        }
    }

    /// Answers agree when their display texts are equal, so payloads under
    /// choices other than "outputs" never affect the score.
    pub fn matches(&self, other: &Answer) -> bool {
        self.display_text() == other.display_text()
    }
}
