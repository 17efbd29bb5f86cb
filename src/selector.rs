use rand::{seq::SliceRandom, Rng};

use crate::{
    codec::AnsweredSet,
    error::{QuizError, Result},
    models::QuestionId,
};

/// Source of the random pick, swappable for a deterministic one in tests.
pub trait RandomSource {
    /// Returns one of `candidates`, or `None` when the slice is empty.
    fn pick_one(&mut self, candidates: &[QuestionId]) -> Option<QuestionId>;
}

/// Uniform pick backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_one(&mut self, candidates: &[QuestionId]) -> Option<QuestionId> {
        candidates.choose(&mut rand::thread_rng()).copied()
    }
}

/// Uniform pick backed by any [`Rng`], e.g. a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_one(&mut self, candidates: &[QuestionId]) -> Option<QuestionId> {
        candidates.choose(&mut self.0).copied()
    }
}

/// Picks a question from `bank` that has no answer yet.
pub fn pick_unanswered(
    bank: &[QuestionId],
    answered: &AnsweredSet,
    rng: &mut impl RandomSource,
) -> Result<QuestionId> {
    let candidates: Vec<QuestionId> = bank
        .iter()
        .copied()
        .filter(|id| !answered.contains_key(id))
        .collect();

    if candidates.is_empty() {
        return Err(QuizError::ExhaustedBank);
    }

    rng.pick_one(&candidates).ok_or(QuizError::ExhaustedBank)
}
