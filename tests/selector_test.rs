mod common;

use std::collections::BTreeSet;

use crabby_quiz::{
    codec::AnsweredSet,
    error::QuizError,
    models::QuestionId,
    selector::{pick_unanswered, RandomSource, RngSource, ThreadRandom},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

use common::BANK;

/// Records the candidates it was offered and picks the last one.
#[derive(Default)]
struct Recording {
    offered: Vec<Vec<QuestionId>>,
}

impl RandomSource for Recording {
    fn pick_one(&mut self, candidates: &[QuestionId]) -> Option<QuestionId> {
        self.offered.push(candidates.to_vec());
        candidates.last().copied()
    }
}

fn answered(ids: &[QuestionId]) -> AnsweredSet {
    ids.iter().map(|&id| (id, "0".to_string())).collect()
}

#[test]
fn test_single_remaining_question_is_picked() {
    for &missing in BANK {
        let others: Vec<QuestionId> = BANK.iter().copied().filter(|&id| id != missing).collect();
        let answered = answered(&others);

        assert_eq!(
            pick_unanswered(BANK, &answered, &mut ThreadRandom).unwrap(),
            missing
        );
    }
}

#[test]
fn test_never_picks_answered_question() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut source = RngSource(StdRng::seed_from_u64(42));

    for _ in 0..500 {
        let subset: Vec<QuestionId> = BANK
            .iter()
            .copied()
            .filter(|_| rng.gen_bool(0.5))
            .take(BANK.len() - 1)
            .collect();
        let answered = answered(&subset);

        let id = pick_unanswered(BANK, &answered, &mut source).unwrap();
        assert!(BANK.contains(&id));
        assert!(!answered.contains_key(&id), "picked answered question {id}");
    }
}

#[test]
fn test_candidates_exclude_answered() {
    let mut source = Recording::default();
    let id = pick_unanswered(BANK, &answered(&[1, 9, 4]), &mut source).unwrap();

    assert_eq!(source.offered, vec![vec![2, 3, 6, 8]]);
    assert_eq!(id, 8);
}

#[test]
fn test_exhausted_bank_is_an_error() {
    let mut source = Recording::default();
    let err = pick_unanswered(BANK, &answered(BANK), &mut source).unwrap_err();

    assert!(matches!(err, QuizError::ExhaustedBank));
    assert!(source.offered.is_empty());
}

#[test]
fn test_every_question_gets_picked_eventually() {
    let mut source = RngSource(StdRng::seed_from_u64(1));
    let mut seen = BTreeSet::new();

    for _ in 0..1000 {
        let id = pick_unanswered(BANK, &AnsweredSet::new(), &mut source).unwrap();
        seen.insert(id);
    }

    assert_eq!(seen.len(), BANK.len());
}
