use super::axes::{normalize, AxisScores};
use super::likert::LikertLevel;
use super::tally::FocusTallies;
use crate::questions::{Axis, Question, QuestionBank};
use std::collections::BTreeMap;

pub type AnswerSheet = BTreeMap<usize, u8>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub economic_raw: f64,
    pub social_raw: f64,
    pub total_weight: f64,
    pub tallies: FocusTallies,
}

impl Aggregation {
    pub fn scores(&self) -> AxisScores {
        AxisScores::new(
            normalize(self.economic_raw, self.total_weight),
            normalize(self.social_raw, self.total_weight),
        )
    }
}

pub fn answered<'a>(
    answers: &'a AnswerSheet,
    bank: &'a QuestionBank,
) -> impl Iterator<Item = (&'a Question, LikertLevel)> + 'a {
    answers.iter().filter_map(|(&index, &level)| {
        let question = bank.get(index)?;
        let level = LikertLevel::from_index(level)?;
        Some((question, level))
    })
}

pub fn contribution(question: &Question, level: LikertLevel) -> f64 {
    let adjusted = level.offset() * question.weight;
    if question.reverse {
        -adjusted
    } else {
        adjusted
    }
}

pub fn tally_answers(answers: &AnswerSheet, bank: &QuestionBank) -> FocusTallies {
    answered(answers, bank)
        .filter_map(|(question, level)| {
            question
                .category()
                .map(|category| FocusTallies::for_answer(category, level))
        })
        .fold(FocusTallies::new(), FocusTallies::merge)
}

pub fn aggregate(
    answers: &AnswerSheet,
    bank: &QuestionBank,
    precomputed: Option<FocusTallies>,
) -> Aggregation {
    let (economic_raw, social_raw, total_weight) = answered(answers, bank).fold(
        (0.0, 0.0, 0.0),
        |(economic, social, weight), (question, level)| {
            let delta = contribution(question, level);
            match question.axis {
                Axis::Economic => (economic + delta, social, weight + question.weight),
                Axis::Social => (economic, social + delta, weight + question.weight),
            }
        },
    );

    let tallies = precomputed.unwrap_or_else(|| tally_answers(answers, bank));

    Aggregation {
        economic_raw,
        social_raw,
        total_weight,
        tallies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tally::{CategoryTally, Focus};

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![
            Question::new(Axis::Economic),
            Question::new(Axis::Economic).weighted(2.0).reversed(),
            Question::new(Axis::Social).in_category("crypto_anarchist"),
            Question::new(Axis::Social).reversed().in_category("falgsc"),
        ])
    }

    fn sheet(entries: &[(usize, u8)]) -> AnswerSheet {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_weighted_reverse_contribution() {
        let result = aggregate(&sheet(&[(0, 4), (1, 4)]), &bank(), None);
        assert_eq!(result.economic_raw, -2.0);
        assert_eq!(result.social_raw, 0.0);
        assert_eq!(result.total_weight, 3.0);
    }

    #[test]
    fn test_axes_accumulate_separately() {
        let result = aggregate(&sheet(&[(0, 0), (2, 3), (3, 1)]), &bank(), None);
        assert_eq!(result.economic_raw, -2.0);
        assert_eq!(result.social_raw, 2.0);
        assert_eq!(result.total_weight, 3.0);
    }

    #[test]
    fn test_unanswered_and_unknown_indices_ignored() {
        let result = aggregate(&sheet(&[(0, 3), (42, 4)]), &bank(), None);
        assert_eq!(result.economic_raw, 1.0);
        assert_eq!(result.total_weight, 1.0);
    }

    #[test]
    fn test_invalid_level_treated_as_unanswered() {
        let result = aggregate(&sheet(&[(0, 7)]), &bank(), None);
        assert_eq!(result.total_weight, 0.0);
        assert_eq!(result.scores(), AxisScores::default());
    }

    #[test]
    fn test_empty_sheet_scores_zero() {
        let result = aggregate(&AnswerSheet::new(), &bank(), None);
        assert_eq!(result.scores(), AxisScores::new(0.0, 0.0));
        assert!(result.tallies.is_empty());
    }

    #[test]
    fn test_tallies_recomputed_from_categories() {
        let result = aggregate(&sheet(&[(2, 4), (3, 3), (0, 4)]), &bank(), None);
        let anarchist = result.tallies.get(Focus::Anarchist).copied().unwrap_or_default();
        assert_eq!(anarchist.strongly_agree, 1);
        assert_eq!(anarchist.total(), 1);
        assert_eq!(result.tallies.get(Focus::CryptoAnarchist).map(|t| t.total()), Some(1));
        assert_eq!(result.tallies.get(Focus::Falgsc).map(|t| t.agree), Some(1));
        assert_eq!(result.tallies.len(), 3);
    }

    #[test]
    fn test_reverse_does_not_flip_tally_level() {
        let tallies = tally_answers(&sheet(&[(3, 4)]), &bank());
        assert_eq!(
            tallies.get(Focus::Falgsc).map(|t| t.strongly_agree),
            Some(1)
        );
    }

    #[test]
    fn test_precomputed_tallies_used_as_is() {
        let supplied =
            FocusTallies::new().with_tally(Focus::AltRight, CategoryTally::single(LikertLevel::Agree));
        let result = aggregate(&sheet(&[(2, 4)]), &bank(), Some(supplied.clone()));
        assert_eq!(result.tallies, supplied);
        assert_eq!(result.social_raw, 2.0);
    }

    #[test]
    fn test_normalized_scores() {
        let single_bank = QuestionBank::new(vec![Question::new(Axis::Economic)]);
        let single = aggregate(&sheet(&[(0, 4)]), &single_bank, None);
        assert_eq!(single.scores().economic, 10.0);

        let result = aggregate(&sheet(&[(0, 3), (2, 4), (3, 2)]), &bank(), None);
        assert_eq!(result.total_weight, 3.0);
        assert!((result.scores().economic - 1.0 / 3.0 * 5.0).abs() < 1e-9);
        assert!((result.scores().social - 2.0 / 3.0 * 5.0).abs() < 1e-9);
    }
}
