use crate::error::SubmissionError;
use crate::questions::QuestionBank;
use crate::scoring::{aggregate, AnswerSheet, AxisScores, Classification, FocusTallies, LikertLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default, alias = "economicScore", skip_serializing_if = "Option::is_none")]
    pub economic: Option<f64>,
    #[serde(default, alias = "socialScore", skip_serializing_if = "Option::is_none")]
    pub social: Option<f64>,
    #[serde(default)]
    pub answers: AnswerSheet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_tallies: Option<FocusTallies>,
}

impl Submission {
    pub fn new(answers: AnswerSheet) -> Self {
        Self {
            answers,
            ..Default::default()
        }
    }

    pub fn from_answers(answers: AnswerSheet, bank: &QuestionBank) -> Self {
        let aggregation = aggregate(&answers, bank, None);
        let scores = aggregation.scores();
        Self {
            economic: Some(scores.economic),
            social: Some(scores.social),
            answers,
            timestamp: Some(Utc::now()),
            category_tallies: Some(aggregation.tallies),
        }
    }

    pub fn validate(&self) -> Result<(), SubmissionError> {
        match self
            .answers
            .iter()
            .find(|(_, level)| LikertLevel::from_index(**level).is_none())
        {
            Some((&index, &level)) => Err(SubmissionError::LevelOutOfRange { index, level }),
            None => Ok(()),
        }
    }

    pub fn unmatched_answers(&self, bank: &QuestionBank) -> Vec<usize> {
        self.answers
            .keys()
            .copied()
            .filter(|&index| bank.get(index).is_none())
            .collect()
    }

    pub fn classify(&self, bank: &QuestionBank) -> Classification {
        let aggregation = aggregate(&self.answers, bank, self.category_tallies.clone());
        let derived = aggregation.scores();
        let scores = AxisScores::new(
            self.economic.unwrap_or(derived.economic),
            self.social.unwrap_or(derived.social),
        );
        Classification::new(scores, aggregation.tallies)
    }
}
