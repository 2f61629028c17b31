use crate::error::BankError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[strum(serialize = "economic")]
    Economic,
    #[strum(serialize = "social")]
    Social,
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub text: String,
    #[serde(alias = "dimension")]
    pub axis: Axis,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

impl Question {
    pub fn new(axis: Axis) -> Self {
        Self {
            text: String::new(),
            axis,
            weight: default_weight(),
            reverse: false,
            category: None,
            context: None,
        }
    }

    pub fn weighted(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_ron_str(&content)
        }
    }

    pub fn from_ron_str(content: &str) -> Result<Self, BankError> {
        let bank: Self = ron::from_str(content)?;
        bank.validated()
    }

    pub fn from_json_str(content: &str) -> Result<Self, BankError> {
        let bank: Self = serde_json::from_str(content)?;
        bank.validated()
    }

    fn validated(self) -> Result<Self, BankError> {
        if self.questions.is_empty() {
            return Err(BankError::Empty);
        }
        for (index, question) in self.questions.iter().enumerate() {
            if !question.weight.is_finite() || question.weight <= 0.0 {
                return Err(BankError::InvalidWeight {
                    index,
                    weight: question.weight,
                });
            }
        }
        Ok(self)
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl FromIterator<Question> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
