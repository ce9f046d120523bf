use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single questionnaire answer. The mobile client submits free-form
/// strings for single-choice questions and lists for multi-select ones;
/// anything else is carried through untouched for storage but never
/// matched against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Multi(Vec<String>),
    Other(serde_json::Value),
}

/// Answer set keyed by question name. Lookups return an explicit absent
/// sentinel: a missing key, a list-valued answer, or a non-string value
/// all read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionnaireAnswers(HashMap<String, AnswerValue>);

impl QuestionnaireAnswers {
    /// Extracts the `answers` object from a raw questionnaire submission.
    /// A submission without one yields an empty answer set.
    pub fn from_submission(questionnaire: &serde_json::Value) -> Self {
        questionnaire
            .get("answers")
            .and_then(|answers| serde_json::from_value(answers.clone()).ok())
            .unwrap_or_default()
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(AnswerValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), AnswerValue::Text(value.into()));
    }
}
