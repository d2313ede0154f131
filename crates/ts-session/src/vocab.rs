use std::collections::HashMap;

use crate::error::{Result, SessionError};

/// Fixed vocabulary paired with the base scores that stand in for a model's
/// raw per-token output.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    /// Token strings, in insertion order.
    tokens: Vec<String>,
    /// Base scores (log-probabilities), indexed like `tokens`.
    scores: Vec<f64>,
    /// Reverse mapping from token string to index.
    token_to_id: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from parallel token and score lists.
    ///
    /// Tokens must be non-empty, distinct, and match `scores` in length.
    pub fn new(tokens: Vec<String>, scores: Vec<f64>) -> Result<Vocabulary> {
        if tokens.is_empty() {
            return Err(SessionError::InvalidVocabulary(
                "vocabulary must contain at least one token".to_string(),
            ));
        }
        if tokens.len() != scores.len() {
            return Err(SessionError::InvalidVocabulary(format!(
                "tokens length ({}) does not match scores length ({})",
                tokens.len(),
                scores.len()
            )));
        }

        let mut token_to_id = HashMap::with_capacity(tokens.len());
        for (id, tok) in tokens.iter().enumerate() {
            if token_to_id.insert(tok.clone(), id).is_some() {
                return Err(SessionError::InvalidVocabulary(format!(
                    "duplicate token '{tok}'"
                )));
            }
        }

        Ok(Vocabulary {
            tokens,
            scores,
            token_to_id,
        })
    }

    /// Build a vocabulary from `(token, score)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Vocabulary>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let (tokens, scores) = pairs.into_iter().map(|(t, s)| (t.into(), s)).unzip();
        Vocabulary::new(tokens, scores)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Base score of `token`, if present.
    pub fn score_of(&self, token: &str) -> Option<f64> {
        self.token_to_id.get(token).map(|&id| self.scores[id])
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.token_to_id.get(token).copied()
    }

    /// Number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a constructed vocabulary.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
