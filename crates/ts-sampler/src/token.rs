/// A vocabulary token paired with its probability.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredToken {
    pub token: String,
    pub probability: f64,
}

impl ScoredToken {
    pub fn new(token: impl Into<String>, probability: f64) -> Self {
        Self {
            token: token.into(),
            probability,
        }
    }
}

/// Probability distribution over a whole vocabulary, in vocabulary order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distribution {
    entries: Vec<ScoredToken>,
}

impl Distribution {
    /// Wrap already-normalized entries. No normalization is performed here;
    /// use [`crate::softmax::DistributionBuilder`] to build one from scores.
    pub fn from_entries(entries: Vec<ScoredToken>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScoredToken] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredToken> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Probability of `token`, or `None` if it is not in the vocabulary.
    pub fn probability_of(&self, token: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.token == token)
            .map(|e| e.probability)
    }

    /// Sum of all probabilities. Close to 1.0 for a built distribution.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.probability).sum()
    }

    /// Entries sorted by descending probability. Ties keep vocabulary order.
    pub fn sorted_descending(&self) -> Vec<ScoredToken> {
        let mut sorted = self.entries.clone();
        sort_descending(&mut sorted);
        sorted
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a ScoredToken;
    type IntoIter = std::slice::Iter<'a, ScoredToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Split of a distribution into the tokens eligible for sampling and the rest.
/// Both halves are in descending-probability order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Partition {
    pub candidates: Vec<ScoredToken>,
    pub eliminated: Vec<ScoredToken>,
}

impl Partition {
    /// Total probability retained by the candidates.
    pub fn candidate_mass(&self) -> f64 {
        self.candidates.iter().map(|c| c.probability).sum()
    }

    pub fn is_candidate(&self, token: &str) -> bool {
        self.candidates.iter().any(|c| c.token == token)
    }

    pub fn is_eliminated(&self, token: &str) -> bool {
        self.eliminated.iter().any(|e| e.token == token)
    }
}

/// Stable sort, descending by probability.
pub(crate) fn sort_descending(tokens: &mut [ScoredToken]) {
    tokens.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
