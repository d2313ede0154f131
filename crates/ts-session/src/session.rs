use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use ts_sampler::{
    CandidateSampler, Distribution, DistributionBuilder, NucleusFilter, Partition, ScoreScaler,
};

use crate::error::Result;
use crate::render::{self, Bar};
use crate::vocab::Vocabulary;

/// Lifecycle of a session. Parameter changes only trigger recomputation once
/// the first token has been generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active,
}

/// Result of one recompute, handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub temperature: f64,
    pub top_p: f64,
    pub distribution: Distribution,
    pub partition: Partition,
    /// Token drawn by this recompute, if selection was requested.
    pub selected: Option<String>,
    /// Accumulated text after this recompute.
    pub prompt_text: String,
}

impl Snapshot {
    /// Total probability retained by the candidates.
    pub fn candidate_mass(&self) -> f64 {
        self.partition.candidate_mass()
    }

    /// Bars for the probability chart, tallest first.
    pub fn bars(&self) -> Vec<Bar> {
        render::bars(&self.distribution, &self.partition, self.selected.as_deref())
    }

    /// One-line status summary.
    pub fn status(&self) -> String {
        let mass = self.candidate_mass() * 100.0;
        match &self.selected {
            Some(tok) => format!("selected '{tok}'. candidate mass {mass:.1}%"),
            None => format!("distribution updated. candidate mass {mass:.1}%"),
        }
    }
}

/// Owns the mutable simulation state: parameters, generated text, the most
/// recent distribution and partition, and the random source used for
/// selection.
pub struct SimulationSession<R = StdRng> {
    vocab: Vocabulary,
    temperature: f64,
    top_p: f64,
    prompt_text: String,
    distribution: Distribution,
    partition: Partition,
    last_selected: Option<String>,
    phase: Phase,
    rng: R,
}

impl SimulationSession<StdRng> {
    /// Create a session seeded from OS entropy.
    pub fn new(vocab: Vocabulary, prompt: impl Into<String>) -> Self {
        Self::with_rng(vocab, prompt, StdRng::from_entropy())
    }

    /// Create a session with a reproducible random stream.
    pub fn with_seed(vocab: Vocabulary, prompt: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(vocab, prompt, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulationSession<R> {
    /// Create a session that draws from `rng`. Temperature and top-p start at 1.0.
    pub fn with_rng(vocab: Vocabulary, prompt: impl Into<String>, rng: R) -> Self {
        Self {
            vocab,
            temperature: 1.0,
            top_p: 1.0,
            prompt_text: prompt.into(),
            distribution: Distribution::default(),
            partition: Partition::default(),
            last_selected: None,
            phase: Phase::Idle,
            rng,
        }
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    pub fn set_top_p(&mut self, top_p: f64) {
        self.top_p = top_p;
    }

    /// Run scale -> softmax -> nucleus filter, and when `emit_selection` is
    /// set, draw a token and append it to the prompt text.
    ///
    /// State is only updated once every stage has succeeded.
    pub fn recompute(&mut self, emit_selection: bool) -> Result<Snapshot> {
        let scaled = ScoreScaler::new(self.temperature).scale(self.vocab.scores());
        let distribution = DistributionBuilder::new().build(&scaled, self.vocab.tokens())?;
        let partition = NucleusFilter::new(self.top_p).filter(&distribution)?;

        debug!(
            temperature = self.temperature,
            top_p = self.top_p,
            candidates = partition.candidates.len(),
            eliminated = partition.eliminated.len(),
            candidate_mass = partition.candidate_mass(),
            "recomputed distribution"
        );

        let selected = if emit_selection {
            let token = CandidateSampler::new()
                .sample(&partition.candidates, &mut self.rng)?
                .token
                .clone();
            info!(token = %token, "selected token");
            self.prompt_text.push(' ');
            self.prompt_text.push_str(&token);
            self.last_selected = Some(token.clone());
            self.phase = Phase::Active;
            Some(token)
        } else {
            None
        };

        self.distribution = distribution;
        self.partition = partition;

        Ok(self.snapshot(selected))
    }

    /// Generate the next token.
    pub fn generate(&mut self) -> Result<Snapshot> {
        self.recompute(true)
    }

    /// Store new parameters and, if the session is active, recompute without
    /// selecting. Returns `None` while idle.
    pub fn update_parameters(
        &mut self,
        temperature: f64,
        top_p: f64,
    ) -> Result<Option<Snapshot>> {
        self.temperature = temperature;
        self.top_p = top_p;
        match self.phase {
            Phase::Idle => Ok(None),
            Phase::Active => self.recompute(false).map(Some),
        }
    }

    fn snapshot(&self, selected: Option<String>) -> Snapshot {
        Snapshot {
            temperature: self.temperature,
            top_p: self.top_p,
            distribution: self.distribution.clone(),
            partition: self.partition.clone(),
            selected,
            prompt_text: self.prompt_text.clone(),
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn top_p(&self) -> f64 {
        self.top_p
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn last_selected(&self) -> Option<&str> {
        self.last_selected.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }
}
