use ts_sampler::{Distribution, Partition};

/// How a probability bar should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarKind {
    /// The token drawn in this step.
    Selected,
    /// Retained by the nucleus filter.
    Candidate,
    /// Cut by the nucleus filter.
    Eliminated,
    /// Not present in the partition.
    Default,
}

/// One bar of the probability chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub token: String,
    pub probability: f64,
    /// Height relative to the tallest bar, in `[0, 1]`.
    pub height: f64,
    pub kind: BarKind,
}

/// Classify `token` for highlighting. Selection wins over membership.
pub fn classify(token: &str, partition: &Partition, selected: Option<&str>) -> BarKind {
    if selected == Some(token) {
        BarKind::Selected
    } else if partition.is_candidate(token) {
        BarKind::Candidate
    } else if partition.is_eliminated(token) {
        BarKind::Eliminated
    } else {
        BarKind::Default
    }
}

/// Chart bars sorted by descending probability, scaled to the tallest bar.
pub fn bars(
    distribution: &Distribution,
    partition: &Partition,
    selected: Option<&str>,
) -> Vec<Bar> {
    let sorted = distribution.sorted_descending();
    let max = sorted.first().map_or(0.0, |t| t.probability);
    sorted
        .into_iter()
        .map(|t| {
            let kind = classify(&t.token, partition, selected);
            let height = if max > 0.0 { t.probability / max } else { 0.0 };
            Bar {
                token: t.token,
                probability: t.probability,
                height,
                kind,
            }
        })
        .collect()
}
