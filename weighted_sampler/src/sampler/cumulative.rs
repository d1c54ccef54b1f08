use std::cmp::Ordering;

use itertools::Itertools;

use crate::sampler::prob_type::SamplerProb;

// Discrete cdf over the entries, ordered by descending probability.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeTable<V, P: SamplerProb> {
    thresholds: Vec<P>,
    probabilities: Vec<P>,
    values: Vec<V>,
    // index of the last entry with a positive probability
    last_positive: usize,
}

impl<V, P: SamplerProb> CumulativeTable<V, P> {
    // pairs must be validated beforehand (non-negative, finite)
    pub fn build(pairs: Vec<(V, P)>) -> Self {
        let mut thresholds = Vec::with_capacity(pairs.len());
        let mut probabilities = Vec::with_capacity(pairs.len());
        let mut values = Vec::with_capacity(pairs.len());
        let mut last_positive = 0;
        let mut total = P::zero();
        // sorted_by is stable, so equal probabilities keep their input order
        for (v, p) in pairs
            .into_iter()
            .sorted_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
        {
            if p > P::zero() {
                last_positive = values.len();
            }
            total = total + p;
            thresholds.push(total);
            probabilities.push(p);
            values.push(v);
        }
        Self {
            thresholds,
            probabilities,
            values,
            last_positive,
        }
    }

    // leftmost index whose threshold is strictly greater than t,
    // clamped to the last positive entry when drift or rounding leaves t
    // at or past the final threshold, so zero-probability entries are never picked
    pub fn search(&self, t: P) -> usize {
        let index = self.thresholds.partition_point(|threshold| *threshold <= t);
        index.min(self.last_positive)
    }

    pub fn thresholds(&self) -> &[P] {
        &self.thresholds
    }

    // configured probabilities, in table order
    pub fn probabilities(&self) -> &[P] {
        &self.probabilities
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
