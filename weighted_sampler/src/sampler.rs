use std::collections::BTreeMap;

use rand::distr::Distribution;
use rand::Rng;

use crate::sampler::cumulative::CumulativeTable;
use crate::sampler::prob_type::{epsilon, uniform_from_f64, SamplerProb};
use crate::{InvalidReason, SamplerError};

pub mod cumulative;
pub mod prob_type;

// Validated once into a cumulative table; each draw is one uniform sample
// plus a binary search.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSampler<V, P: SamplerProb = f64> {
    table: CumulativeTable<V, P>,
}

impl<V, P: SamplerProb> WeightedSampler<V, P> {
    pub fn new(pairs: Vec<(V, P)>) -> Result<Self, SamplerError> {
        check_non_negative(pairs.iter().map(|(_, p)| *p))?;
        check_sums_to_one(pairs.iter().map(|(_, p)| *p))?;
        Ok(Self {
            table: CumulativeTable::build(pairs),
        })
    }

    pub fn from_parallel(values: Vec<V>, probabilities: Vec<P>) -> Result<Self, SamplerError> {
        if values.len() != probabilities.len() {
            return Err(SamplerError::LengthMismatch {
                values: values.len(),
                probabilities: probabilities.len(),
            });
        }
        Self::new(values.into_iter().zip(probabilities).collect())
    }

    pub fn next_value(&self) -> &V {
        let mut rng = rand::rng();
        self.next_value_with_rng(&mut rng)
    }

    pub fn next_value_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> &V {
        let t: P = uniform_from_f64(rng.random::<f64>());
        let index = self.table.search(t);
        // construction never yields an empty table, so the index is always valid
        &self.table.values()[index]
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn values(&self) -> &[V] {
        self.table.values()
    }

    pub fn thresholds(&self) -> &[P] {
        self.table.thresholds()
    }

    pub fn probability_of(&self, value: &V) -> P
    where
        V: PartialEq,
    {
        self.table
            .values()
            .iter()
            .zip(self.table.probabilities())
            .filter(|(v, _)| *v == value)
            .map(|(_, p)| *p)
            .sum()
    }
}

fn check_non_negative<P, I>(probabilities: I) -> Result<(), SamplerError>
where
    P: SamplerProb,
    I: IntoIterator<Item = P>,
{
    if probabilities.into_iter().any(|p| p < P::zero()) {
        return Err(SamplerError::InvalidProbability(InvalidReason::Negative));
    }
    Ok(())
}

fn check_sums_to_one<P, I>(probabilities: I) -> Result<(), SamplerError>
where
    P: SamplerProb,
    I: IntoIterator<Item = P>,
{
    let total: P = probabilities.into_iter().sum();
    // written so that a NaN total fails too
    if !((total - P::one()).abs() <= epsilon()) {
        return Err(SamplerError::InvalidProbability(InvalidReason::NotNormalized));
    }
    Ok(())
}

impl<V, P: SamplerProb> TryFrom<Vec<(V, P)>> for WeightedSampler<V, P> {
    type Error = SamplerError;

    fn try_from(pairs: Vec<(V, P)>) -> Result<Self, Self::Error> {
        Self::new(pairs)
    }
}

impl<V, P: SamplerProb> TryFrom<BTreeMap<V, P>> for WeightedSampler<V, P> {
    type Error = SamplerError;

    fn try_from(map: BTreeMap<V, P>) -> Result<Self, Self::Error> {
        Self::new(map.into_iter().collect())
    }
}

impl<V: Clone, P: SamplerProb> Distribution<V> for WeightedSampler<V, P> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> V {
        self.next_value_with_rng(rng).clone()
    }
}
