use serde::{Deserialize, Serialize};
use weighted_sampler::{SamplerError, WeightedSampler};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerDescription {
    values: Vec<isize>,
    probabilities: Vec<f64>,
}

impl SamplerDescription {
    pub fn new(values: Vec<isize>, probabilities: Vec<f64>) -> Self {
        Self {
            values,
            probabilities,
        }
    }

    pub fn get_values(&self) -> &Vec<isize> {
        &self.values
    }

    pub fn get_probabilities(&self) -> &Vec<f64> {
        &self.probabilities
    }

    pub fn to_sampler(&self) -> Result<WeightedSampler<isize>, SamplerError> {
        WeightedSampler::from_parallel(self.values.clone(), self.probabilities.clone())
    }
}
