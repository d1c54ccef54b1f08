use std::collections::BTreeMap;

use itertools::Itertools;
use rand::Rng;
use weighted_sampler::WeightedSampler;

pub mod serialization;

// Tallies draws from a sampler against its configured probabilities.
pub struct SamplerSimulator {
    sampler: WeightedSampler<isize>,
    counts: BTreeMap<isize, usize>,
    num_draws: usize,
}

impl SamplerSimulator {
    pub fn new(sampler: WeightedSampler<isize>) -> Self {
        let counts = sampler.values().iter().map(|v| (*v, 0)).collect();
        Self {
            sampler,
            counts,
            num_draws: 0,
        }
    }

    pub fn simulate_n_draws<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) {
        let drawn = (0..n)
            .map(|_| *self.sampler.next_value_with_rng(rng))
            .counts();
        for (v, c) in drawn {
            *self.counts.entry(v).or_insert(0) += c;
        }
        self.num_draws += n;
    }

    pub fn get_count(&self, value: isize) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    pub fn get_counts(&self) -> &BTreeMap<isize, usize> {
        &self.counts
    }

    pub fn get_num_draws(&self) -> usize {
        self.num_draws
    }

    pub fn get_sampler(&self) -> &WeightedSampler<isize> {
        &self.sampler
    }

    pub fn frequency(&self, value: isize) -> f64 {
        if self.num_draws == 0 {
            0.0
        } else {
            self.get_count(value) as f64 / self.num_draws as f64
        }
    }

    pub fn describe(&self) {
        println!("draws: {}", self.num_draws);
        println!("value:\tcount\tfreq\t(prob)");
        for (v, c) in self.counts.iter() {
            println!("{}:\t{}\t{:.4}\t({})", v, c, self.frequency(*v), self.sampler.probability_of(v));
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use weighted_sampler::MtUniform;

    use crate::serialization::SamplerDescription;

    use super::*;

    fn reference_sim() -> SamplerSimulator {
        let desc = SamplerDescription::new(vec!(-1, 0, 1, 2, 3), vec!(0.01, 0.3, 0.58, 0.1, 0.01));
        SamplerSimulator::new(desc.to_sampler().unwrap())
    }

    #[test]
    fn test_fixed_seed_counts() {
        let mut sim = reference_sim();
        let mut rng = MtUniform::new(175203);
        sim.simulate_n_draws(100, &mut rng);

        let expected = BTreeMap::from([(-1, 5), (0, 36), (1, 43), (2, 16), (3, 0)]);
        assert_eq!(&expected, sim.get_counts());
        assert_eq!(100, sim.get_num_draws());
        assert_eq!(0.43, sim.frequency(1));
        assert_eq!(0, sim.get_count(3));
    }

    #[test]
    fn test_accumulates() {
        let mut sim = reference_sim();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        sim.simulate_n_draws(50, &mut rng);
        sim.simulate_n_draws(150, &mut rng);
        assert_eq!(200, sim.get_num_draws());
        assert_eq!(200, sim.get_counts().values().sum::<usize>());
        assert_eq!(5, sim.get_sampler().len());
    }

    #[test]
    fn test_no_draws() {
        let sim = reference_sim();
        assert_eq!(0.0, sim.frequency(1));
        assert_eq!(0, sim.get_count(42));
        assert_eq!(5, sim.get_counts().len());
    }
}
