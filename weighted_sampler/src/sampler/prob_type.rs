use std::fmt::Debug;
use std::iter::Sum;

use num::{Float, FromPrimitive};

// The minimum collection of traits required of the probability-like type for WeightedSampler
pub trait SamplerProb: Float + FromPrimitive + Sum + Debug {}
impl<T: Float + FromPrimitive + Sum + Debug> SamplerProb for T {}

pub const EPSILON: f64 = 1e-6;

pub fn epsilon<P: SamplerProb>() -> P {
    P::from_f64(EPSILON).unwrap_or_else(P::epsilon)
}

// f32 may round a sample just below 1 up to 1; the table search clamps that case.
pub fn uniform_from_f64<P: SamplerProb>(t: f64) -> P {
    P::from_f64(t).unwrap_or_else(P::zero)
}
