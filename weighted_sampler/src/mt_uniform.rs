use rand::RngCore;
use rand_mt::Mt19937GenRand32;

// MT19937 seeded like CPython's random.seed(n); random::<f64>() matches random.random()
#[derive(Clone)]
pub struct MtUniform {
    mt: Mt19937GenRand32,
}

impl MtUniform {
    pub fn new(seed: u64) -> Self {
        Self {
            mt: Mt19937GenRand32::new_with_key(seed_key(seed)),
        }
    }
}

// little-endian 32-bit words of the seed, as init_by_array expects
fn seed_key(seed: u64) -> Vec<u32> {
    let low = seed as u32;
    let high = (seed >> 32) as u32;
    if high == 0 {
        vec!(low)
    } else {
        vec!(low, high)
    }
}

impl RngCore for MtUniform {
    fn next_u32(&mut self) -> u32 {
        self.mt.next_u32()
    }

    // Packs 27 + 26 bits into the top 53 bits, so that the multiply-based f64
    // conversion computes (a * 2^26 + b) / 2^53 like `random.random()`.
    // The low 11 bits are always zero.
    fn next_u64(&mut self) -> u64 {
        let a = (self.mt.next_u32() >> 5) as u64;
        let b = (self.mt.next_u32() >> 6) as u64;
        (a << 37) | (b << 11)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.mt.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
