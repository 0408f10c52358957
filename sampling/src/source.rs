use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;
use rand_distr::Distribution;

const MAXF64: f64 = 9007199254740992.0;

/// Deterministic ChaCha8 stream used to populate test and benchmark vectors.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Rejection-samples a value in `[0, max)` from `next_u64() & mask`.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        min + ((self.next_u64() << 11 >> 11) as f64) / MAXF64 * (max - min)
    }

    #[inline(always)]
    pub fn next_f32(&mut self, min: f32, max: f32) -> f32 {
        self.next_f64(min as f64, max as f64) as f32
    }

    #[inline(always)]
    pub fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }

    /// Returns a value in `[min, max]`.
    #[inline(always)]
    pub fn next_isize(&mut self, min: isize, max: isize) -> isize {
        debug_assert!(min <= max, "invalid range [{min}, {max}]");
        let span: u64 = (max - min) as u64 + 1;
        let mask: u64 = span.next_power_of_two().wrapping_sub(1);
        min + self.next_u64n(span, mask) as isize
    }

    /// Fills `res` with values drawn uniformly from `[min, max)`.
    pub fn fill_f32(&mut self, res: &mut [f32], min: f32, max: f32) {
        res.iter_mut().for_each(|x| *x = self.next_f32(min, max));
    }

    /// Fills `res` with samples of `dist` rounded to single precision.
    pub fn fill_dist_f32<D: Distribution<f64>>(&mut self, res: &mut [f32], dist: D) {
        res.iter_mut().for_each(|x| *x = dist.sample(self) as f32);
    }

    /// Fills `res` with arbitrary bit patterns, NaNs and infinities included.
    pub fn fill_bits_f32(&mut self, res: &mut [f32]) {
        res.iter_mut().for_each(|x| *x = f32::from_bits(self.next_u32()));
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use rand_distr::Normal;

    use super::Source;

    #[test]
    fn same_seed_same_stream() {
        let mut a: Source = Source::new([7u8; 32]);
        let mut b: Source = Source::new([7u8; 32]);
        let mut va: Vec<f32> = vec![0f32; 64];
        let mut vb: Vec<f32> = vec![0f32; 64];
        a.fill_f32(&mut va, -1.0, 1.0);
        b.fill_f32(&mut vb, -1.0, 1.0);
        assert_eq!(va, vb);
    }

    #[test]
    fn next_isize_stays_in_range() {
        let mut source: Source = Source::new([0u8; 32]);
        for _ in 0..1000 {
            let x: isize = source.next_isize(-3, 3);
            assert!((-3..=3).contains(&x), "{x}");
        }
    }

    #[test]
    fn next_bool_takes_both_values() {
        let mut source: Source = Source::new([3u8; 32]);
        let heads: usize = (0..1000).filter(|_| source.next_bool()).count();
        assert!((400..600).contains(&heads), "{heads}");
    }

    #[test]
    fn fill_f32_stays_in_range() {
        let mut source: Source = Source::new([1u8; 32]);
        let mut v: Vec<f32> = vec![0f32; 256];
        source.fill_f32(&mut v, 2.0, 4.0);
        assert!(v.iter().all(|x| (2.0..=4.0).contains(x)));
    }

    #[test]
    fn fill_dist_f32_is_deterministic() {
        let dist: Normal<f64> = Normal::new(0.0, 3.2).unwrap();
        let mut a: Source = Source::new([2u8; 32]);
        let mut b: Source = Source::new([2u8; 32]);
        let mut va: Vec<f32> = vec![0f32; 32];
        let mut vb: Vec<f32> = vec![0f32; 32];
        a.fill_dist_f32(&mut va, dist);
        b.fill_dist_f32(&mut vb, dist);
        assert_eq!(va, vb);
    }
}
