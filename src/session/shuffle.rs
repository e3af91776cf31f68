use rand::Rng;

/// Source of the random picks a shuffle needs.
pub trait Shuffler {
    /// A uniformly chosen index in `0..=upper`.
    fn pick(&mut self, upper: usize) -> usize;
}

/// [`Shuffler`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngShuffler<R> {
    rng: R,
}

impl<R: Rng> RngShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngShuffler<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> Shuffler for RngShuffler<R> {
    fn pick(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..=upper)
    }
}

/// Fisher–Yates, from the last index down to 1.
pub fn shuffle<T>(items: &mut [T], shuffler: &mut dyn Shuffler) {
    for i in (1..items.len()).rev() {
        let j = shuffler.pick(i);
        items.swap(i, j);
    }
}

pub fn shuffled<T: Clone>(items: &[T], shuffler: &mut dyn Shuffler) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle(&mut copy, shuffler);
    copy
}
