use rand::Rng;

/// Picks one index out of `len` candidates. `len` is always non-zero.
pub(crate) trait Chooser: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

pub(crate) struct RandomChooser;

impl Chooser for RandomChooser {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always returns the same slot (wrapped into range)
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedChooser(pub(crate) usize);

impl Chooser for FixedChooser {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}
