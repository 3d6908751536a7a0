/// One experiment run: an ordered sequence of binary trial outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    pub choices: Vec<u8>,
}

impl Experiment {
    pub fn new(choices: Vec<u8>) -> Self {
        Self { choices }
    }

    pub fn n_trials(&self) -> usize {
        self.choices.len()
    }
}
