//! Synthesis settings.

use super::face::SupportDirection;

/// Knobs for [`synthesize`](super::synthesize).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Preference order among the four horizontal neighbors when an overhang
    /// could lean on more than one.
    pub support_order: [SupportDirection; 4],
    /// Classify cells on the rayon pool. Output is identical either way.
    pub parallel: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            support_order: SupportDirection::DEFAULT_ORDER,
            parallel: true,
        }
    }
}

impl SynthesisConfig {
    pub fn with_support_order(mut self, order: [SupportDirection; 4]) -> Self {
        self.support_order = order;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
