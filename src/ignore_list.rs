use std::collections::HashSet;

/// TrustToken operations whose timings are too noisy to gate a build on.
pub const IGNORED_BENCHMARKS: [&str; 42] = [
    "TrustToken-Exp1-Batch1 generate_key",
    "TrustToken-Exp1-Batch1 begin_issuance",
    "TrustToken-Exp1-Batch1 issue",
    "TrustToken-Exp1-Batch1 finish_issuance",
    "TrustToken-Exp1-Batch1 begin_redemption",
    "TrustToken-Exp1-Batch1 redeem",
    "TrustToken-Exp1-Batch1 finish_redemption",
    "TrustToken-Exp1-Batch10 generate_key",
    "TrustToken-Exp1-Batch10 begin_issuance",
    "TrustToken-Exp1-Batch10 issue",
    "TrustToken-Exp1-Batch10 finish_issuance",
    "TrustToken-Exp1-Batch10 begin_redemption",
    "TrustToken-Exp1-Batch10 redeem",
    "TrustToken-Exp1-Batch10 finish_redemption",
    "TrustToken-Exp2VOfPRF-Batch1 generate_key",
    "TrustToken-Exp2VOfPRF-Batch1 begin_issuance",
    "TrustToken-Exp2VOfPRF-Batch1 issue",
    "TrustToken-Exp2VOfPRF-Batch1 finish_issuance",
    "TrustToken-Exp2VOfPRF-Batch1 begin_redemption",
    "TrustToken-Exp2VOfPRF-Batch1 redeem",
    "TrustToken-Exp2VOfPRF-Batch1 finish_redemption",
    "TrustToken-Exp2VOPRF-Batch10 generate_key",
    "TrustToken-Exp2VOPRF-Batch10 begin_issuance",
    "TrustToken-Exp2VOPRF-Batch10 issue",
    "TrustToken-Exp2VOPRF-Batch10 finish_issuance",
    "TrustToken-Exp2VOPRF-Batch10 begin_redemption",
    "TrustToken-Exp2VOPRF-Batch10 redeem",
    "TrustToken-Exp2VOPRF-Batch10 finish_redemption",
    "TrustToken-Exp2PMB-Batch1 generate_key",
    "TrustToken-Exp2PMB-Batch1 begin_issuance",
    "TrustToken-Exp2PMB-Batch1 issue",
    "TrustToken-Exp2PMB-Batch1 finish_issuance",
    "TrustToken-Exp2PMB-Batch1 begin_redemption",
    "TrustToken-Exp2PMB-Batch1 redeem",
    "TrustToken-Exp2PMB-Batch1 finish_redemption",
    "TrustToken-Exp2PMB-Batch10 generate_key",
    "TrustToken-Exp2PMB-Batch10 begin_issuance",
    "TrustToken-Exp2PMB-Batch10 issue",
    "TrustToken-Exp2PMB-Batch10 finish_issuance",
    "TrustToken-Exp2PMB-Batch10 begin_redemption",
    "TrustToken-Exp2PMB-Batch10 redeem",
    "TrustToken-Exp2PMB-Batch10 finish_redemption",
];

/// Benchmark names that may regress without failing the comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IgnoreList {
    names: HashSet<String>,
}

impl IgnoreList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    pub fn contains(&self, description: &str) -> bool {
        self.names.contains(description)
    }

    /// True when every description is ignored. Vacuously true for none.
    pub fn all_ignored<'a, I>(&self, descriptions: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        descriptions.into_iter().all(|d| self.contains(d))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self::new(IGNORED_BENCHMARKS)
    }
}
