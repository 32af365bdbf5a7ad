use crate::directory::Country;
use crate::quiz::flags::flag_key;

/// One quiz question: a fixed set of candidate countries, one of which is
/// the designated answer.
///
/// Invariants, upheld by the generator: no two options share an id, and
/// the correct country appears among the options exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    options: Vec<Country>,
    correct_slot: usize,
    flag_key: String,
}

impl Round {
    pub(crate) fn new(options: Vec<Country>, correct_slot: usize) -> Self {
        let flag_key = flag_key(&options[correct_slot].code);
        Self {
            options,
            correct_slot,
            flag_key,
        }
    }

    /// Candidate countries in draw order.
    pub fn options(&self) -> &[Country] {
        &self.options
    }

    /// The designated correct country.
    pub fn correct(&self) -> &Country {
        &self.options[self.correct_slot]
    }

    /// Lowercase ISO code used to resolve the flag image for this round.
    pub fn flag_key(&self) -> &str {
        &self.flag_key
    }
}
