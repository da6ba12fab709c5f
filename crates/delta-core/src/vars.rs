//! Declared-variable context.

/// The ordered list of declared state variables. Slot 0 is the reserved
/// time coordinate; degree vectors are sized by [`Variables::num_vars`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variables {
    names: Vec<String>,
}

impl Variables {
    /// Build from ordered names. The first name is the time coordinate.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        debug_assert!(!names.is_empty(), "variables must include the time slot");
        Self { names }
    }

    /// Total variable count, including the time slot.
    pub fn num_vars(&self) -> usize {
        self.names.len()
    }

    /// State-variable count (time slot excluded).
    pub fn state_count(&self) -> usize {
        self.names.len() - 1
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }
}
