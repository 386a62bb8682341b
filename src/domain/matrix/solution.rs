//! Solution column: a candidate option compared against the criteria.

use crate::domain::foundation::SolutionId;

/// One candidate solution. Equality ignores the id.
#[derive(Debug, Clone)]
pub struct Solution {
    id: SolutionId,
    name: String,
    details: String,
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.details == other.details
    }
}

impl Eq for Solution {}

impl Solution {
    pub fn new(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id: SolutionId::new(),
            name: name.into(),
            details: details.into(),
        }
    }

    pub fn id(&self) -> SolutionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_details(&mut self, details: String) {
        self.details = details;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_id() {
        let a = Solution::new("Rewrite", "from scratch");
        let b = Solution::new("Rewrite", "from scratch");
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
        assert_ne!(a, Solution::new("Rewrite", ""));
    }
}
