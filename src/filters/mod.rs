//! Upstream filter stages that narrow the raw street dataset before
//! sidewalk generation.

mod attribute;
mod region;

pub use attribute::AttributeFilter;
pub use region::RegionFilter;

/// Counts reported by a filter stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub initial: usize,
    pub kept: usize,
    /// Features dropped because their geometry could not be read
    pub malformed: usize,
}

impl FilterSummary {
    pub fn removed(&self) -> usize {
        self.initial - self.kept
    }
}

impl std::fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "initial: {}, removed: {}, remaining: {}",
            self.initial,
            self.removed(),
            self.kept
        )?;
        if self.malformed > 0 {
            write!(f, " ({} malformed)", self.malformed)?;
        }
        Ok(())
    }
}
