//! Human-readable summaries of a type's POD properties.

use std::fmt;

use pod_traits::{Classification, Describe, Layout, TypeDescriptor, Violation, classify, violations};

/// Classification, layout and reasons for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReport {
    pub name: String,
    pub classification: Classification,
    pub layout: Layout,
    pub padding: usize,
    pub violations: Vec<Violation>,
}

impl TypeReport {
    pub fn of(desc: &TypeDescriptor) -> Self {
        TypeReport {
            name: desc.name.clone(),
            classification: classify(desc),
            layout: desc.layout(),
            padding: desc.padding(),
            violations: violations(desc),
        }
    }

    pub fn for_type<T: Describe>() -> Self {
        Self::of(&T::describe())
    }

    /// Emit the report as a single `info` event.
    pub fn log(&self) {
        tracing::info!(
            ty = %self.name,
            trivial = self.classification.is_trivial,
            standard_layout = self.classification.is_standard_layout,
            pod = self.classification.is_pod,
            size = self.layout.size,
            align = self.layout.align,
            "type report"
        );
    }
}

impl fmt::Display for TypeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.name, self.classification)?;
        write!(
            f,
            "  size {} align {} padding {}",
            self.layout.size, self.layout.align, self.padding
        )?;
        for v in &self.violations {
            write!(f, "\n  - {}", v)?;
        }
        Ok(())
    }
}
