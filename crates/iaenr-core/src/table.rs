use iaenr_model::{CanonicalTidyRow, CanonicalWideRow};
use iaenr_transform::{DataFrame, Result as TransformResult, tidy_to_dataframe, wide_to_dataframe};

/// Output of a fetch, in the shape the caller asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrollmentTable {
    Wide(Vec<CanonicalWideRow>),
    Tidy(Vec<CanonicalTidyRow>),
}

impl EnrollmentTable {
    /// An empty table of the requested shape.
    pub fn empty(tidy: bool) -> Self {
        if tidy {
            Self::Tidy(Vec::new())
        } else {
            Self::Wide(Vec::new())
        }
    }

    pub fn is_tidy(&self) -> bool {
        matches!(self, Self::Tidy(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Wide(rows) => rows.len(),
            Self::Tidy(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_wide(&self) -> Option<&[CanonicalWideRow]> {
        match self {
            Self::Wide(rows) => Some(rows),
            Self::Tidy(_) => None,
        }
    }

    pub fn as_tidy(&self) -> Option<&[CanonicalTidyRow]> {
        match self {
            Self::Tidy(rows) => Some(rows),
            Self::Wide(_) => None,
        }
    }

    /// Appends `other` when both tables have the same shape. Returns `other`
    /// back on a shape mismatch.
    pub fn append(&mut self, other: EnrollmentTable) -> Result<(), EnrollmentTable> {
        match (self, other) {
            (Self::Wide(rows), Self::Wide(more)) => rows.extend(more),
            (Self::Tidy(rows), Self::Tidy(more)) => rows.extend(more),
            (_, other) => return Err(other),
        }
        Ok(())
    }

    /// Converts to a polars frame with one column per output field.
    pub fn to_dataframe(&self) -> TransformResult<DataFrame> {
        match self {
            Self::Wide(rows) => wide_to_dataframe(rows),
            Self::Tidy(rows) => tidy_to_dataframe(rows),
        }
    }
}
