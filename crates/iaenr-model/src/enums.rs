//! Type-safe enumerations for the enrollment schema.
//!
//! The string forms returned by `as_str` are the labels that appear in tidy
//! output and in serialized tables, so they are part of the public contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Aggregation granularity of a canonical row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// Computed statewide aggregate; never sourced from a file.
    State,
    District,
    School,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::State => "State",
            EntityType::District => "District",
            EntityType::School => "School",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source file family. The state level is derived, so it has no source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    District,
    School,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::District => "district",
            Level::School => "school",
        }
    }

    /// Entity type of the rows a source of this level produces.
    pub fn entity_type(&self) -> EntityType {
        match self {
            Level::District => EntityType::District,
            Level::School => EntityType::School,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade level of a tidy row.
///
/// `K8`, `HS` and `K12` are grade bands; they only appear in the output of
/// grade-band aggregation, never in a plain tidy reshape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "PK")]
    Pk,
    #[serde(rename = "K")]
    K,
    #[serde(rename = "01")]
    G01,
    #[serde(rename = "02")]
    G02,
    #[serde(rename = "03")]
    G03,
    #[serde(rename = "04")]
    G04,
    #[serde(rename = "05")]
    G05,
    #[serde(rename = "06")]
    G06,
    #[serde(rename = "07")]
    G07,
    #[serde(rename = "08")]
    G08,
    #[serde(rename = "09")]
    G09,
    #[serde(rename = "10")]
    G10,
    #[serde(rename = "11")]
    G11,
    #[serde(rename = "12")]
    G12,
    #[serde(rename = "TOTAL")]
    Total,
    K8,
    #[serde(rename = "HS")]
    Hs,
    K12,
}

impl GradeLevel {
    /// The fourteen single grades in schooling order.
    pub const GRADES: [GradeLevel; 14] = [
        GradeLevel::Pk,
        GradeLevel::K,
        GradeLevel::G01,
        GradeLevel::G02,
        GradeLevel::G03,
        GradeLevel::G04,
        GradeLevel::G05,
        GradeLevel::G06,
        GradeLevel::G07,
        GradeLevel::G08,
        GradeLevel::G09,
        GradeLevel::G10,
        GradeLevel::G11,
        GradeLevel::G12,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLevel::Pk => "PK",
            GradeLevel::K => "K",
            GradeLevel::G01 => "01",
            GradeLevel::G02 => "02",
            GradeLevel::G03 => "03",
            GradeLevel::G04 => "04",
            GradeLevel::G05 => "05",
            GradeLevel::G06 => "06",
            GradeLevel::G07 => "07",
            GradeLevel::G08 => "08",
            GradeLevel::G09 => "09",
            GradeLevel::G10 => "10",
            GradeLevel::G11 => "11",
            GradeLevel::G12 => "12",
            GradeLevel::Total => "TOTAL",
            GradeLevel::K8 => "K8",
            GradeLevel::Hs => "HS",
            GradeLevel::K12 => "K12",
        }
    }

    /// True for the grade-band labels produced by aggregation.
    pub fn is_band(&self) -> bool {
        matches!(self, GradeLevel::K8 | GradeLevel::Hs | GradeLevel::K12)
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        GradeLevel::GRADES
            .iter()
            .chain(&[
                GradeLevel::Total,
                GradeLevel::K8,
                GradeLevel::Hs,
                GradeLevel::K12,
            ])
            .find(|grade| grade.as_str() == normalized)
            .copied()
            .ok_or_else(|| ModelError::UnknownGradeLevel(s.to_string()))
    }
}

/// Population subgroup of a tidy row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subgroup {
    TotalEnrollment,
    White,
    Black,
    Hispanic,
    Asian,
    NativeAmerican,
    PacificIslander,
    Multiracial,
    Male,
    Female,
}

impl Subgroup {
    /// Output order for the subgroup rows of one entity.
    pub const ALL: [Subgroup; 10] = [
        Subgroup::TotalEnrollment,
        Subgroup::White,
        Subgroup::Black,
        Subgroup::Hispanic,
        Subgroup::Asian,
        Subgroup::NativeAmerican,
        Subgroup::PacificIslander,
        Subgroup::Multiracial,
        Subgroup::Male,
        Subgroup::Female,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subgroup::TotalEnrollment => "total_enrollment",
            Subgroup::White => "white",
            Subgroup::Black => "black",
            Subgroup::Hispanic => "hispanic",
            Subgroup::Asian => "asian",
            Subgroup::NativeAmerican => "native_american",
            Subgroup::PacificIslander => "pacific_islander",
            Subgroup::Multiracial => "multiracial",
            Subgroup::Male => "male",
            Subgroup::Female => "female",
        }
    }
}

impl fmt::Display for Subgroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subgroup {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Subgroup::ALL
            .iter()
            .find(|subgroup| subgroup.as_str() == normalized)
            .copied()
            .ok_or_else(|| ModelError::UnknownSubgroup(s.to_string()))
    }
}
