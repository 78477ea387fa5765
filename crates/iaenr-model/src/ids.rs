use std::fmt;

use crate::ModelError;

/// A validated four-digit district identifier (e.g. `"0009"`).
///
/// Construction never pads or truncates; see
/// `iaenr_normalization::standardize_district_id` for the lenient path from
/// raw cells.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct DistrictId(String);

impl DistrictId {
    pub const WIDTH: usize = 4;

    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.len() == Self::WIDTH && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value))
        } else {
            Err(ModelError::InvalidDistrictId(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DistrictId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DistrictId> for String {
    fn from(value: DistrictId) -> Self {
        value.0
    }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_four_digits() {
        assert_eq!(DistrictId::new("0017").unwrap().as_str(), "0017");
    }

    #[test]
    fn rejects_other_widths_and_letters() {
        assert!(DistrictId::new("17").is_err());
        assert!(DistrictId::new("12345").is_err());
        assert!(DistrictId::new("00A1").is_err());
    }

    #[test]
    fn deserialization_validates() {
        let err = serde_json::from_str::<DistrictId>("\"123\"");
        assert!(err.is_err());
        let ok: DistrictId = serde_json::from_str("\"0123\"").unwrap();
        assert_eq!(ok.to_string(), "0123");
    }
}
