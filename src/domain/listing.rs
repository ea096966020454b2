//! Raw listing fields as submitted by the form

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Number of positional form values a listing is read from.
/// Value 0 is ignored; values 1..=5 are the listing fields.
pub const FORM_FIELD_COUNT: usize = 6;

/// The five raw listing fields, still as strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListing {
    pub brand: String,
    pub year: String,
    pub kms: String,
    pub ownership: String,
    pub fuel: String,
}

impl RawListing {
    pub fn new(
        brand: impl Into<String>,
        year: impl Into<String>,
        kms: impl Into<String>,
        ownership: impl Into<String>,
        fuel: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            year: year.into(),
            kms: kms.into(),
            ownership: ownership.into(),
            fuel: fuel.into(),
        }
    }

    /// Read a listing from form values in submission order.
    ///
    /// The first value is skipped; the next five are brand, year, kms,
    /// ownership and fuel. Trailing values are ignored.
    pub fn from_form_values<S: AsRef<str>>(values: &[S]) -> Result<Self, DomainError> {
        if values.len() < FORM_FIELD_COUNT {
            return Err(DomainError::validation(
                "form",
                format!(
                    "expected {} fields, got {}",
                    FORM_FIELD_COUNT,
                    values.len()
                ),
            ));
        }

        Ok(Self::new(
            values[1].as_ref(),
            values[2].as_ref(),
            values[3].as_ref(),
            values[4].as_ref(),
            values[5].as_ref(),
        ))
    }

    /// Parse the model year as an integer
    pub fn parse_year(&self) -> Result<i32, DomainError> {
        self.year.trim().parse::<i32>().map_err(|_| {
            DomainError::validation("year", format!("'{}' is not an integer", self.year))
        })
    }

    /// Parse kilometers driven as a finite number
    pub fn parse_kms(&self) -> Result<f64, DomainError> {
        match self.kms.trim().parse::<f64>() {
            Ok(kms) if kms.is_finite() => Ok(kms),
            _ => Err(DomainError::validation(
                "kms",
                format!("'{}' is not a number", self.kms),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_values_skips_first() {
        let listing =
            RawListing::from_form_values(&["_", "Honda", "2018", "40000", "First", "Petrol"])
                .unwrap();

        assert_eq!(listing, RawListing::new("Honda", "2018", "40000", "First", "Petrol"));
    }

    #[test]
    fn test_from_form_values_ignores_trailing() {
        let listing = RawListing::from_form_values(&[
            "_", "Honda", "2018", "40000", "First", "Petrol", "submit",
        ])
        .unwrap();

        assert_eq!(listing.fuel, "Petrol");
    }

    #[test]
    fn test_from_form_values_too_short() {
        let result = RawListing::from_form_values(&["_", "Honda", "2018"]);

        match result {
            Err(DomainError::Validation { field, message }) => {
                assert_eq!(field, "form");
                assert_eq!(message, "expected 6 fields, got 3");
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(RawListing::new("", " 2018 ", "", "", "").parse_year().unwrap(), 2018);

        let err = RawListing::new("", "abc", "", "", "").parse_year().unwrap_err();
        assert_eq!(err.to_string(), "Invalid year: 'abc' is not an integer");

        assert!(RawListing::new("", "2018.5", "", "", "").parse_year().is_err());
    }

    #[test]
    fn test_parse_kms() {
        assert_eq!(RawListing::new("", "", "40000", "", "").parse_kms().unwrap(), 40000.0);
        assert_eq!(RawListing::new("", "", "1.5e4", "", "").parse_kms().unwrap(), 15000.0);

        assert!(RawListing::new("", "", "lots", "", "").parse_kms().is_err());
        assert!(RawListing::new("", "", "NaN", "", "").parse_kms().is_err());
        assert!(RawListing::new("", "", "inf", "", "").parse_kms().is_err());
    }
}
