//! Digit-count bounds.
//!
//! `maxLength`/`minLength` count decimal digits: `maxLength: 3` means the
//! value fits in three digits, so the bound is `999`.

use crate::error::MapError;
use crate::model::PropertyDef;

/// `10^digits - 1`, or `None` when it does not fit in a `u64`.
pub fn digit_bound(digits: u32) -> Option<u64> {
    10u64.checked_pow(digits).map(|p| p - 1)
}

/// Bounds derived from a property's digit counts. Absent or zero counts give
/// no bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitBounds {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl DigitBounds {
    pub fn of(property_name: &str, property: &PropertyDef) -> Result<Self, MapError> {
        let bound = |digits: Option<u32>| -> Result<Option<u64>, MapError> {
            match digits {
                None | Some(0) => Ok(None),
                Some(digits) => {
                    digit_bound(digits)
                        .map(Some)
                        .ok_or_else(|| MapError::BoundOverflow {
                            property: property_name.to_string(),
                            digits,
                        })
                }
            }
        };
        Ok(Self {
            min: bound(property.min_length)?,
            max: bound(property.max_length)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyType;
    use proptest::prelude::*;

    #[test]
    fn known_values() {
        assert_eq!(digit_bound(0), Some(0));
        assert_eq!(digit_bound(1), Some(9));
        assert_eq!(digit_bound(2), Some(99));
        assert_eq!(digit_bound(19), Some(9_999_999_999_999_999_999));
        assert_eq!(digit_bound(20), None);
    }

    #[test]
    fn bounds_are_independent() {
        let p = PropertyDef::new(PropertyType::Number).max_length(3);
        assert_eq!(
            DigitBounds::of("n", &p).unwrap(),
            DigitBounds { min: None, max: Some(999) }
        );

        let p = PropertyDef::new(PropertyType::Number).min_length(1);
        assert_eq!(
            DigitBounds::of("n", &p).unwrap(),
            DigitBounds { min: Some(9), max: None }
        );

        let p = PropertyDef::new(PropertyType::Number);
        assert_eq!(DigitBounds::of("n", &p).unwrap(), DigitBounds::default());
    }

    #[test]
    fn zero_digits_impose_no_bound() {
        let p = PropertyDef::new(PropertyType::String).max_length(0).min_length(0);
        assert_eq!(DigitBounds::of("code", &p).unwrap(), DigitBounds::default());

        let p = PropertyDef::new(PropertyType::Number).max_length(0).min_length(2);
        assert_eq!(
            DigitBounds::of("n", &p).unwrap(),
            DigitBounds { min: Some(99), max: None }
        );
    }

    #[test]
    fn overflow_names_property() {
        let p = PropertyDef::new(PropertyType::String).max_length(25);
        assert_eq!(
            DigitBounds::of("code", &p),
            Err(MapError::BoundOverflow {
                property: "code".into(),
                digits: 25
            })
        );
    }

    proptest! {
        #[test]
        fn bound_has_exactly_n_nines(n in 1u32..=19) {
            let bound = digit_bound(n).unwrap();
            let text = bound.to_string();
            prop_assert_eq!(text.len(), n as usize);
            prop_assert!(text.chars().all(|c| c == '9'));
        }
    }
}
