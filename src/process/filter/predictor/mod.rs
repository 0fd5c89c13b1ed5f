mod bits_per_component;
mod colors;
mod columns;
pub(crate) mod png;
pub(crate) mod tiff;

use ::log::debug;
use ::log::warn;

use self::bits_per_component::BitsPerComponent;
use self::colors::Colors;
use self::columns::Columns;
use self::png::Png;
use self::tiff::Tiff;
use super::Filter;
use crate::process::filter::error::FilterResult;
use crate::Byte;

const KEY_PREDICTOR: &str = "Predictor";
const KEY_BITS_PER_COMPONENT: &str = "BitsPerComponent";
const KEY_COLORS: &str = "Colors";
const KEY_COLUMNS: &str = "Columns";

/// REFERENCE: [Table 8 — Optional parameters for LZWDecode and FlateDecode
/// filters, p40] and [Table 10 — Predictor values. p42]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Predictor {
    #[default]
    None,
    Tiff(Tiff),
    Png(Png),
}

impl Filter for Predictor {
    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        match self {
            Self::None => Ok(bytes.into()),
            Self::Tiff(tiff) => tiff.defilter(bytes),
            Self::Png(png) => png.defilter(bytes),
        }
    }
}

/// The `DecodeParms` entries a predictor depends on, validated once when the
/// filter is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PredictorParms {
    bits_per_component: BitsPerComponent,
    colors: Colors,
    columns: Columns,
}

mod convert {
    use super::*;
    use crate::object::direct::dictionary::Dictionary;
    use crate::process::filter::predictor::error::PredictorErrorCode;

    #[cfg(test)]
    impl PredictorParms {
        pub(super) fn new(columns: usize, colors: usize) -> Self {
            use crate::object::direct::numeric::Integer;
            use crate::object::direct::DirectValue;

            Self {
                bits_per_component: BitsPerComponent::default(),
                colors: Colors::try_from(&Integer::from(colors as i128)).unwrap(),
                columns: Columns::try_from(&DirectValue::from(columns as i128)).unwrap(),
            }
        }
    }

    impl Predictor {
        /// Parameters are only validated when a predictor other than 1 is in
        /// effect. `BitsPerComponent` is checked first so that unsupported bit
        /// depths are reported before any other parameter.
        pub(in crate::process::filter) fn new(decode_parms: &Dictionary) -> FilterResult<Self> {
            let predictor = match decode_parms.get(KEY_PREDICTOR) {
                Some(value) => **value
                    .as_integer()
                    .ok_or_else(|| PredictorErrorCode::ValueType(KEY_PREDICTOR, value.clone()))?,
                None => 1,
            };
            if predictor == 1 {
                return Ok(Self::None);
            }
            if predictor != 2 && !(10..=15).contains(&predictor) {
                return Err(PredictorErrorCode::Unsupported(predictor).into());
            }

            let bits_per_component = decode_parms
                .get(KEY_BITS_PER_COMPONENT)
                .map(BitsPerComponent::try_from)
                .transpose()?
                .unwrap_or_default();
            let columns = decode_parms
                .get(KEY_COLUMNS)
                .map(Columns::try_from)
                .transpose()?
                .ok_or(PredictorErrorCode::MissingColumns)?;
            // Colors only applies to the TIFF predictor, and a value that is not
            // an integer is ignored
            let colors = match decode_parms.get(KEY_COLORS) {
                Some(value) if predictor == 2 => match value.as_integer() {
                    Some(integer) => Colors::try_from(integer)?,
                    None => {
                        warn!("Ignoring {}: {}", KEY_COLORS, value);
                        Colors::default()
                    }
                },
                _ => Colors::default(),
            };
            let parms = PredictorParms {
                bits_per_component,
                colors,
                columns,
            };
            debug!("Predictor: {}, {:?}", predictor, parms);

            if predictor == 2 {
                Ok(Self::Tiff(Tiff::new(parms)))
            } else {
                // PNG predictors 10 to 15 only hint at the encoder's choice, each
                // row carries its own filter type
                Ok(Self::Png(Png::new(parms)))
            }
        }
    }
}

pub(crate) mod error {
    use ::thiserror::Error;

    use crate::object::direct::DirectValue;

    #[derive(Debug, Error, PartialEq, Clone)]
    pub enum PredictorErrorCode {
        #[error("Unsupported predictor: {0}")]
        Unsupported(i128),
        #[error("Unsupported BitsPerComponent: {0}. Only 8 is supported")]
        UnsupportedBitsPerComponent(i128),
        #[error("Missing Columns")]
        MissingColumns,
        #[error("{0}: Out of range value: {1}")]
        OutOfRange(&'static str, i128),
        #[error("{0}: Wrong value type. Expected Integer. Found: {1}")]
        ValueType(&'static str, DirectValue),
    }
}

#[cfg(test)]
mod tests {
    use super::error::PredictorErrorCode;
    use super::*;
    use crate::assert_err_eq;
    use crate::object::direct::dictionary::Dictionary;
    use crate::object::direct::DirectValue;
    use crate::process::filter::error::ErrorKind;
    use crate::process::filter::error::FilterErr;

    fn decode_parms(entries: &[(&str, DirectValue)]) -> Dictionary {
        let mut dictionary = Dictionary::default();
        for (key, value) in entries {
            dictionary.insert(*key, value.clone());
        }
        dictionary
    }

    #[test]
    fn predictor_valid() {
        // No predictor
        let predictor = Predictor::new(&Dictionary::default()).unwrap();
        assert_eq!(predictor, Predictor::None);
        let predictor =
            Predictor::new(&decode_parms(&[("Predictor", DirectValue::from(1_i128))])).unwrap();
        assert_eq!(predictor, Predictor::None);
        // Other entries do not matter without a predictor
        let predictor = Predictor::new(&decode_parms(&[
            ("Predictor", DirectValue::from(1_i128)),
            ("BitsPerComponent", DirectValue::from(4_i128)),
            ("Columns", DirectValue::from("Four")),
        ]))
        .unwrap();
        assert_eq!(predictor, Predictor::None);

        // TIFF
        let predictor = Predictor::new(&decode_parms(&[
            ("Predictor", DirectValue::from(2_i128)),
            ("Columns", DirectValue::from(4_i128)),
            ("Colors", DirectValue::from(3_i128)),
        ]))
        .unwrap();
        assert_eq!(predictor, Predictor::Tiff(Tiff::new(PredictorParms::new(4, 3))));

        // Colors that is null or not an integer falls back to 1
        for colors in [DirectValue::from("RGB"), DirectValue::from(3.0), DirectValue::Null] {
            let predictor = Predictor::new(&decode_parms(&[
                ("Predictor", DirectValue::from(2_i128)),
                ("Columns", DirectValue::from(4_i128)),
                ("Colors", colors),
            ]))
            .unwrap();
            assert_eq!(predictor, Predictor::Tiff(Tiff::new(PredictorParms::new(4, 1))));
        }

        // Predictor that is null is absent
        let predictor = Predictor::new(&decode_parms(&[
            ("Predictor", DirectValue::Null),
            ("Columns", DirectValue::from("Four")),
        ]))
        .unwrap();
        assert_eq!(predictor, Predictor::None);

        // PNG
        for value in 10_i128..=15 {
            let predictor = Predictor::new(&decode_parms(&[
                ("Predictor", DirectValue::from(value)),
                ("Columns", DirectValue::from(5_i128)),
                ("BitsPerComponent", DirectValue::from(8_i128)),
            ]))
            .unwrap();
            assert_eq!(predictor, Predictor::Png(Png::new(PredictorParms::new(5, 1))));
        }
    }

    #[test]
    fn predictor_invalid() {
        // Unsupported predictor
        for value in [0_i128, 3, 9, 16] {
            let result = Predictor::new(&decode_parms(&[
                ("Predictor", DirectValue::from(value)),
                ("Columns", DirectValue::from(5_i128)),
            ]));
            let expected_error: FilterErr = PredictorErrorCode::Unsupported(value).into();
            assert_err_eq!(result, expected_error);
        }

        // Predictor of the wrong type
        let result = Predictor::new(&decode_parms(&[("Predictor", DirectValue::from("Up"))]));
        let expected_error = PredictorErrorCode::ValueType("Predictor", DirectValue::from("Up"));
        assert_err_eq!(result, expected_error);

        // Unsupported bits per component, even before a missing Columns entry
        let result = Predictor::new(&decode_parms(&[
            ("Predictor", DirectValue::from(2_i128)),
            ("BitsPerComponent", DirectValue::from(4_i128)),
        ]));
        let expected_error = PredictorErrorCode::UnsupportedBitsPerComponent(4);
        assert_err_eq!(result, expected_error);
        assert_eq!(
            result.unwrap_err().kind(),
            ErrorKind::UnsupportedBitsPerComponent
        );

        // Missing Columns
        for value in [2_i128, 10, 12, 15] {
            let result =
                Predictor::new(&decode_parms(&[("Predictor", DirectValue::from(value))]));
            assert_err_eq!(result, PredictorErrorCode::MissingColumns);
            assert_eq!(result.unwrap_err().kind(), ErrorKind::MissingPredictorColumns);
        }

        // Columns of the wrong type count as missing
        let result = Predictor::new(&decode_parms(&[
            ("Predictor", DirectValue::from(12_i128)),
            ("Columns", DirectValue::from(4.0)),
        ]));
        assert_err_eq!(result, PredictorErrorCode::MissingColumns);

        // Non-positive Columns
        let result = Predictor::new(&decode_parms(&[
            ("Predictor", DirectValue::from(12_i128)),
            ("Columns", DirectValue::from(0_i128)),
        ]));
        assert_err_eq!(result, PredictorErrorCode::OutOfRange("Columns", 0));

        // Non-positive Colors
        let result = Predictor::new(&decode_parms(&[
            ("Predictor", DirectValue::from(2_i128)),
            ("Columns", DirectValue::from(4_i128)),
            ("Colors", DirectValue::from(0_i128)),
        ]));
        assert_err_eq!(result, PredictorErrorCode::OutOfRange("Colors", 0));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidParameter);
    }
}
