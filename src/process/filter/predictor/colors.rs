/// REFERENCE: [Table 8 — Optional parameters for LZWDecode and FlateDecode
/// filters, p40]
/// Interleaved colour components per sample, used by the TIFF predictor only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Colors(usize);

impl Default for Colors {
    fn default() -> Self {
        Self(1)
    }
}

mod convert {
    use ::std::ops::Deref;

    use super::Colors;
    use crate::object::direct::numeric::Integer;
    use crate::process::filter::predictor::error::PredictorErrorCode;
    use crate::process::filter::predictor::KEY_COLORS;

    impl TryFrom<&Integer> for Colors {
        type Error = PredictorErrorCode;

        fn try_from(value: &Integer) -> Result<Self, Self::Error> {
            let integer = **value;
            match usize::try_from(integer) {
                Ok(colors) if colors > 0 => Ok(Self(colors)),
                _ => Err(PredictorErrorCode::OutOfRange(KEY_COLORS, integer)),
            }
        }
    }

    impl Deref for Colors {
        type Target = usize;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::direct::numeric::Integer;
    use crate::process::filter::predictor::error::PredictorErrorCode;

    #[test]
    fn colors_valid() {
        assert_eq!(*Colors::default(), 1);
        let colors = Colors::try_from(&Integer::from(3_i128)).unwrap();
        assert_eq!(*colors, 3);
    }

    #[test]
    fn colors_invalid() {
        assert_eq!(
            Colors::try_from(&Integer::from(0_i128)),
            Err(PredictorErrorCode::OutOfRange("Colors", 0))
        );
        assert_eq!(
            Colors::try_from(&Integer::from(-1_i128)),
            Err(PredictorErrorCode::OutOfRange("Colors", -1))
        );
    }
}
