/// REFERENCE: [Table 8 — Optional parameters for LZWDecode and FlateDecode
/// filters, p40]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Columns(usize);

mod convert {
    use ::std::ops::Deref;

    use super::Columns;
    use crate::object::direct::DirectValue;
    use crate::process::filter::predictor::error::PredictorErrorCode;
    use crate::process::filter::predictor::KEY_COLUMNS;

    impl TryFrom<&DirectValue> for Columns {
        type Error = PredictorErrorCode;

        /// A `Columns` entry that is not an integer is treated as absent.
        fn try_from(value: &DirectValue) -> Result<Self, Self::Error> {
            let value = **value
                .as_integer()
                .ok_or(PredictorErrorCode::MissingColumns)?;
            match usize::try_from(value) {
                Ok(columns) if columns > 0 => Ok(Self(columns)),
                _ => Err(PredictorErrorCode::OutOfRange(KEY_COLUMNS, value)),
            }
        }
    }

    impl Deref for Columns {
        type Target = usize;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }
}
