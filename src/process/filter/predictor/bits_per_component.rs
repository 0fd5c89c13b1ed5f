/// REFERENCE: [Table 8 — Optional parameters for LZWDecode and FlateDecode
/// filters, p40]
/// Only whole-byte components are reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum BitsPerComponent {
    #[default]
    Eight = 8,
}

mod convert {
    use ::std::ops::Deref;

    use super::BitsPerComponent;
    use crate::object::direct::DirectValue;
    use crate::process::filter::predictor::error::PredictorErrorCode;
    use crate::process::filter::predictor::KEY_BITS_PER_COMPONENT;

    impl TryFrom<&DirectValue> for BitsPerComponent {
        type Error = PredictorErrorCode;

        fn try_from(value: &DirectValue) -> Result<Self, Self::Error> {
            let integer = value.as_integer().ok_or_else(|| {
                PredictorErrorCode::ValueType(KEY_BITS_PER_COMPONENT, value.clone())
            })?;
            match **integer {
                8 => Ok(Self::Eight),
                other => Err(PredictorErrorCode::UnsupportedBitsPerComponent(other)),
            }
        }
    }

    impl Deref for BitsPerComponent {
        type Target = usize;

        fn deref(&self) -> &Self::Target {
            match self {
                Self::Eight => &8,
            }
        }
    }
}
