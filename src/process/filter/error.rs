use ::thiserror::Error;

use super::ascii_hex::error::AHxErrorCode;
use super::flate::error::FlErrorCode;
use super::predictor::error::PredictorErrorCode;
use super::predictor::png::error::PngErrorCode;
use super::predictor::tiff::error::TiffErrorCode;
use crate::object::direct::name::Name;
use crate::object::direct::DirectValue;
use crate::object::indirect::stream::KEY_FILTER;

pub type FilterResult<T> = Result<T, FilterErr>;

/// A filter failure along with the filter, or filter parameter, it concerns.
#[derive(Debug, Error, PartialEq, Clone)]
#[error("{object}. Error: {code}")]
pub struct FilterErr {
    pub(crate) object: &'static str,
    pub(crate) code: FilterErrorCode,
}

// FlErrorCode does not implement Copy
#[derive(Debug, Error, PartialEq, Clone)]
pub enum FilterErrorCode {
    #[error("Unsupported filter. Found: {0}")]
    Unsupported(Name),
    #[error("Missing required entry: {0}")]
    MissingFilter(&'static str),
    #[error("{0}: Wrong value type. Expected {1}. Found: {2}")]
    ValueType(&'static str, &'static str, DirectValue),
    //
    #[error("Predictor: {0}")]
    Predictor(PredictorErrorCode),
    #[error("Tiff: {0}")]
    Tiff(TiffErrorCode),
    #[error("Png: {0}")]
    Png(PngErrorCode),
    #[error("ASCIIHex: {0}")]
    AHx(AHxErrorCode),
    #[error("Flate: {0}")]
    Fl(FlErrorCode),
}

/// The failure categories a caller can act upon, independent of the filter
/// that raised them.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    UnsupportedFilter,
    UnsupportedPredictor,
    UnsupportedBitsPerComponent,
    MissingPredictorColumns,
    InvalidParameter,
    InvalidRowLength,
    InvalidFilterByte,
    InvalidHexCharacter,
    UnterminatedHexStream,
    HexDecodeError,
    DecompressionError,
    DecodedLimitExceeded,
}

mod convert {
    use super::*;

    impl FilterErr {
        pub fn new(object: &'static str, code: FilterErrorCode) -> Self {
            Self { object, code }
        }

        pub fn object(&self) -> &'static str {
            self.object
        }

        pub fn code(&self) -> &FilterErrorCode {
            &self.code
        }

        pub fn kind(&self) -> ErrorKind {
            match &self.code {
                FilterErrorCode::Unsupported(_)
                | FilterErrorCode::MissingFilter(_)
                | FilterErrorCode::ValueType(KEY_FILTER, _, _) => {
                    ErrorKind::UnsupportedFilter
                }
                FilterErrorCode::ValueType(..) => ErrorKind::InvalidParameter,
                FilterErrorCode::Predictor(code) => match code {
                    PredictorErrorCode::Unsupported(_) => ErrorKind::UnsupportedPredictor,
                    PredictorErrorCode::UnsupportedBitsPerComponent(_) => {
                        ErrorKind::UnsupportedBitsPerComponent
                    }
                    PredictorErrorCode::MissingColumns => ErrorKind::MissingPredictorColumns,
                    PredictorErrorCode::ValueType(..) | PredictorErrorCode::OutOfRange(..) => {
                        ErrorKind::InvalidParameter
                    }
                },
                FilterErrorCode::Tiff(_) => ErrorKind::InvalidRowLength,
                FilterErrorCode::Png(code) => match code {
                    PngErrorCode::InvalidRowLength(..) => ErrorKind::InvalidRowLength,
                    PngErrorCode::InvalidFilterByte(_) => ErrorKind::InvalidFilterByte,
                },
                FilterErrorCode::AHx(code) => match code {
                    AHxErrorCode::InvalidHexDigit(_) => ErrorKind::InvalidHexCharacter,
                    AHxErrorCode::MissingEod => ErrorKind::UnterminatedHexStream,
                    AHxErrorCode::Decode(_) => ErrorKind::HexDecodeError,
                },
                FilterErrorCode::Fl(code) => match code {
                    FlErrorCode::Defilter(_) => ErrorKind::DecompressionError,
                    FlErrorCode::Limit(_) => ErrorKind::DecodedLimitExceeded,
                },
            }
        }
    }

    macro_rules! filter_err_from {
        ($from:ty, $object:ident) => {
            impl From<$from> for FilterErr {
                fn from(code: $from) -> Self {
                    Self::new(stringify!($object), FilterErrorCode::$object(code))
                }
            }
        };
    }

    filter_err_from!(PredictorErrorCode, Predictor);
    filter_err_from!(TiffErrorCode, Tiff);
    filter_err_from!(PngErrorCode, Png);
    filter_err_from!(AHxErrorCode, AHx);
    filter_err_from!(FlErrorCode, Fl);
}
