mod convert;
mod fmt;
mod object;
mod parse;
mod process;

pub use self::object::direct::array::Array;
pub use self::object::direct::dictionary::error::DataTypeError;
pub use self::object::direct::dictionary::Dictionary;
pub use self::object::direct::name::Name;
pub use self::object::direct::numeric::Integer;
pub use self::object::direct::numeric::Numeric;
pub use self::object::direct::numeric::Real;
pub use self::object::direct::DirectValue;
pub use self::object::indirect::stream::Stream;
pub use self::parse::error::ParseErr;
pub use self::parse::error::ParseErrorCode;
pub use self::parse::error::ParseResult;
pub use self::parse::Parser;
pub use self::process::filter::ascii_hex::error::AHxErrorCode;
pub use self::process::filter::error::ErrorKind;
pub use self::process::filter::error::FilterErr;
pub use self::process::filter::error::FilterErrorCode;
pub use self::process::filter::error::FilterResult;
pub use self::process::filter::flate::error::FlErrorCode;
pub use self::process::filter::predictor::error::PredictorErrorCode;
pub use self::process::filter::predictor::png::error::PngErrorCode;
pub use self::process::filter::predictor::tiff::error::TiffErrorCode;

// Limit the size of the decoded stream to 1 GiB.
const DECODED_LIMIT: usize = 1 << 30;
const MAX_DEBUG_BYTES: usize = 100;

/// REFERENCE: [4.7 byte, p7]
type Byte = u8;

#[cfg(test)]
mod tests {
    #[macro_export]
    macro_rules! assert_err_eq {
        ($result:expr, $expected_error:expr) => {
            assert_eq!($result, Err($expected_error.into()));
        };
    }
}
