use ::nom::error::ErrorKind;
use ::thiserror::Error;

use crate::fmt::debug_bytes;
use crate::object::direct::dictionary::error::DataTypeError;
use crate::Byte;

pub type ParseResult<T> = Result<T, ParseErr>;

#[derive(Debug, Error, PartialEq, Clone)]
#[error("{object}: {code}. Input: {input}")]
pub struct ParseErr {
    pub(crate) object: &'static str,
    pub(crate) code: ParseErrorCode,
    pub(crate) input: String,
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ParseErrorCode {
    #[error("Not found: {0:?}")]
    NotFound(ErrorKind),
    #[error("Missing stream keyword: {0:?}")]
    MissingStream(ErrorKind),
    #[error("Missing data: {0:?}")]
    MissingData(ErrorKind),
    #[error("Missing closing: {0:?}")]
    MissingClosing(ErrorKind),
    #[error("Missing Length entry")]
    MissingLength,
    #[error("Invalid Length: {0}")]
    Length(i128),
    #[error("Data type: {0}")]
    DataType(#[from] DataTypeError),
}

impl ParseErr {
    pub(crate) fn new(object: &'static str, code: ParseErrorCode, input: &[Byte]) -> Self {
        Self {
            object,
            code,
            input: debug_bytes(input),
        }
    }

    pub fn code(&self) -> &ParseErrorCode {
        &self.code
    }
}

#[macro_export]
macro_rules! parse_err {
    ($object:expr, $code:path) => {
        |err: ::nom::Err<::nom::error::Error<&[$crate::Byte]>>| match err {
            ::nom::Err::Incomplete(_) => unreachable!(
                "::nom::complete functions do not return the Incomplete error variant."
            ),
            ::nom::Err::Error(e) | ::nom::Err::Failure(e) => {
                $crate::parse::error::ParseErr::new($object, $code(e.code), e.input)
            }
        }
    };
}
