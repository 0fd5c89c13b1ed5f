use ::log::warn;

use self::error::AHxErrorCode;
use super::Filter;
use crate::fmt::debug_bytes;
use crate::parse::character_set::is_white_space;
use crate::process::filter::error::FilterResult;
use crate::Byte;

/// ASCII hexadecimal filter.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) struct AHx;

impl Filter for AHx {
    /// REFERENCE: [7.4.2 ASCIIHexDecode filter, p37]
    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        let bytes = bytes.as_ref();
        let mut digits = Vec::with_capacity(bytes.len() + 1);
        let mut eod = None;
        for (i, &byte) in bytes.iter().enumerate() {
            if is_white_space(byte) {
                continue;
            }
            if byte == b'>' {
                eod = Some(i);
                break;
            }
            if !byte.is_ascii_hexdigit() {
                return Err(AHxErrorCode::InvalidHexDigit(char::from(byte)).into());
            }
            digits.push(byte);
        }
        let eod = eod.ok_or(AHxErrorCode::MissingEod)?;

        let trailing = &bytes[eod + 1..];
        if trailing.iter().any(|&byte| !is_white_space(byte)) {
            warn!("Ignoring data after the EOD marker: {}", debug_bytes(trailing));
        }

        // An odd number of digits behaves as if a 0 followed the last digit
        if digits.len() % 2 == 1 {
            digits.push(b'0');
        }

        let defiltered =
            ::hex::decode(&digits).map_err(|err| AHxErrorCode::Decode(err.to_string()))?;
        Ok(defiltered)
    }
}

pub(crate) mod error {
    use ::thiserror::Error;

    #[derive(Debug, Error, PartialEq, Clone)]
    pub enum AHxErrorCode {
        #[error("Invalid ASCII hexadecimal digit: {0}")]
        InvalidHexDigit(char),
        #[error("Missing EOD marker")]
        MissingEod,
        #[error("Decoding: {0}")]
        Decode(String),
    }
}
