use ::flate2::read::ZlibDecoder;
use ::log::trace;
use ::std::io::Read;

use self::error::FlErrorCode;
use super::predictor::Predictor;
use super::Filter;
use crate::process::filter::error::FilterResult;
use crate::Byte;
use crate::DECODED_LIMIT;

/// REFERENCE: [7.4.4 LZWDecode and FlateDecode filters, p38]
/// zlib/deflate compression filter.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub(crate) struct Fl {
    predictor: Predictor,
}

impl Filter for Fl {
    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        let defiltered = inflate(bytes.as_ref(), DECODED_LIMIT)?;
        trace!("Inflated {} bytes into {}", bytes.as_ref().len(), defiltered.len());

        self.predictor.defilter(defiltered)
    }
}

/// Decompress a zlib stream, failing rather than truncating when the output
/// would exceed `limit` bytes.
fn inflate(bytes: &[Byte], limit: usize) -> Result<Vec<Byte>, FlErrorCode> {
    let mut defiltered = Vec::default();

    // Read one byte past the limit to tell an exact fit from an overflow
    let mut defilter = ZlibDecoder::new(bytes).take(limit as u64 + 1);
    defilter
        .read_to_end(&mut defiltered)
        .map_err(|err| FlErrorCode::Defilter(err.to_string()))?;

    if defiltered.len() > limit {
        return Err(FlErrorCode::Limit(limit));
    }
    Ok(defiltered)
}

mod convert {
    use super::*;
    use crate::object::direct::dictionary::Dictionary;

    impl Fl {
        pub(in crate::process::filter) fn new(
            decode_parms: Option<&Dictionary>,
        ) -> FilterResult<Self> {
            if let Some(decode_parms) = decode_parms {
                let predictor = Predictor::new(decode_parms)?;
                Ok(Self { predictor })
            } else {
                Ok(Self::default())
            }
        }
    }
}

pub(crate) mod error {
    use ::thiserror::Error;

    #[derive(Debug, Error, PartialEq, Clone)]
    pub enum FlErrorCode {
        // flate2 reports failures as io::Error, which is neither Clone nor
        // PartialEq, so only its message is kept
        #[error("Defiltering: {0}")]
        Defilter(String),
        #[error("Decoded data exceeds the limit of {0} bytes")]
        Limit(usize),
    }
}
