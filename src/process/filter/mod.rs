pub(crate) mod ascii_hex;
pub(crate) mod error;
pub(crate) mod flate;
pub(crate) mod predictor;

use self::ascii_hex::AHx;
use self::error::FilterResult;
use self::flate::Fl;
use crate::Byte;

pub(crate) trait Filter {
    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>>;
}

/// REFERENCE: [Table 6: Standard filters, p35-36]
/// Only the filters below are supported; any other filter name is rejected
/// when the stream dictionary is read.
/// NOTE: This structure is named `Filtering` to avoid conflicts with the
/// `Filter` trait.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum Filtering {
    AHx(AHx),
    Fl(Fl),
}

impl Filter for Filtering {
    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        match self {
            Self::AHx(filtering) => filtering.defilter(bytes),
            Self::Fl(filtering) => filtering.defilter(bytes),
        }
    }
}

mod convert {
    use ::log::debug;
    use ::log::warn;

    use super::*;
    use crate::object::direct::dictionary::Dictionary;
    use crate::object::direct::DirectValue;
    use crate::object::indirect::stream::KEY_DECODEPARMS;
    use crate::object::indirect::stream::KEY_FILTER;
    use crate::process::filter::error::FilterErr;
    use crate::process::filter::error::FilterErrorCode;

    impl Filtering {
        /// REFERENCE: [7.3.8.2 Stream extent, p31-33] and [Table 92 —
        /// Additional abbreviations in an inline image object, p269]
        pub(crate) fn new(dictionary: &Dictionary) -> FilterResult<Self> {
            let name = match dictionary.get(KEY_FILTER) {
                Some(DirectValue::Name(name)) => name,
                Some(value) => {
                    return Err(FilterErr::new(
                        stringify!(Filtering),
                        FilterErrorCode::ValueType(KEY_FILTER, stringify!(Name), value.clone()),
                    ))
                }
                None => {
                    return Err(FilterErr::new(
                        stringify!(Filtering),
                        FilterErrorCode::MissingFilter(KEY_FILTER),
                    ))
                }
            };
            debug!("Filter: {}", name);

            match name.as_bytes() {
                b"AHx" | b"ASCIIHexDecode" => Ok(Self::AHx(AHx)),
                b"Fl" | b"FlateDecode" => {
                    // DecodeParms that is not a dictionary is ignored
                    let decode_parms = dictionary.get(KEY_DECODEPARMS).and_then(|value| {
                        let decode_parms = value.as_dictionary();
                        if decode_parms.is_none() {
                            warn!("Ignoring {}: {}", KEY_DECODEPARMS, value);
                        }
                        decode_parms
                    });
                    Ok(Self::Fl(Fl::new(decode_parms)?))
                }
                _ => Err(FilterErr::new(
                    stringify!(Filtering),
                    FilterErrorCode::Unsupported(name.clone()),
                )),
            }
        }
    }
}
