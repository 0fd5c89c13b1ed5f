use ::nom::bytes::complete::tag;
use ::nom::bytes::complete::take;
use ::nom::character::complete::char;
use ::nom::combinator::opt;
use ::nom::error::Error as NomError;
use ::nom::sequence::delimited;
use ::nom::sequence::preceded;
use ::nom::sequence::tuple;
use ::std::fmt::Debug;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use crate::fmt::debug_bytes;
use crate::object::direct::dictionary::Dictionary;
use crate::parse::character_set::eol;
use crate::parse::character_set::white_space_or_comment;
use crate::parse::error::ParseErr;
use crate::parse::error::ParseErrorCode;
use crate::parse::error::ParseResult;
use crate::parse::Parser;
use crate::parse::KW_ENDSTREAM;
use crate::parse::KW_STREAM;
use crate::parse_err;
use crate::Byte;

pub(crate) const KEY_LENGTH: &str = "Length";
pub(crate) const KEY_FILTER: &str = "Filter";
pub(crate) const KEY_DECODEPARMS: &str = "DecodeParms";

/// REFERENCE: [7.3.8 Stream objects, p31]
/// The stream dictionary along with the raw, still encoded, stream data.
#[derive(PartialEq, Default, Clone)]
pub struct Stream {
    pub(crate) dictionary: Dictionary,
    pub(crate) data: Vec<Byte>,
}

impl Debug for Stream {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "{}\n{}", self.dictionary, KW_STREAM)?;
        writeln!(f, "{}", debug_bytes(&self.data))?;
        write!(f, "{}", KW_ENDSTREAM)
    }
}

impl Parser for Stream {
    /// REFERENCE: [7.3.8 Stream objects, p31-32]
    fn parse(buffer: &[Byte]) -> ParseResult<(&[Byte], Self)> {
        let (remains, _) = opt(white_space_or_comment)(buffer)
            .map_err(parse_err!(stringify!(Stream), ParseErrorCode::NotFound))?;
        let (remains, dictionary) = Dictionary::parse(remains)?;

        let (remains, _) = tuple((
            opt(white_space_or_comment),
            tag(KW_STREAM),
            preceded(opt(char('\r')), char('\n')),
        ))(remains)
        .map_err(parse_err!(stringify!(Stream), ParseErrorCode::MissingStream))?;

        let length = dictionary
            .get_integer(KEY_LENGTH)
            .map_err(|err| ParseErr::new(stringify!(Stream), err.into(), remains))?
            .ok_or_else(|| {
                ParseErr::new(stringify!(Stream), ParseErrorCode::MissingLength, remains)
            })?;
        let length = length.as_usize().ok_or_else(|| {
            ParseErr::new(stringify!(Stream), ParseErrorCode::Length(**length), remains)
        })?;

        let (remains, data) = take::<_, _, NomError<_>>(length)(remains)
            .map_err(parse_err!(stringify!(Stream), ParseErrorCode::MissingData))?;

        let (remains, _) = delimited(opt(eol), tag(KW_ENDSTREAM), opt(white_space_or_comment))(
            remains,
        )
        .map_err(parse_err!(stringify!(Stream), ParseErrorCode::MissingClosing))?;

        Ok((remains, Self::new(dictionary, data)))
    }
}

mod process {
    use ::log::debug;

    use super::*;
    use crate::process::filter::error::FilterResult;
    use crate::process::filter::Filter;
    use crate::process::filter::Filtering;

    impl Stream {
        /// Decode the stream data according to the `Filter` and `DecodeParms`
        /// entries of the stream dictionary. Decoding is all-or-nothing: on
        /// failure, no partially decoded data is returned.
        pub fn defilter(&self) -> FilterResult<Vec<Byte>> {
            let filtering = Filtering::new(&self.dictionary)?;
            debug!("Defiltering {} bytes with {:?}", self.data.len(), filtering);
            filtering.defilter(self.data.as_slice())
        }
    }
}

mod convert {
    use super::*;

    impl Stream {
        pub fn new(dictionary: impl Into<Dictionary>, data: impl Into<Vec<Byte>>) -> Self {
            Self {
                dictionary: dictionary.into(),
                data: data.into(),
            }
        }

        pub fn dictionary(&self) -> &Dictionary {
            &self.dictionary
        }

        pub fn data(&self) -> &[Byte] {
            &self.data
        }
    }
}
