pub(crate) mod character_set;
pub(crate) mod error;
pub(crate) mod num;

use ::nom::bytes::complete::tag;
use ::nom::bytes::complete::take_while1;
use ::nom::combinator::not;
use ::nom::sequence::terminated;
use ::nom::IResult;

use self::character_set::is_regular;
use self::error::ParseResult;
use crate::Byte;

pub(crate) const KW_ENDSTREAM: &str = "endstream";
pub(crate) const KW_FALSE: &str = "false";
pub(crate) const KW_NULL: &str = "null";
pub(crate) const KW_STREAM: &str = "stream";
pub(crate) const KW_TRUE: &str = "true";

/// Parse an object from the start of `buffer`, returning the remaining bytes
/// along with the parsed object.
pub trait Parser {
    fn parse(buffer: &[Byte]) -> ParseResult<(&[Byte], Self)>
    where
        Self: Sized;
}

/// A keyword token must not run into the regular characters that follow it,
/// e.g. `nullx` is not `null`.
pub(crate) fn keyword<'buffer>(
    kw: &'static str,
) -> impl FnMut(&'buffer [Byte]) -> IResult<&'buffer [Byte], &'buffer [Byte]> {
    terminated(tag(kw), not(take_while1(is_regular)))
}
