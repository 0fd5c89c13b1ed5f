pub(crate) mod array;
pub(crate) mod dictionary;
pub(crate) mod name;
pub(crate) mod numeric;

use ::nom::branch::alt;
use ::nom::combinator::map;
use ::nom::combinator::value;
use ::nom::IResult;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use self::array::array;
use self::array::Array;
use self::dictionary::dictionary;
use self::dictionary::Dictionary;
use self::name::name;
use self::name::Name;
use self::numeric::numeric;
use self::numeric::Integer;
use self::numeric::Numeric;
use crate::parse::error::ParseErrorCode;
use crate::parse::error::ParseResult;
use crate::parse::keyword;
use crate::parse::Parser;
use crate::parse::KW_FALSE;
use crate::parse::KW_NULL;
use crate::parse::KW_TRUE;
use crate::parse_err;
use crate::Byte;

/// REFERENCE: [7.3 Objects, p24]
/// Only the object types that can describe a stream's filter parameters are
/// represented. Strings and indirect references are not supported.
#[derive(Debug, PartialEq, Clone)]
pub enum DirectValue {
    Array(Array),
    Boolean(bool),
    Dictionary(Dictionary),
    Name(Name),
    Null,
    Numeric(Numeric),
}

impl Display for DirectValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Array(array) => write!(f, "{}", array),
            Self::Boolean(boolean) => write!(f, "{}", boolean),
            Self::Dictionary(dictionary) => write!(f, "{}", dictionary),
            Self::Name(name) => write!(f, "{}", name),
            Self::Null => write!(f, "{}", KW_NULL),
            Self::Numeric(numeric) => write!(f, "{}", numeric),
        }
    }
}

impl Parser for DirectValue {
    fn parse(buffer: &[Byte]) -> ParseResult<(&[Byte], Self)> {
        direct_value(buffer)
            .map_err(parse_err!(stringify!(DirectValue), ParseErrorCode::NotFound))
    }
}

pub(crate) fn direct_value(buffer: &[Byte]) -> IResult<&[Byte], DirectValue> {
    alt((
        map(dictionary, DirectValue::Dictionary),
        map(array, DirectValue::Array),
        map(name, DirectValue::Name),
        map(numeric, DirectValue::Numeric),
        value(DirectValue::Boolean(true), keyword(KW_TRUE)),
        value(DirectValue::Boolean(false), keyword(KW_FALSE)),
        value(DirectValue::Null, keyword(KW_NULL)),
    ))(buffer)
}

mod convert {
    use super::*;
    use crate::impl_from;
    use crate::object::direct::numeric::Real;

    impl_from!(Array, Array, DirectValue);
    impl_from!(bool, Boolean, DirectValue);
    impl_from!(Dictionary, Dictionary, DirectValue);
    impl_from!(Name, Name, DirectValue);
    impl_from!(&str, Name, DirectValue);
    impl_from!(Numeric, Numeric, DirectValue);
    impl_from!(Integer, Numeric, DirectValue);
    impl_from!(i128, Numeric, DirectValue);
    impl_from!(Real, Numeric, DirectValue);
    impl_from!(f64, Numeric, DirectValue);

    impl DirectValue {
        pub fn as_name(&self) -> Option<&Name> {
            if let Self::Name(name) = self {
                Some(name)
            } else {
                None
            }
        }

        pub fn as_integer(&self) -> Option<&Integer> {
            if let Self::Numeric(Numeric::Integer(integer)) = self {
                Some(integer)
            } else {
                None
            }
        }

        pub fn as_dictionary(&self) -> Option<&Dictionary> {
            if let Self::Dictionary(dictionary) = self {
                Some(dictionary)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_value_valid() {
        assert_eq!(
            DirectValue::parse(b"/FlateDecode ").unwrap(),
            (b" ".as_slice(), DirectValue::from("FlateDecode"))
        );
        assert_eq!(
            DirectValue::parse(b"12/Columns").unwrap(),
            (b"/Columns".as_slice(), DirectValue::from(12_i128))
        );
        assert_eq!(
            DirectValue::parse(b"-1.5]").unwrap(),
            (b"]".as_slice(), DirectValue::from(-1.5))
        );
        assert_eq!(
            DirectValue::parse(b"true>>").unwrap(),
            (b">>".as_slice(), DirectValue::from(true))
        );
        assert_eq!(
            DirectValue::parse(b"null").unwrap(),
            (b"".as_slice(), DirectValue::Null)
        );
        assert_eq!(
            DirectValue::parse(b"[/AHx /Fl]").unwrap(),
            (
                b"".as_slice(),
                DirectValue::from(Array::from_iter([
                    DirectValue::from("AHx"),
                    DirectValue::from("Fl")
                ]))
            )
        );
    }

    #[test]
    fn direct_value_invalid() {
        let result = DirectValue::parse(b"(A literal string)");
        assert!(matches!(
            result,
            Err(ref err) if err.object == stringify!(DirectValue)
        ));

        assert!(DirectValue::parse(b"nullable").is_err());
    }

    #[test]
    fn direct_value_display() {
        assert_eq!(DirectValue::from("Fl").to_string(), "/Fl");
        assert_eq!(DirectValue::from(8_i128).to_string(), "8");
        assert_eq!(DirectValue::Null.to_string(), "null");
    }
}
