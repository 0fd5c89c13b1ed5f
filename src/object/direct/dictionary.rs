use ::nom::bytes::complete::tag;
use ::nom::combinator::map;
use ::nom::combinator::opt;
use ::nom::multi::many0;
use ::nom::sequence::delimited;
use ::nom::sequence::pair;
use ::nom::sequence::separated_pair;
use ::nom::sequence::terminated;
use ::nom::IResult;
use ::std::collections::HashMap;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use self::error::DataTypeError;
use super::direct_value;
use super::name::name;
use super::name::Name;
use super::numeric::Integer;
use super::DirectValue;
use crate::parse::character_set::white_space_or_comment;
use crate::parse::error::ParseErrorCode;
use crate::parse::error::ParseResult;
use crate::parse::Parser;
use crate::parse_err;
use crate::Byte;

/// REFERENCE: [7.3.7 Dictionary objects, p30-31]
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Dictionary(HashMap<Name, DirectValue>);

impl Display for Dictionary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<<")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{} {}", key, value)?;
        }
        write!(f, ">>")
    }
}

impl Parser for Dictionary {
    fn parse(buffer: &[Byte]) -> ParseResult<(&[Byte], Self)> {
        dictionary(buffer)
            .map_err(parse_err!(stringify!(Dictionary), ParseErrorCode::NotFound))
    }
}

/// REFERENCE: [7.3.7 Dictionary objects, p30-31]
/// When a key appears more than once, the last value is kept.
pub(crate) fn dictionary(buffer: &[Byte]) -> IResult<&[Byte], Dictionary> {
    map(
        delimited(
            pair(tag("<<"), opt(white_space_or_comment)),
            many0(terminated(
                separated_pair(name, opt(white_space_or_comment), direct_value),
                opt(white_space_or_comment),
            )),
            tag(">>"),
        ),
        Dictionary::from_iter,
    )(buffer)
}

mod convert {
    use ::std::ops::Deref;
    use ::std::result::Result as StdResult;

    use super::*;

    impl FromIterator<(Name, DirectValue)> for Dictionary {
        fn from_iter<T: IntoIterator<Item = (Name, DirectValue)>>(iter: T) -> Self {
            Self(HashMap::from_iter(iter))
        }
    }

    impl Deref for Dictionary {
        type Target = HashMap<Name, DirectValue>;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    impl Dictionary {
        /// REFERENCE: [7.3.7 Dictionary objects, p30]
        /// An entry whose value is `null` is equivalent to an absent entry.
        pub fn get(&self, key: &str) -> Option<&DirectValue> {
            self.0
                .get(key.as_bytes())
                .filter(|value| !matches!(value, DirectValue::Null))
        }

        pub fn insert(&mut self, key: impl Into<Name>, value: impl Into<DirectValue>) {
            self.0.insert(key.into(), value.into());
        }

        pub fn get_name(&self, key: &'static str) -> StdResult<Option<&Name>, DataTypeError> {
            self.get(key)
                .map(|value| {
                    value.as_name().ok_or_else(|| DataTypeError {
                        entry: key,
                        expected_type: stringify!(Name),
                        value: value.clone(),
                    })
                })
                .transpose()
        }

        pub fn get_integer(
            &self,
            key: &'static str,
        ) -> StdResult<Option<&Integer>, DataTypeError> {
            self.get(key)
                .map(|value| {
                    value.as_integer().ok_or_else(|| DataTypeError {
                        entry: key,
                        expected_type: stringify!(Integer),
                        value: value.clone(),
                    })
                })
                .transpose()
        }

        pub fn get_dictionary(
            &self,
            key: &'static str,
        ) -> StdResult<Option<&Dictionary>, DataTypeError> {
            self.get(key)
                .map(|value| {
                    value.as_dictionary().ok_or_else(|| DataTypeError {
                        entry: key,
                        expected_type: stringify!(Dictionary),
                        value: value.clone(),
                    })
                })
                .transpose()
        }
    }
}

pub(crate) mod error {
    use ::thiserror::Error;

    use crate::object::direct::DirectValue;

    #[derive(Debug, Error, PartialEq, Clone)]
    #[error("{entry}: Invalid data type. Expected {expected_type}, found {value}")]
    pub struct DataTypeError {
        pub entry: &'static str,
        pub expected_type: &'static str,
        pub value: DirectValue,
    }
}
