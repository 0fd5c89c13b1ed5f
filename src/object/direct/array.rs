use ::nom::character::complete::char;
use ::nom::combinator::map;
use ::nom::combinator::opt;
use ::nom::multi::many0;
use ::nom::sequence::delimited;
use ::nom::sequence::pair;
use ::nom::sequence::terminated;
use ::nom::IResult;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use super::direct_value;
use super::DirectValue;
use crate::parse::character_set::white_space_or_comment;
use crate::Byte;

/// REFERENCE: [7.3.6 Array objects, p29]
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Array(Vec<DirectValue>);

impl Display for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[")?;
        for (i, obj) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", obj)?;
        }
        write!(f, "]")
    }
}

pub(crate) fn array(buffer: &[Byte]) -> IResult<&[Byte], Array> {
    map(
        delimited(
            pair(char('['), opt(white_space_or_comment)),
            many0(terminated(direct_value, opt(white_space_or_comment))),
            char(']'),
        ),
        Array,
    )(buffer)
}

mod convert {
    use ::std::ops::Deref;

    use super::*;

    impl FromIterator<DirectValue> for Array {
        fn from_iter<T: IntoIterator<Item = DirectValue>>(iter: T) -> Self {
            Self(Vec::from_iter(iter))
        }
    }

    impl Deref for Array {
        type Target = Vec<DirectValue>;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_valid() {
        assert_eq!(array(b"[]").unwrap(), (b"".as_slice(), Array::default()));
        assert_eq!(
            array(b"[ 1 /Two %comment\n 3.0 ] ").unwrap(),
            (
                b" ".as_slice(),
                Array::from_iter([
                    DirectValue::from(1_i128),
                    DirectValue::from("Two"),
                    DirectValue::from(3.0),
                ])
            )
        );
        assert_eq!(
            array(b"[[null]]").unwrap(),
            (
                b"".as_slice(),
                Array::from_iter([DirectValue::from(Array::from_iter([DirectValue::Null]))])
            )
        );
    }

    #[test]
    fn array_invalid() {
        assert!(array(b"[1 2").is_err());
        assert!(array(b"1 2]").is_err());
    }

    #[test]
    fn array_display() {
        let array = Array::from_iter([DirectValue::from("Fl"), DirectValue::from(true)]);
        assert_eq!(array.to_string(), "[/Fl true]");
    }
}
