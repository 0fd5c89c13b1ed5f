use ::nom::branch::alt;
use ::nom::character::complete::char;
use ::nom::character::complete::digit1;
use ::nom::combinator::map_opt;
use ::nom::combinator::not;
use ::nom::combinator::opt;
use ::nom::combinator::recognize;
use ::nom::sequence::pair;
use ::nom::sequence::terminated;
use ::nom::IResult;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use crate::parse::num::ascii_to_i128;
use crate::Byte;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Integer(i128);

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// REFERENCE: [7.3.3 Numeric objects, p24]
/// Real numbers cannot be used where integers are expected. Hence, the next
/// character should not be '.'
pub(crate) fn integer(buffer: &[Byte]) -> IResult<&[Byte], Integer> {
    terminated(
        map_opt(
            recognize(pair(opt(alt((char('-'), char('+')))), digit1)),
            |value| ascii_to_i128(value).map(Integer),
        ),
        not(char('.')),
    )(buffer)
}

mod convert {
    use ::std::ops::Deref;

    use super::*;

    impl From<i128> for Integer {
        fn from(value: i128) -> Self {
            Self(value)
        }
    }

    impl Deref for Integer {
        type Target = i128;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    impl Integer {
        pub(crate) fn as_usize(&self) -> Option<usize> {
            usize::try_from(self.0).ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use ::nom::error::Error as NomError;
    use ::nom::error::ErrorKind;
    use ::nom::Err as NomErr;

    use super::*;

    #[test]
    fn numeric_integer_valid() {
        assert_eq!(integer(b"0").unwrap(), (b"".as_slice(), Integer(0)));
        assert_eq!(integer(b"+1 ").unwrap(), (b" ".as_slice(), Integer(1)));
        assert_eq!(integer(b"-12/").unwrap(), (b"/".as_slice(), Integer(-12)));
        assert_eq!(
            integer(b"-170141183460469231731687303715884105728<").unwrap(),
            (b"<".as_slice(), Integer(i128::MIN))
        );
    }

    #[test]
    fn numeric_integer_invalid() {
        assert_eq!(
            integer(b"1.0"),
            Err(NomErr::Error(NomError::new(b".0".as_slice(), ErrorKind::Not)))
        );
        assert!(integer(b"170141183460469231731687303715884105728").is_err());
        assert!(integer(b"A").is_err());
    }

    #[test]
    fn numeric_integer_as_usize() {
        assert_eq!(Integer(8).as_usize(), Some(8));
        assert_eq!(Integer(-1).as_usize(), None);
    }
}
