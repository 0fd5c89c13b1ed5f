use ::nom::branch::alt;
use ::nom::character::complete::char;
use ::nom::character::complete::digit0;
use ::nom::character::complete::digit1;
use ::nom::combinator::map_opt;
use ::nom::combinator::opt;
use ::nom::combinator::recognize;
use ::nom::sequence::pair;
use ::nom::sequence::preceded;
use ::nom::IResult;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use crate::parse::num::ascii_to_f64;
use crate::Byte;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Real(f64);

impl Display for Real {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// REFERENCE: [7.3.3 Numeric objects, p24]
/// A real number is represented in its decimal form and does not permit
/// exponential notation.
pub(crate) fn real(buffer: &[Byte]) -> IResult<&[Byte], Real> {
    map_opt(
        recognize(pair(
            opt(alt((char('-'), char('+')))),
            alt((
                recognize(pair(digit1, opt(preceded(char('.'), digit0)))),
                recognize(pair(digit0, preceded(char('.'), digit1))),
            )),
        )),
        |value| ascii_to_f64(value).map(Real),
    )(buffer)
}

mod convert {
    use ::std::ops::Deref;

    use super::*;

    impl From<f64> for Real {
        fn from(value: f64) -> Self {
            Self(value)
        }
    }

    impl Deref for Real {
        type Target = f64;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_real_valid() {
        assert_eq!(real(b"1.5").unwrap(), (b"".as_slice(), Real(1.5)));
        assert_eq!(real(b"-.25 ").unwrap(), (b" ".as_slice(), Real(-0.25)));
        assert_eq!(real(b"+4.]").unwrap(), (b"]".as_slice(), Real(4.0)));
        assert_eq!(real(b"7").unwrap(), (b"".as_slice(), Real(7.0)));
    }

    #[test]
    fn numeric_real_invalid() {
        assert!(real(b".").is_err());
        assert!(real(b"+").is_err());
        assert!(real(b"/Real").is_err());
    }
}
