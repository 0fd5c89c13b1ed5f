pub(crate) mod integer;
pub(crate) mod real;

use ::nom::branch::alt;
use ::nom::combinator::map;
use ::nom::IResult;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

pub use self::integer::Integer;
pub use self::real::Real;
use self::integer::integer;
use self::real::real;
use crate::Byte;

/// REFERENCE: [7.3.3 Numeric objects, p24]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Numeric {
    Integer(Integer),
    Real(Real),
}

impl Display for Numeric {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Real(r) => write!(f, "{}", r),
        }
    }
}

/// Integers that overflow i128 are still valid reals.
pub(crate) fn numeric(buffer: &[Byte]) -> IResult<&[Byte], Numeric> {
    alt((map(integer, Numeric::Integer), map(real, Numeric::Real)))(buffer)
}

mod convert {
    use super::*;
    use crate::impl_from;

    impl_from!(Integer, Integer, Numeric);
    impl_from!(i128, Integer, Numeric);
    impl_from!(Real, Real, Numeric);
    impl_from!(f64, Real, Numeric);
}
