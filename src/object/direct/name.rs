use ::nom::bytes::complete::take_while;
use ::nom::character::complete::char;
use ::nom::combinator::map_opt;
use ::nom::sequence::preceded;
use ::nom::IResult;
use ::std::borrow::Borrow;
use ::std::fmt::Debug;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use crate::fmt::debug_bytes;
use crate::parse::character_set::is_regular;
use crate::parse::num::hex_val;
use crate::Byte;

/// REFERENCE: [7.3.5 Name objects, p27-28]
/// The bytes are stored with any `#xx` escape sequences already resolved.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Name(Vec<Byte>);

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "/")?;
        for &byte in self.0.iter() {
            if byte != b'#' && is_regular(byte) && byte.is_ascii_graphic() {
                write!(f, "{}", char::from(byte))?;
            } else {
                write!(f, "#{:02X}", byte)?;
            }
        }
        Ok(())
    }
}

impl Debug for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "/{}", debug_bytes(&self.0))
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl Borrow<[Byte]> for Name {
    fn borrow(&self) -> &[Byte] {
        &self.0
    }
}

/// REFERENCE: [7.3.5 Name objects, p27-28]
pub(crate) fn name(buffer: &[Byte]) -> IResult<&[Byte], Name> {
    preceded(char('/'), map_opt(take_while(is_regular), unescape))(buffer)
}

/// Resolve `#xx` escape sequences. A number sign that is not followed by two
/// hexadecimal digits invalidates the name.
fn unescape(bytes: &[Byte]) -> Option<Name> {
    let mut unescaped = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter();
    while let Some(&byte) = iter.next() {
        if byte == b'#' {
            let high = iter.next().copied().and_then(hex_val)?;
            let low = iter.next().copied().and_then(hex_val)?;
            unescaped.push(high << 4 | low);
        } else {
            unescaped.push(byte);
        }
    }
    Some(Name(unescaped))
}

mod convert {
    use super::*;

    impl From<&[Byte]> for Name {
        fn from(value: &[Byte]) -> Self {
            Self(value.into())
        }
    }

    impl From<&str> for Name {
        fn from(value: &str) -> Self {
            Self::from(value.as_bytes())
        }
    }

    impl Name {
        pub fn as_bytes(&self) -> &[Byte] {
            &self.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_valid() {
        assert_eq!(
            name(b"/FlateDecode").unwrap(),
            (b"".as_slice(), Name::from("FlateDecode"))
        );
        assert_eq!(
            name(b"/A_B+C^1!2@3 ").unwrap(),
            (b" ".as_slice(), Name::from("A_B+C^1!2@3"))
        );
        assert_eq!(
            name(b"/Filter/AHx").unwrap(),
            (b"/AHx".as_slice(), Name::from("Filter"))
        );
        assert_eq!(
            name(b"/#41#20Name)").unwrap(),
            (b")".as_slice(), Name::from("A Name"))
        );
        // The empty name is valid
        assert_eq!(name(b"/ ").unwrap(), (b" ".as_slice(), Name::default()));
    }

    #[test]
    fn name_invalid() {
        assert!(name(b"Name").is_err());
        assert!(name(b"/Name#_").is_err());
        assert!(name(b"/Name#7").is_err());
        assert!(name(b"/Name#").is_err());
    }

    #[test]
    fn name_display() {
        assert_eq!(Name::from("ASCIIHexDecode").to_string(), "/ASCIIHexDecode");
        assert_eq!(Name::from("A Name#").to_string(), "/A#20Name#23");
        assert_eq!(format!("{:?}", Name::from("Fl")), "/Fl");
    }

    #[test]
    fn name_eq_str() {
        assert!(Name::from("Fl") == *"Fl");
        assert!(Name::from("Fl") != *"FlateDecode");
    }
}
