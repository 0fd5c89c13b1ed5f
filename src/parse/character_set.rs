use ::log::trace;
use ::nom::branch::alt;
use ::nom::bytes::complete::tag;
use ::nom::bytes::complete::take_till;
use ::nom::bytes::complete::take_while;
use ::nom::bytes::complete::take_while1;
use ::nom::character::complete::char;
use ::nom::combinator::opt;
use ::nom::combinator::recognize;
use ::nom::multi::many1;
use ::nom::sequence::delimited;
use ::nom::sequence::preceded;
use ::nom::IResult;

use crate::fmt::debug_bytes;
use crate::Byte;

/// REFERENCE: [3.68 white-space character, p14] and ["Table 1 — White-space
/// characters" in 7.2.3, "Character set", p22]
pub(crate) const fn is_white_space(byte: Byte) -> bool {
    byte == b'\x09' // HORIZONTAL TABULATION
        || byte == b'\x0A' // LINE FEED
        || byte == b'\x0C' // FORM FEED
        || byte == b'\x0D' // CARRIAGE RETURN
        || byte == b'\x20' // SPACE
        || byte == b'\x00' // NULL
}

/// REFERENCE: [7.2.3 Character set, p22]
pub(crate) fn white_space(buffer: &[Byte]) -> IResult<&[Byte], &[Byte]> {
    take_while1(is_white_space)(buffer)
}

/// REFERENCE: [7.2.4 Comments, p23]
pub(crate) fn comment(buffer: &[Byte]) -> IResult<&[Byte], &[Byte]> {
    let (buffer, comment) =
        preceded(char('%'), take_till(|byte| byte == b'\n' || byte == b'\r'))(buffer)?;

    trace!("Comment: {}", debug_bytes(comment));
    Ok((buffer, comment))
}

/// REFERENCE: [7.2.4 Comments, p23]
pub(crate) fn white_space_or_comment(buffer: &[Byte]) -> IResult<&[Byte], &[Byte]> {
    // A comment is treated as a single white-space character.
    recognize(many1(alt((white_space, comment))))(buffer)
}

/// REFERENCE: [7.2.3 Character set, p22]
pub(crate) fn eol(buffer: &[Byte]) -> IResult<&[Byte], &[Byte]> {
    // HACK Some producers emit a white space before or after the EOL marker
    delimited(
        take_while(|byte| byte == b'\x09' || byte == b'\x0C' || byte == b'\x20' || byte == b'\x00'),
        alt((tag(b"\r\n"), tag(b"\n"), tag(b"\r"))),
        opt(white_space),
    )(buffer)
}

/// REFERENCE: [7.2.3 Character set, p22]
pub(crate) const fn is_delimiter(byte: Byte) -> bool {
    byte == b'('
        || byte == b')'
        || byte == b'<'
        || byte == b'>'
        || byte == b'['
        || byte == b']'
        || byte == b'{'
        || byte == b'}'
        || byte == b'/'
        || byte == b'%'
}

/// REFERENCE: [7.2.3 Character set, p23] indicates that regular characters are
/// not restricted to the ASCII range.
pub(crate) const fn is_regular(byte: Byte) -> bool {
    !is_white_space(byte) && !is_delimiter(byte)
}

#[cfg(test)]
mod tests {
    use ::nom::error::Error as NomError;
    use ::nom::error::ErrorKind;
    use ::nom::Err as NomErr;

    use super::*;

    #[test]
    fn white_space_valid() {
        assert_eq!(
            white_space(b" .").unwrap(),
            (b".".as_slice(), b" ".as_slice())
        );
        assert_eq!(
            white_space(b"\t\r\n\x0C\x00.").unwrap(),
            (b".".as_slice(), b"\t\r\n\x0C\x00".as_slice())
        );
        assert_eq!(
            white_space(b"  %%EOF\n").unwrap(),
            (b"%%EOF\n".as_slice(), b"  ".as_slice())
        );
    }

    #[test]
    fn white_space_invalid() {
        let parse_result = white_space(b">");
        let expected_error = Err(NomErr::Error(NomError::new(
            b">".as_slice(),
            ErrorKind::TakeWhile1,
        )));
        assert_eq!(parse_result, expected_error);
    }

    #[test]
    fn comment_valid() {
        assert_eq!(
            comment(b"%\r\n").unwrap(),
            (b"\r\n".as_slice(), b"".as_slice())
        );
        assert_eq!(
            comment(b"%PDF\rLINE2%ANOTHER COMMENT\n").unwrap(),
            (b"\rLINE2%ANOTHER COMMENT\n".as_slice(), b"PDF".as_slice())
        );
    }

    #[test]
    fn white_space_or_comment_valid() {
        assert_eq!(
            white_space_or_comment(b"  %A COMMENT\n<").unwrap(),
            (b"<".as_slice(), b"  %A COMMENT\n".as_slice())
        );
        assert_eq!(
            white_space_or_comment(b"%first\r%second\n/Name").unwrap(),
            (b"/Name".as_slice(), b"%first\r%second\n".as_slice())
        );
    }

    #[test]
    fn eol_valid() {
        assert_eq!(
            eol(b"\r\nendstream").unwrap(),
            (b"endstream".as_slice(), b"\r\n".as_slice())
        );
        assert_eq!(
            eol(b" \n  endstream").unwrap(),
            (b"endstream".as_slice(), b"\n".as_slice())
        );
        assert_eq!(
            eol(b"\rX").unwrap(),
            (b"X".as_slice(), b"\r".as_slice())
        );
    }

    #[test]
    fn character_classes() {
        assert!(is_delimiter(b'/'));
        assert!(is_delimiter(b'>'));
        assert!(!is_delimiter(b'A'));
        assert!(is_regular(b'A'));
        assert!(is_regular(b'#'));
        assert!(!is_regular(b' '));
        assert!(!is_regular(b'['));
    }
}
