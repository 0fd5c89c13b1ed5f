use ::std::str::from_utf8;

use crate::Byte;

pub(crate) fn ascii_to_i128(bytes: &[Byte]) -> Option<i128> {
    let mut number = Some(0i128);
    let negative_sign = bytes.first().and_then(|&byte| match byte {
        b'-' => Some(true),
        b'+' => Some(false),
        _ => None,
    });

    for &byte in bytes.iter().skip(negative_sign.is_some() as usize) {
        match byte {
            b'0'..=b'9' => {
                let digit = byte - b'0';
                if let Some(true) = negative_sign {
                    number = number
                        .and_then(|number| number.checked_mul(10))
                        .and_then(|number| number.checked_sub(digit as i128));
                } else {
                    number = number
                        .and_then(|number| number.checked_mul(10))
                        .and_then(|number| number.checked_add(digit as i128));
                }
            }
            _ => return None,
        }
    }
    number
}

pub(crate) fn ascii_to_f64(bytes: &[Byte]) -> Option<f64> {
    from_utf8(bytes)
        .ok()
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

pub(crate) fn hex_val(byte: Byte) -> Option<Byte> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
