use self::error::PngErrorCode;
use super::PredictorParms;
use crate::process::filter::error::FilterResult;
use crate::process::filter::Filter;
use crate::Byte;

/// REFERENCE:
/// - [7.4.4.4 LZW and Flate predictor functions, p41]
/// - [[https://www.w3.org/TR/PNG-Filters.html]]
/// The World Wide Web Consortium’s Portable Network Graphics filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Png {
    parms: PredictorParms,
}

/// REFERENCE: [[https://www.w3.org/TR/PNG-Filters.html] 6. Filter Algorithms]
/// Only the filter types that depend on a single neighbour are reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PngAlgorithm {
    None = 0,
    Sub = 1,
    Up = 2,
}

impl Filter for Png {
    /// REFERENCE: [7.4.4.4 LZW and Flate predictor functions, p42]
    /// Every row starts with its filter type byte, which is dropped from the
    /// output. Rows are reversed in place and in order since `Up` reads the
    /// previous reconstructed row.
    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        let length = bytes.as_ref().len();

        let bytes_per_row = *self.parms.columns * (*self.parms.bits_per_component / 8);
        let row_length = bytes_per_row
            .checked_add(1)
            .ok_or(PngErrorCode::InvalidRowLength(length, bytes_per_row))?;
        if length % row_length != 0 {
            return Err(PngErrorCode::InvalidRowLength(length, row_length).into());
        }

        // The first row sees an empty prior row, standing for a row of zeros
        let mut reconstructed: Vec<Byte> = bytes.into();
        for offset in (0..length).step_by(row_length) {
            let (prior_rows, remains) = reconstructed.split_at_mut(offset);
            let row = &mut remains[..row_length];
            let prior_row = &prior_rows[offset.saturating_sub(row_length)..];
            let rev_fn = PngAlgorithm::try_from(row[0])?.rev_fn();
            rev_fn(row, prior_row);
        }

        let defiltered = reconstructed
            .chunks_exact(row_length)
            .flat_map(|row| &row[1..])
            .copied()
            .collect();
        Ok(defiltered)
    }
}

mod process {
    use super::*;

    type PngRevFn = fn(&mut [Byte], &[Byte]);

    impl PngAlgorithm {
        pub(super) fn rev_fn(&self) -> PngRevFn {
            match self {
                Self::None => rev_none,
                Self::Sub => rev_sub,
                Self::Up => rev_up,
            }
        }
    }

    // Both rows include the filter type byte at index 0. The prior row is
    // empty for the first row.

    #[inline]
    fn rev_none(_row: &mut [Byte], _prior_row: &[Byte]) {}

    /// REFERENCE: [[https://www.w3.org/TR/PNG-Filters.html] 6.3. Filter type 1:
    /// Sub]
    /// The first data byte has no left neighbour and is kept as is.
    #[inline]
    fn rev_sub(row: &mut [Byte], _prior_row: &[Byte]) {
        for j in 2..row.len() {
            row[j] = row[j].wrapping_add(row[j - 1]);
        }
    }

    /// REFERENCE: [[https://www.w3.org/TR/PNG-Filters.html] 6.4. Filter type 2:
    /// Up]
    #[inline]
    fn rev_up(row: &mut [Byte], prior_row: &[Byte]) {
        for (byte, up) in row.iter_mut().zip(prior_row).skip(1) {
            *byte = byte.wrapping_add(*up);
        }
    }
}

mod convert {
    use super::*;

    impl Png {
        pub(in crate::process::filter::predictor) fn new(parms: PredictorParms) -> Self {
            Self { parms }
        }
    }

    impl TryFrom<Byte> for PngAlgorithm {
        type Error = PngErrorCode;

        fn try_from(value: Byte) -> Result<Self, Self::Error> {
            match value {
                0 => Ok(Self::None),
                1 => Ok(Self::Sub),
                2 => Ok(Self::Up),
                // Average and Paeth are not reversed
                _ => Err(PngErrorCode::InvalidFilterByte(value)),
            }
        }
    }
}

pub(crate) mod error {
    use ::thiserror::Error;

    use crate::Byte;

    #[derive(Debug, Error, PartialEq, Clone)]
    pub enum PngErrorCode {
        #[error("Data length {0} is not a multiple of the row length {1}")]
        InvalidRowLength(usize, usize),
        #[error("Unsupported filter type byte: {0}")]
        InvalidFilterByte(Byte),
    }
}
