use self::error::TiffErrorCode;
use super::PredictorParms;
use crate::process::filter::error::FilterResult;
use crate::process::filter::Filter;
use crate::Byte;

/// REFERENCE: [7.4.4.4 LZW and Flate predictor functions, p41]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tiff {
    parms: PredictorParms,
}

impl Filter for Tiff {
    /// REFERENCE: [[TIFF 6.0 Specification] Section 14: Differencing
    /// Predictor, p64]
    /// Each component is stored as the difference from the same component of
    /// the pixel to its left, so rows are restored by a running sum per colour
    /// channel.
    fn defilter(&self, bytes: impl Into<Vec<Byte>> + AsRef<[Byte]>) -> FilterResult<Vec<Byte>> {
        let mut defiltered: Vec<Byte> = bytes.into();

        let bytes_per_pixel = *self.parms.colors * (*self.parms.bits_per_component / 8);
        let row_length = self
            .parms
            .columns
            .checked_mul(bytes_per_pixel)
            .ok_or(TiffErrorCode::RowLengthOverflow(
                *self.parms.columns,
                bytes_per_pixel,
            ))?;
        if row_length % bytes_per_pixel != 0 {
            return Err(TiffErrorCode::ColorsRowLength(row_length, bytes_per_pixel).into());
        }
        if defiltered.len() % row_length != 0 {
            return Err(TiffErrorCode::InvalidRowLength(defiltered.len(), row_length).into());
        }

        for row in defiltered.chunks_exact_mut(row_length) {
            for j in bytes_per_pixel..row_length {
                row[j] = row[j].wrapping_add(row[j - bytes_per_pixel]);
            }
        }

        Ok(defiltered)
    }
}

mod convert {
    use super::*;

    impl Tiff {
        pub(in crate::process::filter::predictor) fn new(parms: PredictorParms) -> Self {
            Self { parms }
        }
    }
}

pub(crate) mod error {
    use ::thiserror::Error;

    #[derive(Debug, Error, PartialEq, Clone)]
    pub enum TiffErrorCode {
        #[error("Data length {0} is not a multiple of the row length {1}")]
        InvalidRowLength(usize, usize),
        #[error("Row length {0} is not a multiple of the pixel length {1}")]
        ColorsRowLength(usize, usize),
        #[error("Row length overflow: {0} columns of {1} bytes each")]
        RowLengthOverflow(usize, usize),
    }
}
