use std::io::Cursor;

use crate::errors::BenchError;
use crate::types::SampleFormat;

/// A third-party decoder under test.
///
/// Only success or failure is observed; decoded content is dropped.
pub trait Decoder {
    fn format(&self) -> SampleFormat;

    /// Short name of the library doing the decoding.
    fn parser(&self) -> &str;

    fn decode(&self, input: &[u8]) -> Result<(), BenchError>;
}

/// FIT binary decoding via the `fitparser` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FitDecoder;

impl Decoder for FitDecoder {
    fn format(&self) -> SampleFormat {
        SampleFormat::Fit
    }

    fn parser(&self) -> &str {
        "fitparser"
    }

    fn decode(&self, input: &[u8]) -> Result<(), BenchError> {
        fitparser::from_bytes(input)
            .map(drop)
            .map_err(|e| BenchError::Decode {
                format: SampleFormat::Fit,
                detail: e.to_string(),
            })
    }
}

/// GPX XML parsing via the `gpx` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct GpxDecoder;

impl Decoder for GpxDecoder {
    fn format(&self) -> SampleFormat {
        SampleFormat::Gpx
    }

    fn parser(&self) -> &str {
        "gpx"
    }

    fn decode(&self, input: &[u8]) -> Result<(), BenchError> {
        gpx::read(Cursor::new(input))
            .map(drop)
            .map_err(|e| BenchError::Decode {
                format: SampleFormat::Gpx,
                detail: e.to_string(),
            })
    }
}

pub fn decoder_for(format: SampleFormat) -> Box<dyn Decoder> {
    match format {
        SampleFormat::Fit => Box::new(FitDecoder),
        SampleFormat::Gpx => Box::new(GpxDecoder),
    }
}
