use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::BenchError;
use crate::types::{Sample, SampleFormat};

const EMBEDDED_FIT: &[u8] = include_bytes!("../testdata/activity.fit");
const EMBEDDED_GPX: &[u8] = include_bytes!("../testdata/activity.gpx");

/// Path recorded on samples that were compiled into the binary.
pub const EMBEDDED_PATH: &str = "<embedded>";

/// Read a sample file into memory so timed runs never touch the filesystem.
pub fn load(format: SampleFormat, path: &Path) -> Result<Sample, BenchError> {
    let bytes = std::fs::read(path).map_err(|source| BenchError::SampleRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} sample {} ({} bytes)", format, path.display(), bytes.len());

    Ok(Sample {
        format,
        path: path.to_path_buf(),
        bytes,
    })
}

/// The ride shipped in `testdata/`, one recording in both formats.
pub fn embedded(format: SampleFormat) -> Sample {
    let bytes = match format {
        SampleFormat::Fit => EMBEDDED_FIT,
        SampleFormat::Gpx => EMBEDDED_GPX,
    };
    Sample {
        format,
        path: PathBuf::from(EMBEDDED_PATH),
        bytes: bytes.to_vec(),
    }
}

/// Load from `path` when one is configured, else fall back to the embedded sample.
pub fn resolve(format: SampleFormat, path: Option<&Path>) -> Result<Sample, BenchError> {
    match path {
        Some(p) => load(format, p),
        None => {
            debug!("using embedded {} sample", format);
            Ok(embedded(format))
        }
    }
}
