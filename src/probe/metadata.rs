use std::io::Cursor;

use crate::foundation::{core::Dimensions, error::MetadataFetchError};

/// Bytes needed before an unrecognized signature is treated as "not an image".
const SIGNATURE_BYTES: usize = 32;

/// Source of origin image dimensions.
///
/// The page evaluation only depends on this seam, so the HTTP implementation can be
/// swapped for a fixed answer in tests or for a cache in a long-lived host.
pub trait MetadataProbe {
    /// Read the pixel dimensions of the image at `url`.
    fn probe(&self, url: &str) -> Result<Dimensions, MetadataFetchError>;
}

/// Outcome of inspecting a (possibly truncated) prefix of an image file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderScan {
    /// Header fully decoded.
    Complete(Dimensions),
    /// Prefix too short; read more bytes and retry.
    NeedMore,
    /// The prefix does not belong to a supported image format.
    Unsupported(String),
}

/// Inspect the start of an image file without decoding pixels.
pub fn scan_header(prefix: &[u8]) -> HeaderScan {
    let reader = match image::ImageReader::new(Cursor::new(prefix)).with_guessed_format() {
        Ok(r) => r,
        Err(e) => return HeaderScan::Unsupported(e.to_string()),
    };
    if reader.format().is_none() {
        if prefix.len() < SIGNATURE_BYTES {
            return HeaderScan::NeedMore;
        }
        return HeaderScan::Unsupported("unrecognized image format".to_string());
    }
    match reader.into_dimensions() {
        Ok((width, height)) => HeaderScan::Complete(Dimensions { width, height }),
        Err(_) => HeaderScan::NeedMore,
    }
}

/// Read dimensions from a complete encoded image.
pub fn read_dimensions(bytes: &[u8]) -> Result<Dimensions, MetadataFetchError> {
    match scan_header(bytes) {
        HeaderScan::Complete(d) => Ok(d),
        HeaderScan::NeedMore => Err(MetadataFetchError::Decode(
            "truncated image header".to_string(),
        )),
        HeaderScan::Unsupported(msg) => Err(MetadataFetchError::Decode(msg)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/probe/metadata.rs"]
mod tests;
