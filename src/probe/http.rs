use std::io::Read;

use crate::{
    config::ProbeConfig,
    foundation::{
        core::Dimensions,
        error::{IkError, IkResult, MetadataFetchError},
    },
    probe::metadata::{HeaderScan, MetadataProbe, read_dimensions, scan_header},
};

const CHUNK_BYTES: usize = 8 * 1024;

/// Blocking HTTP GET probe that stops reading once the image header is decoded.
#[derive(Clone, Debug)]
pub struct HttpProbe {
    client: reqwest::blocking::Client,
    max_header_bytes: usize,
}

impl HttpProbe {
    /// Build the HTTP client. No timeout unless `config.timeout_ms` is set.
    pub fn new(config: &ProbeConfig) -> IkResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| IkError::config(format!("build http client: {e}")))?;
        Ok(Self {
            client,
            max_header_bytes: config.max_header_bytes,
        })
    }

    fn read_header(&self, body: &mut impl Read) -> Result<Dimensions, MetadataFetchError> {
        let mut buf = Vec::with_capacity(CHUNK_BYTES);
        let mut chunk = [0u8; CHUNK_BYTES];
        loop {
            let n = body
                .read(&mut chunk)
                .map_err(|e| MetadataFetchError::Transport(e.to_string()))?;
            if n == 0 {
                tracing::debug!(bytes = buf.len(), "body ended before header was complete");
                return read_dimensions(&buf);
            }
            buf.extend_from_slice(&chunk[..n]);

            match scan_header(&buf) {
                HeaderScan::Complete(d) => {
                    tracing::debug!(bytes = buf.len(), "decoded image header");
                    return Ok(d);
                }
                HeaderScan::Unsupported(msg) => return Err(MetadataFetchError::Decode(msg)),
                HeaderScan::NeedMore => {}
            }
            if buf.len() >= self.max_header_bytes {
                return Err(MetadataFetchError::Decode(format!(
                    "no image header within the first {} bytes",
                    self.max_header_bytes
                )));
            }
        }
    }
}

impl MetadataProbe for HttpProbe {
    #[tracing::instrument(skip(self))]
    fn probe(&self, url: &str) -> Result<Dimensions, MetadataFetchError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| MetadataFetchError::Transport(e.to_string()))?;
        if response.status() != reqwest::StatusCode::OK {
            return Err(MetadataFetchError::Status(response.status().as_u16()));
        }
        self.read_header(&mut response)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/probe/http.rs"]
mod tests;
