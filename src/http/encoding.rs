//! Response content negotiation
//!
//! Only gzip is offered. [`Encoding::negotiate`] walks the Accept-Encoding
//! token list; anything unrecognized falls back to identity.

use super::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Content coding applied to a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Gzip,
    Identity,
}

impl Encoding {
    /// Header token for this coding
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Gzip => "gzip",
            Encoding::Identity => "identity",
        }
    }

    /// Pick a coding from an Accept-Encoding header value
    ///
    /// The value is split on commas, each token stripped of any
    /// `;`-parameter suffix and trimmed; a token equal to `gzip` anywhere in
    /// the list selects gzip. An absent header or a list with no such token
    /// means identity. Quality weights are stripped with the parameters,
    /// never interpreted, so `gzip;q=0` still selects gzip.
    pub fn negotiate(accept_encoding: Option<&str>) -> Self {
        let Some(value) = accept_encoding else {
            return Encoding::Identity;
        };

        let gzip = value
            .split(',')
            .filter_map(|token| token.split(';').next())
            .any(|token| token.trim() == "gzip");

        if gzip {
            Encoding::Gzip
        } else {
            Encoding::Identity
        }
    }

    /// Apply this coding to a body
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Encoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(data)?;
                Ok(encoder.finish()?)
            }
            Encoding::Identity => Ok(data.to_vec()),
        }
    }
}
