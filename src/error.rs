// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// The input file cannot be opened or read.
    Read(PathBuf, std::io::Error),

    /// The input data is not a valid SVG document.
    ///
    /// Covers malformed GZip content, non UTF-8 data, XML errors
    /// and SVG documents without a valid size.
    Decode(usvg::Error),

    /// The requested output size is zero or larger than [`MAX_SIZE`](crate::MAX_SIZE).
    InvalidSize(u32),

    /// PNG encoding failed.
    Encode(png::EncodingError),

    /// The output file cannot be created or written.
    Write(PathBuf, std::io::Error),
}

impl From<usvg::Error> for Error {
    fn from(e: usvg::Error) -> Self {
        Error::Decode(e)
    }
}

impl From<png::EncodingError> for Error {
    fn from(e: png::EncodingError) -> Self {
        Error::Encode(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::Read(ref path, ref e) => {
                write!(f, "failed to read '{}' cause {}", path.display(), e)
            }
            Error::Decode(ref e) => {
                write!(f, "failed to decode SVG cause {}", e)
            }
            Error::InvalidSize(size) => {
                write!(
                    f,
                    "size {} is out of bounds, expected 1..={}",
                    size,
                    crate::MAX_SIZE
                )
            }
            Error::Encode(ref e) => {
                write!(f, "failed to encode PNG cause {}", e)
            }
            Error::Write(ref path, ref e) => {
                write!(f, "failed to write '{}' cause {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Read(_, ref e) | Error::Write(_, ref e) => Some(e),
            Error::Decode(ref e) => Some(e),
            Error::Encode(ref e) => Some(e),
            Error::InvalidSize(_) => None,
        }
    }
}
