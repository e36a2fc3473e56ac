//! Contracts for the decoding and acquisition collaborators.
//!
//! The core performs no I/O and no format parsing (see the crate docs);
//! it only defines the shapes a surrounding system plugs decoders into.
//! Acquisition — reading from a path, a URL, or an in-memory buffer — is
//! a single polymorphic capability expressed by [`ImageSource`], and
//! decoding is the [`Decode`] trait yielding a [`PixelBuffer`] the
//! comparison pipeline can consume.

use std::path::Path;

use crate::{InterleavedBuffer, SsimError};

/// Media types the decoding collaborator must support at minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `image/png`
    Png,
    /// `image/jpeg` (also accepted as the nonstandard `image/jpg`)
    Jpeg,
    /// `image/gif`
    Gif,
}

impl MediaType {
    /// Parses a MIME type string.
    ///
    /// # Errors
    /// [`SsimError::UnsupportedFormat`] carrying the offending string for
    /// anything but the three supported types.
    pub fn from_mime(mime: &str) -> Result<Self, SsimError> {
        match mime {
            "image/png" => Ok(Self::Png),
            "image/jpg" | "image/jpeg" => Ok(Self::Jpeg),
            "image/gif" => Ok(Self::Gif),
            other => Err(SsimError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Sniffs the media type from a file extension, case-insensitively.
    ///
    /// # Errors
    /// [`SsimError::UnsupportedFormat`] if the path has no extension or an
    /// unrecognized one.
    pub fn from_path(path: &Path) -> Result<Self, SsimError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| SsimError::UnsupportedFormat(path.display().to_string()))?;
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "gif" => Ok(Self::Gif),
            _ => Err(SsimError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// The canonical MIME type string.
    #[must_use]
    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
        }
    }
}

/// Where an image comes from.
///
/// The variants carry data only; fetching bytes from a path or URL is the
/// acquisition collaborator's job and happens before the core runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// Compressed bytes already resident in memory.
    Bytes(&'a [u8]),
    /// A filesystem path.
    Path(&'a Path),
    /// An HTTP(S) URL.
    Url(&'a str),
}

impl ImageSource<'_> {
    /// The media type hint derivable from the source itself, if any.
    ///
    /// Byte sources carry no hint; URL sources are expected to learn the
    /// type from the response's content type.
    pub fn media_type_hint(&self) -> Option<Result<MediaType, SsimError>> {
        match self {
            Self::Path(path) => Some(MediaType::from_path(path)),
            Self::Bytes(_) | Self::Url(_) => None,
        }
    }
}

/// A decoding collaborator.
///
/// Implementations turn compressed bytes of a known media type into a
/// pixel buffer. A `bit_depth` of 0 on the returned buffer means the
/// format carries no explicit depth field (JPEG) and resolves to 8-bit.
pub trait Decode {
    /// Decodes `bytes` as `media_type`.
    ///
    /// # Errors
    /// Decode failures surface as [`SsimError`]; they are deterministic
    /// and never retried by the core.
    fn decode(&self, bytes: &[u8], media_type: MediaType)
        -> Result<InterleavedBuffer<u8>, SsimError>;
}
