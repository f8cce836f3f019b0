// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Content(String),
    Media(MediaError),
}

/// Specific error types for ambient video decoding issues.
///
/// These never reach the user: an ambient clip that cannot be decoded leaves
/// its placeholder in place. The classification exists so logs stay useful.
#[derive(Debug, Clone)]
pub enum MediaError {
    /// File format is not supported (e.g., unknown extension)
    UnsupportedFormat,

    /// File exists but contains no video stream
    NoVideoStream,

    /// Decoding failed while producing frames
    DecodingFailed(String),

    /// I/O error (file not found, permission denied, etc.)
    IoError(String),

    /// Generic error with raw message
    Other(String),
}

impl MediaError {
    /// Attempts to parse a raw error message into a specific `MediaError`.
    /// This is used to categorize errors from FFmpeg/decoder.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("no such file")
            || msg_lower.contains("not found")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
        {
            return MediaError::IoError(msg.to_string());
        }

        if msg_lower.contains("no video stream") || msg_lower.contains("no video track") {
            return MediaError::NoVideoStream;
        }

        if msg_lower.contains("invalid data")
            || msg_lower.contains("unknown format")
            || msg_lower.contains("unsupported")
        {
            return MediaError::UnsupportedFormat;
        }

        if msg_lower.contains("packet")
            || msg_lower.contains("scaling")
            || msg_lower.contains("seek")
            || msg_lower.contains("decode")
        {
            return MediaError::DecodingFailed(msg.to_string());
        }

        MediaError::Other(msg.to_string())
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::UnsupportedFormat => write!(f, "Unsupported media format"),
            MediaError::NoVideoStream => write!(f, "No video stream found"),
            MediaError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            MediaError::IoError(msg) => write!(f, "I/O error: {}", msg),
            MediaError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ffmpeg_next::Error> for MediaError {
    fn from(err: ffmpeg_next::Error) -> Self {
        MediaError::from_message(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn content_error_formats_properly() {
        let err = Error::Content("duplicate item".into());
        assert_eq!(format!("{}", err), "Content Error: duplicate item");
    }

    #[test]
    fn media_error_from_message_io() {
        let err = MediaError::from_message("No such file or directory");
        assert!(matches!(err, MediaError::IoError(_)));
    }

    #[test]
    fn media_error_from_message_no_stream() {
        let err = MediaError::from_message("No video stream found in file");
        assert!(matches!(err, MediaError::NoVideoStream));
    }

    #[test]
    fn media_error_from_message_format() {
        let err = MediaError::from_message("Invalid data found when processing input");
        assert!(matches!(err, MediaError::UnsupportedFormat));
    }

    #[test]
    fn media_error_from_message_decoding() {
        let err = MediaError::from_message("Packet send failed: error");
        assert!(matches!(err, MediaError::DecodingFailed(_)));
    }

    #[test]
    fn media_error_wraps_into_error() {
        let err: Error = MediaError::NoVideoStream.into();
        assert!(matches!(err, Error::Media(MediaError::NoVideoStream)));
    }

    #[test]
    fn media_error_display() {
        let err = MediaError::DecodingFailed("bad packet".to_string());
        assert!(format!("{}", err).contains("bad packet"));
    }
}
