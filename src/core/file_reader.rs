//! Source file reading with best-effort text decoding
//!
//! Source files are read as raw bytes and decoded as UTF-8. Invalid byte
//! sequences never fail a read; the [`DecodePolicy`] decides what happens to
//! them. Decoded text gets universal newlines: `\r\n` and lone `\r` become
//! `\n`. No BOM stripping is performed.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// What to do with byte sequences that are not valid UTF-8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Drop invalid sequences
    #[default]
    Ignore,
    /// Substitute each invalid sequence with U+FFFD
    Replace,
}

impl std::str::FromStr for DecodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(DecodePolicy::Ignore),
            "replace" => Ok(DecodePolicy::Replace),
            _ => Err(format!("Unknown decode policy: {}", s)),
        }
    }
}

impl std::fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodePolicy::Ignore => write!(f, "ignore"),
            DecodePolicy::Replace => write!(f, "replace"),
        }
    }
}

/// Decoded content of a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub content: String,
    /// Whether any invalid bytes were dropped or replaced
    pub lossy: bool,
}

/// Decode bytes as UTF-8 according to `policy`
pub fn decode_lossy(bytes: &[u8], policy: DecodePolicy) -> SourceText {
    if let Ok(valid) = std::str::from_utf8(bytes) {
        return SourceText {
            content: valid.to_string(),
            lossy: false,
        };
    }

    let content = match policy {
        DecodePolicy::Replace => String::from_utf8_lossy(bytes).into_owned(),
        DecodePolicy::Ignore => decode_ignoring_invalid(bytes),
    };

    SourceText {
        content,
        lossy: true,
    }
}

fn decode_ignoring_invalid(mut input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len());

    loop {
        match std::str::from_utf8(input) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, rest) = input.split_at(err.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());

                match err.error_len() {
                    Some(len) => input = &rest[len..],
                    // truncated sequence at end of input
                    None => break,
                }
            }
        }
    }

    out
}

/// Translate `\r\n` and lone `\r` line endings to `\n`
pub fn translate_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read a source file, decode it and normalize its line endings
pub fn read_source(path: &Path, policy: DecodePolicy) -> io::Result<SourceText> {
    let bytes = fs::read(path)?;
    let text = decode_lossy(&bytes, policy);
    Ok(SourceText {
        content: translate_newlines(text.content),
        lossy: text.lossy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_utf8_untouched() {
        let text = decode_lossy("héllo\r\nworld".as_bytes(), DecodePolicy::Ignore);
        assert_eq!(text.content, "héllo\r\nworld");
        assert!(!text.lossy);
    }

    #[test]
    fn test_ignore_drops_invalid_bytes() {
        let bytes = b"ab\xffcd\xc3";
        let text = decode_lossy(bytes, DecodePolicy::Ignore);
        assert_eq!(text.content, "abcd");
        assert!(text.lossy);
    }

    #[test]
    fn test_replace_substitutes_invalid_bytes() {
        let bytes = b"ab\xffcd";
        let text = decode_lossy(bytes, DecodePolicy::Replace);
        assert_eq!(text.content, "ab\u{FFFD}cd");
        assert!(text.lossy);
    }

    #[test]
    fn test_bom_is_kept() {
        let text = decode_lossy(b"\xef\xbb\xbfx", DecodePolicy::Ignore);
        assert_eq!(text.content, "\u{FEFF}x");
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("ignore".parse::<DecodePolicy>(), Ok(DecodePolicy::Ignore));
        assert_eq!("REPLACE".parse::<DecodePolicy>(), Ok(DecodePolicy::Replace));
        assert!("strict".parse::<DecodePolicy>().is_err());
        assert!("lossy".parse::<DecodePolicy>().is_err());
        assert_eq!(DecodePolicy::default(), DecodePolicy::Ignore);
    }

    #[test]
    fn test_read_source_missing_file() {
        let temp = tempdir().unwrap();
        let err = read_source(&temp.path().join("gone.ts"), DecodePolicy::Ignore).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_translate_newlines() {
        assert_eq!(translate_newlines("a\r\nb\rc".to_string()), "a\nb\nc");
        assert_eq!(translate_newlines("a\r\r\nb".to_string()), "a\n\nb");
        assert_eq!(translate_newlines("plain\n".to_string()), "plain\n");
    }

    #[test]
    fn test_read_source_normalizes_line_endings() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("crlf.ts");
        fs::write(&path, b"a\r\nb\rc").unwrap();

        let text = read_source(&path, DecodePolicy::Ignore).unwrap();
        assert_eq!(text.content, "a\nb\nc");
        assert!(!text.lossy);
    }

    #[test]
    fn test_read_source() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.ts");
        fs::write(&path, b"let x = 1;\xfe").unwrap();

        let text = read_source(&path, DecodePolicy::Ignore).unwrap();
        assert_eq!(text.content, "let x = 1;");
    }
}
