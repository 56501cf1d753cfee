//! Text metadata carried in `tEXt` chunks
//!
//! A `tEXt` payload is `keyword ++ 0 ++ text`. PNG restricts both
//! parts to Latin-1, keywords further to 1..=79 printable characters
//! without leading, trailing or consecutive spaces.
use crate::error::PngEncodeErrors;

/// Keyword under which image generators store their generation parameters
pub const PARAMETERS_KEYWORD: &str = "parameters";

/// Longest keyword allowed, in bytes
const MAX_KEYWORD_LENGTH: usize = 79;

/// How the text part of a `tEXt` chunk is stored
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TextEncoding {
    /// Store text as Latin-1, as the png specification requires.
    ///
    /// Text containing characters above U+00FF is rejected
    #[default]
    Latin1,
    /// Store the raw UTF-8 bytes of the text.
    ///
    /// Not conforming, but widely done by tools that put prompts
    /// and other free form text in `tEXt`. Most readers accept it.
    Utf8
}

/// A single keyword and text pair
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextChunk {
    pub keyword: String,
    pub text:    String
}

impl TextChunk {
    pub fn new(keyword: impl Into<String>, text: impl Into<String>) -> TextChunk {
        TextChunk {
            keyword: keyword.into(),
            text:    text.into()
        }
    }

    /// Build the chunk payload, validating keyword and text
    pub(crate) fn to_payload(&self, encoding: TextEncoding) -> Result<Vec<u8>, PngEncodeErrors> {
        let keyword = encode_keyword(&self.keyword)?;

        let text = match encoding {
            TextEncoding::Latin1 => encode_latin1(&self.text),
            TextEncoding::Utf8 => Some(self.text.as_bytes().to_vec())
        };
        let text = match text {
            // a NUL in the text would be read back as a second separator
            Some(text) if !text.contains(&0) => text,
            _ => {
                return Err(PngEncodeErrors::InvalidText {
                    keyword: self.keyword.clone()
                })
            }
        };

        let mut payload = Vec::with_capacity(keyword.len() + 1 + text.len());
        payload.extend_from_slice(&keyword);
        payload.push(0);
        payload.extend_from_slice(&text);

        Ok(payload)
    }
}

/// Encode a string as Latin-1, returning `None` if a character
/// falls outside of it
fn encode_latin1(text: &str) -> Option<Vec<u8>> {
    text.chars().map(|c| u8::try_from(u32::from(c)).ok()).collect()
}

fn encode_keyword(keyword: &str) -> Result<Vec<u8>, PngEncodeErrors> {
    let invalid = || PngEncodeErrors::InvalidTextKeyword(keyword.to_string());

    let bytes = encode_latin1(keyword).ok_or_else(invalid)?;

    if bytes.is_empty() || bytes.len() > MAX_KEYWORD_LENGTH {
        return Err(invalid());
    }
    if !bytes.iter().all(|c| matches!(c, 32..=126 | 161..=255)) {
        return Err(invalid());
    }
    if bytes.first() == Some(&b' ')
        || bytes.last() == Some(&b' ')
        || bytes.windows(2).any(|w| w == b"  ")
    {
        return Err(invalid());
    }
    Ok(bytes)
}
