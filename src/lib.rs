//! Charset analysis and filtering for UTF-8 text.
//!
//! The crate divides the Unicode range into 40 charsets (half-width Latin,
//! control characters, basic Chinese ideographs, Japanese kana, full-width
//! punctuation and so on) and classifies every `char` into exactly one of
//! them. On top of the classifier sit two independent consumers: per-charset
//! occurrence statistics ([`analysis`]) and charset-based text filtering
//! ([`filtering`]). The combination is aimed at cleaning NLP corpora of
//! invisible and otherwise unwanted characters.
//!
//! ```
//! use charset_filter::charsets::CharsetClassification;
//!
//! assert_eq!('一'.charset_id(), 36);
//! assert_eq!('\u{7F}'.charset_name(), "control characters");
//! ```

pub mod charsets;

#[cfg(feature = "analysis")]
pub mod analysis;
#[cfg(feature = "filtering")]
pub mod filtering;
