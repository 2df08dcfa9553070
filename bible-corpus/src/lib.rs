//! # bible-corpus
//!
//! Read-only, in-memory Bible text organised as books → chapters → verses.
//!
//! - [`Corpus`] loads and validates the JSON corpus and answers lookups by name, id and number.
//! - [`resolve`] turns free text such as `John 3:16` into a verse, or a [`ResolveError`] the caller can show the user.
//! - [`Corpus::random_verse`] draws a verse for the daily verse feature ([`SamplingMode`]).
//!
//! Lookups return `Option`: "not found" is ordinary control flow. Only loading can fail with [`CorpusError`].

mod error;
mod model;
mod random;
mod ranges;
mod reference;
mod store;

pub use error::CorpusError;
pub use model::{Book, BookId, Chapter, RawBook, RawChapter, RawCorpus, RawVerse, Verse, VerseRef};
pub use random::SamplingMode;
pub use ranges::format_number_ranges;
pub use reference::{parse_reference, resolve, ParsedReference, ResolveError};
pub use store::Corpus;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::Corpus;

    /// Three books; "Song of Solomon" and "1 John" exercise multi-word and numeric names.
    pub const SAMPLE_JSON: &str = r#"{
      "books": [
        {
          "id": 99,
          "name": "Genesis",
          "chapters": [
            { "chapter": 1, "verses": [
              { "verse": 1, "text": "In the beginning God created the heaven and the earth." },
              { "verse": 2, "text": "And the earth was without form, and void." },
              { "verse": 3, "text": "And God said, Let there be light: and there was light." }
            ]},
            { "chapter": 2, "verses": [
              { "verse": 1, "text": "Thus the heavens and the earth were finished." }
            ]}
          ]
        },
        {
          "name": "Song of Solomon",
          "chapters": [
            { "chapter": 2, "verses": [
              { "verse": 1, "text": "I am the rose of Sharon, and the lily of the valleys." }
            ]}
          ]
        },
        {
          "name": "1 John",
          "chapters": [
            { "chapter": 4, "verses": [
              { "verse": 8, "text": "He that loveth not knoweth not God; for God is love." },
              { "verse": 19, "text": "We love him, because he first loved us." }
            ]}
          ]
        }
      ]
    }"#;

    pub fn sample_corpus() -> Corpus {
        Corpus::from_json_str(SAMPLE_JSON).expect("sample corpus is valid")
    }
}
