//! Reference resolver: `"<book name> <chapter>:<verse>"` → a verse in the corpus.
//!
//! Errors are detected in order: syntax, book, chapter, verse. Chapter and verse errors carry the
//! valid numbers so the caller can show them to the user.

use thiserror::Error;
use tracing::debug;

use crate::model::VerseRef;
use crate::store::Corpus;

/// Syntactically valid reference, not yet checked against a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// Book name with whitespace runs collapsed to single spaces.
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

/// User-facing reference errors (recoverable; never a system fault).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("malformed reference {input:?}; expected \"Book Chapter:Verse\"")]
    MalformedSyntax { input: String },

    #[error("book not found: {name}")]
    BookNotFound { name: String },

    #[error("{book} has no chapter {chapter}")]
    ChapterNotFound {
        book: String,
        chapter: u32,
        /// All chapter numbers of the book, in corpus order.
        available: Vec<u32>,
    },

    #[error("{book} {chapter} has no verse {verse}")]
    VerseNotFound {
        book: String,
        chapter: u32,
        verse: u32,
        /// All verse numbers of the chapter, in corpus order.
        available: Vec<u32>,
    },
}

/// Checks the `name C:V` shape. Chapter and verse must be base-10 integers ≥ 1.
pub fn parse_reference(raw: &str) -> Result<ParsedReference, ResolveError> {
    let malformed = || ResolveError::MalformedSyntax {
        input: raw.trim().to_string(),
    };

    let trimmed = raw.trim();
    let (name, numbers) = trimmed
        .rsplit_once(|c: char| c.is_whitespace())
        .ok_or_else(malformed)?;
    let book = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if book.is_empty() {
        return Err(malformed());
    }

    let (chapter, verse) = numbers.split_once(':').ok_or_else(malformed)?;
    let chapter = parse_positive(chapter).ok_or_else(malformed)?;
    let verse = parse_positive(verse).ok_or_else(malformed)?;

    Ok(ParsedReference {
        book,
        chapter,
        verse,
    })
}

fn parse_positive(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|&n| n >= 1)
}

/// Resolves free text against the corpus.
pub fn resolve<'a>(corpus: &'a Corpus, raw: &str) -> Result<VerseRef<'a>, ResolveError> {
    let parsed = parse_reference(raw)?;

    let book = corpus
        .book_by_name(&parsed.book)
        .ok_or_else(|| ResolveError::BookNotFound {
            name: parsed.book.clone(),
        })?;

    let chapter = book
        .chapter(parsed.chapter)
        .ok_or_else(|| ResolveError::ChapterNotFound {
            book: book.name().to_string(),
            chapter: parsed.chapter,
            available: book.chapter_numbers(),
        })?;

    let verse = chapter
        .verse(parsed.verse)
        .ok_or_else(|| ResolveError::VerseNotFound {
            book: book.name().to_string(),
            chapter: parsed.chapter,
            verse: parsed.verse,
            available: chapter.verse_numbers(),
        })?;

    debug!(book = %book.name(), chapter = chapter.number(), verse = verse.number(), "Reference resolved");
    Ok(VerseRef {
        book,
        chapter,
        verse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_corpus;

    fn malformed(raw: &str) -> bool {
        matches!(parse_reference(raw), Err(ResolveError::MalformedSyntax { .. }))
    }

    #[test]
    fn test_every_verse_resolves_to_itself() {
        let corpus = sample_corpus();
        for book in corpus.all_books() {
            for chapter in book.chapters() {
                for verse in chapter.verses() {
                    let raw = format!("{} {}:{}", book.name(), chapter.number(), verse.number());
                    let found = resolve(&corpus, &raw).unwrap();
                    assert_eq!(found.book.id(), book.id());
                    assert_eq!(found.chapter.number(), chapter.number());
                    assert_eq!(found.verse.number(), verse.number());
                }
            }
        }
    }

    #[test]
    fn test_parse_accepts_multi_word_and_padded_input() {
        assert_eq!(
            parse_reference("  song   of  solomon 2:1 ").unwrap(),
            ParsedReference {
                book: "song of solomon".into(),
                chapter: 2,
                verse: 1
            }
        );
        assert_eq!(parse_reference("1 John 4:08").unwrap().verse, 8);
    }

    #[test]
    fn test_parse_rejects_malformed_shapes() {
        assert!(malformed(""));
        assert!(malformed("John"));
        assert!(malformed("3:16"));
        assert!(malformed("John 3"));
        assert!(malformed("John 3:"));
        assert!(malformed("John :16"));
        assert!(malformed("John 3:16a"));
        assert!(malformed("John -3:16"));
        assert!(malformed("John +3:16"));
        assert!(malformed("John 0:16"));
        assert!(malformed("John 3:0"));
        assert!(malformed("John 3:99999999999"));
        assert!(malformed("John 3 : 16"));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let corpus = sample_corpus();
        let found = resolve(&corpus, "GENESIS 1:3").unwrap();
        assert_eq!(found.citation(), "Genesis 1:3");
        assert_eq!(found.text(), "And God said, Let there be light: and there was light.");
    }

    #[test]
    fn test_resolve_error_priority() {
        let corpus = sample_corpus();

        // Syntax is checked before the book.
        assert!(matches!(
            resolve(&corpus, "Nowhere 1"),
            Err(ResolveError::MalformedSyntax { .. })
        ));

        assert_eq!(
            resolve(&corpus, "Genesiss 1:1").unwrap_err(),
            ResolveError::BookNotFound {
                name: "Genesiss".into()
            }
        );
        // No partial matches.
        assert!(matches!(
            resolve(&corpus, "Gen 1:1"),
            Err(ResolveError::BookNotFound { .. })
        ));

        assert_eq!(
            resolve(&corpus, "genesis 999:1").unwrap_err(),
            ResolveError::ChapterNotFound {
                book: "Genesis".into(),
                chapter: 999,
                available: vec![1, 2],
            }
        );

        assert_eq!(
            resolve(&corpus, "1 John 4:9").unwrap_err(),
            ResolveError::VerseNotFound {
                book: "1 John".into(),
                chapter: 4,
                verse: 9,
                available: vec![8, 19],
            }
        );
    }
}
