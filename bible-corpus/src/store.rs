//! Corpus store: loads the JSON corpus once, validates it, and serves read-only lookups.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{info, instrument};

use crate::error::CorpusError;
use crate::model::{Book, BookId, Chapter, RawBook, RawCorpus, Verse};

/// Immutable, validated corpus. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Corpus {
    books: Vec<Book>,
    /// Lowercased book name → index in `books`.
    name_index: HashMap<String, usize>,
    /// `verse_offsets[i]` = number of verses in books before `i`; used for flat sampling.
    pub(crate) verse_offsets: Vec<usize>,
    verse_count: usize,
}

impl Corpus {
    /// Reads and validates the corpus file.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            books = corpus.books.len(),
            verses = corpus.verse_count,
            "Corpus loaded"
        );
        Ok(corpus)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let raw: RawCorpus = serde_json::from_str(json)?;
        Self::from_books(raw.books)
    }

    /// Validates raw books and assigns ids 1..=n in the given order.
    pub fn from_books(raw_books: Vec<RawBook>) -> Result<Self, CorpusError> {
        if raw_books.is_empty() {
            return Err(CorpusError::Invalid("corpus contains no books".into()));
        }

        let mut books = Vec::with_capacity(raw_books.len());
        let mut name_index = HashMap::with_capacity(raw_books.len());

        for (index, raw_book) in raw_books.into_iter().enumerate() {
            let name = raw_book.name.trim().to_string();
            if name.is_empty() {
                return Err(CorpusError::Invalid(format!(
                    "book #{} has a blank name",
                    index + 1
                )));
            }
            if name_index.insert(name.to_lowercase(), index).is_some() {
                return Err(CorpusError::Invalid(format!(
                    "duplicate book name {:?}",
                    name
                )));
            }
            let chapters = validate_chapters(&name, raw_book.chapters)?;
            let id = u32::try_from(index + 1)
                .map(BookId)
                .map_err(|_| CorpusError::Invalid("too many books".into()))?;
            books.push(Book { id, name, chapters });
        }

        let mut verse_offsets = Vec::with_capacity(books.len());
        let mut verse_count = 0usize;
        for book in &books {
            verse_offsets.push(verse_count);
            verse_count += book.chapters.iter().map(Chapter::verse_count).sum::<usize>();
        }

        Ok(Self {
            books,
            name_index,
            verse_offsets,
            verse_count,
        })
    }

    /// All books in load order.
    pub fn all_books(&self) -> &[Book] {
        &self.books
    }

    /// Case-insensitive exact name match.
    pub fn book_by_name(&self, name: &str) -> Option<&Book> {
        self.name_index
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.books[i])
    }

    pub fn book_by_id(&self, id: BookId) -> Option<&Book> {
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.books.get(index)
    }

    pub fn chapter(&self, book: BookId, number: u32) -> Option<&Chapter> {
        self.book_by_id(book)?.chapter(number)
    }

    pub fn verse(&self, book: BookId, chapter: u32, verse: u32) -> Option<&Verse> {
        self.chapter(book, chapter)?.verse(verse)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Total number of verses across all books.
    pub fn verse_count(&self) -> usize {
        self.verse_count
    }
}

fn validate_chapters(
    book: &str,
    raw_chapters: Vec<crate::model::RawChapter>,
) -> Result<Vec<Chapter>, CorpusError> {
    if raw_chapters.is_empty() {
        return Err(CorpusError::Invalid(format!("{} has no chapters", book)));
    }

    let mut seen = HashSet::with_capacity(raw_chapters.len());
    let mut chapters = Vec::with_capacity(raw_chapters.len());
    for raw in raw_chapters {
        if raw.chapter == 0 {
            return Err(CorpusError::Invalid(format!("{} has a chapter numbered 0", book)));
        }
        if !seen.insert(raw.chapter) {
            return Err(CorpusError::Invalid(format!(
                "{} has duplicate chapter {}",
                book, raw.chapter
            )));
        }
        if raw.verses.is_empty() {
            return Err(CorpusError::Invalid(format!(
                "{} {} has no verses",
                book, raw.chapter
            )));
        }

        let mut seen_verses = HashSet::with_capacity(raw.verses.len());
        let mut verses = Vec::with_capacity(raw.verses.len());
        for v in raw.verses {
            if v.verse == 0 {
                return Err(CorpusError::Invalid(format!(
                    "{} {} has a verse numbered 0",
                    book, raw.chapter
                )));
            }
            if !seen_verses.insert(v.verse) {
                return Err(CorpusError::Invalid(format!(
                    "{} {} has duplicate verse {}",
                    book, raw.chapter, v.verse
                )));
            }
            if v.text.trim().is_empty() {
                return Err(CorpusError::Invalid(format!(
                    "{} {}:{} has empty text",
                    book, raw.chapter, v.verse
                )));
            }
            verses.push(Verse {
                number: v.verse,
                text: v.text,
            });
        }

        chapters.push(Chapter {
            number: raw.chapter,
            verses,
        });
    }
    Ok(chapters)
}
