//! Corpus data model: the on-disk JSON shape (`Raw*`) and the validated, immutable types served at runtime.

use serde::Deserialize;
use std::fmt;

/// Top-level JSON document: `{ "books": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCorpus {
    pub books: Vec<RawBook>,
}

/// `books[]`: any extra field (such as a stored `id`) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBook {
    pub name: String,
    pub chapters: Vec<RawChapter>,
}

/// `books[].chapters[]`
#[derive(Debug, Clone, Deserialize)]
pub struct RawChapter {
    pub chapter: u32,
    pub verses: Vec<RawVerse>,
}

/// `books[].chapters[].verses[]`
#[derive(Debug, Clone, Deserialize)]
pub struct RawVerse {
    pub verse: u32,
    pub text: String,
}

/// Stable book identifier: 1-based position in the corpus file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub u32);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Book {
    pub(crate) id: BookId,
    pub(crate) name: String,
    pub(crate) chapters: Vec<Chapter>,
}

impl Book {
    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chapters in file order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.number == number)
    }

    /// Position of a chapter within [`Book::chapters`].
    pub fn chapter_index(&self, number: u32) -> Option<usize> {
        self.chapters.iter().position(|c| c.number == number)
    }

    pub fn chapter_numbers(&self) -> Vec<u32> {
        self.chapters.iter().map(|c| c.number).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Chapter {
    pub(crate) number: u32,
    pub(crate) verses: Vec<Verse>,
}

impl Chapter {
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Verses in file order.
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }

    pub fn verse(&self, number: u32) -> Option<&Verse> {
        self.verses.iter().find(|v| v.number == number)
    }

    pub fn verse_numbers(&self) -> Vec<u32> {
        self.verses.iter().map(|v| v.number).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Verse {
    pub(crate) number: u32,
    pub(crate) text: String,
}

impl Verse {
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A fully located verse, borrowed from the corpus.
#[derive(Debug, Clone, Copy)]
pub struct VerseRef<'a> {
    pub book: &'a Book,
    pub chapter: &'a Chapter,
    pub verse: &'a Verse,
}

impl<'a> VerseRef<'a> {
    /// `Book C:V`, e.g. `John 3:16`.
    pub fn citation(&self) -> String {
        format!(
            "{} {}:{}",
            self.book.name,
            self.chapter.number,
            self.verse.number
        )
    }

    pub fn text(&self) -> &'a str {
        &self.verse.text
    }
}
