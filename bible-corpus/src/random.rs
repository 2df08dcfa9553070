//! Random verse selection for the daily verse.

use std::str::FromStr;

use rand::Rng;

use crate::model::VerseRef;
use crate::store::Corpus;

/// How [`Corpus::random_verse`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMode {
    /// Uniform book, then uniform chapter in it, then uniform verse in it.
    /// Verses in short chapters and short books are drawn more often than in long ones.
    #[default]
    PerLevel,
    /// Uniform over every verse in the corpus.
    Flat,
}

impl FromStr for SamplingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-level" | "per_level" | "perlevel" => Ok(SamplingMode::PerLevel),
            "flat" | "uniform" => Ok(SamplingMode::Flat),
            other => Err(format!(
                "unknown sampling mode {:?} (expected \"per-level\" or \"flat\")",
                other
            )),
        }
    }
}

impl Corpus {
    /// Draws one verse. Never fails: a loaded corpus has at least one verse at every level.
    pub fn random_verse<R: Rng + ?Sized>(&self, mode: SamplingMode, rng: &mut R) -> VerseRef<'_> {
        match mode {
            SamplingMode::PerLevel => {
                let books = self.all_books();
                let book = &books[rng.gen_range(0..books.len())];
                let chapter = &book.chapters[rng.gen_range(0..book.chapters.len())];
                let verse = &chapter.verses[rng.gen_range(0..chapter.verses.len())];
                VerseRef {
                    book,
                    chapter,
                    verse,
                }
            }
            SamplingMode::Flat => self.nth_verse(rng.gen_range(0..self.verse_count())),
        }
    }

    /// The `n`-th verse in corpus order (0-based). `n` must be below [`Corpus::verse_count`].
    fn nth_verse(&self, n: usize) -> VerseRef<'_> {
        // Last book whose first verse is at or before `n`.
        let book_index = self.verse_offsets.partition_point(|&offset| offset <= n) - 1;
        let book = &self.all_books()[book_index];
        let mut remaining = n - self.verse_offsets[book_index];
        for chapter in &book.chapters {
            if remaining < chapter.verses.len() {
                return VerseRef {
                    book,
                    chapter,
                    verse: &chapter.verses[remaining],
                };
            }
            remaining -= chapter.verses.len();
        }
        unreachable!("verse offsets are consistent with chapter sizes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_corpus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_sampling_mode_from_str() {
        assert_eq!("per-level".parse::<SamplingMode>(), Ok(SamplingMode::PerLevel));
        assert_eq!(" FLAT ".parse::<SamplingMode>(), Ok(SamplingMode::Flat));
        assert!("weighted".parse::<SamplingMode>().is_err());
        assert_eq!(SamplingMode::default(), SamplingMode::PerLevel);
    }

    #[test]
    fn test_random_verses_exist_and_have_text() {
        let corpus = sample_corpus();
        let mut rng = StdRng::seed_from_u64(7);
        for mode in [SamplingMode::PerLevel, SamplingMode::Flat] {
            for _ in 0..2000 {
                let drawn = corpus.random_verse(mode, &mut rng);
                let stored = corpus
                    .verse(drawn.book.id(), drawn.chapter.number(), drawn.verse.number())
                    .expect("drawn verse exists");
                assert_eq!(stored.text(), drawn.text());
                assert!(!drawn.text().is_empty());
            }
        }
    }

    #[test]
    fn test_nth_verse_walks_corpus_order() {
        let corpus = sample_corpus();
        let all: Vec<String> = (0..corpus.verse_count())
            .map(|n| corpus.nth_verse(n).citation())
            .collect();
        assert_eq!(
            all,
            vec![
                "Genesis 1:1",
                "Genesis 1:2",
                "Genesis 1:3",
                "Genesis 2:1",
                "Song of Solomon 2:1",
                "1 John 4:8",
                "1 John 4:19",
            ]
        );
    }

    #[test]
    fn test_flat_sampling_reaches_every_verse() {
        let corpus = sample_corpus();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<String> = (0..5000)
            .map(|_| corpus.random_verse(SamplingMode::Flat, &mut rng).citation())
            .collect();
        assert_eq!(seen.len(), corpus.verse_count());
    }

    #[test]
    fn test_per_level_favours_small_books() {
        // Song of Solomon holds 1 of 7 verses but is one of 3 books.
        let corpus = sample_corpus();
        let mut rng = StdRng::seed_from_u64(1);
        let draws = 6000;
        let song = (0..draws)
            .filter(|_| {
                corpus.random_verse(SamplingMode::PerLevel, &mut rng).book.name() == "Song of Solomon"
            })
            .count();
        let share = song as f64 / draws as f64;
        assert!(share > 0.28 && share < 0.39, "share was {share}");
    }
}
