//! Menu renderer: turns a [`Position`] into message text plus an inline button grid.
//!
//! Grid layout, top to bottom: item rows, the "Read All" row (verses menu only), the Prev/Next row
//! (only the buttons that apply), then the back row (chapters and verses menus).

use std::sync::Arc;

use bible_corpus::{Book, BookId, Corpus};
use bot_core::{Button, ButtonGrid};
use thiserror::Error;

use super::codec::{encode, NavAction, Position};
use super::paging::PageWindow;

pub const BOOKS_MENU_TEXT: &str = "📚 Select a book from the Bible:";
pub const LABEL_PREVIOUS: &str = "⬅️ Previous";
pub const LABEL_NEXT: &str = "➡️ Next";
pub const LABEL_READ_ALL: &str = "📖 Read All Verses";
pub const LABEL_BACK_TO_BOOKS: &str = "🔙 Back to Books";
pub const LABEL_BACK_TO_CHAPTERS: &str = "🔙 Back to Chapters";

/// Page sizes and row widths for the three menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub books_per_page: usize,
    pub books_per_row: usize,
    pub chapters_per_page: usize,
    pub chapters_per_row: usize,
    pub verses_per_page: usize,
    pub verses_per_row: usize,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            books_per_page: 6,
            books_per_row: 2,
            chapters_per_page: 12,
            chapters_per_row: 4,
            verses_per_page: 12,
            verses_per_row: 4,
        }
    }
}

/// A rendered menu, ready to send or edit in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub text: String,
    pub buttons: ButtonGrid,
    /// The position actually shown, after page clamping.
    pub position: Position,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("book {0} not found")]
    BookNotFound(BookId),

    #[error("book {book} has no chapter {chapter}")]
    ChapterNotFound { book: BookId, chapter: u32 },
}

pub struct MenuRenderer {
    corpus: Arc<Corpus>,
    layout: MenuLayout,
}

impl MenuRenderer {
    pub fn new(corpus: Arc<Corpus>, layout: MenuLayout) -> Self {
        Self { corpus, layout }
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn render(&self, position: &Position) -> Result<Menu, RenderError> {
        match *position {
            Position::Books { page } => Ok(self.render_books(page)),
            Position::Chapters { book, page } => self.render_chapters(book, page),
            Position::Verses {
                book,
                chapter,
                page,
            } => self.render_verses(book, chapter, page),
        }
    }

    /// Chapters-menu position whose page contains `chapter`. Falls back to page 0 when the chapter
    /// is unknown.
    pub fn chapters_position_for(&self, book: BookId, chapter: u32) -> Position {
        let page = self
            .corpus
            .book_by_id(book)
            .and_then(|b| b.chapter_index(chapter))
            .map(|index| PageWindow::page_of(index, self.layout.chapters_per_page))
            .unwrap_or(0);
        Position::Chapters { book, page }
    }

    fn render_books(&self, requested: u32) -> Menu {
        let books = self.corpus.all_books();
        let window = PageWindow::new(books.len(), self.layout.books_per_page, requested);

        let items = books[window.start..window.end]
            .iter()
            .map(|book| {
                Button::new(
                    book.name(),
                    encode(&Position::Chapters {
                        book: book.id(),
                        page: 0,
                    }
                    .into()),
                )
            })
            .collect();

        let position = Position::Books { page: window.page };
        let mut grid = ButtonGrid::new();
        push_items(&mut grid, items, self.layout.books_per_row);
        grid.push_row(pager_row(position, &window));

        Menu {
            text: BOOKS_MENU_TEXT.to_string(),
            buttons: grid,
            position,
        }
    }

    fn render_chapters(&self, book_id: BookId, requested: u32) -> Result<Menu, RenderError> {
        let book = self.book(book_id)?;
        let chapters = book.chapters();
        let window = PageWindow::new(chapters.len(), self.layout.chapters_per_page, requested);

        let items = chapters[window.start..window.end]
            .iter()
            .map(|chapter| {
                Button::new(
                    chapter.number().to_string(),
                    encode(&Position::Verses {
                        book: book_id,
                        chapter: chapter.number(),
                        page: 0,
                    }
                    .into()),
                )
            })
            .collect();

        let position = Position::Chapters {
            book: book_id,
            page: window.page,
        };
        let mut grid = ButtonGrid::new();
        push_items(&mut grid, items, self.layout.chapters_per_row);
        grid.push_row(pager_row(position, &window));
        grid.push_row(vec![Button::new(
            LABEL_BACK_TO_BOOKS,
            encode(&Position::root().into()),
        )]);

        Ok(Menu {
            text: format!(
                "📖 {}\n\nSelect a chapter ({} chapters available):",
                book.name(),
                chapters.len()
            ),
            buttons: grid,
            position,
        })
    }

    fn render_verses(
        &self,
        book_id: BookId,
        chapter_number: u32,
        requested: u32,
    ) -> Result<Menu, RenderError> {
        let book = self.book(book_id)?;
        let chapter = book
            .chapter(chapter_number)
            .ok_or(RenderError::ChapterNotFound {
                book: book_id,
                chapter: chapter_number,
            })?;
        let verses = chapter.verses();
        let window = PageWindow::new(verses.len(), self.layout.verses_per_page, requested);

        let items = verses[window.start..window.end]
            .iter()
            .map(|verse| {
                Button::new(
                    verse.number().to_string(),
                    encode(&NavAction::ShowVerse {
                        book: book_id,
                        chapter: chapter_number,
                        verse: verse.number(),
                    }),
                )
            })
            .collect();

        let position = Position::Verses {
            book: book_id,
            chapter: chapter_number,
            page: window.page,
        };
        let mut grid = ButtonGrid::new();
        push_items(&mut grid, items, self.layout.verses_per_row);
        grid.push_row(vec![Button::new(
            LABEL_READ_ALL,
            encode(&NavAction::ReadAll {
                book: book_id,
                chapter: chapter_number,
            }),
        )]);
        grid.push_row(pager_row(position, &window));
        grid.push_row(vec![Button::new(
            LABEL_BACK_TO_CHAPTERS,
            encode(&self.chapters_position_for(book_id, chapter_number).into()),
        )]);

        Ok(Menu {
            text: format!(
                "📖 {} {}\n\nSelect a verse ({} verses available):",
                book.name(),
                chapter_number,
                verses.len()
            ),
            buttons: grid,
            position,
        })
    }

    fn book(&self, id: BookId) -> Result<&Book, RenderError> {
        self.corpus
            .book_by_id(id)
            .ok_or(RenderError::BookNotFound(id))
    }
}

fn push_items(grid: &mut ButtonGrid, items: Vec<Button>, per_row: usize) {
    let mut items = items.into_iter().peekable();
    while items.peek().is_some() {
        grid.push_row(items.by_ref().take(per_row.max(1)).collect());
    }
}

fn pager_row(position: Position, window: &PageWindow) -> Vec<Button> {
    let mut row = Vec::with_capacity(2);
    if window.has_previous {
        row.push(Button::new(
            LABEL_PREVIOUS,
            encode(&position.with_page(window.page - 1).into()),
        ));
    }
    if window.has_next {
        row.push(Button::new(
            LABEL_NEXT,
            encode(&position.with_page(window.page + 1).into()),
        ));
    }
    row
}
