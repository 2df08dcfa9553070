//! Callback token codec.
//!
//! Tokens are short ASCII strings of `:`-separated fields. The first field is the kind, the rest are
//! canonical base-10 numbers (no sign, no leading zeros). Books are always referenced by numeric id,
//! so book names never appear in a token and cannot collide with the separator.
//!
//! | Token | Meaning |
//! |---|---|
//! | `b:<page>` | Books menu |
//! | `c:<book>:<page>` | Chapters menu of a book |
//! | `v:<book>:<chapter>:<page>` | Verses menu of a chapter |
//! | `s:<book>:<chapter>:<verse>` | Show one verse |
//! | `a:<book>:<chapter>` | Read the whole chapter |

use bible_corpus::BookId;
use thiserror::Error;

/// Telegram limits callback data to 64 bytes.
pub const MAX_TOKEN_LEN: usize = 64;

const SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Books,
    Chapters,
    Verses,
}

/// What menu the user is looking at. Page size is not part of the position; it comes from the
/// renderer's layout, and out-of-range pages are clamped at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Books { page: u32 },
    Chapters { book: BookId, page: u32 },
    Verses { book: BookId, chapter: u32, page: u32 },
}

impl Position {
    /// The Books menu, first page.
    pub fn root() -> Self {
        Position::Books { page: 0 }
    }

    pub fn kind(&self) -> ListKind {
        match self {
            Position::Books { .. } => ListKind::Books,
            Position::Chapters { .. } => ListKind::Chapters,
            Position::Verses { .. } => ListKind::Verses,
        }
    }

    pub fn page(&self) -> u32 {
        match *self {
            Position::Books { page }
            | Position::Chapters { page, .. }
            | Position::Verses { page, .. } => page,
        }
    }

    /// Same menu, different page.
    pub fn with_page(self, page: u32) -> Self {
        match self {
            Position::Books { .. } => Position::Books { page },
            Position::Chapters { book, .. } => Position::Chapters { book, page },
            Position::Verses { book, chapter, .. } => Position::Verses {
                book,
                chapter,
                page,
            },
        }
    }
}

/// Everything a button can ask for: open a menu, or one of the two leaf actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Menu(Position),
    ShowVerse { book: BookId, chapter: u32, verse: u32 },
    ReadAll { book: BookId, chapter: u32 },
}

impl From<Position> for NavAction {
    fn from(position: Position) -> Self {
        NavAction::Menu(position)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid navigation token {token:?}")]
pub struct InvalidToken {
    pub token: String,
}

/// Encodes an action. Pure: equal inputs give byte-identical tokens.
pub fn encode(action: &NavAction) -> String {
    match *action {
        NavAction::Menu(Position::Books { page }) => format!("b:{}", page),
        NavAction::Menu(Position::Chapters { book, page }) => format!("c:{}:{}", book.0, page),
        NavAction::Menu(Position::Verses {
            book,
            chapter,
            page,
        }) => format!("v:{}:{}:{}", book.0, chapter, page),
        NavAction::ShowVerse {
            book,
            chapter,
            verse,
        } => format!("s:{}:{}:{}", book.0, chapter, verse),
        NavAction::ReadAll { book, chapter } => format!("a:{}:{}", book.0, chapter),
    }
}

/// Decodes a token produced by [`encode`]. Anything else is [`InvalidToken`].
pub fn decode(token: &str) -> Result<NavAction, InvalidToken> {
    let invalid = || InvalidToken {
        token: token.chars().take(MAX_TOKEN_LEN).collect(),
    };

    if token.is_empty() || token.len() > MAX_TOKEN_LEN || !token.is_ascii() {
        return Err(invalid());
    }

    let fields: Vec<&str> = token.split(SEPARATOR).collect();
    let action = match fields.as_slice() {
        ["b", page] => NavAction::Menu(Position::Books {
            page: number(page).ok_or_else(invalid)?,
        }),
        ["c", book, page] => NavAction::Menu(Position::Chapters {
            book: book_id(book).ok_or_else(invalid)?,
            page: number(page).ok_or_else(invalid)?,
        }),
        ["v", book, chapter, page] => NavAction::Menu(Position::Verses {
            book: book_id(book).ok_or_else(invalid)?,
            chapter: positive(chapter).ok_or_else(invalid)?,
            page: number(page).ok_or_else(invalid)?,
        }),
        ["s", book, chapter, verse] => NavAction::ShowVerse {
            book: book_id(book).ok_or_else(invalid)?,
            chapter: positive(chapter).ok_or_else(invalid)?,
            verse: positive(verse).ok_or_else(invalid)?,
        },
        ["a", book, chapter] => NavAction::ReadAll {
            book: book_id(book).ok_or_else(invalid)?,
            chapter: positive(chapter).ok_or_else(invalid)?,
        },
        _ => return Err(invalid()),
    };
    Ok(action)
}

/// Canonical unsigned decimal: digits only, no leading zero except `0` itself.
fn number(field: &str) -> Option<u32> {
    let canonical = !field.is_empty()
        && field.bytes().all(|b| b.is_ascii_digit())
        && (field == "0" || !field.starts_with('0'));
    if canonical {
        field.parse().ok()
    } else {
        None
    }
}

fn positive(field: &str) -> Option<u32> {
    number(field).filter(|&n| n > 0)
}

fn book_id(field: &str) -> Option<BookId> {
    positive(field).map(BookId)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<NavAction> {
        vec![
            Position::root().into(),
            Position::Books { page: 3 }.into(),
            Position::Chapters {
                book: BookId(43),
                page: 0,
            }
            .into(),
            Position::Verses {
                book: BookId(19),
                chapter: 119,
                page: 14,
            }
            .into(),
            NavAction::ShowVerse {
                book: BookId(43),
                chapter: 3,
                verse: 16,
            },
            NavAction::ReadAll {
                book: BookId(1),
                chapter: 50,
            },
            Position::Verses {
                book: BookId(u32::MAX),
                chapter: u32::MAX,
                page: u32::MAX,
            }
            .into(),
            NavAction::ShowVerse {
                book: BookId(u32::MAX),
                chapter: u32::MAX,
                verse: u32::MAX,
            },
        ]
    }

    #[test]
    fn test_decode_inverts_encode() {
        for action in samples() {
            let token = encode(&action);
            assert_eq!(decode(&token), Ok(action), "token {token}");
        }
    }

    #[test]
    fn test_encode_is_deterministic_and_fits_callback_limit() {
        for action in samples() {
            let token = encode(&action);
            assert_eq!(token, encode(&action));
            assert!(token.len() <= MAX_TOKEN_LEN, "{token} too long");
            assert!(token.is_ascii());
        }
    }

    #[test]
    fn test_known_token_shapes() {
        assert_eq!(encode(&Position::Books { page: 1 }.into()), "b:1");
        assert_eq!(
            encode(&NavAction::ShowVerse {
                book: BookId(43),
                chapter: 3,
                verse: 16
            }),
            "s:43:3:16"
        );
        assert_eq!(
            decode("a:43:3"),
            Ok(NavAction::ReadAll {
                book: BookId(43),
                chapter: 3
            })
        );
    }

    #[test]
    fn test_rejects_invalid_tokens() {
        let bad = [
            "",
            "b",
            "b:",
            "b:x",
            "b:-1",
            "b:+1",
            "b:01",
            "b:1:2",
            "x:1",
            "B:1",
            "c:0:0",
            "c:1",
            "v:1:0:0",
            "s:1:1",
            "s:1:1:0",
            "a:1:1:1",
            "b:99999999999",
            "book_select_Genesis",
            "chapters_Song_of_Solomon_2",
            "b:1 ",
            "s:4³:3:16",
        ];
        for token in bad {
            assert!(decode(token).is_err(), "{token:?} should be invalid");
        }
        let long = format!("b:{}", "1".repeat(MAX_TOKEN_LEN));
        assert!(decode(&long).is_err());
    }

    #[test]
    fn test_position_helpers() {
        let p = Position::Verses {
            book: BookId(2),
            chapter: 5,
            page: 1,
        };
        assert_eq!(p.kind(), ListKind::Verses);
        assert_eq!(p.page(), 1);
        assert_eq!(p.with_page(4).page(), 4);
        assert_eq!(Position::root().kind(), ListKind::Books);
    }
}
