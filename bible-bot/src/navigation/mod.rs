//! Button navigation: positions in the book → chapter → verse hierarchy, the callback token codec,
//! page-window math, and the menu renderer.

mod codec;
mod menu;
mod paging;

pub use codec::{decode, encode, InvalidToken, ListKind, NavAction, Position, MAX_TOKEN_LEN};
pub use menu::{
    Menu, MenuLayout, MenuRenderer, RenderError, BOOKS_MENU_TEXT, LABEL_BACK_TO_BOOKS,
    LABEL_BACK_TO_CHAPTERS, LABEL_NEXT, LABEL_PREVIOUS, LABEL_READ_ALL,
};
pub use paging::PageWindow;
