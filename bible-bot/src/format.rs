//! Text formatting for verses and chapters, and splitting long chapters into message-sized chunks.

use bible_corpus::{Book, Chapter, VerseRef};

/// Telegram's maximum message length, in bytes of UTF-8 text.
pub const MESSAGE_LIMIT: usize = 4096;

/// `John 3:16\n\n<text>`
pub fn format_verse(verse: &VerseRef<'_>) -> String {
    format!("{}\n\n{}", verse.citation(), verse.text())
}

/// The daily broadcast message wrapping one verse.
pub fn format_daily_verse(verse: &VerseRef<'_>) -> String {
    format!("✨ Daily Verse ✨\n\n{}\n\nGod bless you! 🙏", format_verse(verse))
}

/// Chapter as one string: a `📖 Book C` header, then `<n>. <text>` per verse, blank-line separated.
pub fn render_chapter(book: &Book, chapter: &Chapter) -> String {
    chapter_segments(book, chapter).concat()
}

/// Splits a chapter into messages of at most `limit` bytes. Splits fall between verses; a verse
/// longer than `limit` on its own is cut at whitespace (or a char boundary if it has none).
/// Concatenating the chunks gives back [`render_chapter`] exactly.
pub fn split_chapter(book: &Book, chapter: &Chapter, limit: usize) -> Vec<String> {
    pack_segments(chapter_segments(book, chapter), limit)
}

/// One segment per verse; the header rides with the first verse so it is never sent alone.
fn chapter_segments(book: &Book, chapter: &Chapter) -> Vec<String> {
    let header = format!("📖 {} {}\n\n", book.name(), chapter.number());
    let mut segments: Vec<String> = chapter
        .verses()
        .iter()
        .map(|v| format!("{}. {}\n\n", v.number(), v.text()))
        .collect();
    match segments.first_mut() {
        Some(first) => first.insert_str(0, &header),
        None => segments.push(header),
    }
    segments
}

/// Greedily packs segments into chunks of at most `limit` bytes.
pub fn pack_segments(segments: Vec<String>, limit: usize) -> Vec<String> {
    let limit = limit.max(4);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for segment in segments {
        if segment.len() > limit {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            chunks.extend(split_oversized(&segment, limit));
        } else if current.len() + segment.len() > limit {
            chunks.push(std::mem::replace(&mut current, segment));
        } else {
            current.push_str(&segment);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn split_oversized(text: &str, limit: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = text;
    while rest.len() > limit {
        let mut cut = limit;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        if let Some((idx, ws)) = rest[..cut]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
        {
            cut = idx + ws.len_utf8();
        }
        pieces.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }
    if !rest.is_empty() {
        pieces.push(rest.to_string());
    }
    pieces
}
