//! Treebank-style word segmentation
//!
//! Splits one sentence into raw tokens following Penn Treebank conventions:
//! opening and closing punctuation become their own tokens, English
//! contraction suffixes are detached, and the period is split off only when it
//! ends the sentence. Internal punctuation such as hyphens, slashes or inner
//! periods stays inside the token, so `well-known` or `U.S.` remain one token.

/// Characters detached from the front of a chunk
const OPENING: &[char] = &['"', '(', '[', '{', '<', '`', '\'', '\u{201C}'];

/// Characters detached from the end of a chunk
const CLOSING: &[char] = &[
    '"', ')', ']', '}', '>', ',', ';', ':', '!', '?', '\'', '\u{201D}',
];

/// Characters that always form a token of their own
const ALWAYS_SPLIT: &[char] = &[
    ';', '@', '#', '$', '%', '&', '?', '!', '(', ')', '[', ']', '{', '}', '<', '>', '"',
];

/// Contraction suffixes, matched case-insensitively
const CONTRACTION_SUFFIXES: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Fused words split at a fixed byte offset
const FUSED_WORDS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

/// Split a sentence into raw tokens
pub(crate) fn split_sentence(sentence: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut chunks = sentence.split_whitespace().peekable();

    while let Some(chunk) = chunks.next() {
        let is_final = chunks.peek().is_none();
        split_chunk(chunk, is_final, &mut tokens);
    }

    tokens
}

/// Whether a raw token counts as a word
pub(crate) fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

fn split_chunk<'a>(chunk: &'a str, sentence_final: bool, out: &mut Vec<&'a str>) {
    let mut rest = chunk;

    // Leading punctuation
    while let Some(c) = rest.chars().next() {
        let width = c.len_utf8();
        if !OPENING.contains(&c) || rest.len() == width {
            break;
        }
        out.push(&rest[..width]);
        rest = &rest[width..];
    }

    // Trailing punctuation, collected back to front
    let mut tail = Vec::new();
    while let Some(c) = rest.chars().next_back() {
        let width = c.len_utf8();
        if rest.len() == width {
            break;
        }
        if c == '.' {
            if rest.ends_with("...") && rest.len() > 3 {
                tail.push(&rest[rest.len() - 3..]);
                rest = &rest[..rest.len() - 3];
                continue;
            }
            if !sentence_final || rest[..rest.len() - 1].ends_with('.') {
                break;
            }
        } else if !CLOSING.contains(&c) && c != '\u{2026}' {
            break;
        }
        tail.push(&rest[rest.len() - width..]);
        rest = &rest[..rest.len() - width];
    }

    split_inner(rest, out);
    out.extend(tail.into_iter().rev());
}

fn split_inner<'a>(chunk: &'a str, out: &mut Vec<&'a str>) {
    let mut start = 0;
    let mut iter = chunk.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        let width = if chunk[i..].starts_with("--") || chunk[i..].starts_with("...") {
            if c == '-' {
                2
            } else {
                3
            }
        } else {
            let next_is_digit = iter.peek().is_some_and(|(_, n)| n.is_ascii_digit());
            let splits = ALWAYS_SPLIT.contains(&c) || (matches!(c, ',' | ':') && !next_is_digit);
            if !splits {
                continue;
            }
            c.len_utf8()
        };

        if start < i {
            push_with_contractions(&chunk[start..i], out);
        }
        out.push(&chunk[i..i + width]);
        start = i + width;
        // Skip the remaining characters of a multi-character separator
        while iter.peek().is_some_and(|(j, _)| *j < start) {
            iter.next();
        }
    }

    if start < chunk.len() {
        push_with_contractions(&chunk[start..], out);
    }
}

fn push_with_contractions<'a>(piece: &'a str, out: &mut Vec<&'a str>) {
    let lower = piece.to_ascii_lowercase();

    for (word, cut) in FUSED_WORDS {
        if lower == *word {
            out.push(&piece[..*cut]);
            out.push(&piece[*cut..]);
            return;
        }
    }

    for suffix in CONTRACTION_SUFFIXES {
        if lower.len() > suffix.len() && lower.ends_with(suffix) {
            let cut = piece.len() - suffix.len();
            if !piece[..cut].ends_with('\'') {
                out.push(&piece[..cut]);
                out.push(&piece[cut..]);
                return;
            }
        }
    }

    out.push(piece);
}
