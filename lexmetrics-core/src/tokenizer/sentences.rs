//! Rule-based sentence segmentation

use std::ops::Range;

/// Lower-cased abbreviations whose trailing period never ends a sentence
const ABBREVIATIONS: &[&str] = &[
    "approx", "apr", "aug", "ave", "blvd", "capt", "cf", "co", "col", "corp", "dec", "dept",
    "dr", "etc", "feb", "fig", "figs", "ft", "gen", "gov", "hon", "inc", "jan", "jr", "jul",
    "jun", "lt", "ltd", "messrs", "mr", "mrs", "ms", "mt", "nov", "oct", "prof", "rep", "rev",
    "sen", "sep", "sept", "sgt", "sr", "st", "vol", "vs",
];

/// Characters that may follow a terminator and still belong to the sentence
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}'];

/// Characters stripped from the front of the token preceding a period
const OPENERS: &[char] = &['"', '\'', '(', '[', '{', '\u{201C}', '\u{2018}'];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{2026}')
}

/// Byte ranges of the sentences in `text`, untrimmed
///
/// Ranges are contiguous; whitespace-only ranges are omitted.
pub(crate) fn sentence_spans(text: &str) -> Vec<Range<usize>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        let run_start = chars[i].0;
        while i < chars.len() && is_terminator(chars[i].1) {
            i += 1;
        }
        let run_end = chars.get(i).map_or(text.len(), |(pos, _)| *pos);
        while i < chars.len() && CLOSERS.contains(&chars[i].1) {
            i += 1;
        }
        let end = chars.get(i).map_or(text.len(), |(pos, _)| *pos);

        let followed_by_space = chars.get(i).map_or(true, |(_, c)| c.is_whitespace());
        if followed_by_space && ends_sentence(text, run_start..run_end, end) {
            push_span(text, start..end, &mut spans);
            start = end;
        }
    }

    push_span(text, start..text.len(), &mut spans);
    spans
}

fn push_span(text: &str, span: Range<usize>, spans: &mut Vec<Range<usize>>) {
    if !text[span.clone()].trim().is_empty() {
        spans.push(span);
    }
}

fn ends_sentence(text: &str, run: Range<usize>, end: usize) -> bool {
    let terminators = &text[run.clone()];

    if terminators.contains(|c| c == '!' || c == '?') {
        return true;
    }

    if terminators == "." {
        return !is_abbreviation(preceding_token(text, run.start));
    }

    // Ellipsis: a boundary only before a capitalised word or at the end
    text[end..]
        .chars()
        .find(|c| !c.is_whitespace())
        .map_or(true, char::is_uppercase)
}

fn preceding_token(text: &str, period: usize) -> &str {
    let before = &text[..period];
    let token_start = before
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(pos, c)| pos + c.len_utf8());
    before[token_start..].trim_start_matches(OPENERS)
}

fn is_abbreviation(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let lower = token.to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }

    // Initials and dotted forms: "J", "e.g", "u.s.a"
    lower.split('.').all(|part| {
        let mut chars = part.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    }) && !matches!(lower.as_str(), "a" | "i")
}
