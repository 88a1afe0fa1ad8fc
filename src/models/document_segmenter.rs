use crate::constants::{
    COMMENT_MARKER_PREFIX, COMMENT_SEPARATOR_PREFIX, SENTENCE_ABBREVIATIONS, THREAD_TITLE_PREFIX,
};
use crate::types::Sentence;
use log::debug;

/// A single comment of a discussion thread, broken into sentences.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comment {
    pub sentences: Vec<Sentence>,
}

/// Splits a block of text into sentences.
///
/// Sentence splitting is best-effort; implementations are free to mis-split
/// around abbreviations or unusual punctuation.
pub trait SentenceSplitter {
    fn split(&self, text: &str) -> Vec<Sentence>;
}

/// Splits on runs of `.`, `!` and `?` which are followed by whitespace or the
/// end of the text, except after a few common abbreviations.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSentenceSplitter;

impl PunctuationSentenceSplitter {
    fn is_terminal(c: char) -> bool {
        matches!(c, '.' | '!' | '?')
    }

    fn is_closing(c: char) -> bool {
        matches!(c, '"' | '\'' | ')' | ']')
    }

    /// Whether a lone period directly after `preceding` belongs to an abbreviation.
    fn ends_with_abbreviation(preceding: &str) -> bool {
        preceding
            .split_whitespace()
            .last()
            .map(|word| {
                word.trim_start_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .map_or(false, |word| SENTENCE_ABBREVIATIONS.contains(&word.as_str()))
    }
}

impl SentenceSplitter for PunctuationSentenceSplitter {
    fn split(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut push_sentence = |sentence: &str| {
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
        };

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentence_start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (terminal_offset, c) = chars[i];

            if Self::is_terminal(c) {
                let terminal_index = i;

                // Swallow `?!`, `...` and closing quotes / brackets
                while i + 1 < chars.len()
                    && (Self::is_terminal(chars[i + 1].1) || Self::is_closing(chars[i + 1].1))
                {
                    i += 1;
                }

                let next = chars.get(i + 1);
                let at_boundary = next.map_or(true, |(_, next_char)| next_char.is_whitespace());
                let is_abbreviation = c == '.'
                    && i == terminal_index
                    && Self::ends_with_abbreviation(&text[sentence_start..terminal_offset]);

                if at_boundary && !is_abbreviation {
                    let sentence_end = next.map_or(text.len(), |(offset, _)| *offset);
                    push_sentence(&text[sentence_start..sentence_end]);
                    sentence_start = sentence_end;
                }
            }

            i += 1;
        }

        push_sentence(&text[sentence_start..]);

        sentences
    }
}

/// Breaks a scraped thread into comments, and each comment into sentences.
pub struct DocumentSegmenter<S: SentenceSplitter> {
    sentence_splitter: S,
}

impl Default for DocumentSegmenter<PunctuationSentenceSplitter> {
    fn default() -> Self {
        Self::new(PunctuationSentenceSplitter)
    }
}

impl<S: SentenceSplitter> DocumentSegmenter<S> {
    pub fn new(sentence_splitter: S) -> Self {
        DocumentSegmenter { sentence_splitter }
    }

    /// Note: A document without any `Comment N:` marker yields no comments.
    pub fn segment(&self, text: &str) -> Vec<Comment> {
        let comments: Vec<Comment> = split_comment_texts(text)
            .iter()
            .map(|comment_text| Comment {
                sentences: self.sentence_splitter.split(comment_text),
            })
            .collect();

        debug!("Segmented document into {} comments", comments.len());

        comments
    }
}

/// Returns the text of each non-empty comment, with its lines trimmed and
/// joined by single spaces.
///
/// Text before the first comment marker (such as the thread title) is ignored,
/// as are blank lines, separator lines and thread title lines.
pub fn split_comment_texts(text: &str) -> Vec<String> {
    let mut comment_texts = Vec::new();
    let mut current_lines: Option<Vec<&str>> = None;

    for line in text.lines() {
        let line = line.trim();

        if let Some(remainder) = parse_comment_marker(line) {
            if let Some(lines) = current_lines.take() {
                comment_texts.push(lines.join(" "));
            }

            let mut lines = Vec::new();
            if !remainder.is_empty() {
                lines.push(remainder);
            }
            current_lines = Some(lines);
        } else if line.is_empty()
            || line.starts_with(COMMENT_SEPARATOR_PREFIX)
            || line.starts_with(THREAD_TITLE_PREFIX)
        {
            continue;
        } else if let Some(lines) = current_lines.as_mut() {
            lines.push(line);
        }
    }

    if let Some(lines) = current_lines {
        comment_texts.push(lines.join(" "));
    }

    comment_texts.retain(|comment_text| !comment_text.is_empty());

    comment_texts
}

/// Recognizes a `Comment N:` line, returning any text which follows the colon.
fn parse_comment_marker(line: &str) -> Option<&str> {
    let (number, remainder) = line
        .strip_prefix(COMMENT_MARKER_PREFIX)?
        .split_once(':')?;
    let number = number.trim();

    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(remainder.trim())
}
