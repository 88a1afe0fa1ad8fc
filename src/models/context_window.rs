use crate::types::{CommentIndex, Sentence, SentenceIndex, TickerSymbol};

/// The sentence neighborhood around an alias match.
///
/// Holds the matched sentence plus up to `radius` sentences on each side,
/// clipped at the boundaries of its comment.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextWindow {
    pub ticker_symbol: TickerSymbol,
    pub comment_index: CommentIndex,
    pub sentence_index: SentenceIndex,
    pub sentences: Vec<Sentence>,
}

impl ContextWindow {
    /// # Panics
    /// Panics if `sentence_index` is out of bounds for `comment_sentences`.
    pub fn around(
        ticker_symbol: &str,
        comment_index: CommentIndex,
        comment_sentences: &[Sentence],
        sentence_index: SentenceIndex,
        radius: usize,
    ) -> Self {
        assert!(sentence_index < comment_sentences.len());

        let start = sentence_index.saturating_sub(radius);
        let end = (sentence_index + radius + 1).min(comment_sentences.len());

        ContextWindow {
            ticker_symbol: ticker_symbol.to_string(),
            comment_index,
            sentence_index,
            sentences: comment_sentences[start..end].to_vec(),
        }
    }

    /// The window's sentences joined by single spaces.
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences() -> Vec<Sentence> {
        vec!["One.", "Two.", "Three.", "Four."]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_window_is_clipped_at_comment_start() {
        let window = ContextWindow::around("NVDA", 0, &sentences(), 0, 1);

        assert_eq!(window.sentences, vec!["One.", "Two."]);
        assert_eq!(window.text(), "One. Two.");
    }

    #[test]
    fn test_window_in_middle() {
        let window = ContextWindow::around("NVDA", 2, &sentences(), 2, 1);

        assert_eq!(window.sentences, vec!["Two.", "Three.", "Four."]);
        assert_eq!(window.comment_index, 2);
        assert_eq!(window.sentence_index, 2);
    }

    #[test]
    fn test_window_is_clipped_at_comment_end() {
        let window = ContextWindow::around("NVDA", 0, &sentences(), 3, 1);

        assert_eq!(window.sentences, vec!["Three.", "Four."]);
    }

    #[test]
    fn test_single_sentence_comment() {
        let only = vec!["Only one".to_string()];
        let window = ContextWindow::around("NVDA", 0, &only, 0, 1);

        assert_eq!(window.text(), "Only one");
    }
}
