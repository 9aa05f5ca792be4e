//! Word Streaming
//!
//! Replays a complete response one word at a time. Used for the
//! non-streaming chat mode so the assistant message still grows
//! incrementally instead of appearing all at once.

use gloo_timers::future::TimeoutFuture;

/// Delay between emitted words, in milliseconds.
const WORD_DELAY_MS: u32 = 50;

/// Split `text` into display tokens: each word keeps a trailing space so the
/// consumer can concatenate tokens directly.
pub fn split_words(text: &str) -> Vec<String> {
    text.split(' ').map(|word| format!("{} ", word)).collect()
}

/// Emit `text` word by word with a fixed per-token delay.
pub async fn stream_text(text: &str, mut emit: impl FnMut(&str)) {
    for word in split_words(text) {
        emit(&word);
        TimeoutFuture::new(WORD_DELAY_MS).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_words_with_trailing_spaces() {
        assert_eq!(split_words("message one two"), vec!["message ", "one ", "two "]);
    }

    #[test]
    fn single_word_passes_through() {
        assert_eq!(split_words("gm"), vec!["gm "]);
    }
}
