//! Stream Decoder
//!
//! Reassembles newline-delimited JSON records from an arbitrarily chunked
//! byte stream and decodes each complete line into a [`ChatEvent`].
//!
//! The decoder is deliberately I/O-free: callers feed it raw chunks as they
//! arrive and collect whatever events became complete. Lines that are not
//! valid JSON, or that are missing required fields, are dropped without
//! stopping the stream.

use serde::Deserialize;

/// One decoded unit of server-sent incremental chat output.
///
/// Wire format: `{"type": "...", "content": "...", ...}` per line. The
/// server emits `tool` and `tool_usage` interchangeably for tool activity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    Thinking {
        content: String,
        #[serde(default)]
        step: Option<String>,
    },
    #[serde(alias = "tool")]
    ToolUsage {
        content: String,
        #[serde(default)]
        details: Option<String>,
    },
    Message {
        content: String,
        #[serde(default)]
        session_id: Option<String>,
    },
    Image {
        content: String,
        #[serde(default)]
        image_url: Option<String>,
    },
    Error {
        content: String,
    },
    Complete {
        #[serde(default)]
        content: Option<String>,
        #[serde(default)]
        session_id: Option<String>,
    },
}

/// Incremental decoder for one chat response body.
///
/// Buffers bytes (not text) across reads so a UTF-8 sequence split between
/// two chunks survives intact; records are only decoded once their
/// terminating newline has arrived.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    buffer: Vec<u8>,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk of the response body, returning every event whose
    /// record was completed by it, in arrival order.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<ChatEvent> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            // Drop the newline itself
            if let Some(event) = parse_line(&line[..line.len() - 1]) {
                events.push(event);
            }
        }
        events
    }

    /// Flush the decoder at end of stream. The server is not required to
    /// terminate its final record with a newline, so whatever is left in the
    /// buffer gets one last parse attempt.
    pub fn finish(mut self) -> Option<ChatEvent> {
        let rest = std::mem::take(&mut self.buffer);
        parse_line(&rest)
    }
}

fn parse_line(line: &[u8]) -> Option<ChatEvent> {
    let text = String::from_utf8_lossy(line);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(chunks: &[&[u8]]) -> Vec<ChatEvent> {
        let mut decoder = StreamDecoder::new();
        let mut events = Vec::new();
        for chunk in chunks {
            events.extend(decoder.feed(chunk));
        }
        events.extend(decoder.finish());
        events
    }

    #[test]
    fn decodes_basic_records() {
        let body = b"{\"type\":\"thinking\",\"content\":\"Analyzing...\",\"step\":\"start\"}\n\
                     {\"type\":\"message\",\"content\":\"Hello\"}\n";
        let events = decode_all(&[body]);
        assert_eq!(
            events,
            vec![
                ChatEvent::Thinking {
                    content: "Analyzing...".to_string(),
                    step: Some("start".to_string()),
                },
                ChatEvent::Message {
                    content: "Hello".to_string(),
                    session_id: None,
                },
            ]
        );
    }

    #[test]
    fn chunk_boundaries_do_not_matter() {
        // Includes multi-byte UTF-8 so single-byte splits land inside
        // characters.
        let body = "{\"type\":\"message\",\"content\":\"héllo 💱\"}\n\
                    {\"type\":\"message\",\"content\":\"héllo 💱 again\",\"session_id\":\"s-1\"}\n"
            .as_bytes();

        let contiguous = decode_all(&[body]);
        assert_eq!(contiguous.len(), 2);

        // One byte at a time
        let chunks: Vec<&[u8]> = body.chunks(1).collect();
        assert_eq!(decode_all(&chunks), contiguous);

        // Every other split size up to the body length
        for size in 2..body.len() {
            let chunks: Vec<&[u8]> = body.chunks(size).collect();
            assert_eq!(decode_all(&chunks), contiguous, "split size {}", size);
        }
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let body = b"not json at all\n\
                     {\"type\":\"message\",\"content\":\"first\"}\n\
                     {\"broken\n\
                     {\"type\":\"message\",\"content\":\"second\"}\n";
        let events = decode_all(&[body]);
        assert_eq!(
            events,
            vec![
                ChatEvent::Message { content: "first".to_string(), session_id: None },
                ChatEvent::Message { content: "second".to_string(), session_id: None },
            ]
        );
    }

    #[test]
    fn records_missing_required_fields_are_skipped() {
        // Valid JSON, but no usable type/content
        let body = b"{\"content\":\"orphan\"}\n\
                     {\"type\":\"message\"}\n\
                     {\"type\":\"teleport\",\"content\":\"unknown kind\"}\n\
                     {\"type\":\"message\",\"content\":\"kept\"}\n";
        let events = decode_all(&[body]);
        assert_eq!(
            events,
            vec![ChatEvent::Message { content: "kept".to_string(), session_id: None }]
        );
    }

    #[test]
    fn finish_flushes_unterminated_final_record() {
        let mut decoder = StreamDecoder::new();
        assert!(decoder.feed(b"{\"type\":\"message\",\"content\":\"no newline\"}").is_empty());
        assert_eq!(
            decoder.finish(),
            Some(ChatEvent::Message { content: "no newline".to_string(), session_id: None })
        );
    }

    #[test]
    fn tool_is_an_alias_for_tool_usage() {
        let events = decode_all(&[b"{\"type\":\"tool\",\"content\":\"searching\"}\n"]);
        assert_eq!(
            events,
            vec![ChatEvent::ToolUsage { content: "searching".to_string(), details: None }]
        );
    }

    #[test]
    fn blank_lines_produce_no_events() {
        let events = decode_all(&[b"\n  \n\r\n{\"type\":\"error\",\"content\":\"boom\"}\n\n"]);
        assert_eq!(events, vec![ChatEvent::Error { content: "boom".to_string() }]);
    }

    #[test]
    fn complete_carries_the_session_token() {
        let events = decode_all(&[b"{\"type\":\"complete\",\"session_id\":\"s-42\"}\n"]);
        assert_eq!(
            events,
            vec![ChatEvent::Complete { content: None, session_id: Some("s-42".to_string()) }]
        );
    }
}
