//! Chat Streaming
//!
//! Incremental decoding of the newline-delimited JSON chat stream and the
//! word-by-word animation used for non-streaming responses.

pub mod decoder;
pub mod reader;
pub mod text;

pub use decoder::{ChatEvent, StreamDecoder};
pub use reader::stream_chat;
