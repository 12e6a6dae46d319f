mod damage_event;
mod error;
mod extractor;
mod reader;

pub use damage_event::*;
pub use error::{ExtractError, NameField, ReaderError};
pub use extractor::EventExtractor;
pub use reader::{ReadMessages, decode_messages, read_messages};
