//! Input text reading from the command line, files and stdin.

mod reader;

pub use reader::{InputReader, InputSource};
