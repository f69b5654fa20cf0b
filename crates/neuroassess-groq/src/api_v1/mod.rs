mod chat_completion;

pub use chat_completion::*;
