mod completion;

pub use completion::{CompletionParameters, CompletionProvider};
