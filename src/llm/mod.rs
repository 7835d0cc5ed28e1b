mod interface;
mod openai;

pub use interface::{ChatCompletionClient, ChatMessage};
pub use openai::OpenAiClient;
