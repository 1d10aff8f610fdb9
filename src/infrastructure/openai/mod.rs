mod client;
mod dtos;


pub use client::{DisabledSummarizer, HttpOpenAiClient, ReviewSummarizer};
pub use dtos::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
