pub mod extraction;
pub mod translation;
pub mod tts;
pub mod workflow;
