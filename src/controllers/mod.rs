pub mod catalog;
pub mod extract;
pub mod health;
pub mod translate;
pub mod tts;
pub mod upload;
