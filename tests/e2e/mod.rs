// End-to-end tests for the Translate & Speak API
//
// Each test starts the full router on an ephemeral port. Gemini, Ollama,
// llama.cpp and the speech backend are replaced by wiremock servers owned
// by the test context, so tests run in parallel without shared state.

mod helpers;
mod test_extract;
mod test_health;
