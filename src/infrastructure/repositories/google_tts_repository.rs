use super::tts_repository::TtsRepository;
use crate::domain::tts::LanguageCode;
use async_trait::async_trait;
use regex::Regex;

/// Google Translate speech accepts at most 100 characters per request
const MAX_BATCH_SIZE: usize = 100;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Google Translate speech implementation of TTS repository
pub struct GoogleTtsRepository {
    http: reqwest::Client,
    base_url: String,
    clause_pattern: Regex,
}

impl GoogleTtsRepository {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            // Clause-ending punctuation, latin and CJK
            clause_pattern: Regex::new(r"[.!?;:,。！？；：，、]+\s*").expect("valid clause pattern"),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/translate_tts", self.base_url)
    }

    /// Split text into batches that respect clause boundaries
    /// Each batch is at most MAX_BATCH_SIZE characters
    fn split_into_batches(&self, text: &str) -> Vec<String> {
        split_into_batches(&self.clause_pattern, text, MAX_BATCH_SIZE)
    }

    /// Request speech for a single batch
    async fn call_backend(
        &self,
        text: &str,
        language: LanguageCode,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        let total = total.to_string();
        let index = index.to_string();
        let text_length = text.chars().count().to_string();

        tracing::debug!(
            language = %language,
            batch_index = %index,
            text_length = %text_length,
            "Calling speech backend"
        );

        let response = self
            .http
            .get(self.endpoint())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", language.as_str()),
                ("total", total.as_str()),
                ("idx", index.as_str()),
                ("textlen", text_length.as_str()),
                ("client", "tw-ob"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, language = %language, "Speech backend unreachable");
                format!("Speech backend error: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                language = %language,
                "Speech backend rejected request"
            );
            return Err(format!(
                "Speech backend returned HTTP {} for language '{}'",
                status.as_u16(),
                language
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read speech audio: {}", e))?;

        Ok(bytes.to_vec())
    }

    /// Synthesize multiple text batches and merge the audio results in order
    async fn synthesize_batches(
        &self,
        batches: &[String],
        language: LanguageCode,
    ) -> Result<Vec<u8>, String> {
        let mut merged_audio = Vec::new();

        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self
                .call_backend(batch, language, index, batches.len())
                .await?;
            merged_audio.extend(audio_data);

            tracing::debug!(
                batch_index = index,
                total_audio_size = merged_audio.len(),
                "Batch synthesized and merged"
            );
        }

        Ok(merged_audio)
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = self.split_into_batches(text);
        if batches.is_empty() {
            return Err("No speakable text".to_string());
        }

        tracing::info!(
            language = %language,
            batch_count = batches.len(),
            text_length = text.chars().count(),
            "Starting speech synthesis"
        );

        let audio_data = self.synthesize_batches(&batches, language).await?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "google_translate",
            language = %language,
            latency_ms = duration.as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}

/// Split text on clause punctuation, packing clauses into batches of at most
/// `max` characters. Clauses longer than `max` are split on whitespace, and
/// words longer than `max` are cut by characters.
fn split_into_batches(clause_pattern: &Regex, text: &str, max: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if text.chars().count() <= max {
        return vec![text.to_string()];
    }

    let mut batches = Vec::new();
    let mut current = String::new();
    let mut last_end = 0;

    let mut segments: Vec<&str> = clause_pattern
        .find_iter(text)
        .map(|mat| {
            let segment = &text[last_end..mat.end()];
            last_end = mat.end();
            segment
        })
        .collect();
    if last_end < text.len() {
        segments.push(&text[last_end..]);
    }

    for segment in segments {
        let segment_len = segment.chars().count();

        if segment_len > max {
            flush(&mut batches, &mut current);
            batches.extend(split_long_segment(segment, max));
            continue;
        }

        if current.chars().count() + segment_len > max {
            flush(&mut batches, &mut current);
        }
        current.push_str(segment);
    }
    flush(&mut batches, &mut current);

    batches
}

fn flush(batches: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        batches.push(trimmed.to_string());
    }
    current.clear();
}

fn split_long_segment(segment: &str, max: usize) -> Vec<String> {
    let mut batches = Vec::new();
    let mut current = String::new();

    for word in segment.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max {
            flush(&mut batches, &mut current);
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max) {
                batches.push(chunk.iter().collect());
            }
            continue;
        }

        let separator = usize::from(!current.is_empty());
        if current.chars().count() + separator + word_len > max {
            flush(&mut batches, &mut current);
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    flush(&mut batches, &mut current);

    batches
}
