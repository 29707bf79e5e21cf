/// Build the translation prompt shared by every provider.
///
/// The instruction wording is part of the contract with the backends: it asks
/// for the bare translation with no chatter or markdown around it.
pub fn build_translation_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Translate the following text into {}. Provide ONLY the translation, without any conversational text or markdown formatting of the translation itself.\n\nText:\n{}",
        target_language, text
    )
}
