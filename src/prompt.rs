use crate::languages;

/// Builds the system instruction for a translation exchange.
///
/// The instruction pins the model to interpreter behavior: keep patient
/// intent and medical terminology, emit nothing but the translation.
pub fn system_instruction(from_lang: &str, to_lang: &str) -> String {
    let from_name = languages::source_name(from_lang);
    let to_name = languages::target_name(to_lang);

    format!(
        "You are a professional medical interpreter. \
         Translate from {from_name} to {to_name}. \
         Preserve patient intent and medical terminology. \
         Do not add explanations. Output only the translation."
    )
}
