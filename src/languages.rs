/// BCP-47 code to human-readable name, used only to enrich the prompt.
///
/// The table mirrors the languages offered by the frontend selector.
/// Codes without an entry are not an error.
const CODE_TO_NAME: &[(&str, &str)] = &[
    ("en-US", "English"),
    ("en-GB", "English (UK)"),
    ("hi-IN", "Hindi"),
    ("es-ES", "Spanish"),
    ("es-MX", "Spanish (Mexico)"),
    ("de-DE", "German"),
    ("fr-FR", "French"),
];

fn lookup(code: &str) -> Option<&'static str> {
    CODE_TO_NAME
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Display name for the target language. Unknown codes pass through verbatim.
pub fn target_name(code: &str) -> &str {
    lookup(code).unwrap_or(code)
}

/// Display name for the source language. Anything not in the table is
/// treated as "auto-detect", including the explicit "auto" sentinel.
pub fn source_name(code: &str) -> &str {
    lookup(code).unwrap_or("auto-detect")
}
