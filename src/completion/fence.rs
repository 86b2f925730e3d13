/// Remove a leading and/or trailing markdown code fence from model output.
///
/// Models asked for bare JSON still sometimes answer with
/// ```` ```json\n{...}\n``` ````. The opening fence may carry a language tag;
/// anything between the fences is returned trimmed and otherwise untouched.
/// Text without fences comes back trimmed.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        text = rest
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
            .trim_start();
    }

    if let Some(body) = text.strip_suffix("```") {
        text = body.trim_end();
    }

    text
}
