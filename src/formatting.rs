/*!
 * Output normalization for translated code.
 *
 * LLM responses routinely wrap the translated snippet in Markdown code fences
 * (```lang ... ```). This module strips that wrapping with a small pure
 * function so it can be tested without any network dependency.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an opening or closing triple-backtick fence, with an optional
/// language tag and the newline that follows an opening fence.
static FENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```[A-Za-z0-9_+\-]*\n?").expect("fence regex is valid")
});

/// Strip Markdown code-fence markup and trim surrounding whitespace
///
/// Fences anywhere in the text are removed, so a response consisting of a
/// single fenced block yields exactly the code inside it.
pub fn strip_code_fences(raw: &str) -> String {
    FENCE_REGEX.replace_all(raw, "").trim().to_string()
}
