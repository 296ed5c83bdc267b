//! Line formatter — strips priority markers or substitutes name templates,
//! depending on the mode the service was started in.

use anyhow::{bail, Result};
use rand::Rng;

/// Marker prefixes, attempted in this order. Each strips at most one leading
/// occurrence from the running result; mid-string occurrences are untouched.
const MARKER_PREFIXES: [&str; 4] = ["X ", "(A) ", "(B) ", "(C) "];

/// Names drawn for the `XNAMEX` / `XLOWERNAMEX` template tokens.
const NAMES: [&str; 12] = [
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Judy", "Mallory",
    "Oscar",
];

const NAME_TOKEN: &str = "XNAMEX";
const LOWER_NAME_TOKEN: &str = "XLOWERNAMEX";

/// Which formatting strategy the service applies to every resolved line.
/// The two source corpus variants are mutually exclusive features over the
/// same scaffold; here they are one configurable strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    StripMarkers,
    Templates,
}

impl FormatMode {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "strip" => Ok(FormatMode::StripMarkers),
            "templates" => Ok(FormatMode::Templates),
            other => bail!("FORMAT_MODE must be 'strip' or 'templates', got '{other}'"),
        }
    }
}

/// Applies the configured formatting strategy to a raw corpus line.
pub fn format_line<R: Rng + ?Sized>(mode: FormatMode, raw_text: &str, rng: &mut R) -> String {
    match mode {
        FormatMode::StripMarkers => strip_markers(raw_text).to_string(),
        FormatMode::Templates => substitute_names(raw_text, rng),
    }
}

/// Removes leading marker prefixes. All four are checked in sequence against
/// the running result, so a line like `X (A) foo` loses both markers.
pub fn strip_markers(raw_text: &str) -> &str {
    let mut rest = raw_text;
    for prefix in MARKER_PREFIXES {
        rest = rest.strip_prefix(prefix).unwrap_or(rest);
    }
    rest
}

/// Replaces every `XNAMEX` with a random name and every `XLOWERNAMEX` with a
/// random lowercased name. Each occurrence gets its own independent draw.
pub fn substitute_names<R: Rng + ?Sized>(raw_text: &str, rng: &mut R) -> String {
    let out = replace_each(raw_text, LOWER_NAME_TOKEN, || {
        random_name(rng).to_lowercase()
    });
    replace_each(&out, NAME_TOKEN, || random_name(rng).to_string())
}

fn random_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    NAMES[rng.gen_range(0..NAMES.len())]
}

/// Like `str::replace`, but re-evaluates the replacement per occurrence.
fn replace_each(haystack: &str, token: &str, mut replacement: impl FnMut() -> String) -> String {
    let mut out = String::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(at) = rest.find(token) {
        out.push_str(&rest[..at]);
        out.push_str(&replacement());
        rest = &rest[at + token.len()..];
    }
    out.push_str(rest);
    out
}
