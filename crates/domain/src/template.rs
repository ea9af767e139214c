//! Message template substitution.
//!
//! Templates are literal text interspersed with `$asset.datapoint$`
//! references. Substitution never fails: malformed or unresolvable
//! references degrade to empty text and are reported as diagnostics for the
//! caller to log. The scanner is an explicit two-state machine (literal
//! mode / reference mode) so the edge cases stay enumerable.

use serde_json::{Map, Value};

/// The sentinel character opening and closing a variable reference.
pub const DELIMITER: char = '$';

/// Result of one substitution pass: the output text plus everything that
/// went wrong along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The template with every reference spliced in.
    pub text: String,
    /// Non-fatal problems encountered while scanning.
    pub diagnostics: Vec<TemplateDiagnostic>,
}

impl Substitution {
    /// True when the pass produced no diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Non-fatal problems produced while substituting a template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateDiagnostic {
    /// An opening sentinel with no closing sentinel. Scanning stops and the
    /// tail of the template, from the sentinel onward, is dropped.
    #[error("unterminated reference at byte {offset}")]
    Unterminated {
        /// Byte offset of the opening sentinel in the template.
        offset: usize,
    },

    /// A reference without an `asset.datapoint` shape (no dot, or empty).
    #[error("malformed reference '{reference}'")]
    MalformedReference {
        /// The reference text between the sentinels.
        reference: String,
    },

    /// The readings carry no object member for the referenced asset.
    #[error("there is no asset '{asset}' in the data received")]
    UnknownAsset {
        /// The referenced asset name.
        asset: String,
    },

    /// The asset exists but has no member for the referenced datapoint.
    #[error("there is no datapoint '{datapoint}' in the '{asset}' asset received")]
    UnknownDatapoint {
        /// The referenced asset name.
        asset: String,
        /// The referenced datapoint name.
        datapoint: String,
    },
}

/// Scanner mode.
enum State {
    /// Copying literal text to the output.
    Literal,
    /// Accumulating a reference; entered at an opening sentinel.
    Reference {
        /// Byte offset of the opening sentinel.
        start: usize,
        /// Text accumulated since the opening sentinel.
        name: String,
    },
}

/// Splice `readings` values into `template`.
///
/// Literal text is copied verbatim. Each `$asset.datapoint$` reference is
/// resolved against `readings` and formatted by the resolved value's type:
/// strings verbatim, floats with six fractional digits, integers as plain
/// decimals, anything else as empty text. Unresolvable references
/// contribute empty text and a diagnostic; an unterminated reference drops
/// the remainder of the template.
#[must_use]
pub fn substitute(template: &str, readings: &Map<String, Value>) -> Substitution {
    let mut text = String::with_capacity(template.len());
    let mut diagnostics = Vec::new();
    let mut state = State::Literal;

    for (offset, ch) in template.char_indices() {
        state = match state {
            State::Literal if ch == DELIMITER => State::Reference {
                start: offset,
                name: String::new(),
            },
            State::Literal => {
                text.push(ch);
                State::Literal
            }
            State::Reference { name, .. } if ch == DELIMITER => {
                match resolve(&name, readings) {
                    Ok(fragment) => text.push_str(&fragment),
                    Err(diagnostic) => diagnostics.push(diagnostic),
                }
                State::Literal
            }
            State::Reference { start, mut name } => {
                name.push(ch);
                State::Reference { start, name }
            }
        };
    }

    if let State::Reference { start, .. } = state {
        diagnostics.push(TemplateDiagnostic::Unterminated { offset: start });
    }

    Substitution { text, diagnostics }
}

/// Resolve one `asset.datapoint` reference against the readings object.
fn resolve(
    reference: &str,
    readings: &Map<String, Value>,
) -> Result<String, TemplateDiagnostic> {
    let Some((asset, datapoint)) = reference.split_once('.') else {
        return Err(TemplateDiagnostic::MalformedReference {
            reference: reference.to_string(),
        });
    };

    let Some(datapoints) = readings.get(asset).and_then(Value::as_object) else {
        return Err(TemplateDiagnostic::UnknownAsset {
            asset: asset.to_string(),
        });
    };

    let Some(value) = datapoints.get(datapoint) else {
        return Err(TemplateDiagnostic::UnknownDatapoint {
            asset: asset.to_string(),
            datapoint: datapoint.to_string(),
        });
    };

    Ok(format_value(value))
}

/// Format a resolved reading by its JSON type.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                int.to_string()
            } else if let Some(int) = number.as_u64() {
                int.to_string()
            } else if let Some(float) = number.as_f64() {
                format!("{float:.6}")
            } else {
                String::new()
            }
        }
        _ => String::new(),
    }
}
