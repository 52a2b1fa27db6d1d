//! Cursive joining scanner
//!
//! A single left-to-right pass with one character of lookback. Every mapped
//! letter is first emitted in a provisional form; when the next letter turns
//! out to join it, the already emitted slot is rewritten in place.

use crate::form_table::{lookup, LetterFormSet, ALEF, LA, LAM, LA_FINAL};
use crate::options::ShapeOptions;
use crate::{Result, ShapeError};
use serde::Serialize;
use serde_json::Value;

/// Counters collected during a shaping pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShapeStats {
    /// Input characters scanned
    pub chars: usize,
    /// Characters found in the form table
    pub letters: usize,
    /// Joins between two letters, excluding ligatures
    pub joins: usize,
    /// Lam-alef ligatures formed
    pub ligatures: usize,
}

/// Lookback carried from one character to the next
#[derive(Debug, Clone, Copy, Default)]
struct ScanState {
    prev_char: Option<char>,
    prev_forms: Option<&'static LetterFormSet>,
    /// `None` when the previous slot was omitted
    prev_emitted: Option<char>,
    connectable: bool,
}

/// Converts logical Uyghur text into presentation forms
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapingScanner {
    options: ShapeOptions,
}

impl ShapingScanner {
    /// Create a scanner with the given options
    pub fn new(options: ShapeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ShapeOptions {
        &self.options
    }

    /// Shape a text string
    pub fn shape(&self, text: &str) -> String {
        self.shape_with_stats(text).0
    }

    /// Shape a dynamically typed value, which must be a JSON string
    pub fn shape_value(&self, value: &Value) -> Result<String> {
        match value {
            Value::String(text) => Ok(self.shape(text)),
            other => Err(ShapeError::InvalidInputType(json_type_name(other).to_string())),
        }
    }

    /// Shape a text string and report what the pass did
    pub fn shape_with_stats(&self, text: &str) -> (String, ShapeStats) {
        let mut output: Vec<char> = Vec::with_capacity(text.len());
        let mut state = ScanState::default();
        let mut stats = ShapeStats::default();

        for c in text.chars() {
            stats.chars += 1;
            let forms = lookup(c);

            let (emitted, connectable) = match forms {
                None => (Some(c), false),
                Some(current) => {
                    stats.letters += 1;
                    match (state.connectable, state.prev_forms, state.prev_emitted) {
                        (true, Some(previous), Some(prev_emitted)) => {
                            let (patched, emitted, connectable) =
                                if c == ALEF && state.prev_char == Some(LAM) {
                                    stats.ligatures += 1;
                                    let ligature = if prev_emitted == previous.isolated {
                                        LA
                                    } else {
                                        LA_FINAL
                                    };
                                    (
                                        ligature,
                                        self.options.ligature_placeholder.placeholder(),
                                        false,
                                    )
                                } else {
                                    stats.joins += 1;
                                    (
                                        previous.joined_form(prev_emitted),
                                        Some(current.final_form),
                                        current.connectable,
                                    )
                                };

                            if let Some(last) = output.last_mut() {
                                *last = patched;
                            }
                            (emitted, connectable)
                        }
                        _ => (Some(current.isolated), current.connectable),
                    }
                }
            };

            if let Some(emitted) = emitted {
                output.push(emitted);
            }

            state = ScanState {
                prev_char: Some(c),
                prev_forms: forms,
                prev_emitted: emitted,
                connectable,
            };
        }

        tracing::trace!(
            chars = stats.chars,
            letters = stats.letters,
            joins = stats.joins,
            ligatures = stats.ligatures,
            "shaped text"
        );

        (output.into_iter().collect(), stats)
    }
}

/// Name of a JSON value's type, for error reporting
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Shape text with default options
pub fn shape(text: &str) -> String {
    ShapingScanner::default().shape(text)
}

/// Shape a dynamically typed value with default options
pub fn shape_value(value: &Value) -> Result<String> {
    ShapingScanner::default().shape_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LigaturePlaceholder;
    use serde_json::json;

    fn omit() -> ShapingScanner {
        ShapingScanner::new(ShapeOptions {
            ligature_placeholder: LigaturePlaceholder::Omit,
        })
    }

    #[test]
    fn test_options_accessor() {
        assert_eq!(
            omit().options().ligature_placeholder,
            LigaturePlaceholder::Omit
        );
        assert_eq!(ShapingScanner::default().options(), &ShapeOptions::default());
    }

    #[test]
    fn test_empty_input() {
        let (shaped, stats) = ShapingScanner::default().shape_with_stats("");
        assert_eq!(shaped, "");
        assert_eq!(stats, ShapeStats::default());
    }

    #[test]
    fn test_single_letter_is_isolated() {
        assert_eq!(shape("\u{0628}"), "\u{FE8F}");
        assert_eq!(shape("\u{0627}"), "\u{FE8D}");
    }

    #[test]
    fn test_two_letter_join() {
        // beh + yeh
        assert_eq!(shape("\u{0628}\u{064A}"), "\u{FE91}\u{FEF2}");
        // beh + alef maksura
        assert_eq!(shape("\u{0628}\u{0649}"), "\u{FE91}\u{FEF0}");
    }

    #[test]
    fn test_three_letter_run() {
        // beh seen meem
        assert_eq!(shape("\u{0628}\u{0633}\u{0645}"), "\u{FE91}\u{FEB4}\u{FEE2}");
    }

    #[test]
    fn test_right_joining_breaks_run() {
        // beh reh beh: reh joins beh but does not join forward
        assert_eq!(
            shape("\u{0628}\u{0631}\u{0628}"),
            "\u{FE91}\u{FEAE}\u{FE8F}"
        );
    }

    #[test]
    fn test_non_letter_breaks_run() {
        assert_eq!(shape("\u{0628} \u{0628}"), "\u{FE8F} \u{FE8F}");
        // Arabic comma is in the block but not in the table
        assert_eq!(shape("\u{0628}\u{060C}\u{0628}"), "\u{FE8F}\u{060C}\u{FE8F}");
    }

    #[test]
    fn test_lam_alef_isolated() {
        assert_eq!(shape("\u{0644}\u{0627}"), "\u{FEFB}\0");
        assert_eq!(omit().shape("\u{0644}\u{0627}"), "\u{FEFB}");
    }

    #[test]
    fn test_lam_alef_after_join() {
        // beh lam alef: lam is already joined on its right
        assert_eq!(shape("\u{0628}\u{0644}\u{0627}"), "\u{FE91}\u{FEFC}\0");
        assert_eq!(omit().shape("\u{0628}\u{0644}\u{0627}"), "\u{FE91}\u{FEFC}");
    }

    #[test]
    fn test_ligature_ends_run() {
        // lam alef beh: the ligature never joins forward
        assert_eq!(
            omit().shape("\u{0644}\u{0627}\u{0628}"),
            "\u{FEFB}\u{FE8F}"
        );
        assert_eq!(shape("\u{0644}\u{0627}\u{0628}"), "\u{FEFB}\0\u{FE8F}");
    }

    #[test]
    fn test_alef_lam_is_not_ligature() {
        assert_eq!(shape("\u{0627}\u{0644}"), "\u{FE8D}\u{FEDD}");
    }

    #[test]
    fn test_lam_space_alef_is_not_ligature() {
        assert_eq!(shape("\u{0644} \u{0627}"), "\u{FEDD} \u{FE8D}");
    }

    #[test]
    fn test_stats() {
        let (_, stats) = ShapingScanner::default().shape_with_stats("x\u{0628}\u{0644}\u{0627}");
        assert_eq!(
            stats,
            ShapeStats {
                chars: 4,
                letters: 3,
                joins: 1,
                ligatures: 1,
            }
        );
    }

    #[test]
    fn test_shape_value() {
        assert_eq!(shape_value(&json!("\u{0628}")).unwrap(), "\u{FE8F}");

        for (value, expected) in [
            (json!(42), "number"),
            (Value::Null, "null"),
            (json!(true), "boolean"),
            (json!(["\u{0628}"]), "array"),
            (json!({"text": "\u{0628}"}), "object"),
        ] {
            match shape_value(&value) {
                Err(ShapeError::InvalidInputType(found)) => assert_eq!(found, expected),
                other => panic!("expected InvalidInputType, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_invalid_input_message() {
        let err = shape_value(&json!(42)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input type: expected string, got number");
    }
}
