//! Error translation across the interpreter boundary

use rhai::{Dynamic, EvalAltResult, Position};

use crate::error::BridgeError;

/// Raise a bridge error as a Rhai runtime error
///
/// The thrown value is the error message, so scripts can catch it with
/// `try { ... } catch (err) { ... }` and inspect `err` as a string.
pub fn into_script_error(err: BridgeError) -> Box<EvalAltResult> {
    EvalAltResult::ErrorRuntime(Dynamic::from(err.to_string()), Position::NONE).into()
}
