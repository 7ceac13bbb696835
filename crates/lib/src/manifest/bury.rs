use serde_json::{Map, Value};

use crate::synth::SynthError;

/// Deep-assign `value` under `path`, creating intermediate mappings as needed.
///
/// Every segment but the last is walked with get-or-create semantics. An
/// intermediate key that holds a non-mapping value is replaced by a fresh
/// mapping: the structural path always wins. The last segment is overwritten
/// (last write wins), so reapplying the same path and value is a no-op.
pub fn bury<S: AsRef<str>>(map: &mut Map<String, Value>, path: &[S], value: Value) -> Result<(), SynthError> {
  let (last, parents) = path.split_last().ok_or(SynthError::EmptyPath)?;

  let mut current = map;
  for segment in parents {
    let slot = current
      .entry(segment.as_ref())
      .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
      *slot = Value::Object(Map::new());
    }
    current = match slot {
      Value::Object(inner) => inner,
      _ => unreachable!("slot was just made a mapping"),
    };
  }

  current.insert(last.as_ref().to_string(), value);
  Ok(())
}
