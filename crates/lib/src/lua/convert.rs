//! Conversion of Lua values into manifest values.

use std::collections::BTreeMap;
use std::ffi::c_void;

use mlua::prelude::*;
use serde_json::{Map, Number, Value};

use crate::consts::MAX_TABLE_DEPTH;

/// Convert a Lua argument into a manifest value.
///
/// Handles primitives, arrays and tables. A table is an array when its keys are
/// exactly `1..=n`; any other table becomes a mapping with its keys sorted, so
/// the result does not depend on Lua's hash iteration order. Functions, userdata
/// and threads cannot be stored.
///
/// A table that contains itself, directly or through its children, is rejected,
/// as is nesting deeper than [`MAX_TABLE_DEPTH`]. The same table may still
/// appear several times side by side.
pub fn lua_to_value(value: LuaValue) -> LuaResult<Value> {
  convert(value, &mut Vec::new())
}

fn convert(value: LuaValue, ancestors: &mut Vec<*const c_void>) -> LuaResult<Value> {
  match value {
    LuaValue::Nil => Ok(Value::Null),
    LuaValue::Boolean(b) => Ok(Value::Bool(b)),
    LuaValue::Integer(i) => Ok(Value::from(i)),
    LuaValue::Number(n) => Number::from_f64(n)
      .map(Value::Number)
      .ok_or_else(|| LuaError::external(format!("non-finite number {} cannot be stored", n))),
    LuaValue::String(s) => Ok(Value::String(s.to_str()?.to_string())),
    LuaValue::Table(t) => {
      let pointer = t.to_pointer();
      if ancestors.contains(&pointer) {
        return Err(LuaError::external("cyclic table cannot be stored"));
      }
      if ancestors.len() >= MAX_TABLE_DEPTH {
        return Err(LuaError::external(format!(
          "table nested deeper than {} levels cannot be stored",
          MAX_TABLE_DEPTH
        )));
      }

      ancestors.push(pointer);
      let result = table_to_value(t, ancestors);
      ancestors.pop();
      result
    }
    other => Err(LuaError::external(format!(
      "unsupported value type: {}",
      other.type_name()
    ))),
  }
}

fn table_to_value(table: LuaTable, ancestors: &mut Vec<*const c_void>) -> LuaResult<Value> {
  let len = table.raw_len();
  let mut entries: BTreeMap<String, LuaValue> = BTreeMap::new();
  let mut pair_count = 0;

  for pair in table.clone().pairs::<LuaValue, LuaValue>() {
    let (key, value) = pair?;
    pair_count += 1;
    entries.insert(table_key(key)?, value);
  }

  if len > 0 && pair_count == len {
    // Sequential integer keys starting at 1
    let mut items = Vec::with_capacity(len);
    for i in 1..=len {
      let item: LuaValue = table.raw_get(i)?;
      items.push(convert(item, ancestors)?);
    }
    return Ok(Value::Array(items));
  }

  let mut map = Map::new();
  for (key, value) in entries {
    map.insert(key, convert(value, ancestors)?);
  }
  Ok(Value::Object(map))
}

fn table_key(key: LuaValue) -> LuaResult<String> {
  match key {
    LuaValue::String(s) => Ok(s.to_str()?.to_string()),
    LuaValue::Integer(i) => Ok(i.to_string()),
    other => Err(LuaError::external(format!(
      "table keys must be strings or integers, got {}",
      other.type_name()
    ))),
  }
}
