//! Recording of DSL calls made from Lua.

use std::cell::RefCell;
use std::rc::Rc;

use mlua::prelude::*;
use serde_json::Value;
use tracing::trace;

use super::convert::lua_to_value;
use crate::synth::{Call, DeclarationPath, Dispatch, SynthError, Vocabulary, classify};

/// An open block: the call that opened it and the calls made inside it so far.
struct Frame {
  path: DeclarationPath,
  name: String,
  args: Vec<Value>,
  calls: Vec<Call>,
}

/// Collects the calls made by a Lua chunk into a tree of [`Call`]s.
///
/// [`open_call`] classifies a call with the same rule the engine uses and, for
/// a nested block, pushes a frame and hands the block back to Lua to run.
/// [`close_call`] pops that frame once the block returned, attaching its calls
/// to the call that opened it. A block under a non-vocabulary name therefore
/// fails before its body ever runs.
pub struct Recorder {
  vocabulary: Vocabulary,
  frames: Vec<Frame>,
}

impl Recorder {
  pub fn new(vocabulary: Vocabulary) -> Self {
    Self {
      vocabulary,
      frames: vec![Frame {
        path: DeclarationPath::root(),
        name: String::new(),
        args: Vec::new(),
        calls: Vec::new(),
      }],
    }
  }

  /// Number of blocks currently open.
  pub fn depth(&self) -> usize {
    self.frames.len().saturating_sub(1)
  }

  fn path(&self) -> DeclarationPath {
    self
      .frames
      .last()
      .map(|frame| frame.path.clone())
      .unwrap_or_default()
  }

  fn classify(&self, name: &str, args: &[Value], has_block: bool) -> Result<Dispatch, SynthError> {
    classify(&self.vocabulary, &self.path(), name, args.to_vec(), has_block)
  }

  fn open(&mut self, path: DeclarationPath, name: &str, args: Vec<Value>) {
    self.frames.push(Frame {
      path,
      name: name.to_string(),
      args,
      calls: Vec::new(),
    });
  }

  fn close(&mut self) {
    if self.frames.len() < 2 {
      return;
    }
    if let Some(frame) = self.frames.pop() {
      self.push(Call::nested(frame.name, frame.args, frame.calls));
    }
  }

  fn push(&mut self, call: Call) {
    if let Some(frame) = self.frames.last_mut() {
      frame.calls.push(call);
    }
  }

  /// Take the calls recorded at the root, dropping any frame left open by an aborted block.
  pub fn finish(&mut self) -> Vec<Call> {
    self.frames.truncate(1);
    self
      .frames
      .first_mut()
      .map(|root| std::mem::take(&mut root.calls))
      .unwrap_or_default()
  }
}

/// Record one DSL call coming from Lua.
///
/// A trailing function argument is the nested block. When the call opens a
/// block, a frame is pushed and the block is returned for the caller to run;
/// [`close_call`] must follow once it returns. Field assignments are recorded
/// directly and return `None`.
pub fn open_call(recorder: &Rc<RefCell<Recorder>>, name: &str, args: LuaMultiValue) -> LuaResult<Option<LuaFunction>> {
  let mut values: Vec<LuaValue> = args.into_iter().collect();
  let block = match values.last() {
    Some(LuaValue::Function(f)) => {
      let f = f.clone();
      values.pop();
      Some(f)
    }
    _ => None,
  };

  let args = values
    .into_iter()
    .map(|value| match value {
      LuaValue::Function(_) => Err(LuaError::external(format!(
        "'{}': a block must be the last argument",
        name
      ))),
      other => lua_to_value(other),
    })
    .collect::<LuaResult<Vec<Value>>>()?;

  let dispatch = recorder
    .borrow()
    .classify(name, &args, block.is_some())
    .map_err(LuaError::external)?;

  let mut recorder = recorder.borrow_mut();
  match (dispatch, block) {
    (Dispatch::Nest(path), Some(body)) => {
      trace!(key = name, path = %path, depth = recorder.depth() + 1, "recording block");
      recorder.open(path, name, args);
      Ok(Some(body))
    }
    _ => {
      trace!(field = name, "recording field");
      recorder.push(Call::field(name, args));
      Ok(None)
    }
  }
}

/// Close the innermost open block.
pub fn close_call(recorder: &Rc<RefCell<Recorder>>) -> LuaResult<()> {
  recorder.borrow_mut().close();
  Ok(())
}
