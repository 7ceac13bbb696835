use std::cell::RefCell;
use std::rc::Rc;

use mlua::prelude::*;

use super::recorder::{Recorder, close_call, open_call};

/// `__index` of the DSL environment, given the recorder's `open` and `close`.
///
/// Blocks are called from Lua, never from inside a Rust callback, so nested
/// declarations only grow the Lua stack.
const DSL_INDEX: &str = r#"
local open, close = ...
return function(_, name)
  return function(...)
    local block = open(name, ...)
    if block ~= nil then
      block()
      close()
    end
  end
end
"#;

/// Create the environment DSL chunks run in.
///
/// The environment is an empty table whose `__index` turns every unknown
/// global name into a DSL call bound to that name. Lua's standard globals are not
/// reachable from it: `print "x"` or `type "t2.micro"` are
/// field assignments like any other. Chunks can still assign their own
/// globals and locals, which then shadow the DSL name.
pub fn create_dsl_environment(lua: &Lua, recorder: Rc<RefCell<Recorder>>) -> LuaResult<LuaTable> {
  let env = lua.create_table()?;

  let rec = recorder.clone();
  let open = lua.create_function(move |_, (name, args): (String, LuaMultiValue)| open_call(&rec, &name, args))?;
  let close = lua.create_function(move |_, ()| close_call(&recorder))?;
  let index: LuaFunction = lua.load(DSL_INDEX).set_name("=synth").call((open, close))?;

  let mt = lua.create_table()?;
  mt.set("__index", index)?;
  env.set_metatable(Some(mt))?;

  Ok(env)
}

/// Compile a DSL chunk against its environment.
///
/// `chunk_name` follows Lua conventions: `@path` for files, `=label` for a literal label.
pub fn load_dsl(lua: &Lua, env: LuaTable, source: &str, chunk_name: &str) -> LuaResult<LuaFunction> {
  lua
    .load(source)
    .set_name(chunk_name)
    .set_environment(env)
    .into_function()
}
