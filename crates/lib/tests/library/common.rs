//! Shared helpers for library integration tests.

use synth_lib::{Synthesizer, Vocabulary};

pub const SCENARIO_KEYS: [&str; 3] = ["server", "database", "user"];

/// The reference scenario as DSL source.
pub const SCENARIO_SOURCE: &str = r#"
server("web_server", "production", function()
  host "example.com"
  port(8080)
  ssl(true)
end)

database("main_db", "mysql", function()
  username "admin"
end)

user("admin_user", function()
  name "Administrator"
end)
"#;

pub fn scenario_synth() -> Synthesizer {
  Synthesizer::with_vocabulary("scenario", Vocabulary::new(SCENARIO_KEYS).unwrap())
}
