//! The same guarantees, driven through Lua DSL source.

use serde_json::json;
use synth_lib::eval::evaluate_file;
use synth_lib::util::hash::Hashable;
use synth_lib::{Call, SynthError, Synthesizer, Vocabulary};
use tempfile::TempDir;

use super::common::{SCENARIO_SOURCE, scenario_synth};

#[test]
fn scenario_from_source() -> Result<(), SynthError> {
  let mut synth = scenario_synth();
  let manifest = synth.synthesize_source(SCENARIO_SOURCE)?;
  assert_eq!(
    serde_json::to_value(manifest).unwrap(),
    json!({
      "server": { "web_server": { "production": { "host": "example.com", "port": 8080, "ssl": true } } },
      "database": { "main_db": { "mysql": { "username": "admin" } } },
      "user": { "admin_user": { "name": "Administrator" } }
    })
  );
  Ok(())
}

#[test]
fn cache_block_in_source_fails() {
  let mut synth = scenario_synth();
  let err = synth
    .synthesize_source(
      r#"
        server("web", function() host "a" end)
        cache("redis", function()
          host "localhost"
        end)
      "#,
    )
    .unwrap_err();

  assert!(matches!(err, SynthError::InvalidSynthesizerKey { ref key, .. } if key == "cache"));
  assert!(synth.synthesis().is_empty(), "nothing is committed on failure");
}

#[test]
fn two_port_values_in_source_fail() {
  let mut synth = scenario_synth();
  let err = synth
    .synthesize_source(
      r#"
        server("web", function()
          port(8080, 3000)
        end)
      "#,
    )
    .unwrap_err();

  assert!(matches!(err, SynthError::TooManyFieldValues { ref field, count: 2 } if field == "port"));
}

#[test]
fn source_runs_are_deterministic() -> Result<(), SynthError> {
  let source = r#"
    server("web", function()
      tags { team = "core", env = "prod", tier = "frontend", owner = "ops" }
      ports { 80, 443 }
    end)
  "#;

  let mut hashes = Vec::new();
  for _ in 0..5 {
    let mut synth = scenario_synth();
    synth.synthesize_source(source)?;
    hashes.push(synth.synthesis().compute_hash().unwrap());
  }
  assert!(hashes.windows(2).all(|pair| pair[0] == pair[1]));
  Ok(())
}

#[test]
fn cyclic_table_is_a_lua_error() {
  let mut synth = scenario_synth();
  let err = synth
    .synthesize_source(
      r#"
        local t = {}
        t.me = t
        server("a", function() tags(t) end)
      "#,
    )
    .unwrap_err();

  assert!(matches!(err, SynthError::Lua(_)), "got {err:?}");
  assert!(err.to_string().contains("cyclic table"));
  assert!(synth.synthesis().is_empty());
}

#[test]
fn deep_nesting_from_recursive_source() -> Result<(), SynthError> {
  let mut synth = scenario_synth();
  synth.synthesize_source(
    r#"
      local function nest(n)
        if n == 0 then
          host "deep"
        else
          server("a", function() nest(n - 1) end)
        end
      end
      nest(200)
    "#,
  )?;

  let mut path: Vec<&str> = Vec::new();
  for _ in 0..200 {
    path.extend(["server", "a"]);
  }
  path.push("host");
  assert_eq!(synth.synthesis().get(&path), Some(&json!("deep")));
  Ok(())
}

#[test]
fn literal_nesting_past_the_parser_limit_fails_clearly() {
  let depth = 300;
  let source = format!(
    "{}host \"deep\"\n{}",
    "server(\"a\", function()\n".repeat(depth),
    "end)\n".repeat(depth)
  );

  let mut synth = scenario_synth();
  let err = synth.synthesize_source(&source).unwrap_err();
  assert!(matches!(err, SynthError::SourceTooDeep { ref chunk } if chunk == "scenario"), "got {err:?}");
  assert!(err.to_string().contains("recursive function"));
}

#[test]
fn recorded_calls_round_trip_through_json() -> Result<(), SynthError> {
  let calls: Vec<Call> = serde_json::from_value(json!([
    { "name": "user", "args": ["admin_user"], "block": [
      { "name": "name", "args": ["Administrator"] }
    ] }
  ]))
  .unwrap();

  let mut synth = scenario_synth();
  synth.synthesize_calls(&calls)?;
  assert_eq!(
    synth.synthesis().get(&["user", "admin_user", "name"]),
    Some(&json!("Administrator"))
  );
  Ok(())
}

#[test]
fn terraform_file() -> Result<(), SynthError> {
  let temp_dir = TempDir::new().unwrap();
  let path = temp_dir.path().join("main.lua");
  std::fs::write(
    &path,
    r#"
      variable("region", function()
        default "eu-west-1"
      end)

      resource("aws_subnet", "private_a", function()
        vpc_id "${aws_vpc.main.id}"
        cidr_block "10.0.1.0/24"
        map_public_ip_on_launch(false)
      end)

      output("subnet_id", function()
        value "${aws_subnet.private_a.id}"
      end)
    "#,
  )
  .unwrap();

  let mut synth = Synthesizer::with_vocabulary("terraform", Vocabulary::terraform());
  let manifest = evaluate_file(&mut synth, &path)?;

  assert_eq!(
    serde_json::to_value(manifest).unwrap(),
    json!({
      "variable": { "region": { "default": "eu-west-1" } },
      "resource": { "aws_subnet": { "private_a": {
        "vpc_id": "${aws_vpc.main.id}",
        "cidr_block": "10.0.1.0/24",
        "map_public_ip_on_launch": false
      } } },
      "output": { "subnet_id": { "value": "${aws_subnet.private_a.id}" } }
    })
  );
  Ok(())
}
