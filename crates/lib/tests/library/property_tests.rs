//! Behavioural guarantees of the engine, exercised through the closure API.

use serde_json::{Map, Value, json};
use synth_lib::util::hash::Hashable;
use synth_lib::{Manifest, Scope, SynthError, Synthesizer, bury};

use super::common::{SCENARIO_KEYS, scenario_synth};

fn scenario(s: &mut Scope<'_>) -> Result<(), SynthError> {
  s.resource("server", ["web_server", "production"], |s| {
    s.field("host", "example.com")?;
    s.field("port", 8080)?;
    s.field("ssl", true)
  })?;
  s.resource("database", ["main_db", "mysql"], |s| s.field("username", "admin"))?;
  s.resource("user", ["admin_user"], |s| s.field("name", "Administrator"))
}

mod vocabulary {
  use super::*;

  #[test]
  fn non_vocabulary_blocks_fail_for_any_name() {
    for name in ["cache", "queue", "Server", "server ", "host", ""] {
      let mut synth = scenario_synth();
      let err = synth.synthesize(|s| s.resource(name, ["x"], |_| Ok(()))).unwrap_err();
      assert!(
        matches!(err, SynthError::InvalidSynthesizerKey { ref key, .. } if key == name),
        "name {name:?} gave {err:?}"
      );
    }
  }

  #[test]
  fn every_vocabulary_key_opens_a_block() -> Result<(), SynthError> {
    let mut synth = scenario_synth();
    synth.synthesize(|s| {
      for key in SCENARIO_KEYS {
        s.resource(key, ["id"], |s| s.field("set", true))?;
      }
      Ok(())
    })?;
    for key in SCENARIO_KEYS {
      assert_eq!(synth.synthesis().get(&[key, "id", "set"]), Some(&json!(true)));
    }
    Ok(())
  }

  #[test]
  fn cache_block_fails() {
    let mut synth = scenario_synth();
    let mut host_assigned = false;
    let err = synth
      .synthesize(|s| {
        s.resource("cache", ["redis"], |s| {
          host_assigned = true;
          s.field("host", "localhost")
        })
      })
      .unwrap_err();

    assert!(matches!(err, SynthError::InvalidSynthesizerKey { ref key, .. } if key == "cache"));
    assert!(!host_assigned);
    assert!(synth.synthesis().is_empty());
  }
}

mod arity {
  use super::*;

  #[test]
  fn more_than_one_value_fails() {
    for count in 2..6 {
      let mut synth = scenario_synth();
      let values: Vec<Value> = (0..count).map(|i| json!(i)).collect();
      let err = synth
        .synthesize(|s| s.resource("server", ["web"], |s| s.field_values("port", values)))
        .unwrap_err();
      assert!(matches!(err, SynthError::TooManyFieldValues { count: c, .. } if c == count));
    }
  }

  #[test]
  fn zero_or_one_value_succeeds() -> Result<(), SynthError> {
    let mut synth = scenario_synth();
    synth.synthesize(|s| {
      s.resource("server", ["web"], |s| {
        s.field_values("enabled", vec![])?;
        s.field_values("port", vec![json!(8080)])
      })
    })?;
    assert_eq!(synth.synthesis().get(&["server", "web", "enabled"]), Some(&Value::Null));
    assert_eq!(synth.synthesis().get(&["server", "web", "port"]), Some(&json!(8080)));
    Ok(())
  }

  #[test]
  fn port_with_two_values_fails() {
    let mut synth = scenario_synth();
    let err = synth
      .synthesize(|s| s.resource("server", ["web"], |s| s.field_values("port", vec![json!(8080), json!(3000)])))
      .unwrap_err();
    assert!(matches!(err, SynthError::TooManyFieldValues { ref field, count: 2 } if field == "port"));
  }
}

mod nesting {
  use super::*;

  #[test]
  fn identifiers_become_nested_keys() -> Result<(), SynthError> {
    let mut synth = Synthesizer::new("nesting", ["server"])?;
    let manifest = synth.synthesize(|s| s.resource("server", ["web", "production"], |s| s.field("host", "x")))?;
    assert_eq!(
      serde_json::to_value(manifest).unwrap(),
      json!({ "server": { "web": { "production": { "host": "x" } } } })
    );
    Ok(())
  }

  #[test]
  fn siblings_do_not_share_fields() -> Result<(), SynthError> {
    let mut synth = Synthesizer::new("siblings", ["server"])?;
    let manifest = synth.synthesize(|s| {
      s.resource("server", ["a"], |s| s.field("host", "a.example.com"))?;
      s.resource("server", ["b"], |s| s.field("port", 9000))
    })?;
    assert_eq!(
      serde_json::to_value(manifest).unwrap(),
      json!({ "server": { "a": { "host": "a.example.com" }, "b": { "port": 9000 } } })
    );
    Ok(())
  }

  fn nest(s: &mut Scope<'_>, remaining: usize) -> Result<(), SynthError> {
    if remaining == 0 {
      return s.field("host", "deep");
    }
    s.resource("server", ["a"], |s| nest(s, remaining - 1))
  }

  #[test]
  fn deep_nesting_through_closures() -> Result<(), SynthError> {
    let mut synth = Synthesizer::new("deep", ["server"])?;
    synth.synthesize(|s| nest(s, 200))?;

    let mut path: Vec<&str> = Vec::new();
    for _ in 0..200 {
      path.extend(["server", "a"]);
    }
    path.push("host");
    assert_eq!(synth.synthesis().get(&path), Some(&json!("deep")));
    assert_eq!(synth.synthesis().summary().depth, 401);
    Ok(())
  }

  #[test]
  fn scenario_manifest_is_exact() -> Result<(), SynthError> {
    let mut synth = scenario_synth();
    let manifest = synth.synthesize(scenario)?;
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
}

mod bury_semantics {
  use super::*;

  #[test]
  fn reapplying_is_idempotent() -> Result<(), SynthError> {
    let mut once = Map::new();
    bury(&mut once, &["server", "web", "host"], json!("x"))?;
    let mut twice = once.clone();
    bury(&mut twice, &["server", "web", "host"], json!("x"))?;
    assert_eq!(once, twice);
    Ok(())
  }

  #[test]
  fn last_write_wins_through_the_engine() -> Result<(), SynthError> {
    let mut synth = scenario_synth();
    synth.synthesize(|s| {
      s.resource("server", ["web"], |s| s.field("host", "first"))?;
      s.resource("server", ["web"], |s| s.field("host", "second"))
    })?;
    assert_eq!(
      serde_json::to_value(synth.synthesis()).unwrap(),
      json!({ "server": { "web": { "host": "second" } } })
    );
    Ok(())
  }
}

mod determinism {
  use super::*;

  #[test]
  fn independent_instances_agree() -> Result<(), SynthError> {
    let manifests = (0..5)
      .map(|_| -> Result<Manifest, SynthError> {
        let mut synth = scenario_synth();
        synth.synthesize(scenario)?;
        Ok(synth.into_synthesis())
      })
      .collect::<Result<Vec<_>, _>>()?;

    let first_hash = manifests[0].compute_hash().unwrap();
    for manifest in &manifests[1..] {
      assert_eq!(manifest, &manifests[0]);
      assert_eq!(manifest.compute_hash().unwrap(), first_hash);
      assert_eq!(
        serde_json::to_string(manifest).unwrap(),
        serde_json::to_string(&manifests[0]).unwrap()
      );
    }
    Ok(())
  }

  #[test]
  fn instances_are_independent_across_threads() {
    let handles: Vec<_> = (0..4)
      .map(|i| {
        std::thread::spawn(move || {
          let mut synth = scenario_synth();
          synth
            .synthesize(|s| s.resource("server", [format!("web{i}")], |s| s.field("index", i)))
            .unwrap();
          synth.into_synthesis()
        })
      })
      .collect();

    for (i, handle) in handles.into_iter().enumerate() {
      let manifest = handle.join().unwrap();
      assert_eq!(manifest.len(), 1);
      assert_eq!(
        manifest.get(&["server".to_string(), format!("web{i}"), "index".to_string()]),
        Some(&json!(i))
      );
    }
  }
}
