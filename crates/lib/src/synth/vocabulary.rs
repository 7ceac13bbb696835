use std::collections::BTreeSet;

use super::SynthError;
use crate::consts::TERRAFORM_KEYS;

/// The fixed set of names allowed to open a nested block.
///
/// Built once per synthesizer and never mutated afterwards. The same set
/// applies at every nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
  keys: BTreeSet<String>,
}

impl Vocabulary {
  /// Build a vocabulary from a non-empty collection of keys.
  ///
  /// Duplicates collapse; an empty collection is rejected.
  pub fn new<I, S>(keys: I) -> Result<Self, SynthError>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let keys: BTreeSet<String> = keys.into_iter().map(Into::into).collect();
    if keys.is_empty() {
      return Err(SynthError::EmptyVocabulary);
    }
    Ok(Self { keys })
  }

  /// Vocabulary of a Terraform JSON configuration (`resource`, `data`, `variable`, ...).
  pub fn terraform() -> Self {
    Self {
      keys: TERRAFORM_KEYS.iter().map(|k| k.to_string()).collect(),
    }
  }

  pub fn contains(&self, key: &str) -> bool {
    self.keys.contains(key)
  }

  pub fn len(&self) -> usize {
    self.keys.len()
  }

  pub fn is_empty(&self) -> bool {
    self.keys.is_empty()
  }

  /// Keys in lexical order.
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.keys.iter().map(String::as_str)
  }

  /// A new vocabulary holding the keys of both.
  pub fn union(&self, other: &Vocabulary) -> Vocabulary {
    Vocabulary {
      keys: self.keys.union(&other.keys).cloned().collect(),
    }
  }
}
