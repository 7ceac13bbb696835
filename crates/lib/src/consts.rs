/// Number of hex characters kept from a SHA-256 digest for an [`ObjectHash`](crate::util::hash::ObjectHash).
pub const OBJ_HASH_PREFIX_LEN: usize = 20;

/// Separator used when rendering a declaration path for humans.
pub const PATH_DISPLAY_SEPARATOR: &str = ".";

/// Rendering of the empty (root) declaration path.
pub const ROOT_PATH_DISPLAY: &str = "<root>";

/// Deepest table nesting a Lua value may have when stored in a manifest.
pub const MAX_TABLE_DEPTH: usize = 128;

/// Top-level keys of a Terraform JSON configuration document.
pub const TERRAFORM_KEYS: &[&str] = &[
  "terraform",
  "provider",
  "resource",
  "data",
  "variable",
  "output",
  "locals",
  "module",
];
