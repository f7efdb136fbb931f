//! Data structures produced while resolving batches of references.

use serde::Serialize;

/// Reference the resolver refused, together with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedReference {
  /// Reference as written in the source.
  pub reference: String,
  /// Human readable rejection reason.
  pub reason: String,
}

/// Assets referenced by a stylesheet, resolved relative to the stylesheet's directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylesheetAssets {
  /// Resolved location of the stylesheet itself.
  pub stylesheet: String,
  /// Resolved references in the order they first appear in the stylesheet.
  pub resolved: Vec<String>,
  /// References that failed validation.
  pub rejected: Vec<RejectedReference>,
}

/// Outcome of resolving a single reference from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionRecord {
  /// Reference as supplied by the caller.
  pub reference: String,
  /// Whether the resolver plunged into the reference's directory.
  pub plunge: bool,
  /// Resolved location when the reference was accepted.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub result: Option<String>,
  /// Error message when the reference was rejected.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl ResolutionRecord {
  /// Returns `true` when the reference was rejected.
  pub fn is_rejected(&self) -> bool {
    self.error.is_some()
  }
}
