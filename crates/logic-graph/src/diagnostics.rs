//! Diagnostics for rejected editing operations
//!
//! Diagnostics are sent from the editor to the host (or any consumer) when
//! an edit is refused because it would break a graph invariant. Each carries
//! a stable code so hosts can surface it without parsing messages.

use serde::{Deserialize, Serialize};

use crate::constants::codes;
use crate::types::NodeId;

/// Trait for receiving diagnostics
///
/// This abstracts over the host's reporting mechanism (status bar, log
/// panel, channel) so the kernel does not depend on any UI toolkit.
pub trait DiagnosticSink: Send + Sync {
    /// Deliver a diagnostic
    ///
    /// Returns an error if the diagnostic could not be delivered (e.g., channel closed)
    fn send(&self, diagnostic: Diagnostic) -> Result<(), SinkError>;
}

/// Error when delivering a diagnostic fails
#[derive(Debug, Clone)]
pub struct SinkError {
    pub message: String,
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Diagnostic sink error: {}", self.message)
    }
}

impl std::error::Error for SinkError {}

impl SinkError {
    pub fn channel_closed() -> Self {
        Self {
            message: "Channel closed".to_string(),
        }
    }
}

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    Warning,
}

/// Stable diagnostic code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    /// A second instance of a singleton node type was refused
    SingletonViolation,
    /// Removing an output would leave a node below its minimum output count
    MinimumCardinalityViolation,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingletonViolation => codes::SINGLETON_VIOLATION,
            Self::MinimumCardinalityViolation => codes::MINIMUM_CARDINALITY_VIOLATION,
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic emitted by the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub level: DiagnosticLevel,
    pub message: String,
    /// Graph the rejected edit targeted
    pub graph_id: String,
    /// Node type involved
    pub node_type: String,
    /// Node involved, if the edit targeted an existing node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
}

impl Diagnostic {
    /// Create a singleton violation warning
    pub fn singleton_violation(graph_id: &str, node_type: &str, label: &str) -> Self {
        Self {
            code: DiagnosticCode::SingletonViolation,
            level: DiagnosticLevel::Warning,
            message: format!("Only one {} per node tree is allowed", label.to_lowercase()),
            graph_id: graph_id.to_string(),
            node_type: node_type.to_string(),
            node_id: None,
        }
    }

    /// Create a minimum cardinality warning
    pub fn minimum_cardinality(
        graph_id: &str,
        node_type: &str,
        node_id: NodeId,
        minimum: usize,
    ) -> Self {
        Self {
            code: DiagnosticCode::MinimumCardinalityViolation,
            level: DiagnosticLevel::Warning,
            message: format!("A {} node must keep at least {} output(s)", node_type, minimum),
            graph_id: graph_id.to_string(),
            node_type: node_type.to_string(),
            node_id: Some(node_id),
        }
    }
}

/// A no-op sink that discards all diagnostics
pub struct NullDiagnosticSink;

impl DiagnosticSink for NullDiagnosticSink {
    fn send(&self, _diagnostic: Diagnostic) -> Result<(), SinkError> {
        Ok(())
    }
}

/// A vector-based sink that collects diagnostics
///
/// Useful for testing to verify diagnostics were emitted correctly.
pub struct VecDiagnosticSink {
    diagnostics: std::sync::Mutex<Vec<Diagnostic>>,
}

impl VecDiagnosticSink {
    pub fn new() -> Self {
        Self {
            diagnostics: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Get all collected diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    /// Count collected diagnostics with the given code
    pub fn count(&self, code: DiagnosticCode) -> usize {
        self.diagnostics().iter().filter(|d| d.code == code).count()
    }

    /// Clear all collected diagnostics
    pub fn clear(&self) {
        if let Ok(mut diagnostics) = self.diagnostics.lock() {
            diagnostics.clear();
        }
    }
}

impl Default for VecDiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for VecDiagnosticSink {
    fn send(&self, diagnostic: Diagnostic) -> Result<(), SinkError> {
        self.diagnostics
            .lock()
            .map_err(|_| SinkError {
                message: "Diagnostic buffer poisoned".to_string(),
            })?
            .push(diagnostic);
        Ok(())
    }
}

/// A sink that forwards diagnostics to the `log` facade
pub struct LogDiagnosticSink;

impl DiagnosticSink for LogDiagnosticSink {
    fn send(&self, diagnostic: Diagnostic) -> Result<(), SinkError> {
        match diagnostic.level {
            DiagnosticLevel::Warning => log::warn!(
                "[{}] graph '{}': {}",
                diagnostic.code,
                diagnostic.graph_id,
                diagnostic.message
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_diagnostic_sink() {
        let sink = VecDiagnosticSink::new();

        sink.send(Diagnostic::singleton_violation("tree", "group-input", "Group Input Node"))
            .unwrap();

        let diagnostics = sink.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::SingletonViolation);
        assert_eq!(diagnostics[0].level, DiagnosticLevel::Warning);
        assert_eq!(
            diagnostics[0].message,
            "Only one group input node per node tree is allowed"
        );

        sink.clear();
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn test_null_diagnostic_sink() {
        let sink = NullDiagnosticSink;
        // Should not panic
        sink.send(Diagnostic::minimum_cardinality("tree", "group-input", NodeId::new(), 1))
            .unwrap();
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(DiagnosticCode::SingletonViolation.as_str(), "SINGLETON_VIOLATION");
        assert_eq!(
            DiagnosticCode::MinimumCardinalityViolation.as_str(),
            "MINIMUM_CARDINALITY_VIOLATION"
        );

        let json = serde_json::to_value(DiagnosticCode::SingletonViolation).unwrap();
        assert_eq!(json, serde_json::json!("SINGLETON_VIOLATION"));
    }

    #[test]
    fn test_log_diagnostic_sink() {
        let _ = env_logger::builder().is_test(true).try_init();
        let sink = LogDiagnosticSink;

        sink.send(Diagnostic::singleton_violation("tree", "group-input", "Group Input Node"))
            .unwrap();
        sink.send(Diagnostic::minimum_cardinality("tree", "group-input", NodeId::new(), 1))
            .unwrap();
    }

    #[test]
    fn test_diagnostic_serialization() {
        let node_id = NodeId::new();
        let json = serde_json::to_value(Diagnostic::minimum_cardinality(
            "tree",
            "group-input",
            node_id,
            1,
        ))
        .unwrap();

        assert_eq!(json["code"], "MINIMUM_CARDINALITY_VIOLATION");
        assert_eq!(json["level"], "warning");
        assert_eq!(json["graphId"], "tree");
        assert_eq!(json["nodeId"], serde_json::json!(node_id.to_string()));
    }
}
