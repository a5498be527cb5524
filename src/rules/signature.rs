//! Signature types and builder
//!
//! Defines the Signature value type with metadata and a builder for concise
//! signature definitions in the category modules.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Attack family a signature detects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    SqlInjection,
    Xss,
    CommandInjection,
    PathTraversal,
    RemoteInclusion,
    XmlExternalEntity,
    AdminCommand,
}

impl std::fmt::Display for AttackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttackType::SqlInjection => write!(f, "SQL Injection"),
            AttackType::Xss => write!(f, "Cross-Site Scripting"),
            AttackType::CommandInjection => write!(f, "Command Injection"),
            AttackType::PathTraversal => write!(f, "Path Traversal"),
            AttackType::RemoteInclusion => write!(f, "Remote File Inclusion"),
            AttackType::XmlExternalEntity => write!(f, "XML External Entity"),
            AttackType::AdminCommand => write!(f, "OS Admin Command"),
        }
    }
}

/// Signature severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::High => write!(f, "HIGH"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::Low => write!(f, "LOW"),
        }
    }
}

/// An immutable attack-detection rule.
///
/// Signatures are defined once at engine construction and never mutated.
/// Patterns match against normalized (lowercased) payload text, so they are
/// written lowercase and case-insensitivity is implicit.
#[derive(Debug, Clone)]
pub struct Signature {
    /// Stable identifier, e.g. "sql_union_select"
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Detailed description
    pub description: String,
    /// Attack family this signature detects
    pub attack_type: AttackType,
    /// Severity level
    pub severity: Severity,
    /// Compiled pattern, searched anywhere in the normalized payload
    pub pattern: Regex,
    /// Raw pattern string
    pub pattern_str: String,
}

impl Signature {
    /// Test whether this signature matches anywhere in the normalized payload.
    pub fn matches(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
    }
}

/// Builder for creating signatures with a fluent API
pub struct SignatureBuilder {
    id: String,
    name: String,
    description: String,
    attack_type: AttackType,
    severity: Severity,
    pattern: String,
}

impl SignatureBuilder {
    /// Create a new signature builder with required fields
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            attack_type: AttackType::SqlInjection,
            severity: Severity::Medium,
            pattern: String::new(),
        }
    }

    /// Set the description
    pub fn description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Set the attack family
    pub fn attack_type(mut self, attack_type: AttackType) -> Self {
        self.attack_type = attack_type;
        self
    }

    /// Set the severity
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the regex pattern (matched against lowercased input)
    pub fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// Build the signature, compiling its pattern
    pub fn build(self) -> Result<Signature, regex::Error> {
        let pattern = Regex::new(&self.pattern)?;
        Ok(Signature {
            id: self.id,
            name: self.name,
            description: self.description,
            attack_type: self.attack_type,
            severity: self.severity,
            pattern,
            pattern_str: self.pattern,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_builder() {
        let sig = SignatureBuilder::new("sql_union_select", "SQLi: UNION SELECT")
            .description("Detects UNION-based SQL injection")
            .attack_type(AttackType::SqlInjection)
            .severity(Severity::Critical)
            .pattern(r"union\s+select")
            .build()
            .unwrap();

        assert_eq!(sig.id, "sql_union_select");
        assert_eq!(sig.attack_type, AttackType::SqlInjection);
        assert_eq!(sig.severity, Severity::Critical);
        assert!(sig.matches("1 union select password from users"));
        assert!(!sig.matches("plain text"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = SignatureBuilder::new("bad", "Bad").pattern(r"(unclosed").build();
        assert!(result.is_err());
    }
}
