//! SQL Injection Detection Signatures
//!
//! Covers UNION-based injection, destructive DDL, boolean tautologies, and
//! dangerous keywords/statement separators.

use super::{AttackType, Severity, Signature, SignatureBuilder};
use anyhow::Result;

pub fn signatures() -> Result<Vec<Signature>> {
    Ok(vec![
        SignatureBuilder::new("sql_union_select", "SQLi: UNION SELECT")
            .description("UNION-based SQL injection pulling rows from another table")
            .attack_type(AttackType::SqlInjection)
            .severity(Severity::Critical)
            .pattern(r"union\s+select")
            .build()?,
        SignatureBuilder::new("sql_drop_table", "SQLi: DROP TABLE")
            .description("Destructive DDL statement injection")
            .attack_type(AttackType::SqlInjection)
            .severity(Severity::Critical)
            .pattern(r"drop\s+table")
            .build()?,
        SignatureBuilder::new("sql_boolean_tautology", "SQLi: boolean tautology")
            .description("Always-true comparison such as ' OR '1'='1', with optional quoting")
            .attack_type(AttackType::SqlInjection)
            .severity(Severity::High)
            .pattern(r#"['"]?\s*or\s*['"]?1['"]?\s*=\s*['"]?1['"]?"#)
            .build()?,
        // The leading `--` alternatives are unreachable after normalization
        // strips line comments; kept to mirror the original rule list.
        SignatureBuilder::new("sql_dangerous_keyword", "SQLi: dangerous keyword")
            .description("Statement separators and data-modifying SQL keywords")
            .attack_type(AttackType::SqlInjection)
            .severity(Severity::Medium)
            .pattern(r"(--|;--|\bexec\b|\binsert\b|\bdelete\b|\bupdate\b)")
            .build()?,
    ])
}
