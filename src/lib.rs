//! wafpro - pattern-based web attack payload classifier
//!
//! Inspects discrete text payloads for signatures of common web attacks
//! (SQL injection, XSS, command injection, path traversal, remote file
//! inclusion, XXE, OS-level admin commands) and classifies each payload as
//! attack or safe.
//!
//! The core is [`WafEngine`]: payload normalization followed by an ordered,
//! first-match-wins scan over a fixed signature set. Classification is a pure
//! function of the payload and the signature set - no hidden state, no I/O,
//! safe for concurrent use. Event persistence lives in [`store`], behind the
//! engine's back: the engine yields a [`Verdict`], the caller turns it into a
//! [`ClassificationEvent`] and hands it to a [`store::LogStore`].
//!
//! # Example
//!
//! ```
//! use wafpro::{WafConfig, WafEngine};
//!
//! let engine = WafEngine::new(WafConfig::default()).unwrap();
//!
//! let verdict = engine.classify("1' UNION SELECT password FROM users");
//! assert!(verdict.is_attack);
//! assert_eq!(verdict.matched_signature_id.as_deref(), Some("sql_union_select"));
//!
//! assert!(!engine.classify("hello world").is_attack);
//! ```

pub mod config;
pub mod detection;
pub mod engine;
pub mod normalize;
pub mod rules;
pub mod store;

// Re-exports for convenience
pub use config::WafConfig;
pub use detection::{ClassificationEvent, PayloadStatus, Verdict};
pub use engine::WafEngine;
pub use rules::{AttackType, Severity, Signature};
