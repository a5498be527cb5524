//! Command Injection Detection Signatures
//!
//! Covers shell metacharacters chained into recon commands and direct
//! invocations of dangerous binaries.

use super::{AttackType, Severity, Signature, SignatureBuilder};
use anyhow::Result;

pub fn signatures() -> Result<Vec<Signature>> {
    Ok(vec![
        SignatureBuilder::new("cmd_shell_recon", "CmdInj: chained recon command")
            .description("Pipe/semicolon/&& followed by a common recon command")
            .attack_type(AttackType::CommandInjection)
            .severity(Severity::High)
            .pattern(r"(\||;|&&)\s*(ls|cat|whoami|pwd|id)")
            .build()?,
        SignatureBuilder::new("cmd_dangerous_exec", "CmdInj: dangerous invocation")
            .description("rm -rf, powershell, cmd.exe, or an interactive bash shell")
            .attack_type(AttackType::CommandInjection)
            .severity(Severity::Critical)
            .pattern(r"rm\s+-rf|powershell|cmd\.exe|bash\s+-i")
            .build()?,
    ])
}
