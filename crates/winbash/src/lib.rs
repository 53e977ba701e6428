//! Winbash - bash (agent dialect) to PowerShell source-to-source transpiler
//!
//! Winbash converts the subset of POSIX shell that AI coding agents typically
//! emit into PowerShell script text, for middleware that runs agent-generated
//! commands on Windows hosts without a UNIX-emulation layer.
//!
//! The transpiler is synchronous, pure, and never panics or returns an `Err`
//! across its public API: a structural parse failure becomes a commented
//! `# TRANSPILE ERROR: ...` line instead of propagating.
//!
//! # Quick Start
//!
//! ```rust
//! use winbash::transpile;
//!
//! let ps = transpile("grep -r TODO src/", &Default::default());
//! assert!(ps.contains("Select-String"));
//! ```
//!
//! # Full Result
//!
//! [`transpile_with_meta`] additionally reports whether a dual-path
//! translator fell back to its non-native PowerShell form, plus warnings and
//! untranslatable fragments:
//!
//! ```rust
//! use winbash::{transpile_with_meta, TranspileOptions};
//!
//! let result = transpile_with_meta("chmod 755 deploy.sh", &TranspileOptions::default());
//! assert!(!result.unsupported.is_empty());
//! ```
//!
//! # Configuration
//!
//! [`TranspileOptions`] controls whether dual-path translators (`grep`,
//! `find`, `curl`/`wget`) prefer a native Windows binary (`rg.exe`, `fd.exe`,
//! `curl.exe`) over their PowerShell-cmdlet fallback, and which tool
//! availability record to trust:
//!
//! ```rust
//! use winbash::{transpile, TranspileOptions};
//!
//! let options = TranspileOptions {
//!     prefer_native_tools: false,
//!     ..Default::default()
//! };
//! let ps = transpile("grep -r TODO .", &options);
//! assert!(ps.contains("Select-String"));
//! ```

mod error;
mod logging_impl;
pub mod parser;
mod tools;
mod transform;
mod translators;

pub use error::{Error, Result};
pub use logging_impl::LogConfig;
pub use tools::{detect_tools, reset_tool_cache, ToolAvailability};

use transform::TransformContext;

/// Which PowerShell syntax baseline the emitted text targets.
///
/// Reserved for future use: the current emitter only produces syntax valid
/// on PowerShell 5.1, so both variants presently behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum PsVersion {
    #[default]
    V5_1,
    V7,
}

/// Configuration for one [`transpile`]/[`transpile_with_meta`] call.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TranspileOptions {
    /// Which native binaries dual-path translators may prefer. `None` probes
    /// `PATH` once via [`detect_tools`] and caches the result process-wide.
    pub available_tools: Option<ToolAvailability>,
    /// Whether dual-path translators (`grep`, `find`, `curl`/`wget`) prefer
    /// a native Windows binary over their PowerShell-cmdlet fallback.
    pub prefer_native_tools: bool,
    /// PowerShell syntax baseline to target.
    pub ps_version: PsVersion,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            available_tools: None,
            prefer_native_tools: true,
            ps_version: PsVersion::default(),
        }
    }
}

/// Full result of translating one bash command/script.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TranspileOutput {
    /// The translated PowerShell text.
    pub powershell: String,
    /// `true` if any dual-path translator took its non-native branch.
    pub used_fallbacks: bool,
    /// Advisory messages (lossy-but-working approximations).
    pub warnings: Vec<String>,
    /// Original bash fragments that had no translation at all.
    pub unsupported: Vec<String>,
}

/// Translate `bash` into PowerShell, returning only the text. Parse failures
/// become a `# TRANSPILE ERROR: ...` comment rather than an `Err` — this
/// function never panics and has no error return.
pub fn transpile(bash: &str, options: &TranspileOptions) -> String {
    transpile_with_meta(bash, options).powershell
}

/// Translate `bash` into PowerShell, reporting fallback usage, warnings, and
/// untranslatable fragments alongside the text.
pub fn transpile_with_meta(bash: &str, options: &TranspileOptions) -> TranspileOutput {
    #[cfg(feature = "logging")]
    let _span = tracing::debug_span!(
        "transpile",
        script = %logging_impl::format_script_for_log(bash, &LogConfig::new())
    )
    .entered();

    if bash.trim().is_empty() {
        return TranspileOutput {
            powershell: String::new(),
            used_fallbacks: false,
            warnings: Vec::new(),
            unsupported: Vec::new(),
        };
    }

    let tools = options.available_tools.unwrap_or_else(detect_tools);
    let mut ctx = TransformContext::new(tools, options.clone());

    let script = match lex_and_parse(bash) {
        Ok(script) => script,
        Err(err) => {
            #[cfg(feature = "logging")]
            tracing::warn!(error = %err, "bash parse failed");
            return TranspileOutput {
                powershell: format!("# TRANSPILE ERROR: {err}\n# Original: {bash}"),
                used_fallbacks: false,
                warnings: Vec::new(),
                unsupported: Vec::new(),
            };
        }
    };

    let powershell = transform::translate_script(&script, &mut ctx);

    #[cfg(feature = "logging")]
    for warning in &ctx.warnings {
        tracing::warn!(%warning, "translator fallback");
    }

    TranspileOutput {
        powershell,
        used_fallbacks: ctx.used_fallbacks,
        warnings: ctx.warnings,
        unsupported: ctx.unsupported,
    }
}

fn lex_and_parse(bash: &str) -> error::Result<parser::Script> {
    #[cfg(feature = "logging")]
    let _span = tracing::debug_span!("parse").entered();
    parser::parse(bash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_produces_empty_output() {
        let out = transpile_with_meta("", &TranspileOptions::default());
        assert_eq!(out.powershell, "");
        assert!(!out.used_fallbacks);
        assert!(out.warnings.is_empty());
        assert!(out.unsupported.is_empty());
    }

    #[test]
    fn whitespace_only_input_produces_empty_output() {
        let out = transpile("   \n\t  ", &TranspileOptions::default());
        assert_eq!(out, "");
    }

    #[test]
    fn simple_command_translates() {
        let out = transpile("echo hello", &TranspileOptions::default());
        assert_eq!(out, "Write-Output (hello)");
    }

    #[test]
    fn unmatched_paren_becomes_error_comment() {
        let out = transpile("(echo hi", &TranspileOptions::default());
        assert!(out.starts_with("# TRANSPILE ERROR:"));
        assert!(out.contains("# Original: (echo hi"));
    }

    #[test]
    fn unsupported_flag_still_succeeds_with_warning() {
        let out = transpile_with_meta("chmod 755 deploy.sh", &TranspileOptions::default());
        assert!(!out.unsupported.is_empty());
        assert_eq!(out.powershell, "$null");
    }

    #[test]
    fn repeated_calls_with_same_input_are_deterministic() {
        let options = TranspileOptions::default();
        let a = transpile("ls -la /tmp", &options);
        let b = transpile("ls -la /tmp", &options);
        assert_eq!(a, b);
    }

    #[test]
    fn grep_dual_path_respects_available_tools_override() {
        let native = TranspileOptions {
            available_tools: Some(ToolAvailability {
                rg: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        let out = transpile("grep -r TODO src/", &native);
        assert!(out.starts_with("rg"));

        let fallback = TranspileOptions {
            available_tools: Some(ToolAvailability::default()),
            ..Default::default()
        };
        let out = transpile("grep -r TODO src/", &fallback);
        assert!(out.contains("Select-String"));
    }
}
