//! Logging configuration for the transpiler.
//!
//! Much smaller than a sandboxed interpreter's logging surface: there is no
//! filesystem, no child process, no network call to redact. The one thing
//! worth gating is the bash source text itself, since agent-emitted commands
//! routinely embed credentials in argv (`curl -H "Authorization: Bearer
//! $TOKEN"`), so logging it is opt-in and off by default.

/// Controls what `transpile`/`transpile_with_meta` log under the `logging`
/// feature. Spans around lex/parse/transform run at `debug!` regardless;
/// this only governs whether the raw script text is attached to them.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Whether to include the original bash text in log output.
    ///
    /// Off by default: scripts may contain embedded secrets.
    pub log_script_content: bool,
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable logging of the original script text.
    pub fn unsafe_log_scripts(mut self) -> Self {
        self.log_script_content = true;
        self
    }
}

/// Format a bash script for a log line, honoring `config.log_script_content`.
pub fn format_script_for_log(script: &str, config: &LogConfig) -> String {
    if config.log_script_content {
        script.replace('\n', "\\n")
    } else {
        format!("[script: {} bytes]", script.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_hides_script_content() {
        let config = LogConfig::new();
        let out = format_script_for_log("curl -H 'Authorization: Bearer secret'", &config);
        assert!(!out.contains("secret"));
        assert!(out.contains("bytes"));
    }

    #[test]
    fn unsafe_flag_logs_full_content() {
        let config = LogConfig::new().unsafe_log_scripts();
        let out = format_script_for_log("echo hi", &config);
        assert_eq!(out, "echo hi");
    }

    #[test]
    fn newlines_are_escaped_when_logged() {
        let config = LogConfig::new().unsafe_log_scripts();
        let out = format_script_for_log("echo a\necho b", &config);
        assert_eq!(out, "echo a\\necho b");
    }
}
