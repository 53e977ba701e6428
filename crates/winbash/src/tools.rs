//! Tool-availability probe.
//!
//! Grounded in the teacher's tool-definition builder (`bashkit::tool`),
//! generalized here from "describe one callable tool" to "detect whether four
//! external binaries are on PATH". The probe is the transpiler's only
//! lifecycle boundary: it touches the filesystem once and the result is
//! cached process-wide (§5 of the spec).

use std::env;
use std::path::Path;
use std::sync::{OnceLock, RwLock};

/// Which native Windows-side binaries the dual-path translators may prefer
/// over their PowerShell-cmdlet fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct ToolAvailability {
    pub rg: bool,
    pub fd: bool,
    pub curl: bool,
    pub jq: bool,
}

fn tool_cache() -> &'static RwLock<Option<ToolAvailability>> {
    static CACHE: OnceLock<RwLock<Option<ToolAvailability>>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(None))
}

/// Detect which of `rg`, `fd`, `curl`, `jq` are on `PATH`, caching the result
/// process-wide. Call [`reset_tool_cache`] first to force a fresh probe (the
/// host's `PATH` can change across the lifetime of a long-running process).
pub fn detect_tools() -> ToolAvailability {
    if let Some(tools) = *tool_cache().read().expect("tool cache poisoned") {
        return tools;
    }
    let tools = probe_path();
    *tool_cache().write().expect("tool cache poisoned") = Some(tools);
    tools
}

/// Clear the cached probe result so the next [`detect_tools`] call re-reads
/// `PATH`. Tests must call this between assertions that rely on different
/// `PATH` contents.
pub fn reset_tool_cache() {
    *tool_cache().write().expect("tool cache poisoned") = None;
}

fn probe_path() -> ToolAvailability {
    ToolAvailability {
        rg: on_path("rg"),
        fd: on_path("fd"),
        curl: on_path("curl"),
        jq: on_path("jq"),
    }
}

fn on_path(name: &str) -> bool {
    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };
    let exe_name = format!("{name}.exe");
    env::split_paths(&path_var).any(|dir| {
        Path::new(&dir).join(name).is_file() || Path::new(&dir).join(&exe_name).is_file()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tool_availability_is_all_false() {
        let tools = ToolAvailability::default();
        assert!(!tools.rg);
        assert!(!tools.fd);
        assert!(!tools.curl);
        assert!(!tools.jq);
    }

    #[test]
    fn detect_tools_is_stable_within_a_process() {
        let a = detect_tools();
        let b = detect_tools();
        assert_eq!(a, b);
    }

    #[test]
    fn on_path_false_for_nonsense_binary() {
        assert!(!on_path("this-binary-does-not-exist-anywhere-xyz"));
    }
}
