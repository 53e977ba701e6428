//! Winbash CLI - command-line entrypoint for the bash->PowerShell transpiler
//!
//! Usage:
//!   winbash -c 'grep -r TODO src/'   # transpile a command string
//!   winbash script.sh                # transpile a script file
//!   echo 'ls -la' | winbash           # transpile stdin
//!
//! This binary is a thin wrapper: all translation logic lives in the
//! `winbash` library crate. It never executes the emitted PowerShell.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

/// Transpile bash into PowerShell.
#[derive(Parser, Debug)]
#[command(name = "winbash")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Transpile the given command string instead of reading a file/stdin
    #[arg(short = 'c')]
    command: Option<String>,

    /// Script file to transpile (reads stdin if omitted and -c is not given)
    #[arg()]
    script: Option<PathBuf>,

    /// Print the full result (powershell, warnings, unsupported, usedFallbacks) as JSON
    #[arg(long)]
    json: bool,

    /// Disable the dual-path native tool preference (rg/fd/curl.exe), forcing
    /// the PowerShell-cmdlet fallback for every dual-path command
    #[arg(long)]
    no_native_tools: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let bash = if let Some(cmd) = args.command {
        cmd
    } else if let Some(path) = args.script {
        std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read script: {}", path.display()))?
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    };

    let options = winbash::TranspileOptions {
        prefer_native_tools: !args.no_native_tools,
        ..Default::default()
    };

    let result = winbash::transpile_with_meta(&bash, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.powershell);
        for warning in &result.warnings {
            eprintln!("warning: {warning}");
        }
    }

    Ok(())
}
