//! ps, kill, pkill, killall, pgrep, lsof.

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_word, TransformContext};

pub fn translate_ps(_args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new("Get-Process")
}

const KILL_SPECS: &[FlagSpec] = &[FlagSpec::flag("9", '9', "sigkill")];

pub fn translate_kill(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, KILL_SPECS);
    let pid = parsed
        .positional
        .first()
        .map(|w| translate_word(w, ctx))
        .unwrap_or_else(|| "0".to_string());
    let mut cmd = format!("Stop-Process -Id {pid}");
    if parsed.is_set("9") {
        cmd.push_str(" -Force");
    }
    TranslatedCommand::new(cmd)
}

pub fn translate_pkill(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let name = args
        .iter()
        .find(|w| w.as_plain_str().map(|s| !s.starts_with('-')).unwrap_or(true))
        .map(|w| translate_word(w, ctx))
        .unwrap_or_else(|| "''".to_string());
    TranslatedCommand::new(format!("Stop-Process -Name {name} -Force"))
}

pub fn translate_pgrep(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let name = args
        .first()
        .map(|w| translate_word(w, ctx))
        .unwrap_or_else(|| "''".to_string());
    TranslatedCommand::new(format!("Get-Process -Name {name} | Select-Object -ExpandProperty Id"))
}

pub fn translate_lsof(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let port_arg = args.iter().find_map(|w| w.as_plain_str().and_then(|s| s.strip_prefix("-i:").or_else(|| s.strip_prefix(":"))));
    match port_arg {
        Some(port) => TranslatedCommand::new(format!("Get-NetTCPConnection -LocalPort {port}")),
        None => {
            ctx.unsupported
                .push("lsof without -i:PORT has no modeled Windows equivalent".into());
            TranslatedCommand::fallback("Get-NetTCPConnection")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolAvailability;
    use crate::TranspileOptions;

    fn ctx() -> TransformContext {
        TransformContext::new(ToolAvailability::default(), TranspileOptions::default())
    }

    #[test]
    fn kill_9_adds_force() {
        let mut c = ctx();
        let args = vec![Word::literal("-9"), Word::literal("1234")];
        assert_eq!(translate_kill(&args, &mut c).command, "Stop-Process -Id 1234 -Force");
    }

    #[test]
    fn lsof_port_form_uses_get_nettcpconnection() {
        let mut c = ctx();
        let args = vec![Word::literal("-i:8080")];
        assert_eq!(translate_lsof(&args, &mut c).command, "Get-NetTCPConnection -LocalPort 8080");
    }
}
