//! export, unset, set, local, shift.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::TransformContext;

pub fn translate_export(args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    if args.is_empty() {
        return TranslatedCommand::new(String::new());
    }
    let stmts: Vec<String> = args
        .iter()
        .map(|w| match w.as_plain_str().and_then(|s| s.split_once('=')) {
            Some((name, value)) => format!("$env:{name} = '{}'", value.replace('\'', "''")),
            None => {
                let name = w.as_plain_str().unwrap_or("");
                format!("$env:{name} = ${name}")
            }
        })
        .collect();
    TranslatedCommand::new(stmts.join("; "))
}

pub fn translate_unset(args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    let stmts = args
        .iter()
        .filter_map(|w| w.as_plain_str())
        .filter(|s| *s != "-f" && *s != "-v")
        .map(|name| format!("Remove-Item Env:\\{name} -ErrorAction SilentlyContinue"))
        .collect::<Vec<_>>()
        .join("; ");
    TranslatedCommand::new(stmts)
}

pub fn translate_set(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let mut stmts = Vec::new();
    let mut any_unsupported = false;
    for w in args {
        match w.as_plain_str() {
            Some("-e") => stmts.push("$ErrorActionPreference = 'Stop'".to_string()),
            Some("-x") => stmts.push("Set-PSDebug -Trace 1".to_string()),
            Some("+x") => stmts.push("Set-PSDebug -Trace 0".to_string()),
            Some(other) => {
                ctx.unsupported
                    .push(format!("set {other} has no modeled PowerShell equivalent"));
                any_unsupported = true;
            }
            None => {}
        }
    }
    if stmts.is_empty() {
        if any_unsupported {
            TranslatedCommand::fallback("$null")
        } else {
            TranslatedCommand::new(String::new())
        }
    } else {
        TranslatedCommand::new(stmts.join("; "))
    }
}

pub fn translate_local(args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    let stmts = args
        .iter()
        .filter_map(|w| w.as_plain_str())
        .map(|s| match s.split_once('=') {
            Some((name, value)) => format!("${name} = '{}'", value.replace('\'', "''")),
            None => format!("${s} = $null"),
        })
        .collect::<Vec<_>>()
        .join("; ");
    TranslatedCommand::new(stmts)
}

pub fn translate_shift(args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    let n = args.first().and_then(|w| w.as_plain_str()).unwrap_or("1");
    TranslatedCommand::new(format!("$args = $args[{n}..($args.Count - 1)]"))
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
    fn export_with_assignment_sets_env_var() {
        let mut c = ctx();
        let args = vec![Word::literal("FOO=bar")];
        assert_eq!(translate_export(&args, &mut c).command, "$env:FOO = 'bar'");
    }

    #[test]
    fn unset_removes_env_entry() {
        let mut c = ctx();
        let args = vec![Word::literal("FOO")];
        assert_eq!(
            translate_unset(&args, &mut c).command,
            "Remove-Item Env:\\FOO -ErrorAction SilentlyContinue"
        );
    }

    #[test]
    fn shift_default_drops_first_arg() {
        let mut c = ctx();
        assert_eq!(translate_shift(&[], &mut c).command, "$args = $args[1..($args.Count - 1)]");
    }
}
