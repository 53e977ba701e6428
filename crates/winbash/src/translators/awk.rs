//! awk — restricted subset: `{print $N}`, `NR==N`, `/PAT/`, `{print NF}`.
//! Anything outside that shape is flagged unsupported and passes the line
//! through unchanged rather than failing the whole script.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let Some(script_word) = args.first() else {
        return TranslatedCommand::new("ForEach-Object { $_ }");
    };
    let script = script_word.as_plain_str().unwrap_or("").to_string();
    let files = &args[1..];
    let stage = render_awk_script(&script, ctx);

    if files.is_empty() {
        TranslatedCommand::new(stage)
    } else {
        let paths = files
            .iter()
            .map(|w| translate_path_arg(w, ctx))
            .collect::<Vec<_>>()
            .join(", ");
        TranslatedCommand::new(format!("Get-Content -Path {paths} | {stage}"))
    }
}

enum Condition {
    Pattern(String),
    NrEquals(usize),
}

fn render_awk_script(script: &str, ctx: &mut TransformContext) -> String {
    let (condition, action) = split_condition_action(script);
    let action_expr = match action {
        Some(a) => render_action(&a, ctx),
        None => "$_".to_string(),
    };
    match condition {
        Some(Condition::Pattern(pat)) => format!("ForEach-Object {{ if ($_ -match '{pat}') {{ {action_expr} }} }}"),
        Some(Condition::NrEquals(n)) => format!(
            "ForEach-Object -Begin {{ $script:nr = 0 }} -Process {{ $script:nr++; if ($script:nr -eq {n}) {{ {action_expr} }} }}"
        ),
        None => format!("ForEach-Object {{ {action_expr} }}"),
    }
}

fn split_condition_action(script: &str) -> (Option<Condition>, Option<String>) {
    let script = script.trim();
    if let Some(brace_idx) = script.find('{') {
        let cond_part = script[..brace_idx].trim();
        let action_part = &script[brace_idx..];
        let action = action_part
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .map(|s| s.trim().to_string());
        (parse_condition(cond_part), action)
    } else {
        (parse_condition(script), None)
    }
}

fn parse_condition(cond: &str) -> Option<Condition> {
    let cond = cond.trim();
    if cond.is_empty() {
        return None;
    }
    if let Some(pat) = cond.strip_prefix('/').and_then(|s| s.strip_suffix('/')) {
        return Some(Condition::Pattern(pat.to_string()));
    }
    if let Some(n) = cond.strip_prefix("NR==").and_then(|s| s.parse::<usize>().ok()) {
        return Some(Condition::NrEquals(n));
    }
    None
}

fn render_action(action: &str, ctx: &mut TransformContext) -> String {
    let action = action.trim();
    if let Some(rest) = action.strip_prefix("print") {
        let rest = rest.trim();
        if rest.is_empty() || rest == "$0" {
            return "$_".to_string();
        }
        if rest == "NF" {
            return "($_ -split '\\s+').Count".to_string();
        }
        if let Some(n) = rest.strip_prefix('$').and_then(|s| s.parse::<usize>().ok()) {
            return if n == 0 {
                "$_".to_string()
            } else {
                format!("($_ -split '\\s+')[{}]", n - 1)
            };
        }
    }
    ctx.unsupported
        .push(format!("awk action '{action}' is not modeled; the line passes through unchanged"));
    "$_".to_string()
}
