//! find, dual-path: `fd` when available, else `Get-ChildItem -Recurse`
//! (spec §4.4, §8 "find path-only output with -ExpandProperty FullName
//! unless -delete/-exec").

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, translate_word, TransformContext};

fn native_quote(word: &Word) -> String {
    format!("'{}'", word.to_string().replace('\'', "''"))
}

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let mut dir: Option<&Word> = None;
    let mut name_pattern: Option<&Word> = None;
    let mut type_filter: Option<&str> = None;
    let mut delete = false;
    let mut exec_cmd: Vec<&Word> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_plain_str() {
            Some("-name") => {
                i += 1;
                name_pattern = args.get(i);
            }
            Some("-type") => {
                i += 1;
                type_filter = args.get(i).and_then(|w| w.as_plain_str());
            }
            Some("-delete") => delete = true,
            Some("-exec") => {
                i += 1;
                while i < args.len() && !matches!(args[i].as_plain_str(), Some(";") | Some("\\;")) {
                    exec_cmd.push(&args[i]);
                    i += 1;
                }
            }
            Some(s) if !s.starts_with('-') && dir.is_none() => dir = Some(&args[i]),
            _ => {}
        }
        i += 1;
    }

    if ctx.tools.fd && ctx.options.prefer_native_tools {
        let mut parts = vec!["fd".to_string()];
        if let Some(t) = type_filter {
            parts.push("-t".into());
            parts.push(t.to_string());
        }
        parts.push(name_pattern.map(native_quote).unwrap_or_else(|| "'.'".to_string()));
        if let Some(d) = dir {
            parts.push(native_quote(d));
        }
        return TranslatedCommand::new(parts.join(" "));
    }

    let dir_expr = dir.map(|w| translate_path_arg(w, ctx)).unwrap_or_else(|| "'.'".to_string());
    let mut cmd = format!("Get-ChildItem -Recurse -Path {dir_expr}");
    match type_filter {
        Some("f") => cmd.push_str(" -File"),
        Some("d") => cmd.push_str(" -Directory"),
        _ => {}
    }
    if let Some(p) = name_pattern {
        let pattern = translate_word(p, ctx);
        cmd.push_str(&format!(" -Filter {pattern}"));
    }

    if delete {
        cmd.push_str(" | Remove-Item -Force -Recurse");
    } else if !exec_cmd.is_empty() {
        let name = exec_cmd[0].as_plain_str().unwrap_or("").to_string();
        let rest = exec_cmd[1..]
            .iter()
            .filter(|w| w.as_plain_str() != Some("{}"))
            .map(|w| translate_word(w, ctx))
            .collect::<Vec<_>>()
            .join(" ");
        if rest.is_empty() {
            cmd.push_str(&format!(" | ForEach-Object {{ & {name} $_.FullName }}"));
        } else {
            cmd.push_str(&format!(" | ForEach-Object {{ & {name} {rest} $_.FullName }}"));
        }
    } else {
        cmd.push_str(" | Select-Object -ExpandProperty FullName");
    }

    TranslatedCommand::fallback(cmd)
}
