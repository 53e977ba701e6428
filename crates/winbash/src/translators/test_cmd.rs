//! test / `[` — unary file/string predicates (`-e -f -d -z -n -s -L`),
//! binary comparisons (`= == != -eq -ne -lt -gt -le -ge -nt -ot`), `!`
//! negation, `-a`/`-o` combinators.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_word, TransformContext};

fn render_primary(tokens: &[&Word], idx: &mut usize, ctx: &mut TransformContext) -> String {
    if tokens[*idx].as_plain_str() == Some("!") {
        *idx += 1;
        let inner = render_primary(tokens, idx, ctx);
        return format!("(-not ({inner}))");
    }

    match tokens[*idx].as_plain_str() {
        Some("-e") => {
            *idx += 1;
            let f = translate_word(tokens[*idx], ctx);
            *idx += 1;
            format!("(Test-Path {f})")
        }
        Some("-f") => {
            *idx += 1;
            let f = translate_word(tokens[*idx], ctx);
            *idx += 1;
            format!("(Test-Path {f} -PathType Leaf)")
        }
        Some("-d") => {
            *idx += 1;
            let f = translate_word(tokens[*idx], ctx);
            *idx += 1;
            format!("(Test-Path {f} -PathType Container)")
        }
        Some("-z") => {
            *idx += 1;
            let s = translate_word(tokens[*idx], ctx);
            *idx += 1;
            format!("([string]::IsNullOrEmpty({s}))")
        }
        Some("-n") => {
            *idx += 1;
            let s = translate_word(tokens[*idx], ctx);
            *idx += 1;
            format!("(-not [string]::IsNullOrEmpty({s}))")
        }
        Some("-s") => {
            *idx += 1;
            let f = translate_word(tokens[*idx], ctx);
            *idx += 1;
            format!("((Test-Path {f} -PathType Leaf) -and (Get-Item {f}).Length -gt 0)")
        }
        Some("-L") => {
            *idx += 1;
            let f = translate_word(tokens[*idx], ctx);
            *idx += 1;
            format!("((Get-Item {f}).LinkType -eq 'SymbolicLink')")
        }
        _ => {
            let lhs = translate_word(tokens[*idx], ctx);
            *idx += 1;
            if *idx < tokens.len() {
                match tokens[*idx].as_plain_str() {
                    Some("-nt") => {
                        *idx += 1;
                        let rhs = translate_word(tokens[*idx], ctx);
                        *idx += 1;
                        return format!("((Get-Item {lhs}).LastWriteTime -gt (Get-Item {rhs}).LastWriteTime)");
                    }
                    Some("-ot") => {
                        *idx += 1;
                        let rhs = translate_word(tokens[*idx], ctx);
                        *idx += 1;
                        return format!("((Get-Item {lhs}).LastWriteTime -lt (Get-Item {rhs}).LastWriteTime)");
                    }
                    _ => {}
                }
                let ps_op = match tokens[*idx].as_plain_str() {
                    Some("=") | Some("==") | Some("-eq") => Some("-eq"),
                    Some("!=") | Some("-ne") => Some("-ne"),
                    Some("-lt") => Some("-lt"),
                    Some("-gt") => Some("-gt"),
                    Some("-le") => Some("-le"),
                    Some("-ge") => Some("-ge"),
                    _ => None,
                };
                if let Some(ps_op) = ps_op {
                    *idx += 1;
                    let rhs = translate_word(tokens[*idx], ctx);
                    *idx += 1;
                    return format!("({lhs} {ps_op} {rhs})");
                }
            }
            format!("(-not [string]::IsNullOrEmpty({lhs}))")
        }
    }
}

fn translate_expr(args: &[Word], ctx: &mut TransformContext) -> String {
    if args.is_empty() {
        return "$false".to_string();
    }
    let refs: Vec<&Word> = args.iter().collect();
    let mut idx = 0;
    let mut expr = render_primary(&refs, &mut idx, ctx);
    while idx < refs.len() {
        match refs[idx].as_plain_str() {
            Some("-a") => {
                idx += 1;
                let rhs = render_primary(&refs, &mut idx, ctx);
                expr = format!("({expr} -and {rhs})");
            }
            Some("-o") => {
                idx += 1;
                let rhs = render_primary(&refs, &mut idx, ctx);
                expr = format!("({expr} -or {rhs})");
            }
            _ => break,
        }
    }
    expr
}

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new(translate_expr(args, ctx))
}

pub fn translate_bracket(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let trimmed: Vec<Word> = args
        .iter()
        .filter(|w| w.as_plain_str() != Some("]"))
        .cloned()
        .collect();
    TranslatedCommand::new(translate_expr(&trimmed, ctx))
}
