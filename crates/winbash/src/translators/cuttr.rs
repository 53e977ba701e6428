//! cut and tr.

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

const CUT_SPECS: &[FlagSpec] = &[FlagSpec::value("d", 'd', "delimiter"), FlagSpec::value("f", 'f', "fields")];

pub fn translate_cut(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, CUT_SPECS);
    let delim = parsed.value("d").unwrap_or("\t").to_string();
    let fields = parsed.value("f").unwrap_or("1").to_string();
    let paths = parsed
        .positional
        .iter()
        .map(|w| translate_path_arg(w, ctx))
        .collect::<Vec<_>>()
        .join(", ");
    let idx_expr = fields
        .split(',')
        .map(|f| (f.trim().parse::<i64>().unwrap_or(1) - 1).to_string())
        .collect::<Vec<_>>()
        .join(",");
    let stage = format!("ForEach-Object {{ ($_ -split '{delim}')[{idx_expr}] -join '{delim}' }}");
    let cmd = if paths.is_empty() {
        stage
    } else {
        format!("Get-Content -Path {paths} | {stage}")
    };
    TranslatedCommand::new(cmd)
}

const TR_SPECS: &[FlagSpec] = &[FlagSpec::flag("d", 'd', "delete")];

pub fn translate_tr(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, TR_SPECS);
    if parsed.is_set("d") {
        let set = parsed
            .positional
            .first()
            .and_then(|w| w.as_plain_str())
            .unwrap_or("")
            .to_string();
        return TranslatedCommand::new(format!("ForEach-Object {{ $_ -replace '[{set}]', '' }}"));
    }
    let from = parsed.positional.first().and_then(|w| w.as_plain_str()).unwrap_or("");
    let to = parsed.positional.get(1).and_then(|w| w.as_plain_str()).unwrap_or("");
    match (from, to) {
        ("a-z", "A-Z") => TranslatedCommand::new("ForEach-Object { $_.ToUpper() }"),
        ("A-Z", "a-z") => TranslatedCommand::new("ForEach-Object { $_.ToLower() }"),
        _ => {
            ctx.unsupported
                .push(format!("tr mapping '{from}' -> '{to}' has no direct PowerShell equivalent"));
            TranslatedCommand::fallback("ForEach-Object { $_ }")
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
    fn cut_splits_on_delimiter_and_selects_field() {
        let mut c = ctx();
        let args = vec![Word::literal("-d:"), Word::literal("-f2")];
        let out = translate_cut(&args, &mut c);
        assert_eq!(out.command, "ForEach-Object { ($_ -split ':')[1] -join ':' }");
    }

    #[test]
    fn tr_az_to_upper_uses_toupper() {
        let mut c = ctx();
        let args = vec![Word::literal("a-z"), Word::literal("A-Z")];
        let out = translate_tr(&args, &mut c);
        assert_eq!(out.command, "ForEach-Object { $_.ToUpper() }");
    }
}
