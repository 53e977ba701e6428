//! basename, dirname, realpath, readlink.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

pub fn translate_basename(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let Some(path) = args.first() else {
        return TranslatedCommand::new("''");
    };
    let path_expr = translate_path_arg(path, ctx);
    let base = format!("[System.IO.Path]::GetFileName({path_expr})");
    match args.get(1).and_then(|w| w.as_plain_str()) {
        Some(suffix) => TranslatedCommand::new(format!("({base}) -replace [regex]::Escape('{suffix}') + '$', ''")),
        None => TranslatedCommand::new(base),
    }
}

pub fn translate_dirname(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let Some(path) = args.first() else {
        return TranslatedCommand::new("'.'");
    };
    TranslatedCommand::new(format!("Split-Path -Parent {}", translate_path_arg(path, ctx)))
}

pub fn translate_realpath(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let Some(path) = args.first() else {
        return TranslatedCommand::new("(Get-Location).Path");
    };
    TranslatedCommand::new(format!("(Resolve-Path {}).Path", translate_path_arg(path, ctx)))
}

pub fn translate_readlink(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let Some(path) = args.iter().find(|w| w.as_plain_str().map(|s| !s.starts_with('-')).unwrap_or(true)) else {
        return TranslatedCommand::new("(Get-Location).Path");
    };
    TranslatedCommand::new(format!("(Resolve-Path {}).Path", translate_path_arg(path, ctx)))
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
    fn basename_extracts_filename() {
        let mut c = ctx();
        let args = vec![Word::literal("/a/b/c.txt")];
        assert_eq!(
            translate_basename(&args, &mut c).command,
            "[System.IO.Path]::GetFileName('/a/b/c.txt')"
        );
    }

    #[test]
    fn dirname_uses_split_path_parent() {
        let mut c = ctx();
        let args = vec![Word::literal("src/main.rs")];
        assert_eq!(translate_dirname(&args, &mut c).command, "Split-Path -Parent src/main.rs");
    }
}
