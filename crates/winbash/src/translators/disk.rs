//! du and df.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

pub fn translate_du(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let paths: Vec<&Word> = args.iter().filter(|w| w.as_plain_str().map(|s| !s.starts_with('-')).unwrap_or(true)).collect();
    let path = paths.first().map(|w| translate_path_arg(w, ctx)).unwrap_or_else(|| "'.'".to_string());
    TranslatedCommand::new(format!(
        "(Get-ChildItem -Recurse -File -Path {path} | Measure-Object -Property Length -Sum).Sum"
    ))
}

pub fn translate_df(_args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new("Get-PSDrive -PSProvider FileSystem | Select-Object Name, Used, Free")
}
