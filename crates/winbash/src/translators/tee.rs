//! tee.

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

const SPECS: &[FlagSpec] = &[FlagSpec::flag("a", 'a', "append")];

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, SPECS);
    let path = parsed
        .positional
        .first()
        .map(|w| translate_path_arg(w, ctx))
        .unwrap_or_else(|| "''".to_string());
    let mut cmd = format!("Tee-Object -FilePath {path}");
    if parsed.is_set("a") {
        cmd.push_str(" -Append");
    }
    TranslatedCommand::new(cmd)
}
