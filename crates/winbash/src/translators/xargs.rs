//! xargs, approximated as a `ForEach-Object` loop over pipeline input. Only
//! the common "xargs CMD [ARGS...]" shape is modeled; `-I{}`-style
//! placeholder substitution is out of scope.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_word, TransformContext};

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    if args.is_empty() {
        return TranslatedCommand::new("ForEach-Object { $_ }");
    }
    let cmd_name = args[0].as_plain_str().map(str::to_string).unwrap_or_else(|| translate_word(&args[0], ctx));
    let rest = args[1..]
        .iter()
        .map(|w| translate_word(w, ctx))
        .collect::<Vec<_>>()
        .join(" ");
    let invocation = if rest.is_empty() {
        format!("& {cmd_name} $_")
    } else {
        format!("& {cmd_name} {rest} $_")
    };
    TranslatedCommand::new(format!("ForEach-Object {{ {invocation} }}"))
}
