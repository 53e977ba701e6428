//! printf. Translates `%s`/`%d`/`%x`/`%f` to PowerShell `-f` placeholders and
//! `\n`/`\t` to backtick escapes.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_word, TransformContext};

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    if args.is_empty() {
        return TranslatedCommand::new("Write-Output ''");
    }
    let fmt_text = args[0].as_plain_str().unwrap_or("").to_string();
    let rest = &args[1..];

    let mut out = String::new();
    let mut idx = 0;
    let mut chars = fmt_text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '%' => match chars.next() {
                Some('s') | Some('d') | Some('i') | Some('x') | Some('f') => {
                    out.push_str(&format!("{{{idx}}}"));
                    idx += 1;
                }
                Some('%') => out.push('%'),
                Some(other) => {
                    out.push('%');
                    out.push(other);
                }
                None => out.push('%'),
            },
            '\\' => match chars.next() {
                Some('n') => out.push_str("`n"),
                Some('t') => out.push_str("`t"),
                Some(other) => out.push(other),
                None => {}
            },
            '`' | '$' | '"' => {
                out.push('`');
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    let fmt_literal = format!("\"{out}\"");
    let arg_exprs = rest.iter().map(|w| translate_word(w, ctx)).collect::<Vec<_>>().join(", ");
    if arg_exprs.is_empty() {
        TranslatedCommand::new(format!("Write-Output ({fmt_literal})"))
    } else {
        TranslatedCommand::new(format!("Write-Output ({fmt_literal} -f {arg_exprs})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolAvailability;
    use crate::TranspileOptions;

    #[test]
    fn printf_converts_specifiers_to_format_placeholders() {
        let mut c = TransformContext::new(ToolAvailability::default(), TranspileOptions::default());
        let args = vec![Word::literal("%s: %d\\n"), Word::literal("count"), Word::literal("3")];
        let out = translate(&args, &mut c);
        assert_eq!(out.command, "Write-Output (\"{0}: {1}`n\" -f count, 3)");
    }
}
