//! curl and wget, dual-path: `curl.exe` when available, else
//! Invoke-WebRequest (spec §4.4).

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_word, TransformContext};

const CURL_SPECS: &[FlagSpec] = &[FlagSpec::value("o", 'o', "output"), FlagSpec::flag("O", 'O', "remote-name")];

fn native_arg(word: &Word) -> String {
    format!("'{}'", word.to_string().replace('\'', "''"))
}

pub fn translate_curl(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, CURL_SPECS);
    let url = parsed.positional.first();

    if ctx.tools.curl && ctx.options.prefer_native_tools {
        let mut parts = vec!["curl.exe".to_string()];
        if let Some(out) = parsed.value("o") {
            parts.push("-o".into());
            parts.push(format!("'{}'", out.replace('\'', "''")));
        } else if parsed.is_set("O") {
            parts.push("-O".into());
        }
        if let Some(u) = url {
            parts.push(native_arg(u));
        }
        return TranslatedCommand::new(parts.join(" "));
    }

    let Some(u) = url else {
        return TranslatedCommand::fallback("Invoke-WebRequest");
    };
    let uri = translate_word(u, ctx);
    match parsed.value("o") {
        Some(out) => TranslatedCommand::fallback(format!("Invoke-WebRequest -Uri {uri} -OutFile '{out}'")),
        None if parsed.is_set("O") => {
            TranslatedCommand::fallback(format!("Invoke-WebRequest -Uri {uri} -OutFile (Split-Path -Leaf {uri})"))
        }
        None => TranslatedCommand::fallback(format!("(Invoke-WebRequest -Uri {uri}).Content")),
    }
}

pub fn translate_wget(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let Some(u) = args.first() else {
        return TranslatedCommand::fallback("Invoke-WebRequest");
    };

    if ctx.tools.curl && ctx.options.prefer_native_tools {
        return TranslatedCommand::new(format!("curl.exe -O {}", native_arg(u)));
    }

    ctx.used_fallbacks = true;
    let uri = translate_word(u, ctx);
    TranslatedCommand::fallback(format!("Invoke-WebRequest -Uri {uri} -OutFile (Split-Path -Leaf {uri})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolAvailability;
    use crate::TranspileOptions;

    #[test]
    fn curl_native_passes_through_url() {
        let mut c = TransformContext::new(
            ToolAvailability {
                curl: true,
                ..Default::default()
            },
            TranspileOptions::default(),
        );
        let args = vec![Word::literal("https://example.com")];
        let out = translate_curl(&args, &mut c);
        assert_eq!(out.command, "curl.exe 'https://example.com'");
        assert!(!out.used_fallback);
    }

    #[test]
    fn curl_fallback_uses_invoke_webrequest() {
        let mut c = TransformContext::new(ToolAvailability::default(), TranspileOptions::default());
        let args = vec![Word::literal("https://example.com")];
        let out = translate_curl(&args, &mut c);
        assert_eq!(out.command, "(Invoke-WebRequest -Uri https://example.com).Content");
        assert!(out.used_fallback);
    }
}
