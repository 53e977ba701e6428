//! zip and unzip.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

pub fn translate_zip(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    if args.len() < 2 {
        return TranslatedCommand::new("Compress-Archive");
    }
    let dest = translate_path_arg(&args[0], ctx);
    let sources = args[1..]
        .iter()
        .map(|w| translate_path_arg(w, ctx))
        .collect::<Vec<_>>()
        .join(", ");
    TranslatedCommand::new(format!("Compress-Archive -Path {sources} -DestinationPath {dest}"))
}

pub fn translate_unzip(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let Some(archive) = args.first() else {
        return TranslatedCommand::new("Expand-Archive");
    };
    let archive_path = translate_path_arg(archive, ctx);
    let dest = args
        .get(1)
        .map(|w| translate_path_arg(w, ctx))
        .unwrap_or_else(|| "'.'".to_string());
    TranslatedCommand::new(format!("Expand-Archive -Path {archive_path} -DestinationPath {dest}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolAvailability;
    use crate::TranspileOptions;

    #[test]
    fn zip_builds_compress_archive() {
        let mut c = TransformContext::new(ToolAvailability::default(), TranspileOptions::default());
        let args = vec![Word::literal("out.zip"), Word::literal("src")];
        assert_eq!(
            translate_zip(&args, &mut c).command,
            "Compress-Archive -Path 'src' -DestinationPath 'out.zip'"
        );
    }
}
