//! Shared GNU-style flag parser used by every command translator (spec
//! §4.4 "shared arg parser", REDESIGN FLAGS §9(b): flag specs are a small
//! table owned by each translator module instead of ad hoc per-command
//! loops).

use std::collections::HashMap;

use crate::parser::Word;

/// One recognized flag. `key` is the canonical lookup name a translator
/// uses regardless of whether the flag was given in short or long form.
pub struct FlagSpec {
    pub key: &'static str,
    pub short: Option<char>,
    pub long: Option<&'static str>,
    pub takes_value: bool,
}

impl FlagSpec {
    pub const fn flag(key: &'static str, short: char, long: &'static str) -> Self {
        Self {
            key,
            short: Some(short),
            long: Some(long),
            takes_value: false,
        }
    }

    pub const fn value(key: &'static str, short: char, long: &'static str) -> Self {
        Self {
            key,
            short: Some(short),
            long: Some(long),
            takes_value: true,
        }
    }
}

/// Parsed flags and leftover positional words, borrowed from the input.
pub struct ParsedArgs<'a> {
    flags: HashMap<String, Option<String>>,
    pub positional: Vec<&'a Word>,
}

impl<'a> ParsedArgs<'a> {
    pub fn is_set(&self, key: &str) -> bool {
        self.flags.contains_key(key)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.flags.get(key).and_then(|v| v.as_deref())
    }
}

/// Parse `args` against `specs`. Handles `--long`, `--long=value`,
/// `--long value`, `-x`, combined `-xyz`, `-xVALUE` (when `-x` takes a
/// value), and `--` as end-of-flags. Unknown long flags are captured under
/// their raw name; unknown short letters are stored boolean-true under the
/// letter. Flags attached to non-literal words (containing expansions) are
/// never misread as flags — only a word that is exactly one unquoted
/// literal can start with `-` and be treated as one.
pub fn parse<'a>(args: &'a [Word], specs: &[FlagSpec]) -> ParsedArgs<'a> {
    let mut flags: HashMap<String, Option<String>> = HashMap::new();
    let mut positional = Vec::new();
    let mut end_of_flags = false;
    let mut i = 0;

    while i < args.len() {
        let word = &args[i];
        let text = if end_of_flags { None } else { word.as_plain_str() };

        let Some(text) = text else {
            positional.push(word);
            i += 1;
            continue;
        };

        if text == "--" {
            end_of_flags = true;
            i += 1;
            continue;
        }

        if let Some(rest) = text.strip_prefix("--") {
            let (name, inline_value) = match rest.split_once('=') {
                Some((n, v)) => (n, Some(v.to_string())),
                None => (rest, None),
            };
            match specs.iter().find(|s| s.long == Some(name)) {
                Some(spec) if spec.takes_value => {
                    let value = if inline_value.is_some() {
                        inline_value
                    } else {
                        i += 1;
                        args.get(i).and_then(|w| w.as_plain_str()).map(str::to_string)
                    };
                    flags.insert(spec.key.to_string(), value);
                }
                Some(spec) => {
                    flags.insert(spec.key.to_string(), None);
                }
                None => {
                    flags.insert(name.to_string(), inline_value);
                }
            }
        } else if text.len() > 1 && text.starts_with('-') {
            let chars: Vec<char> = text[1..].chars().collect();
            let mut ci = 0;
            while ci < chars.len() {
                let c = chars[ci];
                match specs.iter().find(|s| s.short == Some(c)) {
                    Some(spec) if spec.takes_value => {
                        let remainder: String = chars[ci + 1..].iter().collect();
                        let value = if !remainder.is_empty() {
                            Some(remainder)
                        } else {
                            i += 1;
                            args.get(i).and_then(|w| w.as_plain_str()).map(str::to_string)
                        };
                        flags.insert(spec.key.to_string(), value);
                        break;
                    }
                    Some(spec) => {
                        flags.insert(spec.key.to_string(), None);
                    }
                    None => {
                        flags.insert(c.to_string(), None);
                    }
                }
                ci += 1;
            }
        } else {
            positional.push(word);
        }
        i += 1;
    }

    ParsedArgs { flags, positional }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Word;

    fn words(strs: &[&str]) -> Vec<Word> {
        strs.iter().map(|s| Word::literal(*s)).collect()
    }

    #[test]
    fn parses_combined_short_flags() {
        let specs = [FlagSpec::flag("i", 'i', "ignore-case"), FlagSpec::flag("v", 'v', "invert-match")];
        let args = words(&["-iv", "pattern"]);
        let parsed = parse(&args, &specs);
        assert!(parsed.is_set("i"));
        assert!(parsed.is_set("v"));
        assert_eq!(parsed.positional.len(), 1);
    }

    #[test]
    fn parses_long_flag_with_equals() {
        let specs = [FlagSpec::value("delim", 'd', "delimiter")];
        let args = words(&["--delimiter=,", "a"]);
        let parsed = parse(&args, &specs);
        assert_eq!(parsed.value("delim"), Some(","));
    }

    #[test]
    fn parses_short_flag_with_attached_value() {
        let specs = [FlagSpec::value("delim", 'd', "delimiter")];
        let args = words(&["-d,", "a"]);
        let parsed = parse(&args, &specs);
        assert_eq!(parsed.value("delim"), Some(","));
    }

    #[test]
    fn parses_long_flag_value_as_separate_word() {
        let specs = [FlagSpec::value("count", 'n', "lines")];
        let args = words(&["--lines", "5"]);
        let parsed = parse(&args, &specs);
        assert_eq!(parsed.value("count"), Some("5"));
    }

    #[test]
    fn double_dash_ends_flag_parsing() {
        let specs = [FlagSpec::flag("v", 'v', "verbose")];
        let args = words(&["--", "-v"]);
        let parsed = parse(&args, &specs);
        assert!(!parsed.is_set("v"));
        assert_eq!(parsed.positional.len(), 1);
    }

    #[test]
    fn unknown_short_flag_is_captured_as_boolean() {
        let specs: [FlagSpec; 0] = [];
        let args = words(&["-z"]);
        let parsed = parse(&args, &specs);
        assert!(parsed.is_set("z"));
    }
}
