//! Per-command translator registry (spec §4.4). Each module owns a small
//! `FlagSpec` table (via [`argparse`]) and a `translate` function; unknown
//! commands fall through to [`pass_through`], which the spec calls out as
//! "load-bearing" — scripts calling tools we don't know about still get a
//! best-effort PowerShell line rather than an error.

pub mod argparse;

mod archive;
mod awk;
mod cat;
mod curl;
mod cuttr;
mod disk;
mod echo;
mod find;
mod flow;
mod grep;
mod headtail;
mod ls;
mod navigation;
mod path;
mod printf;
mod proc;
mod sed;
mod sortuniq;
mod source;
mod system;
mod tee;
mod test_cmd;
mod vars;
mod wc;
mod xargs;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::parser::Word;
use crate::transform::{translate_word, TransformContext};

/// Result of translating one command name plus its args.
pub struct TranslatedCommand {
    pub command: String,
    pub used_fallback: bool,
}

impl TranslatedCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            used_fallback: false,
        }
    }

    pub fn fallback(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            used_fallback: true,
        }
    }
}

type TranslateFn = fn(&[Word], &mut TransformContext) -> TranslatedCommand;

fn registry() -> &'static HashMap<&'static str, TranslateFn> {
    static REGISTRY: OnceLock<HashMap<&'static str, TranslateFn>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut m: HashMap<&'static str, TranslateFn> = HashMap::new();

        m.insert("grep", grep::translate);
        m.insert("egrep", grep::translate_egrep);
        m.insert("fgrep", grep::translate_fgrep);

        m.insert("find", find::translate);

        m.insert("ls", ls::translate_ls);
        m.insert("rm", ls::translate_rm);
        m.insert("rmdir", ls::translate_rmdir);
        m.insert("mkdir", ls::translate_mkdir);
        m.insert("cp", ls::translate_cp);
        m.insert("mv", ls::translate_mv);
        m.insert("touch", ls::translate_touch);
        m.insert("chmod", ls::translate_chmod);

        m.insert("cat", cat::translate);

        m.insert("head", headtail::translate_head);
        m.insert("tail", headtail::translate_tail);

        m.insert("wc", wc::translate);

        m.insert("sort", sortuniq::translate_sort);
        m.insert("uniq", sortuniq::translate_uniq);

        m.insert("cut", cuttr::translate_cut);
        m.insert("tr", cuttr::translate_tr);

        m.insert("tee", tee::translate);
        m.insert("xargs", xargs::translate);

        m.insert("sed", sed::translate);
        m.insert("awk", awk::translate);

        m.insert("test", test_cmd::translate);
        m.insert("[", test_cmd::translate_bracket);

        m.insert("cd", navigation::translate_cd);
        m.insert("pwd", navigation::translate_pwd);
        m.insert("pushd", navigation::translate_pushd);
        m.insert("popd", navigation::translate_popd);

        m.insert("echo", echo::translate);
        m.insert("printf", printf::translate);

        m.insert("export", vars::translate_export);
        m.insert("unset", vars::translate_unset);
        m.insert("set", vars::translate_set);
        m.insert("local", vars::translate_local);
        m.insert("shift", vars::translate_shift);
        m.insert("readonly", vars::translate_export);

        m.insert("true", flow::translate_true);
        m.insert("false", flow::translate_false);
        m.insert("exit", flow::translate_exit);
        m.insert("return", flow::translate_return);
        m.insert("break", flow::translate_break);
        m.insert("continue", flow::translate_continue);

        m.insert("date", system::translate_date);
        m.insert("sleep", system::translate_sleep);
        m.insert("whoami", system::translate_whoami);
        m.insert("uname", system::translate_uname);
        m.insert("hostname", system::translate_hostname);
        m.insert("id", system::translate_id);
        m.insert("history", system::translate_history);
        m.insert("seq", system::translate_seq);
        m.insert("mktemp", system::translate_mktemp);
        m.insert("nohup", system::translate_nohup);
        m.insert("sudo", system::translate_sudo);

        m.insert("du", disk::translate_du);
        m.insert("df", disk::translate_df);

        m.insert("basename", path::translate_basename);
        m.insert("dirname", path::translate_dirname);
        m.insert("realpath", path::translate_realpath);
        m.insert("readlink", path::translate_readlink);

        m.insert("ps", proc::translate_ps);
        m.insert("kill", proc::translate_kill);
        m.insert("pkill", proc::translate_pkill);
        m.insert("killall", proc::translate_pkill);
        m.insert("pgrep", proc::translate_pgrep);
        m.insert("lsof", proc::translate_lsof);

        m.insert("zip", archive::translate_zip);
        m.insert("unzip", archive::translate_unzip);

        m.insert("curl", curl::translate_curl);
        m.insert("wget", curl::translate_wget);

        m.insert("source", source::translate);
        m.insert(".", source::translate);

        m
    })
}

/// Look up `name` in the registry and translate; unregistered commands fall
/// through to [`pass_through`].
pub fn dispatch(name: &str, args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    match registry().get(name) {
        Some(f) => {
            let result = f(args, ctx);
            if result.used_fallback {
                ctx.used_fallbacks = true;
            }
            result
        }
        None => pass_through(name, args, ctx),
    }
}

/// Unknown-command default: word-translate the name and each arg and space
/// join them. Spec calls this "load-bearing" — most shell scripts invoke
/// tools (npm, git, docker, cargo, ...) that have no PowerShell equivalent
/// and are meant to run unchanged.
fn pass_through(name: &str, args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let mut parts = vec![name.to_string()];
    for arg in args {
        parts.push(translate_word(arg, ctx));
    }
    TranslatedCommand::new(parts.join(" "))
}
