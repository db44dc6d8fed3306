//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "nomnom";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self, home_override: Option<&HomeDir>) -> Result<Dirs, Error> {
        if let Some(home) = home_override {
            return Ok(Dirs::under(home));
        }
        resolve_dirs_with(non_empty_var)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// 環境変数の参照関数を受け取ってディレクトリを解決する（テストでは HashMap を渡す）
pub fn resolve_dirs_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Dirs, Error> {
    if let Some(home) = lookup("NOMNOM_HOME") {
        return Ok(Dirs::under(&HomeDir::new(home)));
    }

    let home = lookup("HOME").map(PathBuf::from);
    let xdg = |var: &str, fallback: &[&str]| -> Result<PathBuf, Error> {
        let base = match lookup(var) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let mut path = home
                    .clone()
                    .ok_or_else(|| Error::env("HOME is not set"))?;
                for part in fallback {
                    path.push(part);
                }
                path
            }
        };
        Ok(base.join(APP_DIR))
    };

    Ok(Dirs {
        config_dir: xdg("XDG_CONFIG_HOME", &[".config"])?,
        data_dir: xdg("XDG_DATA_HOME", &[".local", "share"])?,
        state_dir: xdg("XDG_STATE_HOME", &[".local", "state"])?,
    })
}
