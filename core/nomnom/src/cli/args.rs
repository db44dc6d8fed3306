use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use nomnom::domain::{NomCommand, RestaurantId};

/// CLI から受け取った生の設定（コマンドは文字列のまま保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -d / --home-dir: NOMNOM_HOME の代わりに使うディレクトリ
    pub home_dir: Option<String>,
    /// --catalog: JSON カタログ（config.json の catalog_path より優先）
    pub catalog: Option<String>,
    /// サブコマンド名（None の場合は search と同じ全件一覧）
    pub command_name: Option<String>,
    pub command_args: Vec<String>,
    /// review -s / --stars
    pub stars: Option<u8>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("home-dir")
                .short('d')
                .long("home-dir")
                .value_name("directory")
                .help("Use this directory for config, storage and logs (instead of NOMNOM_HOME / XDG dirs)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("catalog")
                .long("catalog")
                .value_name("file")
                .help("Load restaurants from a JSON catalog file instead of the built-in list")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

/// サブコマンド（-h はグローバル引数で受ける）
fn sub(name: &'static str) -> clap::Command {
    clap::Command::new(name).disable_help_flag(true)
}

fn id_arg() -> clap::Arg {
    clap::Arg::new("id")
        .value_name("restaurant-id")
        .required(true)
        .num_args(1)
}

pub(crate) fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new("nomnom")
            .about("Find honest food spots: search, bookmark and review restaurants")
            .subcommand_required(false)
            .disable_help_subcommand(true)
            .subcommand(sub("help").about("Display this help message"))
            .subcommand(
                sub("search")
                    .about("List restaurants matching a name, area or cuisine")
                    .arg(clap::Arg::new("query").num_args(0..).value_name("query")),
            )
            .subcommand(
                sub("show")
                    .about("Show menu, details and recent reviews of a restaurant")
                    .arg(id_arg()),
            )
            .subcommand(
                sub("bookmark")
                    .about("Save or unsave a restaurant")
                    .arg(id_arg()),
            )
            .subcommand(sub("bookmarks").about("List saved restaurants"))
            .subcommand(
                sub("review")
                    .about("Post a review (requires login)")
                    .arg(id_arg())
                    .arg(
                        clap::Arg::new("stars")
                            .short('s')
                            .long("stars")
                            .value_name("1-5")
                            .help("Star rating")
                            .value_parser(value_parser!(u8))
                            .required(true)
                            .num_args(1),
                    )
                    .arg(
                        clap::Arg::new("text")
                            .value_name("text")
                            .required(true)
                            .num_args(1..),
                    ),
            )
            .subcommand(
                sub("login")
                    .about("Log in with a display name and email")
                    .arg(clap::Arg::new("name").required(true).num_args(1))
                    .arg(clap::Arg::new("email").required(true).num_args(1)),
            )
            .subcommand(sub("logout").about("Forget the logged-in user"))
            .subcommand(sub("whoami").about("Show the logged-in user")),
    )
}

fn strings(m: &clap::ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|i| i.cloned().collect())
        .unwrap_or_default()
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help") || matches.subcommand_matches("help").is_some();
    let home_dir = matches.get_one::<String>("home-dir").cloned();
    let catalog = matches.get_one::<String>("catalog").cloned();

    let (command_name, command_args, stars) = match matches.subcommand() {
        None | Some(("help", _)) => (None, Vec::new(), None),
        Some(("search", m)) => (Some("search"), strings(m, "query"), None),
        Some(("show", m)) => (Some("show"), strings(m, "id"), None),
        Some(("bookmark", m)) => (Some("bookmark"), strings(m, "id"), None),
        Some(("review", m)) => {
            let mut args = strings(m, "id");
            args.extend(strings(m, "text"));
            (Some("review"), args, m.get_one::<u8>("stars").copied())
        }
        Some(("login", m)) => {
            let mut args = strings(m, "name");
            args.extend(strings(m, "email"));
            (Some("login"), args, None)
        }
        Some((name, _)) => (Some(name), Vec::new(), None),
    };

    Config {
        help,
        home_dir,
        catalog,
        command_name: command_name.map(str::to_string),
        command_args,
        stars,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "nomnom", &mut std::io::stdout());
}

/// Config を NomCommand に変換する
pub fn config_to_command(config: Config) -> Result<NomCommand, Error> {
    if config.help {
        return Ok(NomCommand::Help);
    }

    let mut args = config.command_args.into_iter();
    let mut next = |what: &str| {
        args.next()
            .ok_or_else(|| Error::invalid_argument(format!("missing {}", what)))
    };

    let cmd = match config.command_name.as_deref() {
        None => NomCommand::Search {
            query: String::new(),
        },
        Some("search") => {
            let words: Vec<String> = std::iter::from_fn(|| next("query").ok()).collect();
            NomCommand::Search {
                query: words.join(" "),
            }
        }
        Some("show") => NomCommand::Show {
            id: RestaurantId::new(next("restaurant id")?),
        },
        Some("bookmark") => NomCommand::Bookmark {
            id: RestaurantId::new(next("restaurant id")?),
        },
        Some("bookmarks") => NomCommand::Bookmarks,
        Some("review") => {
            let id = RestaurantId::new(next("restaurant id")?);
            let words: Vec<String> = std::iter::from_fn(|| next("text").ok()).collect();
            let stars = config
                .stars
                .ok_or_else(|| Error::invalid_argument("missing --stars"))?;
            NomCommand::Review {
                id,
                stars,
                text: words.join(" "),
            }
        }
        Some("login") => NomCommand::Login {
            name: next("name")?,
            email: next("email")?,
        },
        Some("logout") => NomCommand::Logout,
        Some("whoami") => NomCommand::Whoami,
        Some(other) => {
            return Err(Error::invalid_argument(format!("unknown command: {}", other)))
        }
    };
    Ok(cmd)
}
