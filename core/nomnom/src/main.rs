mod cli;

use std::path::PathBuf;
use std::process;

use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::domain::HomeDir;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use nomnom::domain::{NomCommand, Restaurant, Tab};
use nomnom::ports::inbound::RunNomCommand;
use nomnom::usecase::RestaurantCard;
use nomnom::wiring::{wire_nomnom, App, WireOptions};

/// NomCommand をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl RunNomCommand for Runner {
    fn run(&mut self, cmd: NomCommand) -> Result<i32, Error> {
        let command_name = cmd.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = self.dispatch(cmd);

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, e.to_string()).layer("cli").kind("error"));
        }
        result
    }
}

impl Runner {
    fn dispatch(&mut self, cmd: NomCommand) -> Result<i32, Error> {
        let app = &mut self.app.app;
        match cmd {
            NomCommand::Help => {
                print_help();
                Ok(0)
            }
            NomCommand::Search { query } => {
                if query.trim().is_empty() {
                    app.navigate(Tab::Home);
                    println!("Trending near you");
                } else {
                    app.focus_search();
                    app.set_query(query.as_str());
                }
                let cards = app.results();
                if cards.is_empty() {
                    println!("No places match \"{}\".", query.trim());
                }
                for card in &cards {
                    print_card(card);
                }
                Ok(0)
            }
            NomCommand::Show { id } => {
                if let Err(e) = app.open_details(&id) {
                    eprintln!("{}", e);
                    return Ok(0);
                }
                let Some(details) = app.details() else {
                    return Ok(0);
                };
                print_restaurant(details.restaurant, details.bookmarked);
                println!();
                println!("Menu");
                for item in &details.restaurant.menu {
                    println!("  {:<28} {:>5}", item.name, item.price);
                }
                println!();
                println!("Reviews");
                if details.reviews.is_empty() {
                    println!("  No reviews yet. Be the first!");
                }
                for review in details.reviews {
                    println!(
                        "  {} {} ({})",
                        "*".repeat(review.stars.get() as usize),
                        review.author,
                        review.created_at.format("%Y-%m-%d")
                    );
                    println!("    {}", review.text);
                }
                if !details.can_review {
                    println!();
                    println!("Log in to post a review: nomnom login <name> <email>");
                }
                Ok(0)
            }
            NomCommand::Bookmark { id } => {
                let saved = app.toggle_bookmark(&id);
                let label = app
                    .catalog()
                    .get(&id)
                    .map_or_else(|| id.to_string(), |r| r.name.clone());
                if saved {
                    println!("Saved {}", label);
                } else {
                    println!("Removed {}", label);
                }
                Ok(0)
            }
            NomCommand::Bookmarks => {
                let saved = app.bookmarked_restaurants();
                if saved.is_empty() {
                    println!("No saved places yet.");
                }
                for restaurant in saved {
                    print_restaurant(restaurant, true);
                }
                Ok(0)
            }
            NomCommand::Review { id, stars, text } => {
                let review = app
                    .submit_review(&id, stars, &text)
                    .map_err(|e| Error::invalid_argument(e.to_string()))?;
                println!(
                    "Review posted for {} ({} stars) by {}",
                    id,
                    review.stars,
                    review.author
                );
                Ok(0)
            }
            NomCommand::Login { name, email } => {
                let session = app.login(&name, &email);
                println!("Logged in as {} <{}>", session.name, session.email);
                Ok(0)
            }
            NomCommand::Logout => {
                match app.logout() {
                    Some(session) => println!("Logged out {}", session.name),
                    None => println!("Not logged in."),
                }
                Ok(0)
            }
            NomCommand::Whoami => {
                match app.current_session() {
                    Some(session) => println!("{} <{}>", session.name, session.email),
                    None => println!("Not logged in."),
                }
                println!("storage: {}", self.app.dirs.storage_dir().display());
                Ok(0)
            }
        }
    }
}

fn print_card(card: &RestaurantCard<'_>) {
    print_restaurant(card.restaurant, card.bookmarked);
}

fn print_restaurant(r: &Restaurant, bookmarked: bool) {
    let mark = if bookmarked { "[saved]" } else { "" };
    println!(
        "{:<4} {} {} {:.1} ({}) {} · {} · {}",
        r.id,
        r.name,
        mark,
        r.rating,
        r.review_count,
        r.area,
        r.cuisine.join(", "),
        r.price
    );
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("nomnom: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let opts = WireOptions {
        home_dir: config.home_dir.as_deref().map(|d| HomeDir::from(PathBuf::from(d))),
        catalog_path: config.catalog.as_deref().map(PathBuf::from),
    };
    let cmd = config_to_command(config)?;
    if cmd == NomCommand::Help {
        print_help();
        return Ok(0);
    }
    let app = wire_nomnom(&opts)?;
    let mut runner = Runner { app };
    runner.run(cmd)
}

fn print_usage() {
    eprintln!("Usage: nomnom [options] <command> [args...]");
}

fn print_help() {
    println!("Usage: nomnom [options] <command> [args...]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -d, --home-dir <directory>    Use this directory for config, storage and logs");
    println!("      --catalog <file>          Load restaurants from a JSON catalog file");
    println!("      --generate <shell>        Generate shell completion script");
    println!("Commands:");
    println!("  search [query...]             List places matching name, area or cuisine (all if empty)");
    println!("  show <id>                     Show menu, details and reviews");
    println!("  bookmark <id>                 Save or unsave a place");
    println!("  bookmarks                     List saved places");
    println!("  review <id> -s <1-5> <text>   Post a review (requires login)");
    println!("  login <name> <email>          Log in");
    println!("  logout                        Log out");
    println!("  whoami                        Show the logged-in user");
    println!("Environment:");
    println!("  NOMNOM_HOME                   Base directory (config/, data/, state/ underneath)");
}
