use clap::{Command, Arg};

#[macro_use]
extern crate log;
extern crate env_logger;
extern crate ureq;

mod commands {
  pub(crate) mod context;
  pub(crate) mod user;
}

mod models {
  pub(crate) mod runs;
  pub(crate) mod users;
}

mod api;

mod config {
    pub(crate) mod api;
    pub(crate) mod config;
}

mod utils {
    pub(crate) mod json;
    pub(crate) mod timestamp;
}

mod error;

#[cfg(test)]
mod fixtures;

fn cli() -> Command {
    Command::new("platform")
        .version("0.1.0")
        .about("Command line client for platform resources")
        .arg_required_else_help(true)
        .arg(
            Arg::new("context")
                .required(false)
                .help("Sets the context to use (e.g., development, staging, production)")
                .long("context")
                .short('c')
        )
        .subcommand(
            commands::context::command_config(),
        )
        .subcommand(
            Command::new("user")
                .about("Inspect platform users")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .flatten_help(true)
                .subcommand(
                    commands::user::list::command_config(),
                )
        )
}

fn main() {
    env_logger::init();

    let matches = cli().get_matches();
    let context = matches.get_one::<String>("context")
        .map(|s| s.as_str())
        .unwrap_or("");

    let config = match config::config::load_config(context) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    debug!("using context {} ({})", config.name, config.get_api_url());

    match matches.subcommand() {
        Some(("context", sub_matches)) => {
            commands::context::execute(
                sub_matches,
                config,
            );
        }
        Some(("user", sub_matches)) => {
            match sub_matches.subcommand() {
                Some(("list", sub_matches)) => {
                    commands::user::list::execute(
                        sub_matches,
                        config
                    );
                }
                other => {
                    warn!("unknown user command {:?}", other.map(|(name, _)| name));
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_cli_parses_user_list() {
        let matches = cli().try_get_matches_from(["platform", "-c", "staging", "user", "list", "--count", "3"]).unwrap();

        assert_eq!(matches.get_one::<String>("context").map(String::as_str), Some("staging"));

        let (name, user_matches) = matches.subcommand().unwrap();
        assert_eq!(name, "user");

        let (name, list_matches) = user_matches.subcommand().unwrap();
        assert_eq!(name, "list");
        assert_eq!(list_matches.get_one::<usize>("count"), Some(&3));
    }
}
