use clap::{Arg, ArgMatches, Command};
use cli_table::{print_stdout, Table, WithTitle};
use crate::config::config::{get_config_dir, load_auth_config, read_contexts, Config};
use crate::error::ClientError;

pub(crate) fn command_config() -> Command {
    Command::new("context")
        .about("Print contexts configuration")
        .arg(
            Arg::new("parameter")
                .required(false)
                .help("show specific parameter")
                .value_parser(["configs", "current-context", "user-token"])
                .default_value("configs")
        )
}

#[derive(Table)]
struct ContextTableItem {
    #[table(title = "Name")]
    name: String,
    #[table(title = "Current")]
    current: String,
    #[table(title = "API")]
    api_url: String,
    #[table(title = "Resources")]
    resources: String,
}

impl From<&Config> for ContextTableItem {
    fn from(config: &Config) -> Self {
        ContextTableItem {
            name: config.name.clone(),
            current: if config.current { "*".to_string() } else { String::new() },
            api_url: config.get_api_url(),
            resources: format!("{}/{}", config.api.group, config.api.version),
        }
    }
}

pub(crate) fn execute(args: &ArgMatches, configuration: Config) {
    if let Err(err) = run(args, &configuration) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &ArgMatches, configuration: &Config) -> Result<(), ClientError> {
    let parameter = args.get_one::<String>("parameter").map(String::as_str).unwrap_or("configs");

    match parameter {
        "current-context" => {
            print_stdout(vec![ContextTableItem::from(configuration)].with_title())?;
        }
        "user-token" => {
            let auth = load_auth_config(&configuration.name)?;
            println!("{}", auth.token);
        }
        _ => {
            let mut configs: Vec<Config> = read_contexts(&get_config_dir())?
                .map(|contexts| contexts.contexts.into_values().collect())
                .unwrap_or_default();
            configs.sort_by(|a, b| a.name.cmp(&b.name));

            let items: Vec<ContextTableItem> = configs.iter().map(ContextTableItem::from).collect();
            print_stdout(items.with_title())?;
        }
    }

    Ok(())
}
