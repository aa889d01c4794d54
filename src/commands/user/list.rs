use clap::{Arg, ArgMatches, Command};
use cli_table::{print_stdout, Table, WithTitle};
use crate::api::client::PlatformClient;
use crate::config::config::{load_auth_config, Config};
use crate::error::ClientError;
use crate::models::users::{associate_runs, User, UserRow};

pub(crate) fn command_config() -> Command {
    Command::new("list")
        .about("List users with a summary of their jobs")
        .arg(
            Arg::new("count")
                .long("count")
                .help("Only show the last N rows")
                .value_parser(clap::value_parser!(usize))
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output format")
                .value_parser(["table", "json", "yaml"])
                .default_value("table")
        )
}

#[derive(Table)]
struct UserTableItem {
    #[table(title = "Name")]
    name: String,
    #[table(title = "Creation date")]
    created: String,
    #[table(title = "Date of last submitted job")]
    date_of_last_submitted_job: String,
    #[table(title = "Number of running jobs")]
    running_jobs: usize,
    #[table(title = "Number of queued jobs")]
    queued_jobs: usize,
}

impl From<UserRow> for UserTableItem {
    fn from(row: UserRow) -> Self {
        UserTableItem {
            name: row.name,
            created: row.created,
            date_of_last_submitted_job: row.date_of_last_submitted_job.unwrap_or_default(),
            running_jobs: row.running_jobs,
            queued_jobs: row.queued_jobs,
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
    let auth_config = load_auth_config(&configuration.name)?;
    let client = PlatformClient::new(configuration, auth_config.token)?;

    let raw_users = client.list_users()?;
    let runs = client.list_runs()?;
    let users = associate_runs(&raw_users, runs);

    let rows = build_rows(&users, args.get_one::<usize>("count").copied())?;
    let output = args.get_one::<String>("output").map(String::as_str).unwrap_or("table");

    match output {
        "json" => println!("{}", serde_json::to_string_pretty(&rows)?),
        "yaml" => print!("{}", serde_yaml::to_string(&rows)?),
        _ => {
            let items: Vec<UserTableItem> = rows.into_iter().map(UserTableItem::from).collect();
            print_stdout(items.with_title())?;
        }
    }

    Ok(())
}

/// Project users into rows using the local timezone, keeping only the last
/// `count` when given.
pub(crate) fn build_rows(users: &[User], count: Option<usize>) -> Result<Vec<UserRow>, ClientError> {
    let skip = match count {
        Some(count) => users.len().saturating_sub(count),
        None => 0,
    };

    users
        .iter()
        .skip(skip)
        .map(|user| {
            debug!("user {} (uid {}, state {}) has {} runs", user.name, user.uid, user.state, user.runs.len());
            user.cli_representation(&chrono::Local)
        })
        .collect()
}
