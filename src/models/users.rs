use chrono::TimeZone;
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use crate::error::ClientError;
use crate::models::runs::{RunRef, RunStatus};
use crate::utils::json::lookup_string;
use crate::utils::timestamp::{format_timestamp_for_cli, parse_timestamp};

/// Placeholder for identity fields the API did not send.
pub(crate) const SENTINEL: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum UserStatus {
    Defined,
    Created,
    #[default]
    Unknown,
}

impl UserStatus {
    /// Lenient lookup used when reading API payloads: anything unrecognized
    /// is `Unknown`.
    pub(crate) fn from_raw(raw: &str) -> UserStatus {
        raw.parse().unwrap_or_else(|err| {
            debug!("{}", err);
            UserStatus::Unknown
        })
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined => write!(f, "DEFINED"),
            Self::Created => write!(f, "CREATED"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "DEFINED" => Ok(Self::Defined),
            "CREATED" => Ok(Self::Created),
            "UNKNOWN" => Ok(Self::Unknown),
            other => Err(format!("Unknown user status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct User {
    pub(crate) name: String,
    pub(crate) uid: String,
    pub(crate) state: UserStatus,
    pub(crate) creation_timestamp: String,
    pub(crate) runs: Vec<RunRef>,
}

/// What `user list` prints for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct UserRow {
    pub(crate) name: String,
    pub(crate) created: String,
    pub(crate) date_of_last_submitted_job: Option<String>,
    pub(crate) running_jobs: usize,
    pub(crate) queued_jobs: usize,
}

impl User {
    /// Build a user from a raw `users` resource. Never fails: missing or
    /// malformed parts fall back to `SENTINEL` and `UserStatus::Unknown`.
    pub(crate) fn from_k8s_response(object: Option<&Value>) -> User {
        let object = object.unwrap_or(&Value::Null);

        let state = lookup_string(object, &["spec", "state"])
            .filter(|raw| !raw.is_empty())
            .map(|raw| UserStatus::from_raw(&raw))
            .unwrap_or_default();

        User {
            name: lookup_string(object, &["metadata", "name"]).unwrap_or_else(|| SENTINEL.to_string()),
            uid: lookup_string(object, &["spec", "uid"]).unwrap_or_else(|| SENTINEL.to_string()),
            state,
            creation_timestamp: lookup_string(object, &["metadata", "creationTimestamp"])
                .unwrap_or_else(|| SENTINEL.to_string()),
            runs: vec![],
        }
    }

    pub(crate) fn with_runs(mut self, runs: Vec<RunRef>) -> User {
        self.runs = runs;
        self
    }

    pub(crate) fn running_jobs_count(&self) -> usize {
        self.count_runs_in(RunStatus::Running)
    }

    pub(crate) fn queued_jobs_count(&self) -> usize {
        self.count_runs_in(RunStatus::Queued)
    }

    fn count_runs_in(&self, status: RunStatus) -> usize {
        self.runs.iter().filter(|run| run.state == Some(status)).count()
    }

    /// Creation timestamp of the newest run, as sent by the API.
    ///
    /// Every run timestamp must parse. When several runs share the newest
    /// instant, the last one in `runs` is returned.
    pub(crate) fn last_submitted_job_timestamp(&self) -> Result<Option<&str>, ClientError> {
        let mut newest: Option<(chrono::DateTime<chrono::Utc>, &RunRef)> = None;

        for run in &self.runs {
            let created_at = parse_timestamp(&run.creation_timestamp)?;

            match newest {
                Some((current, _)) if created_at < current => {}
                _ => newest = Some((created_at, run)),
            }
        }

        Ok(newest.map(|(_, run)| run.creation_timestamp.as_str()))
    }

    pub(crate) fn cli_representation<Tz>(&self, tz: &Tz) -> Result<UserRow, ClientError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let last_submitted = self.last_submitted_job_timestamp()?;

        Ok(UserRow {
            name: self.name.clone(),
            created: format_timestamp_for_cli(Some(self.creation_timestamp.as_str()), tz)
                .unwrap_or_else(|| SENTINEL.to_string()),
            date_of_last_submitted_job: format_timestamp_for_cli(last_submitted, tz),
            running_jobs: self.running_jobs_count(),
            queued_jobs: self.queued_jobs_count(),
        })
    }
}

/// Build one `User` per raw object and hand each the runs living in its
/// namespace. Runs whose namespace matches no user are dropped, and neither a
/// nameless user nor a run without a namespace takes part in the matching.
pub(crate) fn associate_runs(users: &[Value], runs: Vec<RunRef>) -> Vec<User> {
    let mut by_namespace: HashMap<String, Vec<RunRef>> = HashMap::new();

    for run in runs {
        if run.namespace == SENTINEL {
            debug!("run {} has no namespace, skipping", run.name);
            continue;
        }

        by_namespace.entry(run.namespace.clone()).or_default().push(run);
    }

    let mut seen: HashSet<String> = HashSet::new();

    let users: Vec<User> = users
        .iter()
        .map(|object| {
            let user = User::from_k8s_response(Some(object));

            if user.name == SENTINEL {
                debug!("user with uid {} has no name, no runs attached", user.uid);
                return user;
            }

            if !seen.insert(user.name.clone()) {
                warn!("user {} is listed more than once, its runs go to the first entry", user.name);
                return user;
            }

            let runs = by_namespace.remove(&user.name).unwrap_or_default();
            user.with_runs(runs)
        })
        .collect();

    for (namespace, orphans) in &by_namespace {
        let names: Vec<&str> = orphans.iter().map(|run| run.name.as_str()).collect();
        debug!("runs {:?} in namespace {} have no matching user", names, namespace);
    }

    users
}
