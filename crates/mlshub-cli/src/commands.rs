//! Subcommand parsing and plain-text rendering.

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use mlshub_core::features::{HomeModel, TeamConfirmation, TeamSelection};
use mlshub_core::utils::{format_match_line, format_standings, truncate_string};
use mlshub_core::{AppContainer, Conference, DataError, Repository, Team};

pub const USAGE: &str = "\
Usage: mlshub [COMMAND]

Commands:
  home                 Show the selected team's results, fixtures and standing (default)
  teams [CONFERENCE]   List teams, optionally only Eastern or Western
  select <ID|NAME>     Choose your team and fetch the latest stats
  clear                Forget the selected team
  logo <NAME>          Resolve a team name to its logo asset
  help                 Show this message

Environment:
  MLSHUB_STATS_URL     Override the stats feed host
  RUST_LOG             Log filter (default: warn)";

/// Width of the team name column in listings
const NAME_COLUMN_WIDTH: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Home,
    Teams(Option<Conference>),
    Select(String),
    Clear,
    Logo(String),
    Help,
}

impl Command {
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Home);
        };
        let rest = rest.join(" ");

        match name.as_str() {
            "home" => Ok(Command::Home),
            "teams" if rest.is_empty() => Ok(Command::Teams(None)),
            "teams" => Conference::from_label(&rest)
                .map(|c| Command::Teams(Some(c)))
                .with_context(|| format!("Unknown conference '{}'", rest)),
            "select" if rest.is_empty() => bail!("select needs a team id or name"),
            "select" => Ok(Command::Select(rest)),
            "clear" => Ok(Command::Clear),
            "logo" if rest.is_empty() => bail!("logo needs a team name"),
            "logo" => Ok(Command::Logo(rest)),
            "help" | "--help" | "-h" => Ok(Command::Help),
            other => bail!("Unknown command '{}'", other),
        }
    }
}

pub async fn run(command: Command, container: &AppContainer) -> Result<()> {
    let repository: Arc<dyn Repository> = container.repository.clone();

    match command {
        Command::Home => show_home(container, repository).await,
        Command::Teams(conference) => {
            list_teams(&TeamSelection::new(repository.as_ref()), conference);
            Ok(())
        }
        Command::Select(query) => select_team(container, repository, &query).await,
        Command::Clear => {
            container.settings.clear_selected_team();
            println!("Team selection cleared.");
            Ok(())
        }
        Command::Logo(name) => {
            match repository.logo(&name) {
                Some(logo) => println!("{}", logo),
                None => println!("No team named '{}'", name),
            }
            Ok(())
        }
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}

/// User-facing message for a failure, chosen by error kind.
pub fn describe_error(error: &DataError) -> String {
    match error.kind() {
        "no_data" => "No stats have been published for this team yet.".to_string(),
        "local_data" => format!("The team catalog could not be read: {}", error),
        "network" => match error.status_code() {
            Some(code) => format!("The stats server answered with status {}.", code),
            None => format!("Could not reach the stats server: {}", error),
        },
        _ => match error {
            DataError::Unknown(message) => message.clone(),
            other => other.to_string(),
        },
    }
}

fn list_teams(selection: &TeamSelection, only: Option<Conference>) {
    if selection.is_empty() {
        println!("No teams available.");
        return;
    }

    for conference in Conference::ALL {
        if only.is_some_and(|c| c != conference) {
            continue;
        }
        println!("{} Conference", conference);
        for team in selection.teams(conference) {
            println!(
                "  {:>3}  {:<width$}  {}",
                team.id,
                truncate_string(&team.name, NAME_COLUMN_WIDTH),
                team.stadium,
                width = NAME_COLUMN_WIDTH
            );
        }
        println!();
    }
}

async fn select_team(
    container: &AppContainer,
    repository: Arc<dyn Repository>,
    query: &str,
) -> Result<()> {
    let selection = TeamSelection::new(repository.as_ref());
    let team = selection
        .find(query)
        .cloned()
        .with_context(|| format!("No team matches '{}'", query))?;

    let confirmation = TeamConfirmation::new(container.settings.clone(), repository);
    println!("Selected {} ({})", team.name, team.stadium);

    if let Err(e) = confirmation.select_team(team).await {
        println!("Could not fetch stats yet. {}", describe_error(&e));
    }
    Ok(())
}

async fn show_home(container: &AppContainer, repository: Arc<dyn Repository>) -> Result<()> {
    let Some(team) = container.settings.selected_team() else {
        println!("No team selected. Run `mlshub teams` and `mlshub select <ID|NAME>`.");
        return Ok(());
    };

    let home = HomeModel::new(team, repository);
    home.load_team_stats().await;
    print_home(&home);
    Ok(())
}

fn print_home(home: &HomeModel) {
    let team: &Team = home.team();
    println!("{}  ({} Conference, {})", team.name, team.conference, team.stadium);
    println!();

    if let Some(error) = home.error() {
        println!("{}", describe_error(&error));
        return;
    }

    if let Some(standings) = home.standings() {
        println!("Standing   {}", format_standings(&standings));
    }

    if let Some(last) = home.last_match() {
        println!("Last       {}  [{}]", format_match_line(&last), home.opponent_logo(&last));
    }

    let upcoming = home.upcoming_matches();
    if upcoming.is_empty() {
        println!("Upcoming   none scheduled");
    } else {
        println!("Upcoming");
        for game in &upcoming {
            println!("  {}  [{}]", format_match_line(game), home.opponent_logo(game));
        }
    }
}
