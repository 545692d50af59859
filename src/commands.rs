use crate::cli::{Command, ConfigUpdate};
use ftc_events::config::Config;
use ftc_events::error::AppError;
use ftc_events::{
    EventQuery, FtcClient, LeagueQuery, MatchQuery, RankingQuery, ScheduleQuery, ScoreQuery,
    TeamQuery, TimeRange,
};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Writes a value to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Handles the `list-config` command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles the `config` command.
///
/// Starts from the saved file without environment overrides, applies the
/// requested changes and saves.
pub async fn handle_config_update_command(update: &ConfigUpdate) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_update(&mut config, update);

    config.save().await?;
    println!("Config updated successfully!");

    if let Err(e) = config.validate() {
        println!("Note: configuration is not complete yet: {e}");
    }

    Ok(())
}

fn apply_config_update(config: &mut Config, update: &ConfigUpdate) {
    if let Some(server) = &update.new_server {
        config.server = server.clone();
    }

    if let Some(username) = &update.username {
        config.username = username.clone();
    }

    if let Some(key) = &update.authorization_key {
        config.authorization_key = key.clone();
    }

    if let Some(new_log_path) = &update.new_log_file {
        config.log_file_path = Some(new_log_path.clone());
    } else if update.clear_log_file {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    if let Some(timeout) = update.http_timeout_seconds {
        config.http_timeout_seconds = timeout;
    }

    if let Some(accept) = update.accept_invalid_certs {
        config.accept_invalid_certs = accept;
    }
}

/// Runs one data command against the API and prints the result.
pub async fn handle_api_command(client: &FtcClient, command: &Command) -> Result<(), AppError> {
    info!("Running {command:?} against {}", client.server());

    match command {
        Command::Index => print_json(&client.api_index().await?),
        Command::Season { season } => print_json(&client.season_summary(*season).await?),
        Command::Events {
            season,
            event_code,
            team_number,
        } => {
            let query = EventQuery {
                event_code: event_code.clone(),
                team_number: *team_number,
            };
            print_json(&client.events(*season, &query).await?)
        }
        Command::Teams {
            season,
            team_number,
            event_code,
            state,
            page,
        } => {
            let query = TeamQuery {
                team_number: *team_number,
                event_code: event_code.clone(),
                state: state.clone(),
            };
            match page {
                Some(page) => print_json(&client.team_listing_page(*season, &query, *page).await?),
                None => print_json(&client.teams(*season, &query).await?),
            }
        }
        Command::Matches {
            season,
            event_code,
            tournament_level,
            team_number,
            match_number,
            range,
        } => {
            let query = MatchQuery {
                tournament_level: *tournament_level,
                team_number: *team_number,
                match_number: *match_number,
                range: range.into(),
            };
            print_json(&client.matches(*season, event_code, &query).await?)
        }
        Command::Schedule {
            season,
            event_code,
            tournament_level,
            team_number,
            range,
        } => {
            let query = ScheduleQuery {
                tournament_level: *tournament_level,
                team_number: *team_number,
                range: range.into(),
            };
            print_json(&client.schedule(*season, event_code, &query).await?)
        }
        Command::HybridSchedule {
            season,
            event_code,
            level,
            range,
        } => print_json(
            &client
                .hybrid_schedule(*season, event_code, *level, &TimeRange::from(range))
                .await?,
        ),
        Command::Scores {
            season,
            event_code,
            level,
            team_number,
            match_number,
            range,
        } => {
            let query = ScoreQuery {
                team_number: *team_number,
                match_number: *match_number,
                range: range.into(),
            };
            print_json(&client.scores(*season, event_code, *level, &query).await?)
        }
        Command::Awards {
            season,
            event_code,
            team_number,
        } => match (event_code, team_number) {
            (Some(event_code), team_number) => {
                print_json(&client.event_awards(*season, event_code, *team_number).await?)
            }
            (None, Some(team_number)) => print_json(&client.team_awards(*season, *team_number).await?),
            (None, None) => Err(AppError::config_error(
                "awards needs an event code or --team",
            )),
        },
        Command::AwardList { season } => print_json(&client.award_definitions(*season).await?),
        Command::Rankings {
            season,
            event_code,
            team_number,
            top,
        } => {
            let query = RankingQuery {
                team_number: *team_number,
                top: *top,
            };
            print_json(&client.rankings(*season, event_code, &query).await?)
        }
        Command::Alliances { season, event_code } => {
            print_json(&client.alliances(*season, event_code).await?)
        }
        Command::AllianceSelection { season, event_code } => {
            print_json(&client.alliance_selection(*season, event_code).await?)
        }
        Command::Advancement {
            season,
            event_code,
            exclude_skipped,
        } => print_json(
            &client
                .advancement(*season, event_code, *exclude_skipped)
                .await?,
        ),
        Command::AdvancementSource { season, event_code } => {
            print_json(&client.advancement_source(*season, event_code).await?)
        }
        Command::Leagues {
            season,
            region_code,
            league_code,
        } => {
            let query = LeagueQuery {
                region_code: region_code.clone(),
                league_code: league_code.clone(),
            };
            print_json(&client.leagues(*season, &query).await?)
        }
        Command::LeagueMembers {
            season,
            region_code,
            league_code,
        } => print_json(
            &client
                .league_members(*season, region_code, league_code)
                .await?,
        ),
        Command::LeagueRankings {
            season,
            region_code,
            league_code,
        } => print_json(
            &client
                .league_rankings(*season, region_code, league_code)
                .await?,
        ),
        Command::Config(_) | Command::ListConfig => Err(AppError::config_error(
            "configuration commands do not talk to the API",
        )),
    }
}
