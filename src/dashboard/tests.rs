//! Unit tests for the dashboard derivations

use super::*;
use crate::bdl::types::{Game, SeasonAverages, Team};
use crate::cli::types::{GameId, Season, TeamId};

fn stats(id: u64, pts: f64, reb: f64, fg_pct: f64, min: &str) -> SeasonAverages {
    SeasonAverages {
        player_id: PlayerId::new(id),
        season: Season::new(2023),
        games_played: 70,
        min: min.to_string(),
        pts,
        reb,
        ast: 4.0,
        stl: 1.5,
        blk: 0.6,
        fg_pct,
        fg3_pct: 0.36,
        ft_pct: 0.8,
    }
}

fn player(id: u64, name: &str, position: &str, stats: Option<SeasonAverages>) -> PlayerWithStats {
    PlayerWithStats {
        id: PlayerId::new(id),
        name: name.to_string(),
        position: position.to_string(),
        stats,
    }
}

fn roster() -> Vec<PlayerWithStats> {
    vec![
        player(1, "LaMelo Ball", "G", Some(stats(1, 23.9, 5.1, 0.433, "32:18"))),
        player(2, "Miles Bridges", "F", Some(stats(2, 21.0, 7.3, 0.462, "37:01"))),
        player(3, "Mark Williams", "C", Some(stats(3, 12.7, 9.7, 0.658, "26:40"))),
        player(4, "Nick Smith Jr.", "G-F", Some(stats(4, 6.1, 1.5, 0.39, "14:05"))),
        player(5, "Seth Curry", "G", Some(stats(5, 6.1, 1.2, 0.401, "17:59"))),
        player(6, "Grant Williams", "F", Some(stats(6, 10.5, 4.5, 0.43, "25:30"))),
        player(7, "Injured Guy", "C", None),
    ]
}

fn game(id: u64, status: &str) -> Game {
    let team = Team {
        id: TeamId::HORNETS,
        conference: "East".to_string(),
        division: "Southeast".to_string(),
        city: "Charlotte".to_string(),
        name: "Hornets".to_string(),
        full_name: "Charlotte Hornets".to_string(),
        abbreviation: "CHA".to_string(),
    };
    Game {
        id: GameId::new(id),
        date: "2024-01-10".to_string(),
        season: Season::new(2023),
        status: status.to_string(),
        period: 4,
        time: None,
        postseason: false,
        home_team_score: 101,
        visitor_team_score: 99,
        home_team: team.clone(),
        visitor_team: team,
    }
}

#[cfg(test)]
mod leaderboard_tests {
    use super::*;

    #[test]
    fn test_top_five_by_points() {
        let rows = leaderboard(&roster(), LeaderStat::Pts);

        assert_eq!(rows.len(), 5);
        let ids: Vec<u64> = rows.iter().map(|r| r.id.as_u64()).collect();
        // Equal 6.1 scorers keep roster order
        assert_eq!(ids, vec![1, 2, 3, 6, 4]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].display, "23.9");
    }

    #[test]
    fn test_minutes_compare_whole_minutes() {
        let rows = leaderboard(&roster(), LeaderStat::Min);
        assert_eq!(rows[0].name, "Miles Bridges");
        assert_eq!(rows[0].value, 37.0);
        assert_eq!(rows[0].display, "37:01");
    }

    #[test]
    fn test_field_goal_display_is_percent() {
        let rows = leaderboard(&roster(), LeaderStat::FgPct);
        assert_eq!(rows[0].name, "Mark Williams");
        assert_eq!(rows[0].display, "65.8%");
    }

    #[test]
    fn test_players_without_stats_are_excluded() {
        let players = vec![player(9, "No Stats", "G", None)];
        assert!(leaderboard(&players, LeaderStat::Reb).is_empty());
    }
}

#[cfg(test)]
mod chart_tests {
    use super::*;

    #[test]
    fn test_points_distribution_colors_by_position() {
        let chart = points_distribution(&roster());

        assert_eq!(chart.labels.len(), 6);
        assert_eq!(chart.labels[0], "Ball");
        assert_eq!(chart.labels[2], "Williams");
        let series = &chart.datasets[0];
        assert_eq!(series.data[0], 23.9);
        assert_eq!(series.colors[0], charts::BLUE);
        assert_eq!(series.colors[1], charts::GREEN);
        assert_eq!(series.colors[2], charts::ORANGE);
        // Hybrid "G-F" is not a plain guard
        let smith = chart.labels.iter().position(|l| l == "Smith").unwrap();
        assert_eq!(series.colors[smith], charts::GRAY);
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("LaMelo Ball"), "Ball");
        assert_eq!(short_name("Nick Smith Jr."), "Smith");
        assert_eq!(short_name("Nene"), "Nene");
        assert_eq!(short_name(""), "");
    }

    #[test]
    fn test_shooting_efficiency_top_eight_in_percent() {
        let mut players = roster();
        for id in 10..15 {
            players.push(player(id, &format!("Extra Shooter{id}"), "F", Some(stats(id, 5.0, 2.0, 0.3, "10:00"))));
        }
        let chart = shooting_efficiency(&players);

        assert_eq!(chart.labels.len(), 8);
        assert_eq!(chart.labels[0], "Williams");
        let fg = &chart.datasets[0].data;
        assert!((fg[0] - 65.8).abs() < 1e-9);
        assert!(fg.windows(2).all(|w| w[0] >= w[1]));
        assert!((chart.datasets[1].data[0] - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_shooting_efficiency_skips_non_shooters() {
        let mut blank = stats(20, 0.0, 0.0, 0.0, "0:00");
        blank.fg3_pct = 0.0;
        let players = vec![player(20, "Bench Warmer", "C", Some(blank))];
        assert!(shooting_efficiency(&players).labels.is_empty());
    }
}

#[cfg(test)]
mod radar_tests {
    use super::*;

    #[test]
    fn test_radar_normalises_against_maxima() {
        let chart = performance_radar(&roster(), &[PlayerId::new(1)]);

        assert_eq!(chart.labels, vec!["Points", "Rebounds", "Assists", "Steals", "Blocks", "FG%"]);
        assert_eq!(chart.datasets.len(), 1);
        let data = &chart.datasets[0].data;
        assert!((data[0] - 23.9 / 30.0 * 100.0).abs() < 1e-9);
        assert!((data[2] - 40.0).abs() < 1e-9);
        assert!((data[3] - 50.0).abs() < 1e-9);
        assert!((data[5] - 0.433 / 0.6 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_radar_caps_at_three_players() {
        let picks: Vec<PlayerId> = [1, 1, 2, 3, 6].into_iter().map(PlayerId::new).collect();
        let chart = performance_radar(&roster(), &picks);

        let names: Vec<&str> = chart.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(names, vec!["LaMelo Ball", "Miles Bridges", "Mark Williams"]);
        assert_eq!(chart.datasets[2].colors, vec![charts::ORANGE.to_string()]);
    }

    #[test]
    fn test_radar_skips_unknown_and_statless_players() {
        let picks = [PlayerId::new(7), PlayerId::new(99)];
        assert!(performance_radar(&roster(), &picks).datasets.is_empty());
    }
}

#[cfg(test)]
mod game_filter_tests {
    use super::*;

    #[test]
    fn test_status_filter_is_case_insensitive_substring() {
        let games = vec![game(1, "Final"), game(2, "3rd Qtr"), game(3, "Final/OT")];

        let finals = filter_games_by_status(games.clone(), "final");
        assert_eq!(finals.iter().map(|g| g.id.as_u64()).collect::<Vec<_>>(), vec![1, 3]);

        assert_eq!(filter_games_by_status(games.clone(), "QTR").len(), 1);
        assert_eq!(filter_games_by_status(games, "  ").len(), 3);
    }
}

#[cfg(test)]
mod dashboard_charts_tests {
    use super::*;

    #[test]
    fn test_build_serializes_camel_case_keys() {
        let charts = DashboardCharts::build(&roster(), LeaderStat::Reb, &[PlayerId::new(3)]);
        assert_eq!(charts.leaderboard[0].name, "Mark Williams");

        let json = serde_json::to_value(&charts).unwrap();
        assert_eq!(json["stat"], "reb");
        assert!(json.get("pointsDistribution").is_some());
        assert!(json.get("shootingEfficiency").is_some());
        assert_eq!(json["performanceRadar"]["datasets"].as_array().unwrap().len(), 1);
    }
}
