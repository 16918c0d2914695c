use engine::{play_round, Formation, MatchFixture, MatchSquad, PlayerRatings, SquadPlayer};
use env_logger::Env;
use log::info;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let fixtures = vec![
        MatchFixture::new(
            demo_squad(1, "Northbridge United", "4-4-2", 13.0)?,
            demo_squad(2, "Harbour City", "4-3-3", 12.0)?,
        ),
        MatchFixture::new(
            demo_squad(3, "Redhill Rovers", "3-5-2", 11.0)?,
            demo_squad(4, "Westgate Athletic", "5-3-2", 14.0)?,
        ),
    ];

    info!("match day: {} fixtures", fixtures.len());

    for report in play_round(fixtures) {
        let report = report?;

        info!(
            "final: {} - {} (possession {}s / {}s)",
            report.home_score(),
            report.away_score(),
            report.statistics.teams[&report.home_team_id].possession_time,
            report.statistics.teams[&report.away_team_id].possession_time,
        );
    }

    Ok(())
}

fn demo_squad(
    team_id: u32,
    name: &str,
    formation_key: &str,
    base_rating: f32,
) -> color_eyre::Result<MatchSquad> {
    let players = (0..11u32)
        .map(|i| SquadPlayer {
            id: team_id * 100 + i,
            name: format!("{name} #{}", i + 1),
            // Small spread around the base so squads are not uniform.
            ratings: PlayerRatings::uniform(base_rating + (i % 3) as f32 - 1.0),
        })
        .collect();

    Ok(MatchSquad::new(
        team_id,
        String::from(name),
        Formation::from_key(formation_key)?,
        players,
    ))
}
