use formicarium::simulation::ecosystem::{Ecosystem, Outcome};
use formicarium::simulation::params::Params;
use formicarium::simulation::stats::ColonySummary;
use tracing::{info, warn};

const DEFAULT_DAYS: u64 = 200;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let params = match args.next() {
        Some(path) => Params::from_json_file(&path)?,
        None => Params::default(),
    };
    let days = match args.next() {
        Some(days) => days.parse()?,
        None => DEFAULT_DAYS,
    };

    let mut ecosystem = Ecosystem::new(&params)?;
    info!(
        width = params.width,
        height = params.height,
        red = ecosystem.red.count(),
        black = ecosystem.black.count(),
        days,
        "starting simulation"
    );

    ecosystem.run(days);

    let stats = ecosystem.get_stats();
    log_colony("red", &stats.red);
    log_colony("black", &stats.black);
    if let Some(creatures) = stats.creatures {
        info!(
            peaceful = creatures.peaceful,
            predators = creatures.predators,
            "surviving creatures"
        );
    }

    match ecosystem.outcome() {
        Outcome::Red => info!(day = stats.day, "red ants win"),
        Outcome::Black => info!(day = stats.day, "black ants win"),
        Outcome::Draw => warn!(day = stats.day, "no colony came out ahead"),
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

fn log_colony(name: &str, summary: &ColonySummary) {
    info!(
        colony = name,
        survivors = summary.count,
        male = summary.genders.male,
        female = summary.genders.female,
        health = summary.averages.health,
        damage = summary.averages.damage,
        speed = summary.averages.speed,
        fertility = summary.averages.fertility,
        awareness = summary.averages.awareness,
        "final colony state"
    );
}
