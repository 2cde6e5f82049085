use std::io::Cursor;

use sparse_life::life106;
use sparse_life::seed::{self, Pattern, SeedError};
use sparse_life::simulation::{self, SimulationConfig};
use sparse_life::{Engine, Generation};

fn split_blocks(text: &str) -> Vec<Generation> {
    text.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| life106::parse(block).expect("driver output parses"))
        .collect()
}

#[test]
fn glider_run_prints_ten_generations_and_translates() {
    let glider = Pattern::Glider.generation();
    let mut out = Vec::new();
    let summary =
        simulation::write_life106(glider.clone(), &SimulationConfig::default(), &mut out).unwrap();
    assert_eq!(summary.generations, 10);

    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("\n\n"));
    let blocks = split_blocks(&text);
    assert_eq!(blocks.len(), 10);
    assert_eq!(Some(blocks[3].clone()), glider.translate(1, 1));
    assert_eq!(Some(blocks[7].clone()), glider.translate(2, 2));
}

#[test]
fn prompted_seed_flows_through_driver() {
    let input = "5\n0 1\n1 2\n2 0\n2 1\n2 2\n";
    let mut shown = Vec::new();
    let seed = seed::prompt(Cursor::new(input), &mut shown, seed::DEFAULT_MAX_SEED_CELLS).unwrap();
    assert_eq!(seed, Pattern::Glider.generation());

    let config = SimulationConfig::default().generations(4).emit_seed(true);
    let mut out = Vec::new();
    simulation::write_life106(seed.clone(), &config, &mut out).unwrap();
    let blocks = split_blocks(&String::from_utf8(out).unwrap());
    assert_eq!(blocks.len(), 5);
    assert_eq!(blocks[0], seed);
    assert_eq!(Some(blocks[4].clone()), seed.translate(1, 1));
}

#[test]
fn file_seed_round_trips_through_disk() {
    let path = std::env::temp_dir().join(format!("sparse-life-seed-{}.lif", std::process::id()));
    let seed = Pattern::BeaconFar.generation();
    std::fs::write(&path, life106::to_string(&seed)).unwrap();

    let loaded = seed::load_file(&path, Some(20));
    let too_small = seed::load_file(&path, Some(3));
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.unwrap(), seed);
    assert!(matches!(too_small, Err(SeedError::TooManyCells { count: 6, max: 3 })));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("sparse-life-definitely-missing.lif");
    assert!(matches!(seed::load_file(&path, None), Err(SeedError::Io(_))));
}

#[test]
fn preset_oscillators_return_after_their_period() {
    let mut engine = Engine::new();
    for (pattern, period) in [
        (Pattern::Blinker, 2),
        (Pattern::Beacon, 2),
        (Pattern::BeaconFar, 2),
        (Pattern::Toad, 2),
        (Pattern::Pulsar, 3),
    ] {
        let seed = pattern.generation();
        assert_ne!(engine.advance(&seed), seed, "{pattern:?} should change");
        assert_eq!(engine.step_n(&seed, period), seed, "{pattern:?} period {period}");
    }
}

#[test]
fn preset_spaceships_translate() {
    let mut engine = Engine::new();

    let lwss = Pattern::LightweightSpaceship.generation();
    assert_eq!(Some(engine.step_n(&lwss, 4)), lwss.translate(2, 0));

    let far = Pattern::GliderFar.generation();
    assert_eq!(Some(engine.step_n(&far, 4)), far.translate(1, 1));
}

#[test]
fn sample_preset_keeps_only_the_glider() {
    let sample = Pattern::Sample.generation();
    let after = Engine::new().step_n(&sample, 4);
    assert_eq!(Some(after), Pattern::Glider.generation().translate(1, 1));
}
