//! Tournament runs and results export

mod common;

use common::seeded_engine;
use noughts::{
    Strategy,
    pipeline::{CORNER_HEADER, PairingRow, ResultsTable, Tournament, TournamentConfig},
};

fn small_tournament() -> ResultsTable {
    let tournament = Tournament::new(TournamentConfig {
        training_games: 20,
        evaluation_games: 30,
        warmup_games: Some(10),
        strategies: vec![
            Strategy::Random,
            Strategy::BlockRandom,
            Strategy::ReinforcedLearning1,
            Strategy::ReinforcedLearning2,
        ],
        ..TournamentConfig::default()
    })
    .unwrap();
    tournament.run(&mut seeded_engine(11)).unwrap()
}

#[test]
fn test_every_pairing_counts_all_evaluation_games() {
    let table = small_tournament();
    assert_eq!(table.rows().len(), 16);
    for row in table.rows() {
        assert_eq!(row.player1_wins + row.draws + row.player2_wins, 30);
    }
}

#[test]
fn test_rendered_table_has_both_axes() {
    let rendered = small_tournament().render();
    assert!(rendered.contains(CORNER_HEADER));
    for name in ["Random", "BlockRandom", "ReinforcedLearning1", "ReinforcedLearning2"] {
        assert!(rendered.contains(name));
    }
    assert!(rendered.lines().any(|line| line.contains(" / ")));
}

#[test]
fn test_block_random_beats_random_more_often_than_not() {
    let table = small_tournament();
    let record = table.lookup(Strategy::BlockRandom, Strategy::Random).unwrap();
    assert!(record.player1_wins > record.player2_wins, "{record}");
}

#[test]
fn test_same_seed_gives_the_same_table() {
    assert_eq!(small_tournament(), small_tournament());
}

#[test]
fn test_export_csv() {
    let table = small_tournament();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    table.export(&path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<PairingRow> = reader.deserialize().map(|row| row.unwrap()).collect();
    assert_eq!(rows.len(), 16);
    assert_eq!(rows[1].player1, "Random");
    assert_eq!(rows[1].player2, "BlockRandom");
    let record = table.get(0, 1);
    assert_eq!(rows[1].player1_wins, record.player1_wins);
    assert_eq!(rows[1].draws, record.draws);
}

#[test]
fn test_export_json() {
    let table = small_tournament();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");
    table.export(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let loaded: ResultsTable = serde_json::from_str(&text).unwrap();
    assert_eq!(loaded, table);
}
