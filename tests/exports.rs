#![forbid(unsafe_code)]
use league::{io, League, Player};
use tempfile::tempdir;

fn ranked() -> League {
    League::from(vec![Player::new("Cleo", 10), Player::new("Chris", 33)]).sorted()
}

#[cfg(feature = "csv")]
#[test]
fn export_csv_ranks_players() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("league.csv");

    io::export_league_csv(&path, &ranked()).unwrap();

    let csv = std::fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(csv, @r"
    rank,name,wins
    1,Chris,33
    2,Cleo,10
    ");
}

#[test]
fn export_json_is_store_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("league.json");

    io::export_league_json(&path, &ranked()).unwrap();

    let data = std::fs::read(&path).unwrap();
    let back: League = serde_json::from_slice(&data).unwrap();
    assert_eq!(back, ranked());
    assert!(String::from_utf8(data).unwrap().contains("\"Wins\": 33"));
}
