//! Store tests - saving and reading back games through the recorder

use bowling_tracker::adapter::{
    JsonFileStore, MemoryStore, Recorder, ScoreStore, StaticIdentity, StoreConfig, SubmitError,
};
use bowling_tracker::core::GameSession;
use bowling_tracker::sheet;
use tempfile::TempDir;

fn finished(pins: &str) -> GameSession {
    let mut session = GameSession::new();
    while !session.is_complete() {
        session.submit_next(pins).unwrap();
    }
    session
}

#[test]
fn test_file_recorder_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig {
        store_dir: Some(dir.path().to_path_buf()),
        user_id: Some("alice".to_string()),
    };

    let first = {
        let mut recorder = Recorder::from_config(&config).unwrap();
        let mut session = finished("4");
        let id = recorder.submit(&mut session).unwrap();
        assert!(!session.is_complete());
        id
    };

    // A fresh recorder over the same directory sees the saved game.
    let mut recorder = Recorder::from_config(&config).unwrap();
    let second = recorder.submit(&mut finished("10")).unwrap();

    let history = recorder.history().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second);
    assert_eq!(history[0].record.game_number, 2);
    assert_eq!(history[1].id, first);
    assert_eq!(history[1].record.total_score, 80);

    let stats = recorder.stats().unwrap();
    assert_eq!(stats.total_games, 2);
    assert_eq!(stats.average, 190);

    let trend = recorder.trend().unwrap();
    let totals: Vec<u16> = trend.iter().map(|p| p.total_score).collect();
    assert_eq!(totals, vec![80, 300]);
    let chart = sheet::render_trend(&trend);
    assert!(chart.lines().next().unwrap().starts_with("game   1   80"));
}

#[test]
fn test_logged_out_recorder_cannot_save() {
    let mut recorder = Recorder::from_config(&StoreConfig::default()).unwrap();
    let mut session = finished("1");
    assert!(matches!(
        recorder.submit(&mut session),
        Err(SubmitError::Unauthenticated)
    ));
    assert!(session.is_complete());
}

#[test]
fn test_users_only_see_their_own_games() {
    let dir = TempDir::new().unwrap();
    let for_user = |user: &str| StoreConfig {
        store_dir: Some(dir.path().to_path_buf()),
        user_id: Some(user.to_string()),
    };

    let mut alice = Recorder::from_config(&for_user("alice")).unwrap();
    let mut bob = Recorder::from_config(&for_user("bob")).unwrap();
    alice.submit(&mut finished("2")).unwrap();
    bob.submit(&mut finished("3")).unwrap();
    bob.submit(&mut finished("3")).unwrap();

    assert_eq!(alice.history().unwrap().len(), 1);
    let bobs = bob.history().unwrap();
    assert_eq!(bobs.len(), 2);
    assert!(bobs.iter().all(|g| g.record.user_id == "bob"));
    assert_eq!(bobs[0].record.game_number, 2);
}

#[tokio::test]
async fn test_stores_agree_on_listing_order() {
    let dir = TempDir::new().unwrap();
    let files = JsonFileStore::open(dir.path()).await.unwrap();
    let memory = MemoryStore::new();

    for n in 1..=3u32 {
        let record = finished("5").to_game_record("carol", n).unwrap();
        files.save(record.clone()).await.unwrap();
        memory.save(record).await.unwrap();
    }

    let numbers = |games: Vec<bowling_tracker::adapter::StoredGame>| {
        games
            .iter()
            .map(|g| g.record.game_number)
            .collect::<Vec<_>>()
    };
    assert_eq!(numbers(files.list_by_user("carol").await.unwrap()), vec![3, 2, 1]);
    assert_eq!(numbers(memory.list_by_user("carol").await.unwrap()), vec![3, 2, 1]);
}

#[test]
fn test_recorder_over_custom_store() {
    let mut recorder = Recorder::new(MemoryStore::new(), StaticIdentity::logged_in("dave")).unwrap();
    let id = recorder.submit(&mut finished("5")).unwrap();
    let game = recorder.get(id).unwrap().unwrap();
    assert_eq!(game.record.total_score, 150);
    assert_eq!(game.record.user_id, "dave");
}
