use petreg::database::Database;

#[test]
fn enabled_features_follow_cargo_features() {
    assert_eq!(petreg::features::is_enabled("pets"), cfg!(feature = "pets"));
    assert_eq!(petreg::features::is_enabled("server"), cfg!(feature = "server"));
    assert!(!petreg::features::is_enabled("billing"));
}

#[tokio::test]
async fn init_builds_one_slice_per_enabled_feature() {
    let db = Database::builder().url("sqlite::memory:").init().await.unwrap();

    let slices = petreg::init(&db);

    assert_eq!(slices.len(), usize::from(cfg!(feature = "pets")));
}
