use petreg_kernel::domain::config::ApiConfig;
use petreg_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use petreg_kernel::server::state::{ApiState, ApiStateError};
use std::any::Any;

#[derive(Debug)]
struct Counter(u32);

impl FeatureSlice for Counter {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Unregistered;

impl FeatureSlice for Unregistered {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

async fn database() -> petreg_database::Database {
    petreg_database::Database::builder().url("sqlite::memory:").init().await.unwrap()
}

#[tokio::test]
async fn registered_slices_are_retrievable() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .db(database().await)
        .register_slices([InitializedSlice::new(Counter(7))])
        .build()
        .unwrap();

    assert_eq!(state.slice::<Counter>().unwrap().0, 7);
    assert!(state.slice_names().any(|name| name.ends_with("Counter")));

    let err = state.slice::<Unregistered>().unwrap_err();
    assert!(matches!(err, ApiStateError::MissingSlice { .. }));
    assert!(err.to_string().contains("Unregistered"));
}

#[tokio::test]
async fn state_exposes_config_and_database() {
    let mut config = ApiConfig::default();
    config.server.port = 8181;

    let state = ApiState::builder().config(config).db(database().await).build().unwrap();
    let copy = state.clone();

    assert_eq!(copy.config().server.port, 8181);
    let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&**copy.database()).await.unwrap();
    assert_eq!(one, 1);
}

#[tokio::test]
async fn same_slice_twice_is_rejected() {
    let err = ApiState::builder()
        .config(ApiConfig::default())
        .db(database().await)
        .register_slice(InitializedSlice::new(Counter(1)))
        .register_slice(InitializedSlice::new(Counter(2)))
        .build()
        .unwrap_err();

    assert!(matches!(err, ApiStateError::Validation { .. }));
    assert!(err.to_string().contains("duplicate slices"));
}

#[tokio::test]
async fn missing_parts_fail_validation() {
    let err = ApiState::builder().db(database().await).build().unwrap_err();
    assert!(err.to_string().contains("ApiConfig not provided"));

    let err = ApiState::builder().config(ApiConfig::default()).build().unwrap_err();
    assert!(matches!(err, ApiStateError::Validation { .. }));
    assert!(err.to_string().contains("Database not provided"));
}
