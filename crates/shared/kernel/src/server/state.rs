use fxhash::FxHashMap;
use petreg_database::Database;
use petreg_domain::config::ApiConfig;
use petreg_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::TypeId;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, warn};

#[petreg_derive::petreg_error]
pub enum ApiStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("State missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// State handed to every handler: configuration, the storage handle and the feature slices.
///
/// Every part is reference counted, so cloning per request is cheap.
#[derive(Debug, Clone)]
pub struct ApiState {
    config: ApiConfig,
    database: Database,
    slices: Arc<FxHashMap<TypeId, InitializedSlice>>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.database
    }

    /// The registered slice of type `T`.
    ///
    /// # Errors
    /// [`ApiStateError::MissingSlice`] naming `T` when it was never registered.
    pub fn slice<T: FeatureSlice>(&self) -> Result<&T, ApiStateError> {
        self.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::downcast_ref::<T>).ok_or_else(
            || ApiStateError::MissingSlice { message: std::any::type_name::<T>().into(), context: None },
        )
    }

    /// Names of the registered slices (for diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.values().map(|slice| slice.name)
    }
}

#[derive(Debug, Default)]
#[must_use]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
    database: Option<Database>,
    slices: FxHashMap<TypeId, InitializedSlice>,
    duplicates: Vec<&'static str>,
}

impl ApiStateBuilder {
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn db(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    /// Adds a slice. Registering the same slice type twice fails at [`build`](Self::build).
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        debug!(slice = slice.name, "Registering feature slice");
        let name = slice.name;
        if self.slices.insert(slice.id, slice).is_some() {
            warn!(slice = name, "Feature slice registered twice");
            self.duplicates.push(name);
        }
        self
    }

    pub fn register_slices<I>(self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        slices.into_iter().fold(self, Self::register_slice)
    }

    /// # Errors
    /// Returns [`ApiStateError::Validation`] when the config or the database is missing, or a
    /// slice type was registered more than once.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let Some(config) = self.config else {
            return Err(ApiStateError::Validation { message: "ApiConfig not provided".into(), context: None });
        };
        let Some(database) = self.database else {
            return Err(ApiStateError::Validation { message: "Database not provided".into(), context: None });
        };
        if !self.duplicates.is_empty() {
            return Err(ApiStateError::Validation {
                message: format!("duplicate slices: {}", self.duplicates.join(", ")).into(),
                context: None,
            });
        }

        Ok(ApiState { config, database, slices: Arc::new(self.slices) })
    }
}
