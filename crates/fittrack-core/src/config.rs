/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field names map to upper-case
/// env vars (`database_url` -> `DATABASE_URL`) and `Vec<String>` fields are
/// read as comma-separated lists.
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// Load from the process environment.
    ///
    /// # Panics
    ///
    /// Panics if any required env var is missing or cannot be deserialized.
    fn from_env() -> Self {
        match Self::try_from_env() {
            Ok(config) => config,
            Err(e) => panic!("failed to load config from environment: {e}"),
        }
    }

    fn try_from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Load from explicit key/value pairs instead of the process environment.
    fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(pairs)
    }
}
