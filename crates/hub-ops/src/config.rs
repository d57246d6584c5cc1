use serde::de::DeserializeOwned;

/// Loads a config struct from environment variables with the given prefix.
///
/// Every script loads only the config sections it actually needs, so a
/// missing `OPENROUTER_API_KEY`, for example, doesn't prevent posting
/// to Telegram.
pub(crate) fn from_env_or_panic<T: DeserializeOwned>(prefix: &str) -> T {
    envy::prefixed(prefix).from_env().unwrap_or_else(|err| {
        panic!(
            "BUG: Couldn't load config from environment for {}: {:#?}",
            std::any::type_name::<T>(),
            err
        );
    })
}
