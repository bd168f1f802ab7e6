use lifeops_config::ENV_PREFIX;

/// Read by the binary itself, not by the config loader.
const LOG_VAR: &str = "LIFEOPS_LOG";

/// Emit warnings for `LIFEOPS_*` variables that cannot reach a config section.
pub fn warn_unconfigured() {
    for warning in collect_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(ENV_PREFIX) && key != LOG_VAR)
        .filter(|key| !key[ENV_PREFIX.len()..].contains("__"))
        .collect::<Vec<_>>();
    keys.sort();

    keys.into_iter()
        .map(|key| {
            format!(
                "{key} is ignored. Use double underscores between section and field (example: LIFEOPS_GENERAL__DEFAULT_LIMIT)."
            )
        })
        .collect()
}
