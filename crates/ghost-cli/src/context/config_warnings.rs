use ghost_config::GhostConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &GhostConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &GhostConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.openai.is_configured() && has_single_underscore_key(&env_keys, "KGHOST_OPENAI") {
        warnings.push(
            "OpenAI config appears default while KGHOST_OPENAI* env vars exist. Use double underscores (example: KGHOST_OPENAI__API_KEY)."
                .to_string(),
        );
    }

    if !config.anthropic.is_configured()
        && has_single_underscore_key(&env_keys, "KGHOST_ANTHROPIC")
    {
        warnings.push(
            "Anthropic config appears default while KGHOST_ANTHROPIC* env vars exist. Use double underscores (example: KGHOST_ANTHROPIC__API_KEY)."
                .to_string(),
        );
    }

    if !config.elevenlabs.is_configured()
        && has_single_underscore_key(&env_keys, "KGHOST_ELEVENLABS")
    {
        warnings.push(
            "ElevenLabs config appears incomplete while KGHOST_ELEVENLABS* env vars exist. Use double underscores and set both keys (example: KGHOST_ELEVENLABS__API_KEY, KGHOST_ELEVENLABS__VOICE_ID)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| !rest.starts_with("__"))
    })
}
