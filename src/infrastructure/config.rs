use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_INI: &str = "looker.ini";

/// Connection settings for one instance, read from its `[section]` of the
/// ini file. Section names are matched case-insensitively.
#[derive(Debug, Deserialize, Clone)]
pub struct InstanceSettings {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_api_version() -> String {
    "3.1".to_string()
}

fn default_verify_ssl() -> bool {
    true
}

fn default_timeout() -> u64 {
    120
}

/// Load the `env` section of the ini file at `path`.
///
/// `LOOKER_<ENV>__<KEY>` environment variables override values from the
/// file, e.g. `LOOKER_PROD__CLIENT_SECRET`.
pub fn load_instance_settings(path: &Path, env: &str) -> anyhow::Result<InstanceSettings> {
    load_with_environment(path, env, config::Environment::with_prefix("LOOKER"))
}

fn load_with_environment(
    path: &Path,
    env: &str,
    environment: config::Environment,
) -> anyhow::Result<InstanceSettings> {
    // Values stay strings; serde converts timeout/verify_ssl.
    let builder = config::Config::builder()
        .add_source(config::File::new(&path.to_string_lossy(), config::FileFormat::Ini))
        .add_source(environment.prefix_separator("_").separator("__"));

    instance_settings(builder, env)
        .map_err(|e| anyhow::anyhow!("{} (reading [{}] from {})", e, env, path.display()))
}

/// Sections match `env` regardless of case. Environment overrides always
/// land in the lower-case section, so that one is applied last.
fn instance_settings(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env: &str,
) -> anyhow::Result<InstanceSettings> {
    let root: HashMap<String, config::Value> = builder.build()?.try_deserialize()?;
    let wanted = env.to_lowercase();

    let mut sections: Vec<(String, config::Value)> = root
        .into_iter()
        .filter(|(name, _)| name.to_lowercase() == wanted)
        .collect();
    if sections.is_empty() {
        anyhow::bail!("no [{}] section", env);
    }
    sections.sort_by_key(|(name, _)| *name == wanted);

    let mut merged = config::Config::builder();
    for (_, section) in sections {
        for (key, value) in section.into_table()? {
            merged = merged.set_override(key, value)?;
        }
    }
    Ok(merged.build()?.try_deserialize::<InstanceSettings>()?)
}
