// Core configuration types
mod accessors;
mod core;
mod loader;

pub use self::core::{
    default_max_recommendations, default_min_quality, DisplayConfig, SmelldashConfig,
    ValidateConfig,
};
pub use accessors::{
    get_config, max_recommendations, min_quality_threshold, ENV_MAX_RECOMMENDATIONS,
    ENV_MIN_QUALITY,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};

/// Default contents written by `smelldash init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# smelldash configuration

[display]
# terminal, json or markdown
format = "terminal"
# auto, always or never
color = "auto"
max_recommendations = 5
ranked = false

[validate]
min_quality = 70
"#;
