//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Loadveil Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[resource]
url = "https://birmgrand.top/get"
# timeout_secs = 12       # 1-120

[connectivity]
# probe_enabled = true
# probe_interval_secs = 5 # 1-300
# probe_timeout_ms = 2000 # 100-30000

[window]
# title = "Loadveil"
# width = 1280            # 200-7680
# height = 800            # 200-4320
# transparent = false
# devtools = false

[logging]
# level = "INFO"          # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
