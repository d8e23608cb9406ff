//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Word Lookup Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Word Lookup"
# width = 1024
# height = 700

[channel]
# host = "127.0.0.1"        # must be a loopback address
# port = 5050
# connect_timeout_ms = 1000 # 50-10000
# read_timeout_ms = 5000    # 100-60000
# max_payload_bytes = 4096  # 16-65536

[view]
# min_toolbar_height = 30   # 1-400
# padding = 8               # 0-100
# user_agent = "WordLookup/0.1"
# devtools = false

[sources]
# file = "/path/to/sources.json"

[logging]
# level = "info"            # trace, debug, info, warn, error
"##
    .to_string()
}
