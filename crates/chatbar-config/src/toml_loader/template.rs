//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Chatbar Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[sidebar]
# Persisted sidebar width in pixels. Updated when the sidebar is dragged
# or toggled. Anything below sidebar.bounds.minimum means collapsed.
width = 300

[sidebar.bounds]
# narrow = 100           # collapsed width
# minimum = 230          # narrower drags collapse to `narrow`
# default = 300          # width restored when expanding
# maximum = 500          # drags never grow past this

[sidebar.gesture]
# throttle_ms = 20           # minimum gap between drag updates
# click_threshold_ms = 300   # shorter presses toggle instead of resizing

[device]
# mobile_max_width = 600     # viewports this wide or narrower are mobile

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
