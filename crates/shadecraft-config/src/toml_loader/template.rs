/// The default config file, with every option commented out.
pub fn default_config_toml() -> &'static str {
    r##"# shadecraft configuration
# Only override what you want to change -- missing fields use defaults.

[palette]
# name = "theme"          # used in --color-<name>-<index>
# seed = "#3b82f6"        # hex, rgb(), hsl(), a CSS name or oklch(L C H)
# second_seed = "#8b5cf6" # used when mode = "two"
# count = 9               # 1-20
# mode = "single"         # single, two

[output]
# format = "tailwind"     # tailwind, css, json
# wrap_root = true        # wrap css output in :root { }

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
}
