use serde_json::json;

use crate::assemble::{Context, VENDOR_DIR_PATTERN};
use crate::build::{BuildConfig, FilePattern, LoaderStep, Rule};

pub const SCRIPT_PATTERN: &str = r"\.js$";

/// Script rule: a single babel pass over application code.
///
/// Babel runs plugins before presets, and presets last to first.
pub fn script_rule(config: BuildConfig, _ctx: &Context<'_>) -> BuildConfig {
    let babel = LoaderStep::with_options(
        "babel-loader",
        json!({
            "cacheDirectory": true,
            "plugins": [
                "babel-plugin-transform-class-properties",
                "babel-plugin-transform-runtime"
            ],
            "presets": [
                "babel-preset-react",
                "babel-preset-stage-1",
                ["babel-preset-env", {
                    "targets": {
                        "browsers": ["last 2 versions"],
                        "uglify": true
                    }
                }]
            ]
        }),
    );

    config.with_rule(
        Rule::new(FilePattern::literal(SCRIPT_PATTERN))
            .exclude(FilePattern::literal(VENDOR_DIR_PATTERN))
            .step(babel),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::base;
    use crate::settings::ProjectSettings;

    #[test]
    fn transforms_application_scripts_only() {
        let settings = ProjectSettings::defaults_for("/app");
        let ctx = Context::new(&settings);
        let config = script_rule(base(&ctx), &ctx);

        let rule = config.rule_for("/app/src/routes/index.js").expect("script rule");
        assert_eq!(rule.loaders().collect::<Vec<_>>(), vec!["babel-loader"]);
        assert!(config.rule_for("/app/node_modules/react/index.js").is_none());
    }

    #[test]
    fn targets_last_two_browser_versions() {
        let settings = ProjectSettings::defaults_for("/app");
        let ctx = Context::new(&settings);
        let config = script_rule(base(&ctx), &ctx);

        let options = config.module.rules[1].steps[0].options.clone().unwrap();
        assert_eq!(
            options["presets"][2][1]["targets"],
            json!({ "browsers": ["last 2 versions"], "uglify": true })
        );
        assert_eq!(options["plugins"].as_array().map(Vec::len), Some(2));
        assert_eq!(options["cacheDirectory"], json!(true));
    }
}
