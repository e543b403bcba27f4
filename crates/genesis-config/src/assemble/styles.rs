use serde_json::json;

use crate::assemble::{Context, VENDOR_DIR_PATTERN};
use crate::build::{BuildConfig, ExtractTextOptions, FilePattern, LoaderStep, Plugin, Rule};

pub const STYLE_PATTERN: &str = r"\.(sass|scss)$";

/// Extracted stylesheets are named after their bundle.
const STYLESHEET_FILENAME: &str = "[name].css";

/// Sass rule plus the extract-text plugin.
///
/// Development keeps styles inlined in the script bundle through
/// `style-loader`; every other environment extracts them into a stylesheet.
pub fn style_rule(config: BuildConfig, ctx: &Context<'_>) -> BuildConfig {
    let includes = ctx
        .settings
        .in_project_src("styles")
        .to_string_lossy()
        .into_owned();

    let head = if ctx.flags.dev {
        LoaderStep::new("style-loader")
    } else {
        LoaderStep::with_options(
            "extract-text-loader",
            json!({ "filename": STYLESHEET_FILENAME, "fallback": "style-loader" }),
        )
    };

    let rule = Rule::new(FilePattern::literal(STYLE_PATTERN))
        .exclude(FilePattern::literal(VENDOR_DIR_PATTERN))
        .step(head)
        .step(LoaderStep::with_options(
            "css-loader",
            json!({ "sourceMap": true }),
        ))
        .step(LoaderStep::with_options(
            "sass-loader",
            json!({ "sourceMap": true, "includePaths": [includes] }),
        ));

    config
        .with_rule(rule)
        .with_plugin(Plugin::ExtractText(ExtractTextOptions {
            filename: STYLESHEET_FILENAME.to_string(),
            disable: ctx.flags.dev,
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::base;
    use crate::environment::Environment;
    use crate::settings::ProjectSettings;

    fn styled(env: Environment) -> BuildConfig {
        let settings = ProjectSettings::defaults_for("/app").with_env(env);
        let ctx = Context::new(&settings);
        style_rule(base(&ctx), &ctx)
    }

    #[test]
    fn development_inlines_styles() {
        let config = styled(Environment::Development);
        let rule = config.rule_for("src/styles/core.scss").expect("style rule");

        assert_eq!(
            rule.loaders().collect::<Vec<_>>(),
            vec!["style-loader", "css-loader", "sass-loader"]
        );
        assert_eq!(
            config.plugin(Plugin::EXTRACT_TEXT),
            Some(&Plugin::ExtractText(ExtractTextOptions {
                filename: "[name].css".into(),
                disable: true,
            }))
        );
    }

    #[test]
    fn other_environments_extract_styles() {
        for env in [Environment::Staging, Environment::Test, Environment::Production] {
            let config = styled(env);
            let rule = config.rule_for("src/app.sass").expect("style rule");

            assert_eq!(rule.steps[0].loader, "extract-text-loader", "{env}");
            assert_eq!(
                rule.steps[0].options,
                Some(json!({ "filename": "[name].css", "fallback": "style-loader" }))
            );
            match config.plugin(Plugin::EXTRACT_TEXT) {
                Some(Plugin::ExtractText(options)) => assert!(!options.disable),
                other => panic!("expected extract-text plugin, got {other:?}"),
            }
        }
    }

    #[test]
    fn sass_searches_styles_directory() {
        let config = styled(Environment::Development);
        let rule = config.rule_for("src/app.scss").expect("style rule");
        let sass = rule.steps.last().and_then(|step| step.options.clone()).unwrap();

        assert_eq!(sass["includePaths"], json!(["/app/src/styles"]));
        assert!(config.rule_for("node_modules/bootstrap/main.scss").is_none());
    }
}
