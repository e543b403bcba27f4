use crate::assemble::Context;
use crate::build::{BuildConfig, CompressOptions, LoaderOptions, Plugin, UglifyOptions};

/// Minification for production and staging builds.
///
/// The minifier only emits source maps when the build has them enabled.
pub fn optimize(config: BuildConfig, ctx: &Context<'_>) -> BuildConfig {
    if !ctx.env().is_optimized() {
        return config;
    }

    let source_map = config.devtool.is_enabled();
    config.with_plugins([
        Plugin::LoaderOptions(LoaderOptions {
            minimize: true,
            debug: false,
        }),
        Plugin::Uglify(UglifyOptions {
            source_map,
            comments: false,
            compress: CompressOptions::aggressive(),
        }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::base;
    use crate::environment::Environment;
    use crate::settings::ProjectSettings;

    fn optimized(settings: &ProjectSettings) -> BuildConfig {
        let ctx = Context::new(settings);
        optimize(base(&ctx), &ctx)
    }

    #[test]
    fn minifies_production_and_staging() {
        for env in [Environment::Production, Environment::Staging] {
            let config = optimized(&ProjectSettings::defaults_for("/app").with_env(env));
            assert_eq!(
                config.plugin_names(),
                vec![Plugin::LOADER_OPTIONS, Plugin::UGLIFY],
                "{env}"
            );
            match config.plugin(Plugin::UGLIFY) {
                Some(Plugin::Uglify(options)) => {
                    assert!(!options.comments);
                    assert!(options.source_map);
                    assert!(options.compress.dead_code);
                    assert!(!options.compress.warnings);
                }
                other => panic!("expected uglify plugin, got {other:?}"),
            }
        }
    }

    #[test]
    fn leaves_development_and_test_alone() {
        for env in [Environment::Development, Environment::Test] {
            let config = optimized(&ProjectSettings::defaults_for("/app").with_env(env));
            assert!(config.plugins.is_empty(), "{env}");
        }
    }

    #[test]
    fn minifier_source_maps_follow_devtool() {
        let mut settings = ProjectSettings::defaults_for("/app").with_env(Environment::Production);
        settings.sourcemaps = false;
        let config = optimized(&settings);

        match config.plugin(Plugin::UGLIFY) {
            Some(Plugin::Uglify(options)) => assert!(!options.source_map),
            other => panic!("expected uglify plugin, got {other:?}"),
        }
    }
}
