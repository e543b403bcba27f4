use crate::assemble::Context;
use crate::build::{BuildConfig, HtmlMinifyOptions, HtmlPluginOptions, HtmlTemplate, Plugin};

/// HTML page with the built scripts injected.
pub fn html_template(config: BuildConfig, ctx: &Context<'_>) -> BuildConfig {
    let template = HtmlTemplate::from(ctx.settings.resolved_template());

    config.with_plugin(Plugin::Html(HtmlPluginOptions {
        title: ctx.settings.title.clone(),
        inject: true,
        template,
        minify: HtmlMinifyOptions {
            collapse_whitespace: true,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::base;
    use crate::settings::ProjectSettings;
    use std::path::PathBuf;

    fn html_options(settings: &ProjectSettings) -> HtmlPluginOptions {
        let ctx = Context::new(settings);
        match html_template(base(&ctx), &ctx).plugins.pop() {
            Some(Plugin::Html(options)) => options,
            other => panic!("expected html plugin, got {other:?}"),
        }
    }

    #[test]
    fn uses_configured_template() {
        let options = html_options(&ProjectSettings::defaults_for("/app"));
        assert_eq!(options.title, "Genesis Application");
        assert!(options.inject);
        assert_eq!(
            options.template,
            HtmlTemplate::File(PathBuf::from("/app/src/index.html"))
        );
    }

    #[test]
    fn missing_template_falls_back_to_builtin() {
        let settings = ProjectSettings::defaults_for("/app").without_template();
        let options = html_options(&settings);
        assert_eq!(options.template, HtmlTemplate::Builtin);

        let value = serde_json::to_value(&options).unwrap();
        assert!(value.get("template").is_none());
    }
}
