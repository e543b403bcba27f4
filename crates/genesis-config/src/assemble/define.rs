use indexmap::IndexMap;
use serde_json::{Value, json};
use tracing::warn;

use crate::assemble::Context;
use crate::build::{BuildConfig, DefineOptions, Plugin};
use crate::environment::EnvFlags;

/// Object carrying `NODE_ENV` for libraries that branch on it.
pub const PROCESS_ENV: &str = "process.env";

/// Whether `name` is one of the constants the assembler always defines.
pub(crate) fn is_reserved(name: &str) -> bool {
    name == PROCESS_ENV || EnvFlags::reserved_names().contains(&name)
}

/// Define plugin: `process.env.NODE_ENV`, the environment flags, then user globals.
///
/// Reserved names keep their computed values. Validated settings never reach
/// this point with a collision.
pub fn define_globals(config: BuildConfig, ctx: &Context<'_>) -> BuildConfig {
    let mut constants: IndexMap<String, Value> = IndexMap::new();
    constants.insert(
        PROCESS_ENV.to_string(),
        json!({ "NODE_ENV": format!("\"{}\"", ctx.env()) }),
    );
    for (name, on) in ctx.flags.entries() {
        constants.insert(name.to_string(), Value::Bool(on));
    }

    for (name, value) in &ctx.settings.globals {
        if is_reserved(name) {
            warn!(global = %name, "ignoring user global that shadows a reserved constant");
            continue;
        }
        constants.insert(name.clone(), value.clone());
    }

    config.with_plugin(Plugin::Define(DefineOptions(constants)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::base;
    use crate::environment::Environment;
    use crate::settings::ProjectSettings;

    fn defines(settings: &ProjectSettings) -> DefineOptions {
        let ctx = Context::new(settings);
        match define_globals(base(&ctx), &ctx).plugins.pop() {
            Some(Plugin::Define(options)) => options,
            other => panic!("expected define plugin, got {other:?}"),
        }
    }

    #[test]
    fn serializes_node_env_and_flags() {
        let settings = ProjectSettings::defaults_for("/app").with_env(Environment::Production);
        let defines = defines(&settings);

        assert_eq!(
            defines.get(PROCESS_ENV),
            Some(&json!({ "NODE_ENV": "\"production\"" }))
        );
        assert_eq!(defines.get("__PROD__"), Some(&json!(true)));
        assert_eq!(defines.get("__DEV__"), Some(&json!(false)));
        assert_eq!(defines.get("__STAGING__"), Some(&json!(false)));
        assert_eq!(defines.get("__TEST__"), Some(&json!(false)));
    }

    #[test]
    fn user_globals_are_kept() {
        let settings = ProjectSettings::defaults_for("/app").with_global("FOO", 1);
        let defines = defines(&settings);

        assert_eq!(defines.get("FOO"), Some(&json!(1)));
        assert_eq!(defines.0.len(), 6);
    }

    #[test]
    fn reserved_names_cannot_be_overridden() {
        let settings = ProjectSettings::defaults_for("/app")
            .with_global("__DEV__", false)
            .with_global(PROCESS_ENV, json!({}));
        let defines = defines(&settings);

        assert_eq!(defines.get("__DEV__"), Some(&json!(true)));
        assert_eq!(
            defines.get(PROCESS_ENV),
            Some(&json!({ "NODE_ENV": "\"development\"" }))
        );
    }
}
