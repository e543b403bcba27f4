use indexmap::IndexMap;

use crate::assemble::Context;
use crate::build::{
    BuildConfig, Devtool, FilePattern, HASHED_FILENAME, LoaderStep, MAIN_BUNDLE, ModuleRules,
    Output, Performance, Resolve, Rule, STABLE_FILENAME,
};

/// Static assets copied through unchanged.
pub const ASSET_PATTERN: &str = r"\.(eot|gif|jpg|jpeg|png|svg|ttf|woff|woff2)$";

/// Third-party code never goes through the source transforms.
pub const VENDOR_DIR_PATTERN: &str = "node_modules";

/// Entry, output, resolution and the asset rule. Every other step builds on this.
pub fn base(ctx: &Context<'_>) -> BuildConfig {
    let settings = ctx.settings;

    let filename = if ctx.flags.dev {
        STABLE_FILENAME
    } else {
        HASHED_FILENAME
    };

    let mut entry = IndexMap::new();
    entry.insert(
        MAIN_BUNDLE.to_string(),
        vec![
            settings
                .in_project_src(&settings.main)
                .to_string_lossy()
                .into_owned(),
        ],
    );

    BuildConfig {
        entry,
        devtool: Devtool::from(settings.sourcemaps),
        performance: Performance { hints: false },
        output: Output {
            path: settings.in_project(&settings.out_dir),
            filename: filename.to_string(),
            public_path: settings.public_path.clone(),
        },
        resolve: Resolve {
            modules: vec![
                settings
                    .in_project(&settings.src_dir)
                    .to_string_lossy()
                    .into_owned(),
                VENDOR_DIR_PATTERN.to_string(),
            ],
            extensions: ["*", ".js", ".json"].map(String::from).to_vec(),
        },
        externals: settings.externals.clone(),
        module: ModuleRules {
            rules: vec![
                Rule::new(FilePattern::literal(ASSET_PATTERN)).step(LoaderStep::new("file-loader")),
            ],
        },
        plugins: Vec::new(),
    }
}
