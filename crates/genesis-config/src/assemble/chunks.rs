use tracing::debug;

use crate::assemble::Context;
use crate::build::{
    BuildConfig, CommonsChunkOptions, MANIFEST_BUNDLE, Plugin, VENDOR_BUNDLE,
};

/// Split the bundler runtime into `manifest`, and vendor packages into
/// `vendor` when there are any. Test builds are left as a single bundle.
pub fn commons_chunks(config: BuildConfig, ctx: &Context<'_>) -> BuildConfig {
    if ctx.flags.test {
        return config;
    }

    let vendors = &ctx.settings.vendors;
    let mut names = vec![MANIFEST_BUNDLE.to_string()];
    let config = if vendors.is_empty() {
        config
    } else {
        debug!(count = vendors.len(), "splitting vendor bundle");
        names.insert(0, VENDOR_BUNDLE.to_string());
        config.with_entry(VENDOR_BUNDLE, vendors.clone())
    };

    config.with_plugin(Plugin::CommonsChunk(CommonsChunkOptions { names }))
}
