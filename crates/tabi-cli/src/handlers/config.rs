use anyhow::{Context, Result};
use tabi_core::Config;

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::ViewMode;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, init: bool) -> Result<()> {
    let config_path = ctx.config_path();

    if init {
        if config_path.exists() {
            tracing::warn!(path = %config_path.display(), "config already exists, leaving it untouched");
        } else {
            Config::default()
                .save_to(&config_path)
                .with_context(|| format!("Failed to write {}", config_path.display()))?;
            tracing::info!(path = %config_path.display(), "wrote default config");
        }
    }

    let result = presenters::present_config(
        ctx.data_dir(),
        &config_path,
        ctx.config(),
        &ctx.source().to_string(),
    );
    HandlerContext::from_execution(ctx, ViewMode::default()).render(result)
}
