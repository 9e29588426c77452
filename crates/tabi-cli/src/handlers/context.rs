use anyhow::Result;
use serde::Serialize;

use crate::context::ExecutionContext;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, DisplayOptions, Renderer, ViewMode};
use crate::types::OutputFormat;

/// Format and display options shared by one command's output
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: DisplayOptions,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, options: DisplayOptions) -> Self {
        Self { format, options }
    }

    pub fn from_execution(ctx: &ExecutionContext, mode: ViewMode) -> Self {
        Self::new(ctx.format, DisplayOptions::new(mode, ctx.color_enabled()))
    }

    /// Render a view model using the configured format and view mode
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let renderer = ConsoleRenderer::new(self.format.into(), self.options);
        renderer.render(view_model)
    }
}
