use anyhow::Result;

use super::HandlerContext;
use crate::args::ViewModeArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, view: &ViewModeArgs) -> Result<()> {
    let itinerary = ctx.load_itinerary()?;
    tracing::debug!(days = itinerary.len(), "listing days");

    HandlerContext::from_execution(ctx, view.resolve()).render(presenters::present_days(&itinerary))
}
