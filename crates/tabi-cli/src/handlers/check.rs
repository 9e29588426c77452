use anyhow::Result;

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::ViewMode;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let itinerary = ctx.load_itinerary()?;
    tracing::info!(
        source = %ctx.source(),
        days = itinerary.len(),
        events = itinerary.event_count(),
        "itinerary loaded"
    );

    let result = presenters::present_check(&ctx.source().to_string(), &itinerary);
    HandlerContext::from_execution(ctx, ViewMode::default()).render(result)
}
