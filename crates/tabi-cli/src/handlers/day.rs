use anyhow::{Context, Result};
use tabi_core::Navigator;

use super::{HandlerContext, day_index};
use crate::args::ViewModeArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, number: usize, view: &ViewModeArgs) -> Result<()> {
    let itinerary = ctx.load_itinerary()?;
    let index = day_index(number, itinerary.len())?;

    let mut nav = Navigator::for_itinerary(&itinerary);
    nav.select_day(index);

    let result = presenters::present_day(&nav, &itinerary)
        .with_context(|| format!("Day {} could not be shown", number))?;
    HandlerContext::from_execution(ctx, view.resolve()).render(result)
}
