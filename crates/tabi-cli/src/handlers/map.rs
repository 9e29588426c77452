use anyhow::{Result, bail};

use super::{HandlerContext, day_index};
use crate::context::ExecutionContext;
use crate::presentation::ViewMode;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, day: usize, event: Option<usize>) -> Result<()> {
    let itinerary = ctx.load_itinerary()?;
    let index = day_index(day, itinerary.len())?;
    let Some(selected) = itinerary.day(index) else {
        bail!("Day {} is out of range (1-{})", day, itinerary.len());
    };

    let event = match event {
        Some(n) if n == 0 || n > selected.events.len() => bail!(
            "Event {} is out of range for {} (1-{})",
            n,
            selected.label,
            selected.events.len()
        ),
        Some(n) => Some(n - 1),
        None => None,
    };

    HandlerContext::from_execution(ctx, ViewMode::default())
        .render(presenters::present_map_links(selected, event))
}
