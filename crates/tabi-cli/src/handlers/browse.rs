use anyhow::Result;
use is_terminal::IsTerminal;
use tabi_core::{Navigator, Splash};

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::renderers::BrowseApp;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ViewMode, presenters};

pub fn handle(ctx: &ExecutionContext, no_splash: bool, day: Option<usize>) -> Result<()> {
    let itinerary = ctx.load_itinerary()?;
    // An out-of-range day leaves the home list showing
    let start = day.and_then(|number| number.checked_sub(1));

    // Without a terminal there is nothing to drive; print the starting screen instead
    if !std::io::stdout().is_terminal() {
        tracing::info!("stdout is not a terminal, printing the starting screen");
        let mut nav = Navigator::for_itinerary(&itinerary);
        if let Some(index) = start {
            nav.select_day(index);
        }
        let screen = presenters::present_screen(&nav, &itinerary);
        return HandlerContext::from_execution(ctx, ViewMode::Standard)
            .render(CommandResultViewModel::new(screen));
    }

    let splash = if no_splash {
        Splash::disabled()
    } else {
        Splash::from_millis(ctx.config().splash_duration_ms())
    };

    let mut app = BrowseApp::new(itinerary, splash);
    if let Some(index) = start {
        app.open_day(index);
    }
    app.run()
}
