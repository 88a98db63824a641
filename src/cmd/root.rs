use crate::calc::CalendarDate;
use crate::data::{AppSettings, InfoPanelData, Persistable};
use crate::ui::link::SystemOpener;
use crate::ui::picker_view::{run_app, App};
use crate::ui::presentation::PresentationState;
use crate::ui::{install_panic_hook, restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::Local;

pub fn run() -> Result<()> {
    let settings = AppSettings::load()?;
    let info = InfoPanelData::load()?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let today = CalendarDate::from_naive(Local::now().date_naive());
    let state = PresentationState::new(today, settings.year_range());
    let opener = SystemOpener;
    let mut app = App::new(&info, &opener, today, state);

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    result
}
