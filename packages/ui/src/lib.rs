//! This crate contains all shared UI for the workspace.

mod app_bar;
pub use app_bar::{AppBar, ExternalLink, APP_TITLE, EXTERNAL_LINKS};

mod command_cards;
pub use command_cards::{CommandCard, CommandGrid, CommandGridSkeleton, FetchErrorPanel};

mod commands_page;
pub use commands_page::{
    use_commands_controller, CommandsController, CommandsFetcher, CommandsPage, FetchFuture,
};

mod locale_select;
pub use locale_select::LocaleSelect;

mod page_state;
pub use page_state::{CardView, PageModel, Phase, Ticket};

mod theme;
pub use theme::CommandsTheme;
