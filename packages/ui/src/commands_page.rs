use api::{CommandListing, FetchError, Locale};
use dioxus::logger::tracing::{debug, warn};
use dioxus::core::Task;
use dioxus::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::command_cards::{CommandGrid, CommandGridSkeleton, FetchErrorPanel};
use crate::locale_select::LocaleSelect;
use crate::page_state::{PageModel, Phase, Ticket};

const COMMANDS_CSS: Asset = asset!("/assets/styling/commands.css");

pub type FetchFuture = Pin<Box<dyn Future<Output = Result<CommandListing, FetchError>>>>;

/// Source of command listings for [`CommandsPage`].
///
/// Provide one through context to replace the `list_commands` server
/// function; without it the page calls [`api::fetch_commands`].
#[derive(Clone)]
pub struct CommandsFetcher(Rc<dyn Fn(Locale) -> FetchFuture>);

impl CommandsFetcher {
    pub fn new(fetch: impl Fn(Locale) -> FetchFuture + 'static) -> Self {
        Self(Rc::new(fetch))
    }

    pub fn fetch(&self, locale: Locale) -> FetchFuture {
        (self.0)(locale)
    }
}

impl Default for CommandsFetcher {
    fn default() -> Self {
        Self::new(|locale| Box::pin(api::fetch_commands(locale)))
    }
}

/// Handles behind the commands page. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct CommandsController {
    model: Signal<PageModel>,
    in_flight: Signal<Option<Task>>,
    fetcher: Signal<CommandsFetcher>,
}

impl CommandsController {
    pub fn model(&self) -> Signal<PageModel> {
        self.model
    }

    /// Reload after a dropdown change. Unknown names are logged and ignored.
    pub fn select(mut self, display_name: &str) {
        let selected = self.model.write().select_display_name(display_name);
        match selected {
            Ok(ticket) => {
                let locale = self.model.peek().locale();
                debug!("commands_page.select: locale={}", locale);
                self.load(ticket, locale);
            }
            Err(err) => warn!("commands_page.select: {}", err),
        }
    }

    pub fn retry(mut self) {
        let ticket = self.model.write().retry();
        let locale = self.model.peek().locale();
        self.load(ticket, locale);
    }

    // A newer request supersedes the previous one; the ticket check in
    // `PageModel::resolve` covers responses that race the cancellation.
    fn load(mut self, ticket: Ticket, locale: Locale) {
        if let Some(task) = self.in_flight.write().take() {
            task.cancel();
        }
        let request = self.fetcher.peek().fetch(locale);
        let mut model = self.model;
        let task = spawn(async move {
            let result = request.await;
            if let Err(err) = &result {
                warn!("commands_page.load: locale={} error={}", locale, err);
            }
            let applied = model.write().resolve(ticket, result);
            if !applied {
                debug!("commands_page.load: dropped stale response for {}", locale);
            }
        });
        self.in_flight.set(Some(task));
    }
}

/// Sets up page state and starts loading the default locale once mounted.
pub fn use_commands_controller() -> CommandsController {
    let fetcher = use_hook(|| try_consume_context::<CommandsFetcher>().unwrap_or_default());
    let controller = CommandsController {
        model: use_signal(PageModel::default),
        in_flight: use_signal(|| None::<Task>),
        fetcher: use_signal(|| fetcher),
    };

    use_effect(move || {
        let mut model = controller.model;
        let ticket = model.write().begin(Locale::DEFAULT);
        controller.load(ticket, Locale::DEFAULT);
    });

    controller
}

/// The command listing page: loads the default locale on mount and reloads
/// on every dropdown change or retry.
#[component]
pub fn CommandsPage() -> Element {
    let controller = use_commands_controller();
    let state = controller.model()();

    rsx! {
        document::Link { rel: "stylesheet", href: COMMANDS_CSS }
        div { class: "commands_page",
            LocaleSelect {
                value: state.locale(),
                on_select: move |display_name: String| controller.select(&display_name),
            }
            match state.phase() {
                Phase::Loading => rsx! { CommandGridSkeleton {} },
                Phase::Failed(err) => rsx! {
                    FetchErrorPanel { error: err.clone(), on_retry: move |_: ()| controller.retry() }
                },
                Phase::Ready => rsx! {
                    CommandGrid { cards: state.cards().to_vec(), generation: state.generation() }
                },
            }
        }
    }
}
