use iced::{Element, Task, Theme};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod assets;
mod state;
mod ui;

use assets::Assets;
use state::catalog::Catalog;
use state::nav::{Destination, Navigator};
use state::settings::Settings;
use ui::press::PressState;

/// Main application state
struct PuppyAdopt {
    /// The fixed puppy catalog
    catalog: &'static Catalog,
    /// Which screen is showing and how to get back
    navigator: Navigator,
    /// Pressed state of each grid cell, indexed like the catalog
    press: Vec<PressState>,
    /// Resolves puppy photos to files
    assets: Assets,
    settings: Settings,
}

/// Application messages (events)
#[derive(Debug, Clone, PartialEq, Eq)]
enum Message {
    /// Pointer went down on a grid cell
    CellPressed(usize),
    /// Pointer went up on a grid cell
    CellReleased(usize),
    /// Pointer left a grid cell
    CellExited(usize),
    /// User tapped the back arrow on the detail screen
    Back,
    /// User tapped "Adopt Me" (no adoption workflow yet)
    AdoptMe,
}

impl PuppyAdopt {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let app = Self::with_settings(settings);

        let failed = app
            .assets
            .check_all(app.catalog.all().map(|puppy| puppy.photo));
        info!(
            puppies = app.catalog.size(),
            missing_photos = failed,
            "🐶 Puppy catalog ready"
        );

        (app, Task::none())
    }

    fn with_settings(settings: Settings) -> Self {
        let catalog = Catalog::global();
        let assets = Assets::new(settings.assets_dir.clone());

        PuppyAdopt {
            catalog,
            navigator: Navigator::new(),
            press: vec![PressState::default(); catalog.size()],
            assets,
            settings,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CellPressed(index) => {
                if let Some(state) = self.press.get_mut(index) {
                    debug!(index, "cell pressed");
                    state.press();
                }
            }
            Message::CellReleased(index) => {
                let clicked = self
                    .press
                    .get_mut(index)
                    .map(PressState::release)
                    .unwrap_or(false);

                if clicked {
                    self.open(&Destination::detail(index).to_string());
                }
            }
            Message::CellExited(index) => {
                if let Some(state) = self.press.get_mut(index) {
                    state.cancel();
                }
            }
            Message::Back => {
                if self.navigator.pop() {
                    info!(to = %self.navigator.current(), "navigated back");
                }
            }
            Message::AdoptMe => {
                debug!(to = %self.navigator.current(), "adopt me pressed");
            }
        }

        Task::none()
    }

    /// Navigate to a destination identifier.
    ///
    /// Detail indices that don't name a catalog entry are replaced by 0.
    fn open(&mut self, route: &str) {
        match self.navigator.navigate(route) {
            Ok(Destination::Detail(requested)) => {
                let (index, puppy) = self.catalog.get_or_first(requested);
                if index as i64 != requested {
                    self.navigator.pop();
                    self.navigator.push(Destination::detail(index));
                }
                info!(to = %self.navigator.current(), name = %puppy.nick_name, "navigated");
            }
            Ok(destination) => info!(to = %destination, "navigated"),
            Err(e) => warn!(error = %e, "ignoring navigation request"),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match self.navigator.current() {
            Destination::List => {
                ui::grid::view(self.catalog, &self.assets, &self.press, self.settings.columns)
            }
            Destination::Detail(index) => {
                let (_, puppy) = self.catalog.get_or_first(index);
                ui::detail::view(puppy, &self.assets)
            }
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.settings.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("puppy_adopt=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_logging();

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!(error = %e, "using default settings");
        Settings::default()
    });
    let window_size = (settings.window_width, settings.window_height);

    iced::application("Puppy", PuppyAdopt::update, PuppyAdopt::view)
        .theme(PuppyAdopt::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || PuppyAdopt::new(settings))
}
