// SPDX-License-Identifier: MPL-2.0
//! Demo host: a small window with buttons that raise toasts of each kind.
//!
//! The `App` owns the notification [`Manager`], runs one render pass per tick
//! in `update`, and stacks the recorded toasts over its content in `view`.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::toast;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Anchor, IconSet, Kind, Manager, Snapshot, Toast};
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    config: Config,
    anchor: Anchor,
    notifications: Manager,
    /// Frames recorded by the last render pass, drawn by `view`.
    snapshot: Snapshot,
    icons: IconSet,
    /// Number of toasts raised so far, shown in sample bodies.
    pushed: u32,
}

impl Default for App {
    fn default() -> Self {
        Self {
            config: Config::default(),
            anchor: Anchor::default(),
            notifications: Manager::new(),
            snapshot: Snapshot::with_viewport_width(WINDOW_DEFAULT_WIDTH),
            icons: IconSet::new(),
            pushed: 0,
        }
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function, the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, starts the icon font load and raises a welcome toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        };
        let config = loaded.unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load settings, using defaults");
            Config::default()
        });

        let mut app = App {
            anchor: flags.anchor.unwrap_or_else(|| config.anchor()),
            config,
            ..App::default()
        };
        let task = app.load_icon_font();

        let welcome = toast!(
            Kind::Info,
            dismiss = Duration::from_secs(5),
            "Toasts stack from the {} corner",
            app.anchor.name()
        );
        app.notifications.insert(welcome.with_title("Welcome"));

        (app, task)
    }

    fn load_icon_font(&mut self) -> Task<Message> {
        let Some(path) = self.config.icon_font.clone() else {
            return Task::none();
        };

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot read icon font");
                return Task::none();
            }
        };

        match self.icons.register(bytes, self.config.icon_size()) {
            Ok(task) => task.map(Message::IconFontLoaded),
            Err(err) => {
                tracing::warn!(%err, "icon font rejected");
                Task::none()
            }
        }
    }

    fn title(&self) -> String {
        match self.notifications.len() {
            0 => "IcedNotify".to_string(),
            n => format!("IcedNotify ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(!self.notifications.is_empty()),
            subscription::create_resize_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Push(kind) => {
                self.pushed += 1;
                self.notifications.insert(sample_toast(kind, self.pushed));
            }
            Message::Tick(now) => {
                self.snapshot.clear();
                self.notifications.render_pass(now, &mut self.snapshot);
            }
            Message::WindowResized(size) => self.snapshot.set_viewport_width(size.width),
            Message::IconFontLoaded(result) => self.icons.on_loaded(result),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let buttons = Kind::ALL
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, &kind| {
                row.push(button(text(kind_label(kind))).on_press(Message::Push(kind)))
            });

        let content = Column::new()
            .spacing(spacing::MD)
            .push(text("Raise a toast").size(typography::TITLE))
            .push(buttons);

        let base = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD);

        Stack::new()
            .push(base)
            .push(Toast::view_overlay(
                self.snapshot.frames(),
                self.anchor,
                &self.icons,
            ))
            .into()
    }
}

fn kind_label(kind: Kind) -> &'static str {
    kind.appearance().title.unwrap_or("Plain")
}

fn sample_toast(kind: Kind, n: u32) -> crate::ui::notifications::Notification {
    match kind {
        Kind::None => toast!(kind, "Plain toast #{n} without title or icon"),
        Kind::Success => toast!(kind, "Saved {n} file(s)"),
        Kind::Warning => toast!(
            kind,
            dismiss = Duration::from_secs(5),
            "Disk almost full ({n})"
        ),
        Kind::Error => toast!(kind, "Could not open file #{n}\nPermission denied"),
        Kind::Info => toast!(kind, "{n} toast(s) raised so far"),
    }
}
