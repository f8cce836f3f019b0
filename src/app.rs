// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the shell and sections.
//!
//! The `App` struct wires together the configuration, the content registry,
//! and the section states, and translates messages into side effects like
//! asset loading, scroll snapping, and external link opening. Policy
//! decisions (window bounds, what reduced motion disables, when the tick
//! subscription runs) are kept close to the update loop so user-facing
//! behavior is easy to audit.

use crate::config::{self, defaults, Config};
use crate::content::Registry;
use crate::media::{self, ambient::AmbientPlayer, frame_cache::CacheConfig};
use crate::ui::components::starfield;
use crate::ui::design_tokens;
use crate::ui::navbar;
use crate::ui::sections::ambient_band::AmbientBand;
use crate::ui::sections::{encryption, footer, hero, projects, skills};
use crate::ui::shell::{self, SectionId};
use iced::widget::{scrollable, Column, Stack};
use iced::{time, window, Element, Length, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Ambient clip shown behind the skills section.
const SKILLS_CLIP: &str = "videos/skills-bg.webm";
/// Ambient clip shown behind the encryption section.
const ENCRYPTION_CLIP: &str = "videos/encryption-bg.webm";
/// Lock glyph assets for the encryption section.
const LOCK_TOP_GLYPH: &str = "lock-top.png";
const LOCK_MAIN_GLYPH: &str = "lock-main.png";

/// Root application state.
pub struct App {
    config: Config,
    registry: Registry,
    shell: shell::State,
    skills: skills::State,
    encryption: encryption::State,
    projects: projects::State,
    theme: Theme,
    started_at: Instant,
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("starfield_mounted", &self.shell.is_mounted())
            .field("skills_video_loaded", &self.skills.ambient.is_loaded())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Tick(Instant),
    Shell(shell::Message),
    Navbar(navbar::Message),
    Hero(hero::Message),
    Skills(skills::Message),
    Encryption(encryption::Message),
    Projects(projects::Message),
    Footer(footer::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional content registry override file.
    pub content: Option<PathBuf>,
    /// Optional assets directory override.
    pub assets: Option<PathBuf>,
    /// Disables every animation for this run.
    pub reduced_motion: bool,
    /// Disables ambient video decoding for this run.
    pub no_video: bool,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(defaults::WINDOW_DEFAULT_WIDTH, defaults::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(defaults::MIN_WINDOW_WIDTH, defaults::MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Id of the shell scrollable, shared with the snap tasks.
fn shell_scrollable_id() -> scrollable::Id {
    scrollable::Id::new("shell")
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app_config = config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load preferences, using defaults");
            Config::default()
        });
        if flags.reduced_motion {
            app_config.reduced_motion = Some(true);
        }
        if flags.no_video {
            app_config.video_autoplay = Some(false);
        }
        if let Some(assets) = flags.assets {
            app_config.assets_dir = Some(assets);
        }

        let registry_path = flags.content.or_else(|| app_config.content_path.clone());
        let registry = match registry_path {
            Some(path) => Registry::load_from_path(&path).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "content override rejected, using builtin registry");
                Registry::builtin()
            }),
            None => Registry::builtin(),
        };

        let reduced_motion = app_config.reduced_motion();
        let fade = if reduced_motion {
            Duration::ZERO
        } else {
            Duration::from_millis(defaults::FADE_DURATION_MS)
        };

        // Reduced motion implies no ambient video: there is nothing to show
        // behind a section that never animates.
        let assets_dir = app_config.assets_dir();
        let spawn_player = |clip: &str| -> Option<AmbientPlayer> {
            if reduced_motion || !app_config.video_autoplay() {
                return None;
            }
            Some(AmbientPlayer::spawn(
                media::resolve_asset(&assets_dir, clip),
                CacheConfig::from_mb(app_config.frame_cache_mb()),
            ))
        };

        let skills_state = skills::State::new(
            &registry,
            AmbientBand::new(
                design_tokens::palette::TINT_SKILLS,
                spawn_player(SKILLS_CLIP),
                fade,
            ),
        );
        let encryption_state = encryption::State::new(AmbientBand::new(
            design_tokens::palette::TINT_ENCRYPTION,
            spawn_player(ENCRYPTION_CLIP),
            fade,
        ));
        let projects_state = projects::State::new(&registry);

        let theme = design_tokens::theme(app_config.theme_color.as_deref());
        let now = Instant::now();

        let app = Self {
            config: app_config,
            registry,
            shell: shell::State::new(),
            skills: skills_state,
            encryption: encryption_state,
            projects: projects_state,
            theme,
            started_at: now,
            now,
        };

        let mut tasks = app.asset_load_tasks(&assets_dir);
        // Schedule the starfield mount behind startup, so the first paint
        // shows the backdrop placeholder.
        tasks.push(Task::perform(async {}, |()| {
            Message::Shell(shell::Message::MountScheduled)
        }));

        (app, Task::batch(tasks))
    }

    /// One load task per registry image, each resolving into a section
    /// message. Failures degrade per slot; nothing here aborts startup.
    fn asset_load_tasks(&self, assets_dir: &std::path::Path) -> Vec<Task<Message>> {
        let mut tasks = Vec::new();

        for (category, skill_category) in self.registry.skills.iter().enumerate() {
            for (index, item) in skill_category.items.iter().enumerate() {
                let path = media::resolve_asset(assets_dir, &item.image);
                tasks.push(Task::perform(
                    async move { media::load_image(&path) },
                    move |result| {
                        Message::Skills(skills::Message::IconLoaded {
                            category,
                            index,
                            result,
                        })
                    },
                ));
            }
        }

        for (index, item) in self.registry.projects.iter().enumerate() {
            let path = media::resolve_asset(assets_dir, &item.image);
            tasks.push(Task::perform(
                async move { media::load_image(&path) },
                move |result| Message::Projects(projects::Message::ShotLoaded { index, result }),
            ));
        }

        for (slot, glyph) in [
            (encryption::LockSlot::Top, LOCK_TOP_GLYPH),
            (encryption::LockSlot::Main, LOCK_MAIN_GLYPH),
        ] {
            let path = media::resolve_asset(assets_dir, glyph);
            tasks.push(Task::perform(
                async move { media::load_image(&path) },
                move |result| Message::Encryption(encryption::Message::LockLoaded { slot, result }),
            ));
        }

        tasks
    }

    fn title(&self) -> String {
        self.config.site_title().to_string()
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Reduced motion turns the animation clock off entirely; nothing in
        // the page then needs per-frame updates.
        if self.config.reduced_motion() {
            Subscription::none()
        } else {
            time::every(Duration::from_millis(defaults::TICK_INTERVAL_MS)).map(Message::Tick)
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.now = now;
                self.skills.poll(now);
                self.encryption.poll(now);
                if let Some(field) = self.shell.starfield_mut() {
                    field.advance(now.duration_since(self.started_at), true);
                }
                Task::none()
            }
            Message::Shell(msg) => match self.shell.handle(msg) {
                shell::Effect::BuildStarfield => Task::perform(
                    async {
                        tokio::task::spawn_blocking(|| {
                            starfield::generate(defaults::STAR_COUNT, defaults::STAR_SEED)
                        })
                        .await
                        .unwrap_or_else(|err| {
                            tracing::error!(error = %err, "starfield generation panicked");
                            Vec::new()
                        })
                    },
                    |stars| Message::Shell(shell::Message::StarfieldBuilt(stars)),
                ),
                shell::Effect::Mounted | shell::Effect::None => Task::none(),
            },
            Message::Navbar(navbar::Message::GoTo(section)) => self.snap_to(section),
            Message::Navbar(navbar::Message::OpenSocial(link)) => {
                open_external(&link);
                Task::none()
            }
            Message::Hero(hero::Message::ExplorePressed) => self.snap_to(SectionId::Skills),
            Message::Skills(msg) => {
                self.skills.handle(msg);
                Task::none()
            }
            Message::Encryption(msg) => {
                self.encryption.handle(msg);
                Task::none()
            }
            Message::Projects(msg) => {
                if let projects::Effect::Activated(index) = self.projects.handle(msg) {
                    if let Some(link) = self
                        .registry
                        .projects
                        .get(index)
                        .and_then(|item| item.link.as_deref())
                    {
                        open_external(link);
                    }
                }
                Task::none()
            }
            Message::Footer(footer::Message::LinkPressed(link)) => {
                open_external(&link);
                Task::none()
            }
        }
    }

    fn snap_to(&self, section: SectionId) -> Task<Message> {
        scrollable::snap_to(
            shell_scrollable_id(),
            scrollable::RelativeOffset {
                x: 0.0,
                y: section.anchor(),
            },
        )
    }

    fn view(&self) -> Element<'_, Message> {
        let elapsed = self.now.duration_since(self.started_at);

        let sections = Column::new()
            .push(hero::view().map(Message::Hero))
            .push(
                self.skills
                    .view(&self.registry, self.now, elapsed)
                    .map(Message::Skills),
            )
            .push(
                self.encryption
                    .view(self.now, elapsed)
                    .map(Message::Encryption),
            )
            .push(self.projects.view(&self.registry).map(Message::Projects))
            .push(
                footer::view(
                    self.config.site_title(),
                    self.config.site_description(),
                    &self.registry.socials,
                )
                .map(Message::Footer),
            );

        let foreground = Column::new()
            .push(navbar::view(self.config.site_title(), &self.registry.socials).map(Message::Navbar))
            .push(
                scrollable(sections)
                    .id(shell_scrollable_id())
                    .width(Length::Fill)
                    .height(Length::Fill),
            );

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(self.shell.background())
            .push(foreground)
            .into()
    }
}

/// Opens a link in the system browser without blocking or disturbing the
/// page. Failures are logged and otherwise ignored.
fn open_external(link: &str) {
    if let Err(err) = open::that_detached(link) {
        tracing::warn!(link, error = %err, "failed to open external link");
    }
}

/// Runs the application.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window(window_settings())
        .antialiasing(true)
        .run_with(move || App::new(flags))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_flags() -> Flags {
        Flags {
            content: None,
            assets: None,
            reduced_motion: true,
            no_video: true,
        }
    }

    #[test]
    fn new_starts_with_shell_placeholder() {
        let (app, _task) = App::new(quiet_flags());
        assert!(app.shell.shows_placeholder());
        assert!(!app.shell.is_mounted());
    }

    #[test]
    fn starfield_mounts_after_schedule_and_build() {
        let (mut app, _task) = App::new(quiet_flags());
        let _ = app.update(Message::Shell(shell::Message::MountScheduled));
        assert!(app.shell.shows_placeholder());

        let stars = starfield::generate(10, 1);
        let _ = app.update(Message::Shell(shell::Message::StarfieldBuilt(stars)));
        assert!(app.shell.is_mounted());
    }

    #[test]
    fn reduced_motion_flag_reaches_the_config() {
        let (app, _task) = App::new(quiet_flags());
        assert!(app.config.reduced_motion());
        assert!(!app.config.video_autoplay());
    }

    #[test]
    fn tick_advances_the_clock() {
        let (mut app, _task) = App::new(quiet_flags());
        let later = app.started_at + Duration::from_secs(2);
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.now, later);
    }

    #[test]
    fn card_activation_with_unknown_index_is_harmless() {
        let (mut app, _task) = App::new(quiet_flags());
        let _ = app.update(Message::Projects(projects::Message::CardActivated(99)));
    }

    #[test]
    fn flags_override_preferences() {
        let (app, _task) = App::new(Flags {
            no_video: true,
            ..Flags::default()
        });
        assert!(!app.config.video_autoplay());
    }
}
