use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::animation::TriggerRegistry;
use crate::config::Settings;
use crate::i18n::LocaleStore;
use crate::keybindings::{Keybindings, PageAction};
use crate::services::opener;
use crate::services::storage::SharedStorage;
use super::cursor::CursorTrail;
use super::hitmap::{HitMap, Interaction, Target};
use super::navbar::{Menu, Navbar};
use super::page::Page;
use super::particles::Particles;
use super::sections::SectionId;
use super::style_env::{SharedStyleEnv, StyleEnvironment};
use super::theme::ThemeStore;

/// Rows moved by one mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

/// Choices given on the command line, applied once the stores are loaded.
#[derive(Debug, Clone, Default)]
pub struct StartupOverrides {
    pub language: Option<String>,
    pub theme: Option<String>,
}

pub struct App {
    pub settings: Settings,
    pub keybindings: Keybindings,
    pub env: SharedStyleEnv,
    pub i18n: LocaleStore,
    pub theme: ThemeStore,
    pub registry: TriggerRegistry,
    pub page: Page,
    pub navbar: Navbar,
    pub cursor: CursorTrail,
    pub particles: Particles,
    pub hitmap: HitMap,
    pub interaction: Interaction,
    pub should_quit: bool,
    startup: StartupOverrides,
    initialized: bool,
}

impl App {
    pub fn new(
        settings: Settings,
        storage: SharedStorage,
        env: StyleEnvironment,
        startup: StartupOverrides,
    ) -> Self {
        let env = env.shared();
        let i18n = LocaleStore::new(storage.clone());
        let theme = ThemeStore::new(storage, env.clone());
        let registry = TriggerRegistry::new();
        let page = Page::new(&registry, i18n.t("hero.title"));
        Self {
            keybindings: Keybindings::new(&settings.keybindings),
            particles: Particles::new(settings.particle_count),
            settings,
            env,
            i18n,
            theme,
            registry,
            page,
            navbar: Navbar::new(),
            cursor: CursorTrail::new(),
            hitmap: HitMap::new(),
            interaction: Interaction::default(),
            should_quit: false,
            startup,
            initialized: false,
        }
    }

    #[cfg(test)]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Recalls both preferences, then applies command-line choices through
    /// the regular setters. Runs once, on the first tick.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.i18n.load();
        self.theme.load();

        if let Some(tag) = self.startup.language.take() {
            self.i18n.set_locale_tag(&tag);
        }
        if let Some(id) = self.startup.theme.take() {
            self.theme.set_palette_id(&id);
        }
        self.initialized = true;
        tracing::info!(
            locale = self.i18n.locale().tag(),
            palette = self.theme.palette().id(),
            "portfolio ready"
        );
    }

    pub fn tick(&mut self, dt: f32) {
        self.initialize();
        self.navbar.tick(dt);
        self.page.tick(dt, &self.i18n);
        // Bounds are only meaningful once the page has been laid out.
        if self.page.is_laid_out() {
            self.registry.update(self.page.scroll_y(), self.page.viewport_height());
        }
        self.registry.tick(dt);
        self.cursor.frame(dt);
        self.particles.tick(dt);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Keyboard
    // ═══════════════════════════════════════════════════════════════════════

    fn menu_len(&self, menu: Menu) -> usize {
        let env = self.env.borrow();
        self.navbar.entries(menu, self.theme.palette(), &self.i18n, &env).len()
    }

    /// Keys for an open dropdown; returns whether the key was consumed.
    fn handle_menu_key(&mut self, menu: Menu, code: KeyCode) -> bool {
        match code {
            KeyCode::Up => {
                let len = self.menu_len(menu);
                self.navbar.move_selection(-1, len);
            }
            KeyCode::Down => {
                let len = self.menu_len(menu);
                self.navbar.move_selection(1, len);
            }
            KeyCode::Enter => {
                let target = {
                    let env = self.env.borrow();
                    self.navbar
                        .entries(menu, self.theme.palette(), &self.i18n, &env)
                        .into_iter()
                        .nth(self.navbar.selected())
                        .map(|e| e.target)
                };
                if let Some(target) = target {
                    self.activate(target);
                }
            }
            KeyCode::Esc => self.navbar.close(),
            _ => return false,
        }
        true
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Handle dropdown input first
        if let Some(menu) = self.navbar.open_menu() {
            if self.handle_menu_key(menu, code) {
                return;
            }
        }

        let Some(action) = self.keybindings.page_action(code, modifiers) else {
            return;
        };
        let page_rows = self.page.viewport_height().saturating_sub(2).max(1) as i32;
        match action {
            PageAction::Quit => self.should_quit = true,
            PageAction::ScrollUp => self.page.scroll_by(-1),
            PageAction::ScrollDown => self.page.scroll_by(1),
            PageAction::PageUp => self.page.scroll_by(-page_rows),
            PageAction::PageDown => self.page.scroll_by(page_rows),
            PageAction::Top => self.page.scroll_to_top(),
            PageAction::Bottom => self.page.scroll_to_bottom(),
            PageAction::NextSection => self.page.next_section(),
            PageAction::PrevSection => self.page.prev_section(),
            PageAction::GotoHero => self.page.scroll_to(SectionId::Hero),
            PageAction::GotoAbout => self.page.scroll_to(SectionId::About),
            PageAction::GotoSkills => self.page.scroll_to(SectionId::Skills),
            PageAction::GotoProjects => self.page.scroll_to(SectionId::Projects),
            PageAction::GotoContact => self.page.scroll_to(SectionId::Contact),
            PageAction::ThemeMenu => self.toggle_menu(Menu::Theme),
            PageAction::CycleTheme => self.theme.cycle(),
            PageAction::LanguageMenu => self.toggle_menu(Menu::Language),
            PageAction::ToggleLanguage => {
                let next = self.i18n.locale().next();
                self.i18n.set_locale(next);
            }
            PageAction::CompactMenu => self.navbar.toggle(Menu::Compact),
            PageAction::CloseMenus => self.navbar.close(),
            PageAction::NextFilter => {
                let next = self.page.projects.filter().next();
                self.page.projects.set_filter(next);
            }
            PageAction::PrevFilter => {
                let prev = self.page.projects.filter().prev();
                self.page.projects.set_filter(prev);
            }
            PageAction::NextProject => self.focus_project(1),
            PageAction::PrevProject => self.focus_project(-1),
            PageAction::ToggleProject => {
                self.page.projects.toggle_focused();
                self.reveal_focused();
            }
        }
    }

    /// Theme and language toggles live in the compact menu on narrow screens.
    fn toggle_menu(&mut self, menu: Menu) {
        if self.navbar.is_compact() {
            self.navbar.toggle(Menu::Compact);
        } else {
            self.navbar.toggle(menu);
        }
    }

    fn focus_project(&mut self, delta: i32) {
        self.page.projects.move_focus(delta);
        self.reveal_focused();
    }

    fn reveal_focused(&mut self) {
        if let Some(project) = self.page.projects.focused() {
            self.page.reveal_project(project.id);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Mouse
    // ═══════════════════════════════════════════════════════════════════════

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.cursor.set_target(x, y);
                self.interaction.hovered = self.hitmap.target_at(x, y).cloned();
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.cursor.set_target(x, y);
                self.cursor.press();
                self.interaction.pressed = self.hitmap.target_at(x, y).cloned();
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.cursor.release();
                let released = self.hitmap.target_at(x, y).cloned();
                // A click needs press and release on the same target.
                if let (Some(pressed), Some(released)) = (self.interaction.pressed.take(), released) {
                    if pressed == released {
                        self.activate(released);
                    }
                }
            }
            MouseEventKind::ScrollUp => self.page.scroll_by(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.page.scroll_by(WHEEL_ROWS),
            _ => {}
        }
    }

    /// The pointer left the terminal window.
    pub fn handle_focus_lost(&mut self) {
        self.cursor.hide();
        self.interaction = Interaction::default();
    }

    /// Runs whatever `target` stands for.
    pub fn activate(&mut self, target: Target) {
        tracing::debug!(?target, "activate");
        match target {
            Target::Nav(id) => {
                self.navbar.close();
                self.page.scroll_to(id);
            }
            Target::Cta(id) => self.page.scroll_to(id),
            Target::ThemeMenu => self.navbar.toggle(Menu::Theme),
            Target::LanguageMenu => self.navbar.toggle(Menu::Language),
            Target::CompactMenu => self.navbar.toggle(Menu::Compact),
            Target::Theme(palette) => {
                self.theme.set_palette(palette);
                self.navbar.close();
            }
            Target::Language(locale) => {
                self.i18n.set_locale(locale);
                self.navbar.close();
            }
            Target::Filter(category) => self.page.projects.set_filter(category),
            Target::Project(id) => self.page.projects.toggle(id),
            Target::Link(url) => {
                if let Err(e) = opener::open_url(url) {
                    tracing::warn!(url, error = %e, "could not open link");
                }
            }
        }
    }
}
