//! Fixed navigation bar with the theme and language dropdowns.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::animation::{Ease, Stagger, Tween};
use crate::i18n::{Locale, LocaleStore};
use super::hitmap::{HitMap, Interaction, Target};
use super::sections::{display_width, fade_style, SectionId};
use super::style_env::StyleEnvironment;
use super::theme::PaletteId;
use super::theme_switcher::{self, MenuEntry};

/// Rows taken by the bar above the page.
pub const NAV_HEIGHT: u16 = 2;
/// Narrower terminals get the compact menu instead of inline links.
pub const COMPACT_WIDTH: u16 = 100;
/// Scroll offset after which the bar switches to its solid style.
const SCROLLED_AFTER: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Theme,
    Language,
    Compact,
}

impl Menu {
    fn index(self) -> usize {
        match self {
            Menu::Theme => 0,
            Menu::Language => 1,
            Menu::Compact => 2,
        }
    }
}

fn link_stagger() -> Stagger {
    Stagger::new(0.1, 0.5, Ease::EaseOut)
}

pub fn is_scrolled(scroll_y: u16) -> bool {
    scroll_y > SCROLLED_AFTER
}

/// Language dropdown rows, the active one checked.
pub fn language_entries(active: Locale, env: &StyleEnvironment) -> Vec<MenuEntry> {
    Locale::all()
        .iter()
        .map(|locale| {
            let check = if *locale == active { " ✓" } else { "  " };
            MenuEntry {
                line: Line::from(vec![
                    Span::raw(format!("{} ", locale.flag())),
                    Span::styled(locale.display_name(), env.text_style()),
                    Span::styled(check, env.primary_style()),
                ]),
                target: Target::Language(*locale),
            }
        })
        .collect()
}

pub struct Navbar {
    open: Option<Menu>,
    selected: usize,
    intro: Tween,
    clock: f32,
    compact: bool,
    /// Toggle buttons as last drawn, indexed by [`Menu::index`].
    anchors: [Rect; 3],
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Navbar {
    pub fn new() -> Self {
        let mut intro = Tween::new(0.8, Ease::EaseOut);
        intro.play();
        Self {
            open: None,
            selected: 0,
            intro,
            clock: 0.0,
            compact: false,
            anchors: [Rect::default(); 3],
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.intro.tick(dt);
        self.clock += dt;
    }

    /// Whether the last frame used the compact layout.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn open_menu(&self) -> Option<Menu> {
        self.open
    }

    pub fn toggle(&mut self, menu: Menu) {
        if self.open == Some(menu) {
            self.open = None;
        } else {
            self.open = Some(menu);
            self.selected = 0;
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the keyboard selection, wrapping within `count` rows.
    pub fn move_selection(&mut self, delta: i32, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = (self.selected as i32 + delta).rem_euclid(count as i32) as usize;
    }

    /// Rows of `menu`. The compact menu flattens links, palettes and languages.
    pub fn entries(
        &self,
        menu: Menu,
        palette: PaletteId,
        i18n: &LocaleStore,
        env: &StyleEnvironment,
    ) -> Vec<MenuEntry> {
        match menu {
            Menu::Theme => theme_switcher::entries(palette, i18n, env),
            Menu::Language => language_entries(i18n.locale(), env),
            Menu::Compact => {
                let mut rows: Vec<MenuEntry> = SectionId::all()
                    .iter()
                    .map(|id| MenuEntry {
                        line: Line::from(Span::styled(i18n.t(id.nav_key()).to_string(), env.text_style())),
                        target: Target::Nav(*id),
                    })
                    .collect();
                rows.extend(theme_switcher::entries(palette, i18n, env));
                rows.extend(language_entries(i18n.locale(), env));
                rows
            }
        }
    }

    fn put(frame: &mut Frame, hitmap: &mut HitMap, x: u16, y: u16, spans: Vec<Span<'static>>, target: Option<Target>) -> Rect {
        let area = frame.area();
        let width = display_width(&spans).min(area.width.saturating_sub(x));
        let rect = Rect::new(x, y, width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
        if let Some(target) = target {
            hitmap.push(rect, target);
        }
        rect
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        i18n: &LocaleStore,
        env: &StyleEnvironment,
        palette: PaletteId,
        current: SectionId,
        scroll_y: u16,
        interaction: &Interaction,
        hitmap: &mut HitMap,
    ) {
        let scrolled = is_scrolled(scroll_y);
        let shown = self.intro.progress();
        let fade = |style: Style| fade_style(style, shown, env);

        let bar_style = if scrolled { env.card_style() } else { env.page_style() };
        frame.render_widget(Block::default().style(bar_style), area);

        let y = area.y;
        Self::put(
            frame,
            hitmap,
            area.x + 1,
            y,
            vec![
                Span::styled("It ", fade(env.title_style())),
                Span::styled("Intel", fade(env.accent_style())),
            ],
            None,
        );

        let right = area.x + area.width.saturating_sub(1);
        self.compact = area.width < COMPACT_WIDTH;
        if self.compact {
            let open = self.open == Some(Menu::Compact);
            let target = Target::CompactMenu;
            let icon = if open { "✕" } else { "☰" };
            let style = fade(interaction.style(&target, env.primary_style(), env));
            let x = right.saturating_sub(1);
            self.anchors[Menu::Compact.index()] =
                Self::put(frame, hitmap, x, y, vec![Span::styled(icon, style)], Some(target));
        } else {
            // Right-hand toggles first so the links can fit between.
            let lang_target = Target::LanguageMenu;
            let locale = i18n.locale();
            let marker = if self.open == Some(Menu::Language) { "▲" } else { "▼" };
            let lang = vec![Span::styled(
                format!("{} {} {}", locale.flag(), locale.display_name(), marker),
                fade(interaction.style(&lang_target, env.text_style(), env)),
            )];
            let lang_x = right.saturating_sub(display_width(&lang));
            self.anchors[Menu::Language.index()] =
                Self::put(frame, hitmap, lang_x, y, lang, Some(lang_target));

            let theme_target = Target::ThemeMenu;
            let theme = theme_switcher::toggle_spans(
                palette,
                i18n,
                self.open == Some(Menu::Theme),
                fade(interaction.style(&theme_target, env.text_style(), env)),
            );
            let theme_x = lang_x.saturating_sub(display_width(&theme) + 3);
            self.anchors[Menu::Theme.index()] =
                Self::put(frame, hitmap, theme_x, y, theme, Some(theme_target));

            let links: Vec<(Vec<Span<'static>>, Target)> = SectionId::all()
                .iter()
                .enumerate()
                .map(|(i, id)| {
                    let target = Target::Nav(*id);
                    let base = if *id == current {
                        env.primary_style().add_modifier(Modifier::BOLD)
                    } else {
                        env.text_style()
                    };
                    let p = link_stagger().progress(i, self.clock).min(shown);
                    let style = fade_style(interaction.style(&target, base, env), p, env);
                    (vec![Span::styled(i18n.t(id.nav_key()).to_string(), style)], target)
                })
                .collect();
            let gap = 3;
            let total: u16 = links.iter().map(|(s, _)| display_width(s)).sum::<u16>() + gap * 4;
            let mut x = area.x + area.width.saturating_sub(total) / 2;
            x = x.max(area.x + 12);
            for (spans, target) in links {
                let w = display_width(&spans);
                if x + w > theme_x {
                    break;
                }
                Self::put(frame, hitmap, x, y, spans, Some(target));
                x += w + gap;
            }
        }

        if scrolled && area.height > 1 {
            let rule = Paragraph::new(Line::from(Span::styled(
                "─".repeat(area.width as usize),
                env.border_style(),
            )));
            frame.render_widget(rule, Rect::new(area.x, area.y + 1, area.width, 1));
        }
    }

    /// Draws the open dropdown over the page. Called after the page so
    /// its rows take precedence in `hitmap`.
    pub fn draw_menu(
        &self,
        frame: &mut Frame,
        entries: &[MenuEntry],
        env: &StyleEnvironment,
        interaction: &Interaction,
        hitmap: &mut HitMap,
    ) {
        let Some(menu) = self.open else {
            return;
        };
        if entries.is_empty() {
            return;
        }
        let screen = frame.area();
        let anchor = self.anchors[menu.index()];

        let max_rows = screen.height.saturating_sub(anchor.bottom()).saturating_sub(2);
        if max_rows == 0 {
            return;
        }
        let cell_w = entries.iter().map(|e| display_width(&e.line.spans)).max().unwrap_or(0) + 2;
        let selected = self.selected.min(entries.len() - 1);
        let grid = MenuGrid::fit(entries.len(), cell_w, screen.width.saturating_sub(2), max_rows, selected);

        let width = (grid.cols * cell_w + 2).min(screen.width);
        let height = grid.visible + 2;
        let x = anchor.right().saturating_sub(width).min(screen.width.saturating_sub(width));
        let rect = Rect::new(x, anchor.bottom(), width, height);

        frame.render_widget(Clear, rect);
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(env.border_style())
            .style(env.card_style());
        if grid.first > 0 {
            block = block.title_top(Line::from("▲").right_aligned());
        }
        if grid.first + grid.visible < grid.rows {
            block = block.title_bottom(Line::from("▼").right_aligned());
        }
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        for (i, entry) in entries.iter().enumerate() {
            let Some((col, row)) = grid.cell(i) else {
                continue;
            };
            let cell_x = inner.x + col * cell_w;
            if cell_x >= inner.right() {
                continue;
            }
            let cell = Rect::new(cell_x, inner.y + row, cell_w.min(inner.right() - cell_x), 1);
            let mut line = entry.line.clone();
            line.spans.insert(0, Span::raw(" "));
            let highlighted = i == selected || interaction.is_hovered(&entry.target);
            let style = if highlighted { env.hover_style() } else { env.card_style() };
            frame.render_widget(Paragraph::new(line).style(style), cell);
            hitmap.push(cell, entry.target.clone());
        }
    }
}

/// Placement of dropdown rows. Entries fill columns top to bottom; when
/// even the widest grid is too tall, the rows scroll to keep the keyboard
/// selection in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MenuGrid {
    cols: u16,
    /// Rows per column.
    rows: u16,
    /// First row shown.
    first: u16,
    /// Rows shown.
    visible: u16,
}

impl MenuGrid {
    fn fit(count: usize, cell_w: u16, max_w: u16, max_rows: u16, selected: usize) -> Self {
        let count = count.clamp(1, u16::MAX as usize) as u16;
        let max_rows = max_rows.max(1);
        let max_cols = (max_w / cell_w.max(1)).max(1);
        let cols = count.div_ceil(max_rows).clamp(1, max_cols);
        let rows = count.div_ceil(cols);
        let visible = rows.min(max_rows);
        let selected_row = (selected.min(count as usize - 1) as u16) % rows;
        let first = selected_row.saturating_sub(visible - 1).min(rows - visible);
        Self { cols, rows, first, visible }
    }

    /// `(column, visible row)` of entry `index`, or `None` if scrolled out.
    fn cell(&self, index: usize) -> Option<(u16, u16)> {
        let index = u16::try_from(index).ok()?;
        let (col, row) = (index / self.rows, index % self.rows);
        if col >= self.cols || row < self.first || row >= self.first + self.visible {
            return None;
        }
        Some((col, row - self.first))
    }
}
