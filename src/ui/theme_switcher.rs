//! Palette picker shown in the navbar.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::i18n::LocaleStore;
use super::hitmap::Target;
use super::sections::hex;
use super::style_env::StyleEnvironment;
use super::theme::PaletteId;

/// One selectable row of a navbar dropdown.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub line: Line<'static>,
    pub target: Target,
}

/// Toggle button: current palette icon and name, plus an open/closed marker.
pub fn toggle_spans(
    active: PaletteId,
    i18n: &LocaleStore,
    open: bool,
    style: Style,
) -> Vec<Span<'static>> {
    let marker = if open { "▲" } else { "▼" };
    vec![Span::styled(
        format!("{} {} {}", active.icon(), i18n.t(active.label_key()), marker),
        style,
    )]
}

/// Dropdown rows, one per palette, the active one checked.
pub fn entries(active: PaletteId, i18n: &LocaleStore, env: &StyleEnvironment) -> Vec<MenuEntry> {
    PaletteId::all()
        .iter()
        .map(|palette| {
            let swatch = Style::default().fg(env.rgb_color(hex(palette.swatch())));
            let check = if *palette == active { " ✓" } else { "  " };
            let mut name_style = env.text_style();
            if *palette == active {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            MenuEntry {
                line: Line::from(vec![
                    Span::raw(format!("{} ", palette.icon())),
                    Span::styled(i18n.t(palette.label_key()).to_string(), name_style),
                    Span::styled(check, env.primary_style()),
                    Span::styled(" ■", swatch),
                ]),
                target: Target::Theme(*palette),
            }
        })
        .collect()
}
