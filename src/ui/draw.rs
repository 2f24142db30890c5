use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::app::App;
use super::navbar::NAV_HEIGHT;

/// Placeholder colours shown before the preferences are loaded, when no
/// palette has been applied yet.
const LOADING_BG: Color = Color::Rgb(0x0a, 0x0a, 0x0a);
const LOADING_FG: Color = Color::Rgb(0xff, 0xff, 0xff);

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Check if terminal is too large for ratatui buffer
    if (area.width as u32 * area.height as u32) > 65534 {
        let msg = Paragraph::new("Terminal too large. Please resize smaller.")
            .style(Style::default().add_modifier(Modifier::BOLD));
        let safe_rect = Rect::new(0, 0, area.width.min(80), 1);
        frame.render_widget(msg, safe_rect);
        return;
    }

    if !app.i18n.is_loaded() {
        draw_loading(frame, area);
        return;
    }

    // Clone the environment to avoid holding the borrow while app is mutated
    let env = app.env.borrow().clone();
    app.hitmap.clear();

    // Fill entire screen with the page background first
    frame.render_widget(Block::default().style(env.page_style()), area);

    let nav_h = NAV_HEIGHT.min(area.height);
    let nav_area = Rect::new(area.x, area.y, area.width, nav_h);
    let page_area = Rect::new(area.x, area.y + nav_h, area.width, area.height - nav_h);

    app.page.draw(frame, page_area, &app.i18n, &env, &app.interaction, &mut app.hitmap);

    app.particles.resize(page_area.width, page_area.height);
    app.particles.render(page_area, frame.buffer_mut(), &env);

    let palette = app.theme.palette();
    let current = app.page.current_section();
    let scroll_y = app.page.scroll_y();
    app.navbar.draw(
        frame,
        nav_area,
        &app.i18n,
        &env,
        palette,
        current,
        scroll_y,
        &app.interaction,
        &mut app.hitmap,
    );

    if let Some(menu) = app.navbar.open_menu() {
        let entries = app.navbar.entries(menu, palette, &app.i18n, &env);
        app.navbar.draw_menu(frame, &entries, &env, &app.interaction, &mut app.hitmap);
    }

    if app.settings.cursor_effect {
        app.cursor.render(area, frame.buffer_mut(), &env);
    }
}

/// Neutral full-screen placeholder shown until the language is known.
fn draw_loading(frame: &mut Frame, area: Rect) {
    frame.render_widget(Block::default().style(Style::default().bg(LOADING_BG)), area);
    let y = area.y + area.height / 2;
    let msg = Paragraph::new("Loading...")
        .style(Style::default().fg(LOADING_FG).bg(LOADING_BG))
        .alignment(Alignment::Center);
    frame.render_widget(msg, Rect::new(area.x, y, area.width, 1.min(area.height)));
}
