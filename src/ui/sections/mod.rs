//! Page sections and the line-based document they render into.
//!
//! A section renders into a [`Fragment`]: styled lines plus the clickable
//! regions on them, in section-local rows. The page stacks fragments into
//! one scrolling document.

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::animation::{Ease, Entrance, EntranceMode, ScrollTrigger, TriggerHandle, TriggerRegistry};
use crate::i18n::LocaleStore;
use crate::utils::color::Rgb;
use super::hitmap::{Interaction, Target};
use super::style_env::{self, StyleEnvironment};

/// Anchor-addressable page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Hero,
            SectionId::About,
            SectionId::Skills,
            SectionId::Projects,
            SectionId::Contact,
        ]
    }

    /// In-page anchor name.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Dictionary key of the navigation label.
    pub fn nav_key(&self) -> &'static str {
        match self {
            SectionId::Hero => "nav.home",
            SectionId::About => "nav.about",
            SectionId::Skills => "nav.skills",
            SectionId::Projects => "nav.projects",
            SectionId::Contact => "nav.contact",
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Everything a section needs to render one frame.
pub struct RenderCtx<'a> {
    pub i18n: &'a LocaleStore,
    pub env: &'a StyleEnvironment,
    pub interaction: &'a Interaction,
    /// Usable columns, margins excluded.
    pub width: u16,
    /// Height of the page viewport in rows.
    pub viewport_h: u16,
}

impl RenderCtx<'_> {
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        self.i18n.t(key)
    }
}

/// Clickable span of one fragment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub row: u16,
    pub col: u16,
    pub width: u16,
    pub target: Target,
}

#[derive(Debug, Default)]
pub struct Fragment {
    lines: Vec<Line<'static>>,
    hits: Vec<Hit>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    #[cfg(test)]
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn into_parts(self) -> (Vec<Line<'static>>, Vec<Hit>) {
        (self.lines, self.hits)
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn blanks(&mut self, n: u16) {
        for _ in 0..n {
            self.blank();
        }
    }

    /// Marks columns `col..col + width` of the last pushed row.
    pub fn hit(&mut self, col: u16, width: u16, target: Target) {
        let row = self.height().saturating_sub(1);
        self.hits.push(Hit { row, col, width, target });
    }

    /// Marks the same columns on `rows` rows starting at `row`.
    pub fn hit_rows(&mut self, row: u16, rows: u16, col: u16, width: u16, target: Target) {
        for r in row..row + rows {
            self.hits.push(Hit { row: r, col, width, target: target.clone() });
        }
    }

    /// Appends `other` below the current content.
    pub fn append(&mut self, other: Fragment) {
        let offset = self.height();
        self.hits.extend(other.hits.into_iter().map(|mut h| {
            h.row += offset;
            h
        }));
        self.lines.extend(other.lines);
    }

    /// Appends `other` inside a band `slide_rows` taller than it, offset
    /// downward while `progress` is below 1 and faded toward the page
    /// background. The band height does not depend on `progress`.
    pub fn reveal(&mut self, other: Fragment, progress: f32, slide_rows: u16, env: &StyleEnvironment) {
        let p = progress.clamp(0.0, 1.0);
        let top = ((1.0 - p) * slide_rows as f32).round() as u16;
        self.blanks(top);
        self.append(other.faded(p, env));
        self.blanks(slide_rows - top);
    }

    /// Every span recoloured toward the page background by `opacity`.
    pub fn faded(mut self, opacity: f32, env: &StyleEnvironment) -> Self {
        if opacity >= 0.999 {
            return self;
        }
        for line in &mut self.lines {
            line.style = fade_style(line.style, opacity, env);
            for span in &mut line.spans {
                span.style = fade_style(span.style, opacity, env);
            }
        }
        self
    }

    /// Shifts everything right by `cols`.
    pub fn indent(mut self, cols: u16) -> Self {
        if cols == 0 {
            return self;
        }
        let pad = " ".repeat(cols as usize);
        for line in &mut self.lines {
            line.spans.insert(0, Span::raw(pad.clone()));
        }
        for hit in &mut self.hits {
            hit.col += cols;
        }
        self
    }

    /// Pads with blank rows up to `height`.
    pub fn pad_to(&mut self, height: u16) {
        while self.height() < height {
            self.blank();
        }
    }
}

fn fade_color(color: Color, opacity: f32, env: &StyleEnvironment) -> Color {
    match color {
        Color::Rgb(r, g, b) => env.fade_rgb(Rgb(r, g, b), opacity),
        // Palette colours cannot be mixed; show them from half opacity on
        _ if opacity < 0.5 => env.page_color(),
        other => other,
    }
}

/// `style` as seen at `opacity` over the page background.
pub fn fade_style(style: Style, opacity: f32, env: &StyleEnvironment) -> Style {
    let mut out = style;
    out.fg = Some(match style.fg {
        Some(fg) => fade_color(fg, opacity, env),
        None => env.faded(style_env::TEXT, opacity),
    });
    if let Some(bg) = style.bg {
        out.bg = Some(fade_color(bg, opacity, env));
    }
    out
}

/// Scroll triggers of one section: the toggling section-level entrance and
/// the play-once entrance of its inner elements.
pub struct SectionTriggers {
    pub section: TriggerHandle,
    pub content: TriggerHandle,
}

/// Duration of the section-level fade/slide.
pub const SECTION_FADE_SECONDS: f32 = 1.5;
/// Rows reserved for entrance slides.
pub const SLIDE_ROWS: u16 = 2;

impl SectionTriggers {
    pub fn register(registry: &TriggerRegistry, section_seconds: f32, content_seconds: f32) -> Self {
        Self {
            section: registry.register(
                ScrollTrigger::new(0, 0),
                Entrance::new(EntranceMode::Toggle, section_seconds.max(SECTION_FADE_SECONDS)),
            ),
            content: registry.register(
                ScrollTrigger::new(0, 0),
                Entrance::new(EntranceMode::Once, content_seconds),
            ),
        }
    }

    pub fn set_bounds(&self, top: u16, height: u16) {
        self.section.set_bounds(top, height);
        self.content.set_bounds(top, height);
    }

    pub fn clocks(&self) -> Clocks {
        Clocks {
            section: self.section.elapsed(),
            content: self.content.elapsed(),
        }
    }
}

/// Entrance clock readings a section renders against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clocks {
    pub section: f32,
    pub content: f32,
}

impl Clocks {
    /// Every entrance complete.
    #[cfg(test)]
    pub const SETTLED: Clocks = Clocks { section: 1.0e6, content: 1.0e6 };
    /// Nothing played yet.
    #[cfg(test)]
    pub const HIDDEN: Clocks = Clocks { section: 0.0, content: 0.0 };

    /// Eased progress of the section-level fade/slide.
    pub fn section_progress(&self) -> f32 {
        Ease::Power2Out.apply(self.section / SECTION_FADE_SECONDS)
    }

    /// framer-style play-once element: `duration` seconds after `delay`.
    pub fn content_progress(&self, delay: f32, duration: f32) -> f32 {
        Ease::EaseOut.apply((self.content - delay) / duration.max(0.001))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Shared widgets
// ═══════════════════════════════════════════════════════════════════════════

pub fn display_width(spans: &[Span<'_>]) -> u16 {
    spans.iter().map(|s| s.content.width()).sum::<usize>() as u16
}

/// Left padding that centres `content_width` columns in `width`.
pub fn center_offset(content_width: u16, width: u16) -> u16 {
    width.saturating_sub(content_width) / 2
}

/// `spans` centred in `width` columns; returns the line and its left offset.
pub fn centered(spans: Vec<Span<'static>>, width: u16) -> (Line<'static>, u16) {
    let offset = center_offset(display_width(&spans), width);
    let mut all = Vec::with_capacity(spans.len() + 1);
    if offset > 0 {
        all.push(Span::raw(" ".repeat(offset as usize)));
    }
    all.extend(spans);
    (Line::from(all), offset)
}

/// Section title with `accent_words` highlighted.
pub fn accent_title(text: &str, accent_words: &[&str], env: &StyleEnvironment) -> Vec<Span<'static>> {
    let words: Vec<&str> = text.split(' ').collect();
    let mut spans = Vec::with_capacity(words.len());
    for word in words {
        if accent_words.contains(&word) {
            spans.push(Span::styled(word.to_string(), env.accent_style()));
        } else {
            spans.push(Span::styled(format!("{} ", word), env.title_style()));
        }
    }
    spans
}

/// Centred title and subtitle block used at the top of most sections.
pub fn header(ctx: &RenderCtx, title_key: &str, accents: &[&str], subtitle: Option<&str>) -> Fragment {
    let mut frag = Fragment::new();
    let (line, _) = centered(accent_title(ctx.t(title_key), accents, ctx.env), ctx.width);
    frag.push(line);
    let rule_w = ctx.width.min(24);
    let (rule, _) = centered(
        vec![Span::styled("━".repeat(rule_w as usize), ctx.env.primary_style())],
        ctx.width,
    );
    frag.push(rule);
    if let Some(sub) = subtitle {
        frag.blank();
        for l in crate::utils::text::wrap(sub, ctx.width as usize) {
            let (line, _) = centered(vec![Span::styled(l, ctx.env.dim_style())], ctx.width);
            frag.push(line);
        }
    }
    frag
}

/// Wrapped paragraph in the body text colour.
pub fn paragraph(text: &str, width: u16, style: Style) -> Fragment {
    let mut frag = Fragment::new();
    for l in crate::utils::text::wrap(text, width as usize) {
        frag.push(Line::from(Span::styled(l, style)));
    }
    frag
}

/// Row of `(number, label)` stats, each centred in an equal column.
pub fn stats_row(stats: &[(&str, &str)], width: u16, env: &StyleEnvironment) -> Fragment {
    let mut frag = Fragment::new();
    if stats.is_empty() {
        return frag;
    }
    let col_w = (width / stats.len() as u16).max(1) as usize;
    let mut numbers = Vec::new();
    let mut labels = Vec::new();
    for (number, label) in stats {
        numbers.push(Span::styled(
            crate::utils::text::pad_to_display_width(&crate::utils::text::center(number, col_w), col_w),
            env.accent_style(),
        ));
        let label = crate::utils::text::truncate_to_width(label, col_w.saturating_sub(1));
        labels.push(Span::styled(
            crate::utils::text::pad_to_display_width(&crate::utils::text::center(&label, col_w), col_w),
            env.dim_style(),
        ));
    }
    frag.push(Line::from(numbers));
    frag.push(Line::from(labels));
    frag
}

/// Horizontal level bar: `level` percent of `width`, grown by `progress`.
pub fn level_bar(level: u8, progress: f32, width: u16, color: Rgb, env: &StyleEnvironment) -> Vec<Span<'static>> {
    let width = width as usize;
    let filled = ((width as f32) * (level as f32 / 100.0) * progress.clamp(0.0, 1.0)).round() as usize;
    let filled = filled.min(width);
    vec![
        Span::styled("█".repeat(filled), Style::default().fg(env.rgb_color(color))),
        Span::styled("░".repeat(width - filled), Style::default().fg(env.faded(style_env::BORDER, 0.6))),
    ]
}

/// `[ label ]` button spans, styled for the pointer state of `target`.
pub fn button(label: &str, target: &Target, primary: bool, ctx: &RenderCtx) -> Vec<Span<'static>> {
    let base = if primary {
        ctx.env.accent_style().add_modifier(Modifier::REVERSED)
    } else {
        ctx.env.primary_style()
    };
    let style = ctx.interaction.style(target, base, ctx.env);
    vec![Span::styled(format!("[ {} ]", label), style)]
}

/// Lays clickable items out left to right, wrapping at `width`, each row
/// centred. Every item gets a hit region.
pub fn flow(items: Vec<(Vec<Span<'static>>, Target)>, width: u16, gap: u16) -> Fragment {
    let mut rows: Vec<Vec<(Vec<Span<'static>>, Target)>> = vec![Vec::new()];
    let mut used = 0u16;
    for (spans, target) in items {
        let w = display_width(&spans);
        let needed = if used == 0 { w } else { used + gap + w };
        if needed > width && used > 0 {
            rows.push(Vec::new());
            used = w;
        } else {
            used = needed;
        }
        if let Some(row) = rows.last_mut() {
            row.push((spans, target));
        }
    }

    let mut frag = Fragment::new();
    for row in rows.into_iter().filter(|r| !r.is_empty()) {
        let total: u16 = row.iter().map(|(s, _)| display_width(s)).sum::<u16>()
            + gap * (row.len() as u16 - 1);
        let mut col = center_offset(total, width);
        let mut spans = vec![Span::raw(" ".repeat(col as usize))];
        let mut hits = Vec::new();
        for (i, (item, target)) in row.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(gap as usize)));
                col += gap;
            }
            let w = display_width(&item);
            hits.push((col, w, target));
            col += w;
            spans.extend(item);
        }
        frag.push(Line::from(spans));
        for (col, w, target) in hits {
            frag.hit(col, w, target);
        }
    }
    frag
}

/// Boxed card: title bar, body lines, bottom border. Body lines are padded
/// to the inner width.
pub fn card(
    title: Vec<Span<'static>>,
    body: Vec<Line<'static>>,
    width: u16,
    border: Style,
    fill: Style,
) -> Fragment {
    let inner = width.saturating_sub(4) as usize;
    let mut frag = Fragment::new();

    let title_w = display_width(&title) as usize;
    let mut top = vec![Span::styled("╭─ ", border)];
    top.extend(title);
    top.push(Span::styled(
        format!(" {}╮", "─".repeat(inner.saturating_sub(title_w + 1))),
        border,
    ));
    frag.push(Line::from(top));

    for line in body {
        let used = display_width(&line.spans) as usize;
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(line.spans.into_iter().map(|s| {
            let style = fill.patch(s.style);
            Span::styled(s.content, style)
        }));
        spans.push(Span::styled(" ".repeat(inner.saturating_sub(used)), fill));
        spans.push(Span::styled(" │", border));
        frag.push(Line::from(spans));
    }

    frag.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(inner + 2)),
        border,
    )));
    frag
}

/// Parses one of the fixed `#rrggbb` content colours.
pub fn hex(value: &str) -> Rgb {
    crate::utils::color::resolve(value, Rgb::BLACK).unwrap_or(Rgb(0xff, 0xff, 0xff))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Fragment;
    use crate::i18n::{Locale, LocaleStore};
    use crate::services::storage::MemoryStorage;

    /// Plain text of every row, newline separated.
    pub fn text_of(frag: &Fragment) -> String {
        frag.lines()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn loaded_i18n(locale: Locale) -> LocaleStore {
        let mut i18n = LocaleStore::new(MemoryStorage::new().shared());
        i18n.load();
        if locale != Locale::FALLBACK {
            i18n.set_locale(locale);
        }
        i18n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> StyleEnvironment {
        let mut env = StyleEnvironment::new(true);
        env.set_page_background("#000000");
        env.set_property(style_env::TEXT, "#ffffff");
        env.set_property(style_env::ACCENT, "#00ff88");
        env
    }

    #[test]
    fn test_anchors_are_distinct() {
        let anchors: std::collections::HashSet<_> = SectionId::all().iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), SectionId::all().len());
        assert_eq!(SectionId::Projects.anchor(), "projects");
    }

    #[test]
    fn test_append_offsets_hits() {
        let mut a = Fragment::new();
        a.blank();
        a.blank();
        let mut b = Fragment::new();
        b.push(Line::from("x"));
        b.hit(0, 1, Target::Project(3));
        a.append(b);
        assert_eq!(a.height(), 3);
        assert_eq!(a.hits()[0].row, 2);
    }

    #[test]
    fn test_reveal_keeps_band_height() {
        let env = env();
        for p in [0.0, 0.3, 0.5, 1.0] {
            let mut frag = Fragment::new();
            let mut inner = Fragment::new();
            inner.push(Line::from("body"));
            inner.hit(0, 4, Target::ThemeMenu);
            frag.reveal(inner, p, 3, &env);
            assert_eq!(frag.height(), 4, "progress {p}");
        }
    }

    #[test]
    fn test_reveal_slides_content() {
        let env = env();
        let mut hidden = Fragment::new();
        let mut inner = Fragment::new();
        inner.push(Line::from("body"));
        inner.hit(0, 4, Target::ThemeMenu);
        hidden.reveal(inner, 0.0, 2, &env);
        assert_eq!(hidden.hits()[0].row, 2);

        let mut shown = Fragment::new();
        let mut inner = Fragment::new();
        inner.push(Line::from("body"));
        inner.hit(0, 4, Target::ThemeMenu);
        shown.reveal(inner, 1.0, 2, &env);
        assert_eq!(shown.hits()[0].row, 0);
    }

    #[test]
    fn test_fade_toward_page() {
        let env = env();
        let style = Style::default().fg(Color::Rgb(255, 255, 255));
        assert_eq!(fade_style(style, 0.0, &env).fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(fade_style(style, 1.0, &env).fg, Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn test_accent_title() {
        let env = env();
        let spans = accent_title("ABOUT ME", &["ME"], &env);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "ABOUT ");
        assert_eq!(spans[1].content, "ME");
        assert_eq!(spans[1].style, env.accent_style());

        let plain = accent_title("ОБО МНЕ", &["ME"], &env);
        assert!(plain.iter().all(|s| s.style == env.title_style()));
    }

    #[test]
    fn test_level_bar_width() {
        let env = env();
        let spans = level_bar(95, 1.0, 20, Rgb(0, 255, 136), &env);
        assert_eq!(spans[0].content.chars().count(), 19);
        assert_eq!(spans[1].content.chars().count(), 1);

        let empty = level_bar(95, 0.0, 20, Rgb(0, 255, 136), &env);
        assert_eq!(empty[0].content, "");
    }

    #[test]
    fn test_flow_wraps_and_records_hits() {
        let items: Vec<_> = (0..4)
            .map(|i| (vec![Span::raw("[ item ]")], Target::Project(i)))
            .collect();
        let frag = flow(items, 20, 2);
        // two 8-column items fit per 20-column row
        assert_eq!(frag.height(), 2);
        assert_eq!(frag.hits().len(), 4);
        assert_eq!(frag.hits()[0], Hit { row: 0, col: 1, width: 8, target: Target::Project(0) });
        assert_eq!(frag.hits()[1].col, 11);
        assert_eq!(frag.hits()[2].row, 1);
    }

    #[test]
    fn test_card_rows_have_equal_width() {
        let env = env();
        let frag = card(
            vec![Span::raw("Title")],
            vec![Line::from("short"), Line::from("a little longer")],
            30,
            env.border_style(),
            env.card_style(),
        );
        assert_eq!(frag.height(), 4);
        for line in frag.lines() {
            assert_eq!(display_width(&line.spans), 30);
        }
    }
}
