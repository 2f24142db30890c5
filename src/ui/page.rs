//! The scrolling document: all sections stacked, with smooth anchor jumps.

use std::collections::HashMap;

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::animation::TriggerRegistry;
use crate::i18n::LocaleStore;
use super::hitmap::{HitMap, Interaction, Target};
use super::sections::about::AboutSection;
use super::sections::contact::ContactSection;
use super::sections::hero::HeroSection;
use super::sections::projects::ProjectsSection;
use super::sections::skills::SkillsSection;
use super::sections::{Fragment, RenderCtx, SectionId};
use super::style_env::StyleEnvironment;

/// Widest the content column gets, margins excluded.
const MAX_CONTENT_WIDTH: u16 = 96;
/// Share of the remaining distance covered per 60 Hz frame while jumping.
const SMOOTH_FACTOR: f32 = 0.2;
/// Rows kept above a project card revealed from the keyboard.
const REVEAL_MARGIN: u16 = 2;

pub struct Page {
    pub hero: HeroSection,
    pub about: AboutSection,
    pub skills: SkillsSection,
    pub projects: ProjectsSection,
    pub contact: ContactSection,
    scroll: f32,
    target: Option<f32>,
    tops: [u16; 5],
    heights: [u16; 5],
    project_rows: HashMap<u32, u16>,
    viewport_h: u16,
    doc_height: u16,
    laid_out: bool,
}

impl Page {
    /// Mounts every section; the scrolled sections register their triggers
    /// with `registry`. The page starts at the top.
    pub fn new(registry: &TriggerRegistry, hero_title: &str) -> Self {
        Self {
            hero: HeroSection::new(hero_title),
            about: AboutSection::new(registry),
            skills: SkillsSection::new(registry),
            projects: ProjectsSection::new(registry),
            contact: ContactSection::new(registry),
            scroll: 0.0,
            target: None,
            tops: [0; 5],
            heights: [0; 5],
            project_rows: HashMap::new(),
            viewport_h: 0,
            doc_height: 0,
            laid_out: false,
        }
    }

    /// Whether section bounds are known (at least one frame was drawn).
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    pub fn scroll_y(&self) -> u16 {
        self.scroll.round().max(0.0) as u16
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_h
    }

    #[cfg(test)]
    pub fn doc_height(&self) -> u16 {
        self.doc_height
    }

    pub fn max_scroll(&self) -> u16 {
        self.doc_height.saturating_sub(self.viewport_h)
    }

    pub fn section_top(&self, id: SectionId) -> u16 {
        self.tops[id.index()]
    }

    #[cfg(test)]
    pub fn is_scrolling(&self) -> bool {
        self.target.is_some()
    }

    pub fn tick(&mut self, dt: f32, i18n: &LocaleStore) {
        self.hero.tick(dt, i18n.t("hero.title"));
        self.projects.tick(dt);

        if let Some(target) = self.target {
            let k = 1.0 - (1.0 - SMOOTH_FACTOR).powf(dt * 60.0);
            self.scroll += (target - self.scroll) * k;
            if (target - self.scroll).abs() < 0.5 {
                self.scroll = target;
                self.target = None;
            }
        }
    }

    /// Manual scrolling; cancels a running jump.
    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        let next = (self.scroll_y() as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = next as f32;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to_row(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to_row(self.max_scroll());
    }

    /// Smooth jump to the section anchored at `id`.
    pub fn scroll_to(&mut self, id: SectionId) {
        tracing::debug!(anchor = id.anchor(), "scrolling to section");
        self.scroll_to_row(self.section_top(id));
    }

    pub fn scroll_to_row(&mut self, row: u16) {
        self.target = Some(row.min(self.max_scroll()) as f32);
    }

    /// Section owning the upper third of the viewport.
    pub fn current_section(&self) -> SectionId {
        let probe = self.scroll_y().saturating_add(self.viewport_h / 3);
        SectionId::all()
            .iter()
            .copied()
            .filter(|id| self.section_top(*id) <= probe)
            .last()
            .unwrap_or(SectionId::Hero)
    }

    pub fn next_section(&mut self) {
        let all = SectionId::all();
        let idx = (self.current_section().index() + 1).min(all.len() - 1);
        self.scroll_to(all[idx]);
    }

    pub fn prev_section(&mut self) {
        let current = self.current_section();
        // Inside a section, go back to its top first.
        if self.scroll_y() > self.section_top(current) {
            self.scroll_to(current);
        } else {
            self.scroll_to(SectionId::all()[current.index().saturating_sub(1)]);
        }
    }

    /// Brings the card of project `id` into view if it is off screen.
    pub fn reveal_project(&mut self, id: u32) {
        let Some(&row) = self.project_rows.get(&id) else {
            return;
        };
        let top = self.scroll_y();
        if row < top || row + 4 > top + self.viewport_h {
            self.scroll_to_row(row.saturating_sub(REVEAL_MARGIN));
        }
    }

    fn render_sections(&self, ctx: &RenderCtx) -> [Fragment; 5] {
        [
            self.hero.render(ctx),
            self.about.render(ctx),
            self.skills.render(ctx),
            self.projects.render(ctx),
            self.contact.render(ctx),
        ]
    }

    /// Lays out and draws the visible part of the document into `area`,
    /// recording clickable regions in `hitmap`.
    pub fn draw(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        i18n: &LocaleStore,
        env: &StyleEnvironment,
        interaction: &Interaction,
        hitmap: &mut HitMap,
    ) {
        let content_w = area.width.saturating_sub(4).min(MAX_CONTENT_WIDTH);
        let margin = (area.width - content_w) / 2;
        let ctx = RenderCtx {
            i18n,
            env,
            interaction,
            width: content_w,
            viewport_h: area.height,
        };

        let mut doc = Fragment::new();
        for (i, fragment) in self.render_sections(&ctx).into_iter().enumerate() {
            self.tops[i] = doc.height();
            self.heights[i] = fragment.height();
            doc.append(fragment);
        }
        self.viewport_h = area.height;
        self.doc_height = doc.height();

        self.about.triggers().set_bounds(self.tops[1], self.heights[1]);
        self.skills.triggers().set_bounds(self.tops[2], self.heights[2]);
        self.projects.triggers().set_bounds(self.tops[3], self.heights[3]);
        self.contact.triggers().set_bounds(self.tops[4], self.heights[4]);

        // Resizes can shrink the document under the current position.
        let max = self.max_scroll() as f32;
        self.scroll = self.scroll.min(max);
        if let Some(t) = self.target.as_mut() {
            *t = t.min(max);
        }

        let doc = doc.indent(margin);
        let top = self.scroll_y();
        let bottom = top.saturating_add(area.height);
        let (lines, hits) = doc.into_parts();

        self.project_rows.clear();
        for hit in &hits {
            if let Target::Project(id) = hit.target {
                self.project_rows.entry(id).or_insert(hit.row);
            }
            if hit.row < top || hit.row >= bottom || hit.col >= area.width {
                continue;
            }
            let width = hit.width.min(area.width - hit.col);
            hitmap.push(
                Rect::new(area.x + hit.col, area.y + hit.row - top, width, 1),
                hit.target.clone(),
            );
        }

        let visible: Vec<Line<'static>> = lines
            .into_iter()
            .skip(top as usize)
            .take(area.height as usize)
            .collect();
        frame.render_widget(Paragraph::new(visible).style(env.page_style()), area);
        self.laid_out = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::ui::sections::test_support::loaded_i18n;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_page(page: &mut Page, width: u16, height: u16) -> HitMap {
        let i18n = loaded_i18n(Locale::En);
        let env = StyleEnvironment::new(true);
        let interaction = Interaction::default();
        let mut hitmap = HitMap::new();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                page.draw(frame, area, &i18n, &env, &interaction, &mut hitmap);
            })
            .unwrap();
        hitmap
    }

    fn settle(page: &mut Page) {
        let i18n = loaded_i18n(Locale::En);
        for _ in 0..600 {
            page.tick(1.0 / 30.0, &i18n);
        }
    }

    #[test]
    fn test_layout_stacks_sections_in_order() {
        let registry = TriggerRegistry::new();
        let mut page = Page::new(&registry, "IT-INTEL");
        assert!(!page.is_laid_out());
        draw_page(&mut page, 100, 30);
        assert!(page.is_laid_out());

        assert_eq!(page.section_top(SectionId::Hero), 0);
        let tops: Vec<u16> = SectionId::all().iter().map(|id| page.section_top(*id)).collect();
        assert!(tops.windows(2).all(|w| w[0] < w[1]), "{tops:?}");
        assert!(page.doc_height() > page.section_top(SectionId::Contact));
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_smooth_scroll_reaches_anchor() {
        let registry = TriggerRegistry::new();
        let mut page = Page::new(&registry, "IT-INTEL");
        draw_page(&mut page, 100, 30);

        page.scroll_to(SectionId::Skills);
        assert!(page.is_scrolling());
        let i18n = loaded_i18n(Locale::En);
        page.tick(1.0 / 30.0, &i18n);
        let partway = page.scroll_y();
        assert!(partway > 0 && partway < page.section_top(SectionId::Skills));

        settle(&mut page);
        assert!(!page.is_scrolling());
        assert_eq!(page.scroll_y(), page.section_top(SectionId::Skills));
        assert_eq!(page.current_section(), SectionId::Skills);
    }

    #[test]
    fn test_manual_scroll_cancels_jump_and_clamps() {
        let registry = TriggerRegistry::new();
        let mut page = Page::new(&registry, "IT-INTEL");
        draw_page(&mut page, 100, 30);

        page.scroll_to(SectionId::Contact);
        page.scroll_by(3);
        assert!(!page.is_scrolling());
        assert_eq!(page.scroll_y(), 3);

        page.scroll_by(-10);
        assert_eq!(page.scroll_y(), 0);
        page.scroll_by(i32::from(u16::MAX));
        assert_eq!(page.scroll_y(), page.max_scroll());
    }

    #[test]
    fn test_hits_follow_scroll_position() {
        let registry = TriggerRegistry::new();
        let mut page = Page::new(&registry, "IT-INTEL");
        let hitmap = draw_page(&mut page, 100, 30);
        // the hero's call-to-action buttons are on the first screen
        assert!(!hitmap.is_empty());

        page.scroll_to(SectionId::Contact);
        settle(&mut page);
        let hitmap = draw_page(&mut page, 100, 30);
        let mut found = false;
        for y in 0..30 {
            for x in 0..100 {
                if let Some(Target::Cta(_)) = hitmap.target_at(x, y) {
                    panic!("hero button still clickable at {x},{y}");
                }
                if let Some(Target::Link(url)) = hitmap.target_at(x, y) {
                    found |= url.contains("t.me");
                }
            }
        }
        assert!(found);
    }

    #[test]
    fn test_prev_section_returns_to_section_top_first() {
        let registry = TriggerRegistry::new();
        let mut page = Page::new(&registry, "IT-INTEL");
        draw_page(&mut page, 100, 30);

        let about = page.section_top(SectionId::About);
        page.scroll_by(about as i32 + 4);
        page.prev_section();
        settle(&mut page);
        assert_eq!(page.scroll_y(), about);
    }
}
