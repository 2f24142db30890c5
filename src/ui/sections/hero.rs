use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::animation::typewriter::{PHRASE_SECONDS, REPEAT_DELAY_SECONDS};
use crate::animation::{Ease, Position, Timeline, Tween, Typewriter};
use crate::ui::hitmap::Target;
use crate::utils::text::truncate_to_width;
use super::{button, centered, flow, paragraph, stats_row, Fragment, RenderCtx, SectionId};

const TITLE_TRACK: usize = 0;
const SUBTITLE_TRACK: usize = 1;
const CTA_TRACK: usize = 2;

/// Fixed phrases the title types after the translated one.
const EXTRA_PHRASES: [&str; 2] = ["CODE WIZARD", "TECH VISIONARY"];

/// Landing screen. It plays its intro once at startup instead of waiting
/// for a scroll trigger.
pub struct HeroSection {
    intro: Timeline,
    content: Tween,
    badge: Tween,
    description: Tween,
    stats: Tween,
    hint: Tween,
    typewriter: Typewriter,
    clock: f32,
}

impl HeroSection {
    pub fn new(title: &str) -> Self {
        let mut intro = Timeline::new()
            .with_delay(0.5)
            .then(2.0, Ease::BackOut(1.7), Position::After)
            .then(1.5, Ease::Power2Out, Position::Relative(-1.0))
            .then(1.0, Ease::Power2Out, Position::Relative(-0.5));
        intro.play();

        let mut phrases = vec![title.to_string()];
        phrases.extend(EXTRA_PHRASES.iter().map(|p| p.to_string()));

        let started = |mut t: Tween| {
            t.play();
            t
        };
        Self {
            intro,
            content: started(Tween::new(2.0, Ease::Power3Out)),
            badge: started(Tween::new(0.8, Ease::EaseOut).with_delay(1.0)),
            description: started(Tween::new(0.8, Ease::EaseOut).with_delay(1.5)),
            stats: started(Tween::new(1.0, Ease::EaseOut).with_delay(2.0)),
            hint: started(Tween::new(1.0, Ease::EaseOut).with_delay(3.0)),
            typewriter: Typewriter::new(phrases, PHRASE_SECONDS, REPEAT_DELAY_SECONDS),
            clock: 0.0,
        }
    }

    /// Advances the intro; `title` is the hero title in the current language.
    pub fn tick(&mut self, dt: f32, title: &str) {
        self.typewriter.set_phrase(0, title);
        self.intro.tick(dt);
        for tween in [
            &mut self.content,
            &mut self.badge,
            &mut self.description,
            &mut self.stats,
            &mut self.hint,
        ] {
            tween.tick(dt);
        }
        self.typewriter.tick(dt);
        self.clock += dt;
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        !self.intro.is_finished() || !self.hint.is_finished()
    }

    fn title_line(&self, ctx: &RenderCtx) -> Line<'static> {
        let text = self.typewriter.text();
        let spaced = text.chars().map(|c| c.to_string()).collect::<Vec<_>>().join(" ");
        let shown = if spaced.chars().count() <= ctx.width as usize { spaced } else { text };
        let shown = truncate_to_width(&shown, ctx.width as usize);
        let (line, _) = centered(
            vec![Span::styled(shown, ctx.env.accent_style().add_modifier(Modifier::BOLD))],
            ctx.width,
        );
        line
    }

    pub fn render(&self, ctx: &RenderCtx) -> Fragment {
        let env = ctx.env;
        let w = ctx.width;
        let content = self.content.progress();
        let mut body = Fragment::new();

        let badge_label = format!(" ● {} ", ctx.t("hero.badge"));
        let (badge, _) = centered(
            vec![Span::styled(badge_label, env.primary_style().add_modifier(Modifier::REVERSED))],
            w,
        );
        let mut badge_frag = Fragment::new();
        badge_frag.push(badge);
        badge_frag.blank();
        body.reveal(badge_frag, self.badge.progress().min(content), 1, env);

        let mut title = Fragment::new();
        title.push(self.title_line(ctx));
        title.blank();
        body.reveal(title, self.intro.progress_of(TITLE_TRACK).min(content), 1, env);

        let mut subtitle = Fragment::new();
        for l in crate::utils::text::wrap(ctx.t("hero.subtitle"), w as usize) {
            let (line, _) = centered(vec![Span::styled(l, env.secondary_style())], w);
            subtitle.push(line);
        }
        subtitle.blank();
        body.reveal(subtitle, self.intro.progress_of(SUBTITLE_TRACK), 1, env);

        let text_w = w.min(72);
        let mut description = paragraph(ctx.t("hero.description"), text_w, env.dim_style())
            .indent(super::center_offset(text_w, w));
        description.blank();
        body.reveal(description, self.description.progress(), 1, env);

        let work = Target::Cta(SectionId::Projects);
        let contact = Target::Cta(SectionId::Contact);
        let ctas = vec![
            (button(ctx.t("hero.cta.work"), &work, true, ctx), work),
            (button(ctx.t("hero.cta.contact"), &contact, false, ctx), contact),
        ];
        let mut cta = flow(ctas, w, 4);
        cta.blank();
        body.reveal(cta, self.intro.progress_of(CTA_TRACK), 1, env);

        let stats = stats_row(
            &[
                ("50+", ctx.t("hero.stats.projects")),
                ("3+", ctx.t("hero.stats.years")),
                ("100%", ctx.t("hero.stats.passion")),
            ],
            w.min(60),
            env,
        )
        .indent(super::center_offset(w.min(60), w));
        body.reveal(stats, self.stats.progress(), 1, env);

        // Scroll hint; the arrow bounces inside its two rows.
        let mut hint = Fragment::new();
        let (label, _) = centered(vec![Span::styled(ctx.t("hero.scroll").to_string(), env.dim_style())], w);
        hint.push(label);
        let low = (self.clock * std::f32::consts::PI).sin() > 0.0;
        let (arrow, _) = centered(vec![Span::styled("↓", env.primary_style())], w);
        if low {
            hint.blank();
            hint.push(arrow);
        } else {
            hint.push(arrow);
            hint.blank();
        }
        body.reveal(hint, self.hint.progress(), 1, env);

        let mut frag = Fragment::new();
        let top = ctx.viewport_h.saturating_sub(body.height()) / 2;
        frag.blanks(top);
        frag.append(body);
        frag.pad_to(ctx.viewport_h);
        frag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::ui::hitmap::Interaction;
    use crate::ui::sections::test_support::{loaded_i18n, text_of};
    use crate::ui::style_env::StyleEnvironment;

    fn render(hero: &HeroSection, locale: Locale, viewport_h: u16) -> Fragment {
        let i18n = loaded_i18n(locale);
        let env = StyleEnvironment::new(true);
        let interaction = Interaction::default();
        let ctx = RenderCtx { i18n: &i18n, env: &env, interaction: &interaction, width: 80, viewport_h };
        hero.render(&ctx)
    }

    #[test]
    fn test_fills_the_viewport() {
        let hero = HeroSection::new("IT-INTEL");
        assert_eq!(render(&hero, Locale::En, 40).height(), 40);
        // Short terminals grow the section instead of clipping it.
        let short = render(&hero, Locale::En, 5).height();
        assert!(short > 5);
    }

    #[test]
    fn test_height_stable_during_intro() {
        let mut hero = HeroSection::new("IT-INTEL");
        let start = render(&hero, Locale::En, 10).height();
        hero.tick(1.3, "IT-INTEL");
        let mid = render(&hero, Locale::En, 10).height();
        hero.tick(10.0, "IT-INTEL");
        assert_eq!(start, mid);
        assert_eq!(mid, render(&hero, Locale::En, 10).height());
    }

    #[test]
    fn test_settled_hero_shows_translations_and_ctas() {
        let mut hero = HeroSection::new("IT-INTEL");
        // lands inside the first phrase of the next typing cycle
        hero.tick(10.0, "IT-INTEL");
        let frag = render(&hero, Locale::Ru, 40);
        let text = text_of(&frag);
        assert!(text.contains("I T - I N T E L"));
        assert!(text.contains("СОЗДАЮ БУДУЩЕЕ ВЕБ-РАЗРАБОТКИ"));
        assert!(text.contains("50+"));
        assert!(frag.hits().iter().any(|h| h.target == Target::Cta(SectionId::Projects)));
        assert!(frag.hits().iter().any(|h| h.target == Target::Cta(SectionId::Contact)));
        assert!(!hero.is_animating());
    }
}
