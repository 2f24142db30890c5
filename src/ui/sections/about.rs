use ratatui::text::{Line, Span};

use crate::animation::{Ease, Position, Stagger, Timeline, TriggerRegistry};
use crate::utils::text::pad_to_display_width;
use super::{
    card, centered, center_offset, header, hex, level_bar, paragraph, stats_row, Clocks, Fragment,
    RenderCtx, SectionTriggers, SLIDE_ROWS,
};

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub color: &'static str,
}

pub const SKILLS: [Skill; 6] = [
    Skill { name: "React/Next.js", level: 95, color: "#00ff88" },
    Skill { name: "TypeScript", level: 90, color: "#0088ff" },
    Skill { name: "Node.js", level: 85, color: "#ff0088" },
    Skill { name: "Python", level: 80, color: "#ff8800" },
    Skill { name: "AWS/Cloud", level: 75, color: "#8800ff" },
    Skill { name: "AI/ML", level: 70, color: "#00ffff" },
];

const TEXT_TRACK: usize = 0;
const CARD_TRACK: usize = 1;

fn bar_stagger() -> Stagger {
    Stagger::new(0.2, 1.5, Ease::EaseOut)
}

pub struct AboutSection {
    triggers: SectionTriggers,
    timeline: Timeline,
}

impl AboutSection {
    pub fn new(registry: &TriggerRegistry) -> Self {
        // text slides in, card follows one second before the text is done
        let timeline = Timeline::new()
            .then(1.5, Ease::Power2Out, Position::After)
            .then(1.5, Ease::Power2Out, Position::Relative(-1.0));
        let content = bar_stagger().total(SKILLS.len());
        Self {
            triggers: SectionTriggers::register(registry, timeline.duration(), content),
            timeline,
        }
    }

    pub fn triggers(&self) -> &SectionTriggers {
        &self.triggers
    }

    pub fn render(&self, ctx: &RenderCtx) -> Fragment {
        self.render_at(ctx, self.triggers.clocks())
    }

    pub fn render_at(&self, ctx: &RenderCtx, clocks: Clocks) -> Fragment {
        let env = ctx.env;
        let w = ctx.width;
        let mut body = Fragment::new();

        let mut title = header(ctx, "about.title", &["ME"], None);
        title.blank();
        body.reveal(title, clocks.content_progress(0.0, 0.8), 1, env);

        // Text column
        let mut text = Fragment::new();
        text.reveal(
            paragraph(ctx.t("about.description1"), w, env.text_style()),
            clocks.content_progress(0.2, 0.8),
            1,
            env,
        );
        text.reveal(
            paragraph(ctx.t("about.description2"), w, env.text_style()),
            clocks.content_progress(0.4, 0.8),
            1,
            env,
        );
        text.reveal(
            stats_row(
                &[
                    ("3+", ctx.t("about.stats.experience")),
                    ("50+", ctx.t("about.stats.projects")),
                    ("100%", ctx.t("about.stats.satisfaction")),
                ],
                w,
                env,
            ),
            clocks.content_progress(0.6, 0.8),
            1,
            env,
        );
        body.reveal(text, self.timeline.progress_at(TEXT_TRACK, clocks.section), SLIDE_ROWS, env);

        // Profile card
        let card_w = w.min(44);
        let profile = card(
            vec![
                Span::styled("◉ ", env.primary_style()),
                Span::styled(ctx.t("about.profile.name").to_string(), env.title_style()),
            ],
            vec![
                Line::from(Span::styled(ctx.t("about.profile.title").to_string(), env.secondary_style())),
                Line::from(vec![
                    Span::styled("● ", env.primary_style()),
                    Span::styled(ctx.t("about.profile.status").to_string(), env.text_style()),
                ]),
            ],
            card_w,
            env.border_style(),
            env.card_style(),
        )
        .indent(center_offset(card_w, w));
        body.reveal(profile, self.timeline.progress_at(CARD_TRACK, clocks.section), SLIDE_ROWS, env);

        // Skill bars
        let mut skills = Fragment::new();
        let (heading, _) = centered(
            vec![Span::styled(ctx.t("about.skills.title").to_string(), env.title_style())],
            w,
        );
        skills.push(heading);
        skills.blank();
        let stagger = bar_stagger();
        let label_w = w.saturating_sub(6) as usize;
        for (i, skill) in SKILLS.iter().enumerate() {
            skills.push(Line::from(vec![
                Span::styled(pad_to_display_width(skill.name, label_w), env.text_style()),
                Span::styled(format!("{:>5}%", skill.level), env.primary_style()),
            ]));
            skills.push(Line::from(level_bar(
                skill.level,
                stagger.progress(i, clocks.content),
                w,
                hex(skill.color),
                env,
            )));
        }
        body.reveal(skills, clocks.content_progress(0.8, 1.0), SLIDE_ROWS, env);

        let mut frag = Fragment::new();
        frag.blank();
        frag.reveal(body, clocks.section_progress(), SLIDE_ROWS, env);
        frag.blank();
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

    #[test]
    fn test_height_independent_of_progress() {
        let registry = TriggerRegistry::new();
        let section = AboutSection::new(&registry);
        let i18n = loaded_i18n(Locale::En);
        let env = StyleEnvironment::new(true);
        let interaction = Interaction::default();
        let ctx = RenderCtx { i18n: &i18n, env: &env, interaction: &interaction, width: 80, viewport_h: 30 };

        let hidden = section.render_at(&ctx, Clocks::HIDDEN);
        let mid = section.render_at(&ctx, Clocks { section: 0.7, content: 1.1 });
        let shown = section.render_at(&ctx, Clocks::SETTLED);
        assert_eq!(hidden.height(), shown.height());
        assert_eq!(mid.height(), shown.height());
    }

    #[test]
    fn test_renders_skills_in_current_language() {
        let registry = TriggerRegistry::new();
        let section = AboutSection::new(&registry);
        let i18n = loaded_i18n(Locale::Ru);
        let env = StyleEnvironment::new(true);
        let interaction = Interaction::default();
        let ctx = RenderCtx { i18n: &i18n, env: &env, interaction: &interaction, width: 80, viewport_h: 30 };

        let text = text_of(&section.render_at(&ctx, Clocks::SETTLED));
        assert!(text.contains("ТЕХНИЧЕСКИЕ НАВЫКИ"));
        assert!(text.contains("React/Next.js"));
        assert!(text.contains("95%"));
        assert!(text.contains("AI/ML"));
    }

    #[test]
    fn test_registers_two_triggers() {
        let registry = TriggerRegistry::new();
        let section = AboutSection::new(&registry);
        assert_eq!(registry.len(), 2);
        drop(section);
        assert!(registry.is_empty());
    }
}
