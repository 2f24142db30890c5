use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::animation::{Ease, Position, Stagger, Timeline, TriggerRegistry};
use crate::ui::hitmap::Target;
use crate::utils::text::wrap;
use super::{card, center_offset, flow, header, Clocks, Fragment, RenderCtx, SectionTriggers, SLIDE_ROWS};

pub struct Social {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const SOCIALS: [Social; 4] = [
    Social { name: "GitHub", icon: "🐙", url: "https://github.com/it-intel" },
    Social { name: "Discord", icon: "💬", url: "https://discordapp.com/users/874811573590437948" },
    Social { name: "VK", icon: "🔵", url: "https://vk.com/useroutput" },
    Social { name: "Telegram", icon: "✈️", url: "https://t.me/WhyLelouch" },
];

const HEADER_TRACK: usize = 0;
const INFO_TRACK: usize = 1;

fn social_stagger() -> Stagger {
    Stagger::new(0.1, 0.5, Ease::EaseOut)
}

pub struct ContactSection {
    triggers: SectionTriggers,
    timeline: Timeline,
}

impl ContactSection {
    pub fn new(registry: &TriggerRegistry) -> Self {
        let timeline = Timeline::new()
            .then(1.0, Ease::Power2Out, Position::After)
            .then(1.0, Ease::Power2Out, Position::Relative(-0.5));
        let content = social_stagger().total(SOCIALS.len()).max(1.0);
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

        let mut title = header(ctx, "contact.title", &["СВЯЖЕМСЯ", "CONNECT"], Some(ctx.t("contact.subtitle")));
        title.blank();
        body.reveal(title, self.timeline.progress_at(HEADER_TRACK, clocks.section), SLIDE_ROWS, env);

        let card_w = w.min(64);
        let inner = card_w.saturating_sub(4) as usize;
        let mut lines = Vec::new();
        for l in wrap(ctx.t("contact.info.description"), inner) {
            lines.push(Line::from(Span::styled(l, env.text_style())));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            ctx.t("contact.info.follow").to_string(),
            env.secondary_style().add_modifier(Modifier::BOLD),
        )));
        let info = card(
            vec![
                Span::styled("✉ ", env.primary_style()),
                Span::styled(ctx.t("contact.info.title").to_string(), env.title_style()),
            ],
            lines,
            card_w,
            env.border_style(),
            env.card_style(),
        )
        .indent(center_offset(card_w, w));

        let mut info_block = Fragment::new();
        info_block.append(info);
        info_block.blank();

        let links: Vec<_> = SOCIALS
            .iter()
            .enumerate()
            .map(|(i, social)| {
                let target = Target::Link(social.url);
                let base = ctx.interaction.style(&target, env.primary_style(), env);
                let p = social_stagger().progress(i, clocks.content);
                let style = super::fade_style(base, p, env);
                let spans = vec![
                    Span::styled(format!("{} ", social.icon), style),
                    Span::styled(social.name, style.patch(Style::default().add_modifier(Modifier::UNDERLINED))),
                ];
                (spans, target)
            })
            .collect();
        info_block.append(flow(links, w, 4));

        body.reveal(info_block, self.timeline.progress_at(INFO_TRACK, clocks.section), SLIDE_ROWS, env);

        let mut frag = Fragment::new();
        frag.blank();
        frag.reveal(body, clocks.section_progress(), SLIDE_ROWS, env);
        frag.blanks(2);
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

    fn render(locale: Locale, clocks: Clocks) -> Fragment {
        let registry = TriggerRegistry::new();
        let section = ContactSection::new(&registry);
        let i18n = loaded_i18n(locale);
        let env = StyleEnvironment::new(true);
        let interaction = Interaction::default();
        let ctx = RenderCtx { i18n: &i18n, env: &env, interaction: &interaction, width: 80, viewport_h: 30 };
        section.render_at(&ctx, clocks)
    }

    #[test]
    fn test_every_social_link_is_clickable() {
        let frag = render(Locale::En, Clocks::SETTLED);
        for social in SOCIALS.iter() {
            assert!(
                frag.hits().iter().any(|h| h.target == Target::Link(social.url)),
                "{}",
                social.name
            );
        }
    }

    #[test]
    fn test_info_card_follows_language() {
        let en = text_of(&render(Locale::En, Clocks::SETTLED));
        let ru = text_of(&render(Locale::Ru, Clocks::SETTLED));
        assert!(en.contains("My socials"));
        assert!(ru.contains("Мои соцсети"));
        assert!(ru.contains("Telegram"));
    }

    #[test]
    fn test_height_independent_of_progress() {
        let hidden = render(Locale::Ru, Clocks::HIDDEN);
        let mid = render(Locale::Ru, Clocks { section: 0.6, content: 0.2 });
        let shown = render(Locale::Ru, Clocks::SETTLED);
        assert_eq!(hidden.height(), shown.height());
        assert_eq!(mid.height(), shown.height());
    }
}
