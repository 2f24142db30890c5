use ratatui::text::{Line, Span};

use crate::animation::{Ease, Stagger, TriggerRegistry};
use crate::utils::text::{pad_to_display_width, truncate_to_width};
use super::{
    card, center_offset, centered, header, hex, level_bar, stats_row, Clocks, Fragment, RenderCtx,
    SectionTriggers, SLIDE_ROWS,
};

pub struct StackItem {
    pub name: &'static str,
    pub level: u8,
    pub color: &'static str,
    pub icon: &'static str,
}

pub const STACK: [StackItem; 8] = [
    StackItem { name: "React/Next.js", level: 95, color: "#00ff88", icon: "⚛️" },
    StackItem { name: "TypeScript", level: 90, color: "#0088ff", icon: "🔷" },
    StackItem { name: "Node.js", level: 85, color: "#ff0088", icon: "🟢" },
    StackItem { name: "Python", level: 80, color: "#ff8800", icon: "🐍" },
    StackItem { name: "AWS/Cloud", level: 75, color: "#8800ff", icon: "☁️" },
    StackItem { name: "Git/GitHub", level: 90, color: "#00ffff", icon: "📝" },
    StackItem { name: "Docker", level: 70, color: "#0066cc", icon: "🐳" },
    StackItem { name: "PostgreSQL", level: 75, color: "#336791", icon: "🐘" },
];

// These labels are not translated: they read the same in both languages.
const STATS: [(&str, &str); 3] = [("8+", "Технологий"), ("5+", "Лет опыта"), ("100%", "Качество")];
const CARD_TITLE: &str = "Мой Тех Стек";
const CARD_SUBTITLE: &str = "Современные технологии";
const CARD_STATUS: &str = "Активно развиваюсь";
const GRID_TITLE: &str = "Мои Навыки";

/// Two grid columns from this width on.
const TWO_COLUMN_WIDTH: u16 = 60;

fn item_stagger() -> Stagger {
    Stagger::new(0.1, 0.5, Ease::EaseOut)
}

fn bar_stagger() -> Stagger {
    Stagger::new(0.2, 1.5, Ease::EaseOut)
}

pub struct SkillsSection {
    triggers: SectionTriggers,
}

impl SkillsSection {
    pub fn new(registry: &TriggerRegistry) -> Self {
        let content = bar_stagger().total(STACK.len()).max(item_stagger().total(STACK.len()));
        Self {
            triggers: SectionTriggers::register(registry, 0.0, content),
        }
    }

    pub fn triggers(&self) -> &SectionTriggers {
        &self.triggers
    }

    pub fn render(&self, ctx: &RenderCtx) -> Fragment {
        self.render_at(ctx, self.triggers.clocks())
    }

    fn item(&self, index: usize, width: u16, clocks: Clocks, ctx: &RenderCtx) -> Fragment {
        let env = ctx.env;
        let item = &STACK[index];
        let label = format!("{} {}", item.icon, item.name);
        let label_w = width.saturating_sub(6) as usize;

        let mut frag = Fragment::new();
        frag.push(Line::from(vec![
            Span::styled(pad_to_display_width(&truncate_to_width(&label, label_w), label_w), env.text_style()),
            Span::styled(format!("{:>5}%", item.level), env.primary_style()),
        ]));
        frag.push(Line::from(level_bar(
            item.level,
            bar_stagger().progress(index, clocks.content),
            width,
            hex(item.color),
            env,
        )));
        frag.faded(item_stagger().progress(index, clocks.content), env)
    }

    pub fn render_at(&self, ctx: &RenderCtx, clocks: Clocks) -> Fragment {
        let env = ctx.env;
        let w = ctx.width;
        let mut body = Fragment::new();

        let title = header(ctx, "skills.title", &["СТЕК", "STACK"], None);
        body.reveal(title, clocks.content_progress(0.0, 0.8), 1, env);

        let mut subtitle = Fragment::new();
        for l in crate::utils::text::wrap(ctx.t("skills.subtitle"), w as usize) {
            let (line, _) = centered(vec![Span::styled(l, env.dim_style())], w);
            subtitle.push(line);
        }
        body.reveal(subtitle, clocks.content_progress(0.2, 0.8), 1, env);

        let stats = stats_row(&STATS, w, env);
        body.reveal(stats, clocks.content_progress(0.4, 0.8), SLIDE_ROWS, env);

        let card_w = w.min(44);
        let visual = card(
            vec![
                Span::styled("💻 ", env.primary_style()),
                Span::styled(CARD_TITLE, env.title_style()),
            ],
            vec![
                Line::from(Span::styled(CARD_SUBTITLE, env.secondary_style())),
                Line::from(vec![
                    Span::styled("● ", env.primary_style()),
                    Span::styled(CARD_STATUS, env.text_style()),
                ]),
            ],
            card_w,
            env.border_style(),
            env.card_style(),
        )
        .indent(center_offset(card_w, w));
        body.reveal(visual, clocks.content_progress(0.0, 1.0), 1, env);

        // Grid
        let mut grid = Fragment::new();
        let (heading, _) = centered(vec![Span::styled(GRID_TITLE, env.title_style())], w);
        grid.push(heading);
        grid.blank();

        if w >= TWO_COLUMN_WIDTH {
            let gap = 4;
            let col_w = (w - gap) / 2;
            for row in 0..STACK.len().div_ceil(2) {
                let left = self.item(row * 2, col_w, clocks, ctx);
                let right = (row * 2 + 1 < STACK.len()).then(|| self.item(row * 2 + 1, col_w, clocks, ctx));
                let (left_lines, _) = left.into_parts();
                let right_lines = right.map(|r| r.into_parts().0).unwrap_or_default();
                for (i, mut line) in left_lines.into_iter().enumerate() {
                    if let Some(r) = right_lines.get(i) {
                        line.spans.push(Span::raw(" ".repeat(gap as usize)));
                        line.spans.extend(r.spans.iter().cloned());
                    }
                    grid.push(line);
                }
                grid.blank();
            }
        } else {
            for i in 0..STACK.len() {
                grid.append(self.item(i, w, clocks, ctx));
                grid.blank();
            }
        }
        body.reveal(grid, clocks.content_progress(0.6, 1.0), SLIDE_ROWS, env);

        let mut frag = Fragment::new();
        frag.blank();
        frag.reveal(body, clocks.section_progress(), SLIDE_ROWS, env);
        frag.blank();
        frag
    }
}
