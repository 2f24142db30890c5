use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::animation::{Ease, Stagger, TriggerRegistry};
use crate::ui::hitmap::Target;
use crate::utils::text::wrap;
use super::{
    button, card, center_offset, display_width, flow, header, hex, Clocks, Fragment, RenderCtx,
    SectionTriggers, SLIDE_ROWS,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    #[default]
    All,
    Web,
    Mobile,
    Design,
    Tools,
}

impl ProjectCategory {
    pub fn all() -> &'static [ProjectCategory] {
        &[
            ProjectCategory::All,
            ProjectCategory::Web,
            ProjectCategory::Mobile,
            ProjectCategory::Design,
            ProjectCategory::Tools,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ProjectCategory::All => "projects.filter.all",
            ProjectCategory::Web => "projects.filter.web",
            ProjectCategory::Mobile => "projects.filter.mobile",
            ProjectCategory::Design => "projects.filter.design",
            ProjectCategory::Tools => "projects.filter.tools",
        }
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub status: &'static str,
    pub features: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
    pub color: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "E-Commerce Platform",
        icon: "🛒",
        description: "Полнофункциональная платформа электронной коммерции с современным дизайном и интуитивным интерфейсом. Включает систему управления товарами, корзину покупок, обработку платежей и админ-панель.",
        technologies: &["React", "TypeScript", "Node.js", "PostgreSQL", "Stripe"],
        category: ProjectCategory::Web,
        status: "Live",
        features: &[
            "Адаптивный дизайн для всех устройств",
            "Система аутентификации и авторизации",
            "Интеграция с платежными системами",
            "Админ-панель для управления",
            "Система отзывов и рейтингов",
        ],
        github: "https://github.com",
        live: "https://ecommerce-demo.com",
        color: "#00ff88",
    },
    Project {
        id: 2,
        title: "Task Management App",
        icon: "📋",
        description: "Современное приложение для управления задачами и проектами с возможностью командной работы. Включает канбан-доски, временные трекеры и систему уведомлений.",
        technologies: &["React", "Redux", "Express.js", "MongoDB", "Socket.io"],
        category: ProjectCategory::Web,
        status: "Live",
        features: &[
            "Канбан-доски для визуализации задач",
            "Временной трекер для учета времени",
            "Система уведомлений в реальном времени",
            "Командная работа и совместное редактирование",
            "Аналитика и отчеты по продуктивности",
        ],
        github: "https://github.com",
        live: "https://taskmanager-demo.com",
        color: "#0088ff",
    },
    Project {
        id: 3,
        title: "Weather Dashboard",
        icon: "🌤️",
        description: "Информативная панель погоды с прогнозами на несколько дней, интерактивными картами и персонализированными рекомендациями. Поддерживает множество городов и языков.",
        technologies: &["Vue.js", "Chart.js", "OpenWeather API", "PWA", "Service Workers"],
        category: ProjectCategory::Web,
        status: "Live",
        features: &[
            "Прогноз погоды на 7 дней",
            "Интерактивные карты с погодными данными",
            "Персонализированные рекомендации",
            "PWA с офлайн-режимом",
            "Многоязычная поддержка",
        ],
        github: "https://github.com",
        live: "https://weather-demo.com",
        color: "#ff0088",
    },
    Project {
        id: 4,
        title: "Portfolio Website",
        icon: "💼",
        description: "Персональный портфолио-сайт с анимациями, интерактивными элементами и адаптивным дизайном. Включает галерею проектов, контактную форму и блог.",
        technologies: &["Next.js", "Framer Motion", "Tailwind CSS", "Sanity CMS", "Vercel"],
        category: ProjectCategory::Web,
        status: "Live",
        features: &[
            "Современные анимации и переходы",
            "Адаптивный дизайн для всех устройств",
            "CMS для управления контентом",
            "SEO оптимизация",
            "Быстрая загрузка и производительность",
        ],
        github: "https://github.com",
        live: "https://portfolio-demo.com",
        color: "#ff8800",
    },
    Project {
        id: 5,
        title: "Recipe Sharing Platform",
        icon: "🍳",
        description: "Социальная платформа для обмена рецептами с возможностью поиска, фильтрации и создания собственных коллекций. Включает систему рейтингов и комментариев.",
        technologies: &["React", "Firebase", "Material-UI", "Image Upload", "Search API"],
        category: ProjectCategory::Web,
        status: "Live",
        features: &[
            "Поиск и фильтрация рецептов",
            "Система рейтингов и комментариев",
            "Создание персональных коллекций",
            "Загрузка и обработка изображений",
            "Социальные функции и подписки",
        ],
        github: "https://github.com",
        live: "https://recipes-demo.com",
        color: "#8800ff",
    },
    Project {
        id: 6,
        title: "Expense Tracker",
        icon: "💰",
        description: "Приложение для учета личных расходов с категоризацией, аналитикой и визуализацией данных. Помогает контролировать бюджет и планировать финансы.",
        technologies: &["React Native", "AsyncStorage", "Chart.js", "Expo", "Push Notifications"],
        category: ProjectCategory::Mobile,
        status: "Live",
        features: &[
            "Учет доходов и расходов",
            "Категоризация трат",
            "Визуализация данных в графиках",
            "Уведомления о превышении бюджета",
            "Экспорт данных в различные форматы",
        ],
        github: "https://github.com",
        live: "https://expense-demo.com",
        color: "#00ffff",
    },
];

// Shown in English whatever the language.
const FEATURES_TITLE: &str = "Key Features:";
const VIEW_CODE: &str = "View Code";
const LIVE_DEMO: &str = "Live Demo";

/// Projects shown under `category`.
pub fn filter_projects(category: ProjectCategory) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category == ProjectCategory::All || p.category == category)
        .collect()
}

fn card_stagger() -> Stagger {
    Stagger::new(0.2, 1.0, Ease::Power2Out)
}

fn mount_stagger() -> Stagger {
    Stagger::new(0.1, 0.5, Ease::EaseOut)
}

pub struct ProjectsSection {
    triggers: SectionTriggers,
    filter: ProjectCategory,
    expanded: Option<u32>,
    focus: usize,
    since_filter: f32,
}

impl ProjectsSection {
    pub fn new(registry: &TriggerRegistry) -> Self {
        let content = mount_stagger().total(ProjectCategory::all().len()).max(1.0);
        Self {
            triggers: SectionTriggers::register(registry, card_stagger().total(PROJECTS.len()), content),
            filter: ProjectCategory::All,
            expanded: None,
            focus: 0,
            since_filter: 0.0,
        }
    }

    pub fn triggers(&self) -> &SectionTriggers {
        &self.triggers
    }

    pub fn tick(&mut self, dt: f32) {
        self.since_filter += dt;
    }

    pub fn filter(&self) -> ProjectCategory {
        self.filter
    }

    /// Switches the category; visible cards replay their mount animation.
    pub fn set_filter(&mut self, category: ProjectCategory) {
        if self.filter != category {
            self.filter = category;
            self.focus = 0;
            self.since_filter = 0.0;
            tracing::debug!(?category, "project filter changed");
        }
    }

    #[cfg(test)]
    pub fn expanded(&self) -> Option<u32> {
        self.expanded
    }

    /// Opens the details of `id`, or closes them if already open.
    pub fn toggle(&mut self, id: u32) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    pub fn focused(&self) -> Option<&'static Project> {
        filter_projects(self.filter).get(self.focus).copied()
    }

    pub fn move_focus(&mut self, delta: i32) {
        let count = filter_projects(self.filter).len() as i32;
        if count == 0 {
            return;
        }
        self.focus = (self.focus as i32 + delta).rem_euclid(count) as usize;
    }

    pub fn toggle_focused(&mut self) {
        if let Some(p) = self.focused() {
            self.toggle(p.id);
        }
    }

    pub fn render(&self, ctx: &RenderCtx) -> Fragment {
        self.render_at(ctx, self.triggers.clocks())
    }

    fn project_card(&self, project: &'static Project, width: u16, ctx: &RenderCtx) -> Fragment {
        let env = ctx.env;
        let target = Target::Project(project.id);
        let color = Style::default().fg(env.rgb_color(hex(project.color)));
        let inner = width.saturating_sub(4);

        let border = if ctx.interaction.is_hovered(&target) {
            env.hover_style()
        } else if self.focused().map(|p| p.id) == Some(project.id) {
            env.primary_style()
        } else {
            env.border_style()
        };

        let mut body: Vec<Line<'static>> = Vec::new();
        let category = ctx.t(project.category.label_key()).to_string();
        let status = format!(" {} ", project.status);
        let gap = (inner as usize).saturating_sub(category.chars().count() + status.chars().count());
        body.push(Line::from(vec![
            Span::styled(category, env.dim_style()),
            Span::raw(" ".repeat(gap)),
            Span::styled(status, color.add_modifier(Modifier::REVERSED)),
        ]));
        body.push(Line::default());
        for l in wrap(project.description, inner as usize) {
            body.push(Line::from(Span::styled(l, env.text_style())));
        }
        body.push(Line::default());
        let tags = project.technologies.join(" · ");
        for l in wrap(&tags, inner as usize) {
            body.push(Line::from(Span::styled(l, env.secondary_style())));
        }

        let mut links = Vec::new();
        if self.expanded == Some(project.id) {
            body.push(Line::default());
            body.push(Line::from(Span::styled(FEATURES_TITLE, env.title_style())));
            for feature in project.features {
                for (i, l) in wrap(feature, inner.saturating_sub(2) as usize).into_iter().enumerate() {
                    let bullet = if i == 0 { "• " } else { "  " };
                    body.push(Line::from(vec![
                        Span::styled(bullet, color),
                        Span::styled(l, env.text_style()),
                    ]));
                }
            }
            body.push(Line::default());

            let code = Target::Link(project.github);
            let demo = Target::Link(project.live);
            let code_spans = button(VIEW_CODE, &code, false, ctx);
            let demo_spans = button(LIVE_DEMO, &demo, true, ctx);
            let code_w = display_width(&code_spans);
            // card row = body index + 1 (top border); body starts at column 2
            let row = body.len() as u16 + 1;
            links.push((row, 2, code_w, code));
            links.push((row, 2 + code_w + 2, display_width(&demo_spans), demo));
            let mut spans = code_spans;
            spans.push(Span::raw("  "));
            spans.extend(demo_spans);
            body.push(Line::from(spans));
        }

        let title = vec![
            Span::styled(format!("{} ", project.icon), color),
            Span::styled(project.title, color.add_modifier(Modifier::BOLD)),
        ];
        let mut frag = card(title, body, width, border, env.card_style());
        frag.hit_rows(0, frag.height(), 0, width, target);
        for (row, col, w, target) in links {
            frag.hits.push(super::Hit { row, col, width: w, target });
        }
        frag
    }

    pub fn render_at(&self, ctx: &RenderCtx, clocks: Clocks) -> Fragment {
        let env = ctx.env;
        let w = ctx.width;
        let mut body = Fragment::new();

        let mut title = header(ctx, "projects.title", &["ПРОЕКТЫ", "PROJECTS"], Some(ctx.t("projects.subtitle")));
        title.blank();
        body.reveal(title, clocks.content_progress(0.0, 0.8), 1, env);

        // Category filter
        let buttons: Vec<_> = ProjectCategory::all()
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let target = Target::Filter(*category);
                let active = *category == self.filter;
                let spans = button(ctx.t(category.label_key()), &target, active, ctx);
                let p = mount_stagger().progress(i, clocks.content);
                let spans = spans
                    .into_iter()
                    .map(|s| Span::styled(s.content, super::fade_style(s.style, p, env)))
                    .collect();
                (spans, target)
            })
            .collect();
        let mut filters = flow(buttons, w, 2);
        filters.blank();
        body.reveal(filters, clocks.content_progress(0.2, 0.8), 1, env);

        // Cards
        let card_w = w.min(84);
        let offset = center_offset(card_w, w);
        let mut grid = Fragment::new();
        for (i, project) in filter_projects(self.filter).into_iter().enumerate() {
            let scroll_in = card_stagger().progress(i, clocks.section);
            let mounted = mount_stagger().progress(i, self.since_filter);
            let card = self.project_card(project, card_w, ctx).indent(offset);
            grid.append(card.faded(scroll_in.min(mounted), env));
            grid.blank();
        }
        body.reveal(grid, card_stagger().progress(0, clocks.section), SLIDE_ROWS, env);

        let mut frag = Fragment::new();
        frag.blank();
        frag.reveal(body, clocks.section_progress(), SLIDE_ROWS, env);
        frag.blank();
        frag
    }
}
