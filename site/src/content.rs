//! Static page content: sections, services and projects.
//!
//! Keeping copy in typed tables lets the section components stay pure
//! layout and lets tests check that navigation anchors point somewhere.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND_NAME: &str = "SimplizerPro";

/// Top-level page sections, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Services,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [Self::Hero, Self::About, Self::Services, Self::Projects, Self::Contact];

    /// DOM id of the section element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Services => "services",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// In-page link target, e.g. `#about`.
    #[must_use]
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

/// Glyphs standing in for the icon set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Code,
    Server,
    Briefcase,
    Wrench,
    Rocket,
    Users,
    Dashboard,
}

impl Icon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Server => "🖥",
            Self::Briefcase => "💼",
            Self::Wrench => "🔧",
            Self::Rocket => "🚀",
            Self::Users => "👥",
            Self::Dashboard => "📊",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Custom Web Development",
        icon: Icon::Code,
        description: "Beautiful, fast, and responsive websites built with modern tech.",
    },
    Service {
        title: "MERN Stack Applications",
        icon: Icon::Server,
        description: "Scalable web apps using MongoDB, Express, React, and Node.js.",
    },
    Service {
        title: "Business Tool Development",
        icon: Icon::Briefcase,
        description: "Custom tools for invoicing, inventory, and dashboards.",
    },
    Service {
        title: "Bug Fixing & Optimization",
        icon: Icon::Wrench,
        description: "Speed improvements and UI debugging for smooth performance.",
    },
    Service {
        title: "Landing Page Development",
        icon: Icon::Rocket,
        description: "High-converting, responsive landing pages optimized for SEO.",
    },
    Service {
        title: "Developer Collaboration",
        icon: Icon::Users,
        description: "Team collaboration, UI design integration, and agile support.",
    },
    Service {
        title: "Custom Dashboard Development",
        icon: Icon::Dashboard,
        description: "Powerful admin dashboards using Next.js and React.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce PWA with AI",
        icon: Icon::Briefcase,
        description: "A mobile-first, AI-driven shopping platform with optimized UX for higher conversions.",
        technologies: &["React", "Next.js App Router", "Stripe", "GPT API", "Workbox PWA"],
    },
    Project {
        title: "SaaS Dashboard with AI Insights",
        icon: Icon::Dashboard,
        description: "A real-time, AI-powered SaaS platform for analytics, decision-making, and automation.",
        technologies: &["Next.js", "Prisma", "tRPC/Firebase", "GPT", "OpenAI embeddings"],
    },
    Project {
        title: "Booking System + i18n + PWA",
        icon: Icon::Server,
        description: "A global booking solution with multi-language support and seamless payments.",
        technologies: &["Next.js", "FullCalendar", "i18next", "Workbox", "Stripe"],
    },
    Project {
        title: "AI-Powered Productivity App",
        icon: Icon::Rocket,
        description: "Smart workflows, automation, and AI-powered task management for businesses.",
        technologies: &["Next.js", "React", "GPT-4", "Firebase", "Vercel"],
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "From sleek interfaces to robust backends, I love turning ideas into interactive, responsive, \
     and blazing-fast apps. I specialize in React, Node.js, MongoDB, and everything in between.",
    "Whether it's building tools for small businesses or creating SaaS solutions, I'm all about \
     clean code, sharp UI, and delivering value through tech.",
];
