//! Site content and per-page widget configuration

use crate::core::navigation::{PROJECT_GROUP, PageGroup};

/// A portfolio project page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Page file name, also the URL's final segment
    pub slug: &'static str,
    pub title: &'static str,
    pub kicker: &'static str,
    pub summary: &'static str,
    /// Page hosts the textile canvas
    pub textile: bool,
}

/// Project catalog, in navigation order
pub const PROJECTS: &[Project] = &[
    Project {
        slug: "junipers-clompass.html",
        title: "Juniper's Clompass",
        kicker: "Children's media",
        summary: "A picture-book companion that helps kids find their way back to trusted adults online.",
        textile: false,
    },
    Project {
        slug: "responsible-ai.html",
        title: "Responsible AI",
        kicker: "Policy research",
        summary: "Field notes and frameworks for auditing generative systems with the communities they affect.",
        textile: false,
    },
    Project {
        slug: "black-eco-feminisms.html",
        title: "Black Eco-Feminisms",
        kicker: "Environmental justice",
        summary: "A reading circle and zine series tracing land, care, and resistance across the diaspora.",
        textile: false,
    },
    Project {
        slug: "show-me-your-colors.html",
        title: "Show Me Your Colors",
        kicker: "Workshop",
        summary: "A participatory workshop on identity, safety, and self-expression in digital spaces.",
        textile: false,
    },
    Project {
        slug: "art.html",
        title: "Art",
        kicker: "Textile practice",
        summary: "Woven studies in berry, plum, and sage. Move through the threads.",
        textile: true,
    },
];

/// Look up a project by its page file name
pub fn find_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.slug == slug)
}

/// Collapsible skill panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const SKILL_PANELS: &[Panel] = &[
    Panel {
        id: "research",
        title: "Research",
        body: "Ethnography, OSINT, participatory design, and mixed-methods evaluation.",
    },
    Panel {
        id: "safety",
        title: "Trust & Safety",
        body: "Harm taxonomies, escalation playbooks, and child-safety policy review.",
    },
    Panel {
        id: "teaching",
        title: "Teaching",
        body: "Curriculum for digital literacy workshops with youth and caregivers.",
    },
];

pub const STACK_PANELS: &[Panel] = &[
    Panel {
        id: "notion",
        title: "Notion",
        body: "Living roadmaps and decision logs shared with partners.",
    },
    Panel {
        id: "observable",
        title: "Observable",
        body: "Exploratory notebooks for survey and moderation data.",
    },
    Panel {
        id: "github",
        title: "GitHub",
        body: "Versioned workshop material and small research tools.",
    },
];

/// Papers laid out on the desk page: (label, link, x%, y%)
pub const DESK_PAPERS: &[(&str, Option<&str>, u8, u8)] = &[
    ("Juniper's Clompass", Some("/projects/junipers-clompass.html"), 12, 18),
    ("Responsible AI", Some("/projects/responsible-ai.html"), 46, 10),
    ("Black Eco-Feminisms", Some("/projects/black-eco-feminisms.html"), 70, 32),
    ("Show Me Your Colors", Some("/projects/show-me-your-colors.html"), 22, 56),
    ("Art", Some("/projects/art.html"), 58, 62),
    ("Notes to self", None, 8, 74),
];

/// Destination of the scripted transition link
pub const ATHENA_TARGET: &str = "/projects/responsible-ai.html";

/// Which widgets a page mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageFeatures {
    pub wave_text: bool,
    pub stagger: bool,
    pub accordions: bool,
    pub athena: bool,
    pub spotlight: bool,
    pub signup: bool,
    pub desk: bool,
    pub textile: bool,
    /// Sequential navigation group, if the page belongs to one
    pub navigation: Option<PageGroup>,
}

impl PageFeatures {
    pub const LANDING: PageFeatures = PageFeatures {
        wave_text: true,
        stagger: true,
        accordions: true,
        athena: true,
        spotlight: true,
        signup: true,
        desk: false,
        textile: false,
        navigation: None,
    };

    pub const DESK: PageFeatures = PageFeatures {
        wave_text: false,
        stagger: false,
        accordions: false,
        athena: false,
        spotlight: false,
        signup: false,
        desk: true,
        textile: false,
        navigation: None,
    };

    /// Features of a project page
    pub fn project(project: &Project) -> PageFeatures {
        PageFeatures {
            textile: project.textile,
            navigation: Some(PROJECT_GROUP),
            ..PageFeatures::default()
        }
    }
}
