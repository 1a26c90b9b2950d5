//! Audience spotlight content
//!
//! A fixed list of audiences with tailored portfolio advice. The landing
//! page shows one audience at a time; selection is a single active id.

/// One audience entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spotlight {
    pub id: &'static str,
    pub title: &'static str,
    /// Audience name
    pub subtitle: &'static str,
    pub summary: &'static str,
    pub recommendations: &'static [&'static str],
    pub metrics: &'static [&'static str],
}

pub const SPOTLIGHTS: &[Spotlight] = &[
    Spotlight {
        id: "employers",
        title: "Product Impact Narrative",
        subtitle: "Hiring Managers",
        summary: "Surface concise stories that connect your research craft to measurable product or policy outcomes.",
        recommendations: &[
            "Pair each flagship project with before/after metrics or a quote from a stakeholder describing the impact.",
            "Add a \u{201c}Rapid Experimentation\u{201d} callout that links to Figma files, decision logs, or sprint retrospectives.",
            "Highlight collaboration muscles by naming cross-functional partners (trust & safety ops, policy, engineering) and your role in aligning them.",
        ],
        metrics: &["Impact metrics", "Cross-functional partners", "Decision logs"],
    },
    Spotlight {
        id: "fellowships",
        title: "Mission & Scholarship Alignment",
        subtitle: "Fellowship Committees",
        summary: "Connect your community work and research questions to the specific values of fellowships or grants.",
        recommendations: &[
            "Create a fellowship-specific one pager with a problem statement, methodological approach, and anticipated community benefit.",
            "Document long-term research threads (digital childhoods, environmental justice) and show how each project advances them.",
            "Embed a short video or audio reflection to humanize your motivation for safety and equity work.",
        ],
        metrics: &["Community benefit", "Long-form research arcs", "Multimedia storytelling"],
    },
    Spotlight {
        id: "collaborators",
        title: "Open Collaboration Signals",
        subtitle: "Allies & Co-founders",
        summary: "Invite peers into future-making by listing collaboration opportunities and tooling preferences.",
        recommendations: &[
            "Add a living roadmap of experiments seeking feedback: curriculum pilots, safety tooling, or policy prototypes.",
            "List your preferred collaboration stack (Notion, Observable, GitHub) and how you like to run co-design sessions.",
            "Offer a lightweight intake form for community partners to request workshops or audits.",
        ],
        metrics: &["Roadmap teasers", "Tooling transparency", "Intake flows"],
    },
];

/// Entry for `id`, falling back to the first entry
pub fn find_spotlight(id: &str) -> &'static Spotlight {
    SPOTLIGHTS
        .iter()
        .find(|entry| entry.id == id)
        .unwrap_or(&SPOTLIGHTS[0])
}

/// Which audience is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotlightSelection {
    active: &'static str,
}

impl Default for SpotlightSelection {
    fn default() -> Self {
        Self {
            active: SPOTLIGHTS[0].id,
        }
    }
}

impl SpotlightSelection {
    pub fn active_id(&self) -> &'static str {
        self.active
    }

    pub fn active(&self) -> &'static Spotlight {
        find_spotlight(self.active)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Select by id; unknown ids leave the selection unchanged
    pub fn select(&mut self, id: &str) -> bool {
        match SPOTLIGHTS.iter().find(|entry| entry.id == id) {
            Some(entry) if entry.id != self.active => {
                self.active = entry.id;
                true
            }
            _ => false,
        }
    }
}

/// A concrete next step for an audience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub heading: &'static str,
    pub talking_points: &'static [&'static str],
    pub call_to_action: &'static str,
}

const HIRING_PLAYBOOK: &[Recommendation] = &[
    Recommendation {
        heading: "Show measurable trust & safety wins",
        talking_points: &[
            "Quantify time-to-detection improvements or reduced exposure to online harm.",
            "Add human impact quotes from policy or operations partners.",
        ],
        call_to_action: "Link to dashboards or experiments that prove the signal.",
    },
    Recommendation {
        heading: "Demonstrate cross-functional leadership",
        talking_points: &[
            "Explain how you influenced roadmap decisions with research artifacts.",
            "Name the partner roles (engineering, ops, policy) you rallied and how.",
        ],
        call_to_action: "Attach a retrospective or sprint summary slide.",
    },
];

const FELLOWSHIP_PLAYBOOK: &[Recommendation] = &[
    Recommendation {
        heading: "Connect your mission to the program",
        talking_points: &[
            "Translate long-term research questions into the fellowship's language.",
            "Summarize how your community collaborations advance ethical technology goals.",
        ],
        call_to_action: "Draft a one-page theory of change with short, mid, and long-term outcomes.",
    },
    Recommendation {
        heading: "Highlight scholarly rigor",
        talking_points: &[
            "Surface methods training (ethnography, OSINT, participatory design).",
            "Map each featured project to a methodological competency or publication.",
        ],
        call_to_action: "Add citations or reading lists that inspired the work.",
    },
];

const COLLABORATOR_PLAYBOOK: &[Recommendation] = &[
    Recommendation {
        heading: "Invite collaboration",
        talking_points: &[
            "State the experiments or pilots where you want feedback right now.",
            "Share tooling preferences and working rhythms to ease onboarding.",
        ],
        call_to_action: "Embed a quick intake form for partners.",
    },
    Recommendation {
        heading: "Document community care",
        talking_points: &[
            "Outline how you compensate or support collaborators.",
            "List safety protocols or accessibility commitments you maintain.",
        ],
        call_to_action: "Publish a lightweight memorandum of understanding template.",
    },
];

/// What an audience looks for and which portfolio sections answer it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudienceProfile {
    pub name: &'static str,
    pub priorities: &'static [&'static str],
    pub highlight_sections: &'static [&'static str],
    pub playbook: &'static [Recommendation],
}

pub const PROFILES: &[AudienceProfile] = &[
    AudienceProfile {
        name: "Hiring Managers",
        priorities: &[
            "Proof of measurable impact",
            "Evidence of cross-functional collaboration",
            "Fast onboarding to regulated spaces",
        ],
        highlight_sections: &[
            "Impact dashboards",
            "Rapid experimentation logs",
            "Trust & safety response playbooks",
        ],
        playbook: HIRING_PLAYBOOK,
    },
    AudienceProfile {
        name: "Fellowship Committees",
        priorities: &[
            "Alignment with program mission",
            "Scholarly rigor",
            "Community reciprocity",
        ],
        highlight_sections: &[
            "Theory of change",
            "Long-term research narratives",
            "Community testimonials",
        ],
        playbook: FELLOWSHIP_PLAYBOOK,
    },
    AudienceProfile {
        name: "Collaborators",
        priorities: &[
            "Shared values",
            "Co-creation practices",
            "Accessible onboarding",
        ],
        highlight_sections: &[
            "Collaboration roadmap",
            "Tooling preferences",
            "Care and accessibility agreements",
        ],
        playbook: COLLABORATOR_PLAYBOOK,
    },
];

/// Profile for an audience name; anyone not recognised is treated as a
/// collaborator.
pub fn profile_for(audience: &str) -> &'static AudienceProfile {
    PROFILES
        .iter()
        .find(|profile| profile.name == audience)
        .unwrap_or(&PROFILES[PROFILES.len() - 1])
}

pub fn playbook_for(audience: &str) -> &'static [Recommendation] {
    profile_for(audience).playbook
}
