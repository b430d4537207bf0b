//! Screen content for the Φ primer
//!
//! Everything the screen shows lives here as constant data: the title,
//! the explanation sections, the three-system comparison, the conceptual
//! pseudo-code, and the references. The presentation layer consumes these
//! values read-only; nothing in this module depends on the terminal.

/// Screen title, shown in the header bar.
pub const SCREEN_TITLE: &str = "🧠 Problem 1: Quantity of Consciousness";

/// Accent color slots used by the comparison cards.
///
/// Resolved to concrete terminal colors by the theme; the content layer
/// only knows the semantic slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Yellow,
    Blue,
    Purple,
}

/// Icon slots used by the comparison cards.
///
/// Resolved to glyphs by the theme's icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Photodiode,
    Camera,
    Brain,
}

/// A headed block of explanation text.
///
/// Lines are pre-broken for display and rendered verbatim.
#[derive(Debug)]
pub struct Section {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

pub static INTRO: Section = Section {
    heading: "The Problem",
    lines: &[
        "Why does a brain produce experience while other complex systems, as",
        "far as anyone can tell, do not? Integrated Information Theory (IIT)",
        "answers with a single quantity: the amount of information a system",
        "generates as a whole, over and above its parts. That quantity is",
        "called phi (Φ).",
    ],
};

pub static MECHANISMS: Section = Section {
    heading: "Differentiation and Integration",
    lines: &[
        "Two ingredients are needed at once. Differentiation: the system must",
        "have a large repertoire of possible states, so that each state rules",
        "out a vast number of alternatives. Integration: each state must be",
        "generated by the system acting as one, not by independent parts",
        "ticking along on their own. Φ is high only when both are present.",
    ],
};

pub static COMPARISON: Section = Section {
    heading: "Three Systems Compared",
    lines: &["The classic IIT comparison: a photodiode, a camera sensor, a brain."],
};

pub static CODE_LEAD: Section = Section {
    heading: "A Conceptual Φ Calculation",
    lines: &[
        "The sketch below shows how Φ would be estimated in principle. It is",
        "illustrative pseudo-code: the exact computation is intractable for",
        "systems of interesting size, and nothing here executes it.",
    ],
};

/// One example system in the comparison row.
#[derive(Debug)]
pub struct SystemCard {
    pub title: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub differentiation: &'static str,
    pub integration: &'static str,
    pub phi: &'static str,
}

/// A caption/value pair inside a comparison card.
#[derive(Debug)]
pub struct RowData {
    pub label: &'static str,
    pub value: &'static str,
    /// Value accent; `None` renders in the neutral primary color.
    pub accent: Option<Accent>,
}

impl SystemCard {
    /// The card's three rows, in display order.
    pub fn rows(&self) -> [RowData; 3] {
        [
            RowData {
                label: "Differentiation",
                value: self.differentiation,
                accent: None,
            },
            RowData {
                label: "Integration",
                value: self.integration,
                accent: None,
            },
            RowData {
                label: "Φ value",
                value: self.phi,
                accent: Some(self.accent),
            },
        ]
    }
}

/// The three example systems, in display order.
pub fn comparison_cards() -> [SystemCard; 3] {
    [
        SystemCard {
            title: "Photodiode",
            icon: Icon::Photodiode,
            accent: Accent::Yellow,
            differentiation: "1 bit: light or dark",
            integration: "None: a single unit",
            phi: "Φ ≈ 0",
        },
        SystemCard {
            title: "Camera Sensor",
            icon: Icon::Camera,
            accent: Accent::Blue,
            differentiation: "Millions of pixels",
            integration: "None: independent pixels",
            phi: "Φ ≈ 0 (Low)",
        },
        SystemCard {
            title: "Brain",
            icon: Icon::Brain,
            accent: Accent::Purple,
            differentiation: "Vast state repertoire",
            integration: "Densely integrated",
            phi: "Φ > 0 (High)",
        },
    ]
}

/// The conceptual Φ sketch, displayed verbatim in the code panel.
///
/// Inert documentation text. It is never parsed or evaluated.
pub const PHI_PSEUDOCODE: &str = "\
// Conceptual sketch only. This never runs: exact Phi is
// intractable for any system of interesting size.
func calculatePhi(system) {
    // 1. Consider every way of cutting the system in two.
    partitions = allBipartitions(system.elements)

    // 2. Ask how much information the whole generates
    //    over and above its parts, for each cut.
    for cut in partitions {
        whole = effectiveInformation(system)
        parts = effectiveInformation(cut.partA)
              + effectiveInformation(cut.partB)
        loss[cut] = whole - parts
    }

    // 3. Phi is the loss across the weakest cut.
    return minimum(loss)    // placeholder: 0.0
}";

/// Source citations, rendered verbatim for attribution.
pub const REFERENCES: [&str; 2] = [
    "Tononi, G. (2004). An information integration theory of consciousness. \
     BMC Neuroscience, 5, 42. https://doi.org/10.1186/1471-2202-5-42",
    "Oizumi, M., Albantakis, L., & Tononi, G. (2014). From the phenomenology \
     to the mechanisms of consciousness: Integrated Information Theory 3.0. \
     PLoS Computational Biology, 10(5), e1003588. \
     https://doi.org/10.1371/journal.pcbi.1003588",
];
