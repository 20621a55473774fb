//! Deck data: a nine-slide Right to Information lecture.
//!
//! The tables are the presentation's static content; navigation never
//! mutates them. Reference entries back the corner-annotation lookups.

use lectern_core::deck::{SlideDef, StaticDeck};

pub const DECK_TITLE: &str = "Right to Information - Administrative Law";

const SLIDES: [SlideDef; 9] = [
    SlideDef {
        title: "Right to Information",
        category: "title",
    },
    SlideDef {
        title: "Introduction & Constitutional Basis",
        category: "constitutional_foundation",
    },
    SlideDef {
        title: "Right to Information Act 2005",
        category: "rti_act_overview",
    },
    SlideDef {
        title: "Institutional Framework",
        category: "institutional_framework",
    },
    SlideDef {
        title: "Key Provisions & Procedure",
        category: "provisions_procedure",
    },
    SlideDef {
        title: "Exemptions & Limitations",
        category: "exemptions_limitations",
    },
    SlideDef {
        title: "Landmark Supreme Court Cases",
        category: "case_law",
    },
    SlideDef {
        title: "Implementation Challenges & Reforms",
        category: "challenges_reforms",
    },
    SlideDef {
        title: "Summary & Closing",
        category: "thank_you",
    },
];

/// Statute sections plus the free-text keys used by corner annotations.
const SECTION_REFERENCES: [(&str, &str); 19] = [
    (
        "Section 2",
        "Definitions - Public Authority, Information, Right to Information",
    ),
    (
        "Section 3",
        "Right to information - Subject to provisions of this Act",
    ),
    (
        "Section 4",
        "Obligations of public authorities - Proactive disclosure",
    ),
    (
        "Section 6",
        "Request for information - Written application to PIO",
    ),
    (
        "Section 7",
        "Disposal of request - 30 days normal, 48 hours urgent",
    ),
    (
        "Section 8",
        "Exemption from disclosure - National security, commercial confidence",
    ),
    ("Section 9", "Grounds for rejection - Cabinet papers protection"),
    (
        "Section 12",
        "Constitution of Central Information Commission",
    ),
    ("Section 15", "Constitution of State Information Commission"),
    (
        "Section 18",
        "Powers and functions of Information Commissions",
    ),
    ("Section 19", "Appeal - First appeal and second appeal process"),
    ("Section 20", "Penalties - For not providing information"),
    (
        "Article 19(1)(a)",
        "Constitutional foundation - Freedom of speech and expression includes right to information",
    ),
    (
        "RTI Act 2005",
        "Comprehensive law for transparency and accountability in governance",
    ),
    (
        "Sections 12-18",
        "Institutional framework - Information Commissions structure and powers",
    ),
    (
        "Sections 6-7",
        "Application procedure and response timeline for RTI requests",
    ),
    (
        "Sections 8-9",
        "Exemptions from disclosure and grounds for rejection of requests",
    ),
    (
        "Case Law",
        "Supreme Court and High Court precedents on right to information",
    ),
    (
        "Modern Challenges",
        "Contemporary issues in RTI implementation and reforms",
    ),
];

const LANDMARK_CASES: [(&str, &str); 6] = [
    (
        "S.P. Gupta v. Union of India (1981)",
        "First judicial recognition of RTI as fundamental right",
    ),
    (
        "State of U.P. v. Raj Narain (1975)",
        "Right to know is basic to democratic way of life",
    ),
    (
        "Central Information Commissioner v. State of Manipur (2012)",
        "CIC power to impose penalties",
    ),
    (
        "Institute of Chartered Accountants v. Shaunak Satya (2021)",
        "Professional bodies under RTI",
    ),
    (
        "Subhash Chandra Agarwal v. Indian National Congress (2013)",
        "Political parties as public authorities",
    ),
    (
        "CBSE v. Aditya Bandopadhyay (2011)",
        "RTI and privacy balance",
    ),
];

pub fn presentation_deck() -> StaticDeck {
    StaticDeck::new(&SLIDES, &SECTION_REFERENCES, &LANDMARK_CASES)
}
