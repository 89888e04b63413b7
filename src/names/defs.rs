/// Fixed corrections for agency names as they appear in the source
/// extracts: two-letter truncations, field-length cutoffs, and inconsistent
/// casing. Keys match case-insensitively; one case variant per entry.
pub const NAME_FIXES: &[(&str, &str)] = &[
    ("AR", "Department of the Army"),
    ("AF", "Department of the Air Force"),
    ("NV", "Department of the Navy"),
    ("DD", "Department of Defense"),
    ("Dfc", "U.S. International Development Finance Corporation"),
    ("Department Of Treasury", "Department of the Treasury"),
    ("Department Of Interior", "Department of the Interior"),
    (
        "Department Of Health And Human Serv",
        "Department of Health and Human Services",
    ),
    ("Department Of Veterans Affair", "Department of Veterans Affairs"),
    (
        "Department Of Housing And Urban Developm",
        "Department of Housing and Urban Development",
    ),
    ("U.s.agency for Global Media", "U.S. Agency for Global Media"),
    (
        "U.s. International Trade Commission",
        "U.S. International Trade Commission",
    ),
    (
        "U.s. Holocaust Memorial Museum",
        "U.S. Holocaust Memorial Museum",
    ),
    (
        "U.s.-china Economic & Security Rev Cmsn",
        "U.S.-China Economic and Security Review Commission",
    ),
    (
        "U.s. Cmsn on Internatl Religious Freedom",
        "U.S. Commission on International Religious Freedom",
    ),
    (
        "U.s. Interagency Council on Homelessness",
        "U.S. Interagency Council on Homelessness",
    ),
    (
        "U.S. Agency For International Dev",
        "U.S. Agency for International Development",
    ),
    (
        "Nat Aeronautics And Space Administration",
        "National Aeronautics and Space Administration",
    ),
    (
        "Nat Archives And Records Administration",
        "National Archives and Records Administration",
    ),
    (
        "Court Services And Offendr Supervsn Agy",
        "Court Services and Offender Supervision Agency",
    ),
    (
        "Fed Mediation And Conciliation Service",
        "Federal Mediation and Conciliation Service",
    ),
    (
        "Corp For National And Community Service",
        "Corporation for National and Community Service",
    ),
    (
        "Internat Boundary Cmsn: U.S. And Canada",
        "International Boundary Commission: U.S. and Canada",
    ),
    (
        "Inter Bound And Water Comm U.S. Section",
        "International Boundary and Water Commission U.S. Section",
    ),
    (
        "International Joint Cmsn: U.S. & Canada",
        "International Joint Commission: U.S. and Canada",
    ),
    (
        "Federal Permitting Improvement Stee",
        "Federal Permitting Improvement Steering Council",
    ),
    (
        "Federal Permitting Improvement Steering",
        "Federal Permitting Improvement Steering Council",
    ),
    (
        "Council of Insp. Gen. on Integ.& Effic.",
        "Council of Inspectors General on Integrity and Efficiency",
    ),
    ("Ofc of the Nat Cyber Dir", "Office of the National Cyber Director"),
    (
        "Adv Council on Historic Preservation",
        "Advisory Council on Historic Preservation",
    ),
    (
        "Cmte For Purch Frm Pple Blind Or Sev Dis",
        "Committee for Purchase From People Who Are Blind or Severely Disabled",
    ),
    (
        "Nat Cmsn On Libraries And Info Science",
        "National Commission on Libraries and Information Science",
    ),
    (
        "Nat Foundation On Arts And Humanities",
        "National Foundation on the Arts and Humanities",
    ),
    (
        "Privacy And Civil Liberties Oversight",
        "Privacy and Civil Liberties Oversight Board",
    ),
];

/// Words kept lowercase by the title-caser unless they lead the name.
pub const MINOR_WORDS: &[&str] = &[
    "of", "the", "and", "for", "in", "on", "at", "to", "by", "or", "a", "an",
];

#[derive(Debug, Clone, Copy)]
pub enum ShortFormRule {
    /// Replace the whole name with its common acronym.
    Acronym {
        full: &'static str,
        abbr: &'static str,
    },
    /// Strip a leading organizational prefix, keeping the remainder.
    StripPrefix(&'static str),
}

/// Tried in order, first match wins. Acronym rules come before the prefix
/// strips so "Department of Defense" becomes "DOD", not "Defense".
pub const SHORT_FORM_RULES: &[ShortFormRule] = &[
    ShortFormRule::Acronym {
        full: "National Aeronautics and Space Administration",
        abbr: "NASA",
    },
    ShortFormRule::Acronym {
        full: "Environmental Protection Agency",
        abbr: "EPA",
    },
    ShortFormRule::Acronym {
        full: "General Services Administration",
        abbr: "GSA",
    },
    ShortFormRule::Acronym {
        full: "Social Security Administration",
        abbr: "SSA",
    },
    ShortFormRule::Acronym {
        full: "National Science Foundation",
        abbr: "NSF",
    },
    ShortFormRule::Acronym {
        full: "Office of Personnel Management",
        abbr: "OPM",
    },
    ShortFormRule::Acronym {
        full: "Department of Defense",
        abbr: "DOD",
    },
    ShortFormRule::Acronym {
        full: "Department of Homeland Security",
        abbr: "DHS",
    },
    ShortFormRule::Acronym {
        full: "Department of Health and Human Services",
        abbr: "HHS",
    },
    ShortFormRule::Acronym {
        full: "Department of Veterans Affairs",
        abbr: "VA",
    },
    ShortFormRule::Acronym {
        full: "U.S. Agency for International Development",
        abbr: "USAID",
    },
    ShortFormRule::StripPrefix("Department of the "),
    ShortFormRule::StripPrefix("Department of "),
    ShortFormRule::StripPrefix("Office of the "),
    ShortFormRule::StripPrefix("Office of "),
];

/// Federal pay plan codes to canonical plan names.
pub const PAY_PLANS: &[(&str, &str)] = &[
    ("GS", "General Schedule"),
    ("GM", "General Schedule (Senior)"),
    ("GG", "General Schedule (Defense)"),
    ("GL", "General Schedule (Law Enforcement)"),
    ("GW", "General Schedule (Workers)"),
    ("GP", "General Practice (VA Physicians)"),
    ("VM", "VA Title 38 (Medical)"),
    ("VN", "VA Nurse"),
    ("VP", "VA Podiatrist/Optometrist"),
    ("VH", "VA Hybrid Title 38"),
    ("AD", "Administratively Determined"),
    ("AL", "Administrative Law Judge"),
    ("EX", "Executive Schedule"),
    ("ES", "Senior Executive Service"),
    ("SL", "Senior Level"),
    ("ST", "Scientific/Professional"),
    ("FP", "Foreign Service Pay"),
    ("FO", "Foreign Service Officer"),
    ("FE", "Foreign Service Executive"),
    ("FV", "FAA Core Compensation"),
    ("FG", "Federal Wage System (Supervisory)"),
    ("WE", "Wage Employee"),
    ("NH", "DoD Acquisition (Professional)"),
    ("NJ", "DoD Acquisition (Technical)"),
    ("NK", "DoD Acquisition (Administrative)"),
    ("ND", "DoD Science & Technology"),
    ("CG", "Coast Guard"),
    ("CM", "Commissioned Corps (PHS)"),
    ("DA", "Defense Civilian Intelligence"),
    ("IC", "Intelligence Community"),
    ("LE", "Law Enforcement"),
    ("PG", "Postal (Graded)"),
    ("SV", "TSA Security"),
    ("TR", "Transportation"),
    ("ZA", "NIST (Professional)"),
    ("ZP", "NIST (Scientific)"),
    ("ZS", "NIST (Support)"),
    ("ZT", "NIST (Technical)"),
    ("ZZ", "Miscellaneous Pay Plan"),
];
