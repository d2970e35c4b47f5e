//! Static metric tables for the supported CVSS versions.
//!
//! Pure data. The two versions overlap but are distinct: 3.1 scores impact
//! with `C`/`I`/`A` and carries `S` (Scope), while 4.0 splits impact into
//! vulnerable-system (`VC`/`VI`/`VA`) and subsequent-system (`SC`/`SI`/`SA`)
//! metrics and adds a Passive option to `UI`.

/// One scored CVSS metric: its abbreviation plus the value codes it accepts.
#[derive(Debug)]
pub struct MetricDef {
    pub abbrev: &'static str,
    pub values: &'static [(&'static str, &'static str)],
}

macro_rules! metric_def {
    ($abbrev:literal, { $($code:literal => $desc:literal),+ $(,)? }) => {
        MetricDef {
            abbrev: $abbrev,
            values: &[$(($code, $desc)),+],
        }
    };
}

pub const CVSS_3_1: &[MetricDef] = &[
    metric_def!("AV", {
        "N" => "Attack Vector: Network",
        "A" => "Attack Vector: Adjacent",
        "L" => "Attack Vector: Local",
        "P" => "Attack Vector: Physical",
    }),
    metric_def!("AC", {
        "L" => "Attack Complexity: Low",
        "H" => "Attack Complexity: High",
    }),
    metric_def!("PR", {
        "N" => "Privileges Required: None",
        "L" => "Privileges Required: Low",
        "H" => "Privileges Required: High",
    }),
    metric_def!("UI", {
        "N" => "User Interaction: None",
        "R" => "User Interaction: Required",
    }),
    metric_def!("S", {
        "U" => "Scope: Unchanged",
        "C" => "Scope: Changed",
    }),
    metric_def!("C", {
        "H" => "Confidentiality: High",
        "L" => "Confidentiality: Low",
        "N" => "Confidentiality: None",
    }),
    metric_def!("I", {
        "H" => "Integrity: High",
        "L" => "Integrity: Low",
        "N" => "Integrity: None",
    }),
    metric_def!("A", {
        "H" => "Availability: High",
        "L" => "Availability: Low",
        "N" => "Availability: None",
    }),
];

pub const CVSS_4_0: &[MetricDef] = &[
    metric_def!("AV", {
        "N" => "Attack Vector: Network",
        "A" => "Attack Vector: Adjacent",
        "L" => "Attack Vector: Local",
        "P" => "Attack Vector: Physical",
    }),
    metric_def!("AC", {
        "L" => "Attack Complexity: Low",
        "H" => "Attack Complexity: High",
    }),
    metric_def!("PR", {
        "N" => "Privileges Required: None",
        "L" => "Privileges Required: Low",
        "H" => "Privileges Required: High",
    }),
    metric_def!("UI", {
        "N" => "User Interaction: None",
        "P" => "User Interaction: Passive",
        "A" => "User Interaction: Active",
    }),
    metric_def!("VC", {
        "H" => "Vulnerability Confidentiality: High",
        "L" => "Vulnerability Confidentiality: Low",
        "N" => "Vulnerability Confidentiality: None",
    }),
    metric_def!("VI", {
        "H" => "Vulnerability Integrity: High",
        "L" => "Vulnerability Integrity: Low",
        "N" => "Vulnerability Integrity: None",
    }),
    metric_def!("VA", {
        "H" => "Vulnerability Availability: High",
        "L" => "Vulnerability Availability: Low",
        "N" => "Vulnerability Availability: None",
    }),
    metric_def!("SC", {
        "H" => "System Confidentiality: High",
        "L" => "System Confidentiality: Low",
        "N" => "System Confidentiality: None",
    }),
    metric_def!("SI", {
        "H" => "System Integrity: High",
        "L" => "System Integrity: Low",
        "N" => "System Integrity: None",
    }),
    metric_def!("SA", {
        "H" => "System Availability: High",
        "L" => "System Availability: Low",
        "N" => "System Availability: None",
    }),
    metric_def!("S", {
        "U" => "Scope: Unchanged",
        "C" => "Scope: Changed",
    }),
];

/// Two-level lookup: metric abbreviation first, then value code.
pub fn lookup(table: &[MetricDef], metric: &str, value: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|def| def.abbrev == metric)?
        .values
        .iter()
        .find(|(code, _)| *code == value)
        .map(|(_, description)| *description)
}
