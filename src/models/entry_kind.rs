use serde::Serialize;

/// The three things a user can log.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Activity,
    PainCheckin,
    BodyWeight,
}

impl EntryKind {
    /// Parse a user supplied label.
    ///
    /// Accepts the short codes used on the command line as well as the
    /// spreadsheet labels older logs carry ("Symptom Log", "Weight Log").
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "activity" | "a" => Some(Self::Activity),
            "pain" | "p" | "pain-checkin" | "pain check-in" | "symptom log" => {
                Some(Self::PainCheckin)
            }
            "weight" | "w" | "body-weight" | "weight log" => Some(Self::BodyWeight),
            _ => None,
        }
    }

    /// Kind of a spreadsheet row from its "Activity Type" cell.
    ///
    /// Check-ins and weigh-ins were stored under the pseudo activity types
    /// "Symptom Log" and "Weight Log"; any other label is a real activity.
    pub fn from_sheet_label(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "symptom log" => Self::PainCheckin,
            "weight log" => Self::BodyWeight,
            _ => Self::Activity,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryKind::Activity => "activity",
            EntryKind::PainCheckin => "pain",
            EntryKind::BodyWeight => "weight",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "activity" => Some(EntryKind::Activity),
            "pain" => Some(EntryKind::PainCheckin),
            "weight" => Some(EntryKind::BodyWeight),
            _ => None,
        }
    }

    /// Human readable label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Activity => "Activity",
            EntryKind::PainCheckin => "Pain check-in",
            EntryKind::BodyWeight => "Body weight",
        }
    }

    pub fn is_activity(&self) -> bool {
        matches!(self, EntryKind::Activity)
    }
}
