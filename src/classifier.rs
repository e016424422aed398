// 🏷️ TIN Classifier - Malaysia TIN/NIRC format rules as ordered checks
// Pure classification: normalized string in, structured outcome out

use serde::{Deserialize, Serialize};

// ============================================================================
// GENERAL TIN REGISTRY
// ============================================================================

/// General TINs are shared identifiers for whole categories of taxpayers
/// (general public, foreign buyers, etc.), not tied to one person or company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneralTin {
    GeneralPublic,
    ForeignBuyer,
    ForeignSupplier,
    SpecialCaseBuyer,
}

impl GeneralTin {
    /// Descriptive label as published by LHDN
    pub fn label(&self) -> &'static str {
        match self {
            GeneralTin::GeneralPublic => "General Public's TIN",
            GeneralTin::ForeignBuyer => "Foreign Buyer's TIN",
            GeneralTin::ForeignSupplier => "Foreign Supplier's TIN",
            GeneralTin::SpecialCaseBuyer => "Buyer's TIN for special cases",
        }
    }
}

/// Fixed registry of literal General TINs. Lookup is exact and case-sensitive;
/// inputs go through `normalize` first.
pub const GENERAL_TINS: [(&str, GeneralTin); 4] = [
    ("EI00000000010", GeneralTin::GeneralPublic),
    ("EI00000000020", GeneralTin::ForeignBuyer),
    ("EI00000000030", GeneralTin::ForeignSupplier),
    ("EI00000000040", GeneralTin::SpecialCaseBuyer),
];

fn general_tin_lookup(tin: &str) -> Option<GeneralTin> {
    GENERAL_TINS
        .iter()
        .find(|(literal, _)| *literal == tin)
        .map(|(_, general)| *general)
}

// ============================================================================
// CLASSIFICATION OUTCOME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TinType {
    /// Personal taxpayer number
    Individual,

    /// Company / organization taxpayer number
    NonIndividual,

    /// Shared category number from the General TIN registry
    General,
}

impl TinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TinType::Individual => "Individual TIN",
            TinType::NonIndividual => "Non-Individual TIN",
            TinType::General => "General TIN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TinCategory {
    /// Current numbering format
    NewVersion,

    /// Pre-revision NIRC-derived format
    OldVersion,

    /// Registry entry with its own descriptive label
    General(GeneralTin),
}

impl TinCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TinCategory::NewVersion => "New Version",
            TinCategory::OldVersion => "Old Version",
            TinCategory::General(general) => general.label(),
        }
    }
}

/// Outcome of classifying one candidate. Type and category only exist on the
/// `Valid` arm, so "valid implies type+category present" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationOutcome {
    Valid {
        tin_type: TinType,
        category: TinCategory,
    },
    Invalid,
}

impl ClassificationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ClassificationOutcome::Valid { .. })
    }

    fn valid(tin_type: TinType, category: TinCategory) -> Self {
        ClassificationOutcome::Valid { tin_type, category }
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Normalization applied by callers before `classify`: surrounding whitespace
/// stripped, letters upper-cased. Idempotent.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Classify a normalized TIN/NIRC candidate against the format rules.
///
/// Rules are checked in a fixed order and the first match wins. The registry
/// is checked before any prefix rule so a literal always resolves through the
/// registry even if it were to overlap a prefix pattern.
pub fn classify(tin: &str) -> ClassificationOutcome {
    // Rule 1: General TIN registry
    if let Some(general) = general_tin_lookup(tin) {
        return ClassificationOutcome::valid(TinType::General, TinCategory::General(general));
    }

    // Rule 2: new-format Individual TIN (IG + 10 digits)
    if tin.starts_with("IG") && tin.len() == 12 {
        return ClassificationOutcome::valid(TinType::Individual, TinCategory::NewVersion);
    }

    // Rule 3: new-format Non-Individual TIN (C/D/E/F + 10 digits)
    if has_company_prefix(tin) && tin.len() == 11 {
        return ClassificationOutcome::valid(TinType::NonIndividual, TinCategory::NewVersion);
    }

    // Rule 4: old-format Individual TIN (SG/OG + 9 digits)
    if (tin.starts_with("SG") || tin.starts_with("OG")) && tin.len() == 11 {
        return ClassificationOutcome::valid(TinType::Individual, TinCategory::OldVersion);
    }

    // Rule 5: old-format Non-Individual TIN (C/D/E/F + 9 digits)
    if has_company_prefix(tin) && tin.len() == 10 {
        return ClassificationOutcome::valid(TinType::NonIndividual, TinCategory::OldVersion);
    }

    ClassificationOutcome::Invalid
}

/// First-character check for the Non-Individual prefixes. Empty input simply
/// fails the check instead of faulting.
fn has_company_prefix(tin: &str) -> bool {
    matches!(tin.as_bytes().first(), Some(b'C' | b'D' | b'E' | b'F'))
}

// ============================================================================
// TESTS
// ============================================================================
