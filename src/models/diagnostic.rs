use std::fmt;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Expected gaps, e.g. a fallback slug
    Info,
    /// Data the index had to degrade or skip
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "Info"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

/// Attribute that resolved to its empty/absent state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    SlugFallback,
    ProjectKeyFallback,
    Emirate,
    City,
    Area,
    Developer,
    PropertyTypes,
    BedroomsMin,
    BedroomsMax,
    HandoverYear,
    PriceFromAed,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        match self {
            MissingField::SlugFallback => "slug (fallback used)",
            MissingField::ProjectKeyFallback => "project_key (fallback used)",
            MissingField::Emirate => "_search.emirate",
            MissingField::City => "_search.city",
            MissingField::Area => "_search.area",
            MissingField::Developer => "_search.developer",
            MissingField::PropertyTypes => "_search.property_types",
            MissingField::BedroomsMin => "_search.bedrooms_min",
            MissingField::BedroomsMax => "_search.bedrooms_max",
            MissingField::HandoverYear => "_search.handover_year",
            MissingField::PriceFromAed => "_search.price_from_aed",
        }
    }

    /// Fallbacks are informational rather than a hard miss
    pub fn is_fallback(&self) -> bool {
        matches!(self, MissingField::SlugFallback | MissingField::ProjectKeyFallback)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Source file is not valid JSON
    ParseError { reason: String },
    /// Source file could not be read
    Unreadable { reason: String },
    /// Source file exceeds the size limit
    Oversized { size: u64, limit: u64 },
    /// Source directory exists but could not be listed
    SourceDirUnreadable { reason: String },
    /// Consolidated list of unresolved attributes for one record
    MissingFields(Vec<MissingField>),
    /// Key already used by an earlier record
    DuplicateKey { key: String, first_file: String },
    /// Slug already used by an earlier record
    DuplicateSlug { slug: String, first_file: String },
    /// Bedroom range too wide to expand into tokens
    BedroomSpanTooWide { min: i64, max: i64 },
}

/// One finding produced by a pipeline stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// File name the finding is about, if any
    pub file: Option<String>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn warning(file: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self { severity: Severity::Warning, file: Some(file.into()), kind }
    }

    pub fn info(file: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self { severity: Severity::Info, file: Some(file.into()), kind }
    }

    /// Missing-field report for a record, or `None` if nothing is missing.
    ///
    /// Severity is `Info` when only fallbacks were used.
    pub fn missing_fields(file: impl Into<String>, missing: Vec<MissingField>) -> Option<Self> {
        if missing.is_empty() {
            return None;
        }
        let severity = if missing.iter().all(MissingField::is_fallback) {
            Severity::Info
        } else {
            Severity::Warning
        };
        Some(Self { severity, file: Some(file.into()), kind: DiagnosticKind::MissingFields(missing) })
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file.as_deref().unwrap_or("<unknown>");
        match &self.kind {
            DiagnosticKind::ParseError { reason } => {
                write!(f, "JSON parse error: {} ({}), skipped", file, reason)
            }
            DiagnosticKind::Unreadable { reason } => {
                write!(f, "Failed to read {}: {}, skipped", file, reason)
            }
            DiagnosticKind::Oversized { size, limit } => {
                write!(f, "File too large: {} ({} bytes, max {} bytes), skipped", file, size, limit)
            }
            DiagnosticKind::SourceDirUnreadable { reason } => {
                write!(f, "Failed to read source directory {}: {}", file, reason)
            }
            DiagnosticKind::MissingFields(missing) => {
                let labels: Vec<&str> = missing.iter().map(MissingField::label).collect();
                write!(f, "Missing in {}: {}", file, labels.join(", "))
            }
            DiagnosticKind::DuplicateKey { key, first_file } => {
                write!(f, "Duplicate key \"{}\" in {} (first used in {})", key, file, first_file)
            }
            DiagnosticKind::DuplicateSlug { slug, first_file } => {
                write!(f, "Duplicate slug \"{}\" in {} (first used in {})", slug, file, first_file)
            }
            DiagnosticKind::BedroomSpanTooWide { min, max } => {
                write!(f, "Bedroom range {}..={} in {} too wide, no bedroom tokens", min, max, file)
            }
        }
    }
}
