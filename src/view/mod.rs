//! View projection: the pure pipeline from raw records to what is shown.
//!
//! [`project`] derives counts, the filtered and sorted rows, and the visible
//! column set from a record slice and an immutable [`ViewState`]. It holds no
//! state between calls; the hosting shell owns the `ViewState` and rebuilds
//! it on every input change.
//!
//! [`registrations`] then maps a [`DerivedView`] to a UI-agnostic
//! [`common::TableViewModel`] that the TUI renders.

pub mod common;
pub mod registrations;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::model::{Registration, RegistrationType};

/// Registration type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(RegistrationType),
}

impl TypeFilter {
    pub fn all() -> &'static [TypeFilter] {
        &[
            TypeFilter::All,
            TypeFilter::Only(RegistrationType::Student),
            TypeFilter::Only(RegistrationType::Professional),
        ]
    }

    pub fn allows(&self, kind: RegistrationType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(only) => *only == kind,
        }
    }

    /// All -> Student -> Professional -> All.
    pub fn next(&self) -> TypeFilter {
        match self {
            TypeFilter::All => TypeFilter::Only(RegistrationType::Student),
            TypeFilter::Only(RegistrationType::Student) => {
                TypeFilter::Only(RegistrationType::Professional)
            }
            TypeFilter::Only(RegistrationType::Professional) => TypeFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Only(kind) => kind.label(),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(TypeFilter::All);
        }
        RegistrationType::parse(s)
            .map(TypeFilter::Only)
            .ok_or_else(|| format!("unknown type '{s}' (expected all, student or professional)"))
    }
}

/// Order of rows by registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn toggle(&self) -> SortOrder {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            _ => Err(format!("unknown sort order '{s}' (expected newest or oldest)")),
        }
    }
}

/// Optional table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Phone,
    Company,
    Date,
}

impl Column {
    pub fn all() -> &'static [Column] {
        &[Column::Phone, Column::Company, Column::Date]
    }

    /// Label used in the column menu.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Phone => "Phone Contact",
            Column::Company => "Organization",
            Column::Date => "Registration Date",
        }
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "phone" => Ok(Column::Phone),
            "company" | "organization" => Ok(Column::Company),
            "date" => Ok(Column::Date),
            _ => Err(format!("unknown column '{s}' (expected phone, company or date)")),
        }
    }
}

/// Visibility of the optional columns. Every column starts visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnVisibility {
    pub phone: bool,
    pub company: bool,
    pub date: bool,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            phone: true,
            company: true,
            date: true,
        }
    }
}

impl ColumnVisibility {
    pub fn is_visible(&self, column: Column) -> bool {
        match column {
            Column::Phone => self.phone,
            Column::Company => self.company,
            Column::Date => self.date,
        }
    }

    pub fn set(&mut self, column: Column, visible: bool) {
        match column {
            Column::Phone => self.phone = visible,
            Column::Company => self.company = visible,
            Column::Date => self.date = visible,
        }
    }

    pub fn toggle(&mut self, column: Column) {
        self.set(column, !self.is_visible(column));
    }
}

/// Every input the projector needs. Owned and mutated by the shell only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Literal search text, matched case-insensitively against name/email.
    pub search: String,
    pub type_filter: TypeFilter,
    pub sort_order: SortOrder,
    pub columns: ColumnVisibility,
}

impl ViewState {
    /// True when search or type filter would hide records.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.type_filter != TypeFilter::All
    }

    /// Resets search and type filter. Sort order and columns are kept.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.type_filter = TypeFilter::All;
    }
}

/// Aggregate counts over the whole (unfiltered) collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub students: usize,
    pub professionals: usize,
}

impl Stats {
    pub fn from_records(records: &[Registration]) -> Self {
        records.iter().fold(
            Stats {
                total: records.len(),
                ..Stats::default()
            },
            |mut acc, r| {
                match r.registration_type {
                    RegistrationType::Student => acc.students += 1,
                    RegistrationType::Professional => acc.professionals += 1,
                }
                acc
            },
        )
    }
}

/// Result of one projection. Rows borrow from the input records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView<'a> {
    pub stats: Stats,
    pub rows: Vec<&'a Registration>,
    pub columns: ColumnVisibility,
}

/// Projects `records` through `state`.
///
/// Counts are taken before filtering. Rows keep a record iff the type filter
/// allows it and the search text (if any) is a case-insensitive substring of
/// its name or email. Rows are then stably sorted by `created_at`, so equal
/// timestamps keep their input order in both directions.
pub fn project<'a>(records: &'a [Registration], state: &ViewState) -> DerivedView<'a> {
    let stats = Stats::from_records(records);
    let needle = state.search.to_lowercase();

    let mut rows: Vec<&Registration> = records
        .iter()
        .filter(|r| state.type_filter.allows(r.registration_type))
        .filter(|r| r.matches_search(&needle))
        .collect();

    match state.sort_order {
        SortOrder::Newest => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => rows.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }

    DerivedView {
        stats,
        rows,
        columns: state.columns,
    }
}
