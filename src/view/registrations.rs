//! Registrations table view model.

use crate::fmt::{PLACEHOLDER, format_date};
use crate::model::{RecordId, Registration, RegistrationType};
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};
use crate::view::{Column, DerivedView, ViewState};

const HEADERS: &[&str] = &["NAME", "EMAIL", "TYPE"];
const WIDTHS: &[u16] = &[22, 28, 12];

/// Optional columns in display order.
const OPTIONAL_ORDER: &[Column] = &[Column::Company, Column::Phone, Column::Date];

fn optional_header(column: Column) -> &'static str {
    match column {
        Column::Company => "ORGANIZATION",
        Column::Phone => "CONTACT",
        Column::Date => "REGISTERED ON",
    }
}

fn optional_width(column: Column) -> u16 {
    match column {
        Column::Company => 20,
        Column::Phone => 18,
        Column::Date => 18,
    }
}

fn optional_cell(r: &Registration, column: Column) -> ViewCell {
    let value = match column {
        Column::Company => r.display_company().map(str::to_string),
        Column::Phone => r.phone.clone(),
        Column::Date => Some(format_date(&r.created_at)),
    };
    match value {
        Some(text) => ViewCell::plain(text),
        None => ViewCell::styled(PLACEHOLDER.to_string(), RowStyleClass::Dimmed),
    }
}

fn type_style(kind: RegistrationType) -> RowStyleClass {
    match kind {
        RegistrationType::Student => RowStyleClass::Student,
        RegistrationType::Professional => RowStyleClass::Professional,
    }
}

/// Builds a UI-agnostic view model from a projected view.
///
/// Name, email and type always come first; organization, contact and
/// registration date follow, each only if visible.
pub fn build_registrations_view(
    view: &DerivedView<'_>,
    state: &ViewState,
) -> TableViewModel<RecordId> {
    let visible: Vec<Column> = OPTIONAL_ORDER
        .iter()
        .copied()
        .filter(|c| view.columns.is_visible(*c))
        .collect();

    let mut headers: Vec<String> = HEADERS.iter().map(|s| s.to_string()).collect();
    headers.extend(visible.iter().map(|c| optional_header(*c).to_string()));

    let mut widths = WIDTHS.to_vec();
    widths.extend(visible.iter().map(|c| optional_width(*c)));

    let rows = view
        .rows
        .iter()
        .map(|r| {
            let mut cells = vec![
                ViewCell::plain(r.name.clone()),
                ViewCell::plain(r.email.clone()),
                ViewCell::styled(
                    r.registration_type.label().to_string(),
                    type_style(r.registration_type),
                ),
            ];
            cells.extend(visible.iter().map(|c| optional_cell(r, *c)));
            ViewRow {
                id: r.id.clone(),
                cells,
                style: RowStyleClass::Normal,
            }
        })
        .collect();

    let search_info = if state.search.is_empty() {
        String::new()
    } else {
        format!(" [search: {}]", state.search)
    };
    let title = format!(
        "Registrations ({} of {}, sort: {}, type: {}){search_info}",
        view.rows.len(),
        view.stats.total,
        state.sort_order.label(),
        state.type_filter.label().to_lowercase(),
    );

    TableViewModel {
        title,
        headers,
        widths,
        rows,
    }
}
