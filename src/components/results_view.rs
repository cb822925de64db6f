//! Result tables, one titled block per table key.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders [`RenderedTable`] values produced by the state layer. The whole
//! region is rebuilt whenever the result list changes; nothing from a
//! previous answer survives.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::render::{CellLine, RenderedCell, RenderedTable};
use crate::state::workspace::WorkspaceState;

const EMPHASIS_STYLE: &str = "font-weight:bold;background:#fde68a";

/// All tables from the last applied response.
#[component]
pub fn ResultsView() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    let tables = move || workspace.with(|w| w.results.clone());

    view! {
        <section class="results" id="results">
            {move || tables().into_iter().map(result_table).collect_view()}
        </section>
    }
}

fn result_table(table: RenderedTable) -> impl IntoView {
    let header = table
        .header
        .into_iter()
        .map(|label| view! { <th>{label}</th> })
        .collect_view();
    let rows = table
        .rows
        .into_iter()
        .map(|row| {
            let cells = row.cells.into_iter().map(result_cell).collect_view();
            view! {
                <tr>
                    <th scope="row">{row.label}</th>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="results__table" data-key=table.key>
            <h3>{table.title}</h3>
            <table>
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

fn result_cell(cell: RenderedCell) -> impl IntoView {
    let lines = cell
        .lines
        .into_iter()
        .map(|line| match line {
            CellLine::Plain(text) => view! { <div>{text}</div> }.into_any(),
            CellLine::Emphasized { label, value } => view! {
                <div>
                    {label}
                    " "
                    <span class="results__residual" style=EMPHASIS_STYLE>{value}</span>
                </div>
            }
            .into_any(),
        })
        .collect_view();

    view! { <td>{lines}</td> }
}
