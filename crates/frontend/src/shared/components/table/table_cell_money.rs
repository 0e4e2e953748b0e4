//! Table cell for amounts in soles
//!
//! ```rust,ignore
//! <TableCellMoney value=Signal::derive(move || Some(payment.total)) />
//! <TableCellMoney value=total bold=true />
//! ```

use crate::shared::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => format_money(v),
        None => "—".to_string(),
    };

    let cell_style = if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{formatted_text}</span>
        </TableCell>
    }
}
