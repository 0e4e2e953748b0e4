use leptos::prelude::*;
use thaw::*;

/// Placeholder rows shown while a page of data is loading
#[component]
pub fn TableSkeleton(
    #[prop(into)]
    rows: Signal<usize>,
    columns: usize,
) -> impl IntoView {
    view! {
        {move || {
            (0..rows.get().max(1))
                .map(|_| {
                    view! {
                        <TableRow class="table__row--skeleton">
                            {(0..columns)
                                .map(|_| view! {
                                    <TableCell>
                                        <div class="skeleton-bar"></div>
                                    </TableCell>
                                })
                                .collect_view()}
                        </TableRow>
                    }
                })
                .collect_view()
        }}
    }
}
