use contracts::system::users::{User, STATUS_ACTIVE, STATUS_INACTIVE};
use leptos::prelude::*;
use leptos_router::components::A;
use std::cmp::Ordering;
use thaw::*;

use crate::shared::components::list_filters::{FilterSelect, LimitToggle, SearchByName};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableSkeleton};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, use_sortable_data, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_params::{use_list_query, FilterParam};
use crate::shared::remote::use_remote_list;
use crate::system::users::api;
use crate::system::users::ui::change_password::ChangePasswordDialog;

const COLUMNS: usize = 8;

const STATUS_OPTIONS: [(&str, &str); 2] = [(STATUS_ACTIVE, "Activos"), (STATUS_INACTIVE, "Inactivos")];

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "dni" => self.dni.cmp(&other.dni),
            "full_name" => cmp_text(&self.full_name(), &other.full_name()),
            "email" => cmp_text(&self.email, &other.email),
            "role" => self.role.cmp(&other.role),
            "status" => self.status.cmp(&other.status),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn UsersList() -> impl IntoView {
    let query = use_list_query(FilterParam::Status);
    let remote = use_remote_list::<User>(Signal::derive(move || query.with(api::list_path)));
    let rows = use_sortable_data::<User>();
    let password_target: RwSignal<Option<User>> = RwSignal::new(None);

    Effect::new(move |_| {
        if let Some(page) = remote.data.get() {
            rows.update(|r| r.update_data(page.data));
        }
    });

    let total = remote.total();
    let skeleton_rows = Signal::derive(move || {
        let limit = query.with(|q| q.limit as usize);
        match total.get() {
            0 => limit,
            t => limit.min(t),
        }
    });
    let sort_key = Signal::derive(move || rows.with(|r| r.sort_key().to_string()));
    let sort_ascending = Signal::derive(move || rows.with(|r| r.is_ascending()));
    let on_sort = Callback::new(move |field: String| rows.update(|r| r.sort(&field)));

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_LIST>
            <PageHeader title="Usuarios">
                <Badge>{move || total.get().to_string()}</Badge>
                <A href="/admin/users/create" attr:class="button button--primary">
                    {icon("plus")}
                    " Nuevo"
                </A>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <SearchByName query=query placeholder="Nombre, DNI o correo..." />
                        <LimitToggle query=query />
                        <FilterSelect query=query label="Estado" options=STATUS_OPTIONS.to_vec() />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Id" sort_field="id" min_width=60.0
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="DNI" sort_field="dni"
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Nombre" sort_field="full_name" min_width=180.0
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Correo" sort_field="email" min_width=160.0
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell>"Celular"</TableHeaderCell>
                                <SortableHeaderCell label="Rol" sort_field="role"
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Estado" sort_field="status"
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                if remote.loading.get() {
                                    view! { <TableSkeleton rows=skeleton_rows columns=COLUMNS /> }.into_any()
                                } else if rows.with(|r| r.is_empty()) {
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMNS.to_string()>
                                                "No hay datos disponibles"
                                            </TableCell>
                                        </TableRow>
                                    }.into_any()
                                } else {
                                    view! {
                                        <For
                                            each=move || rows.with(|r| r.items().to_vec())
                                            key=|u: &User| u.id
                                            children=move |user: User| {
                                                let id = user.id.to_string();
                                                let dni = user.dni.clone();
                                                let full_name = user.full_name();
                                                let email = user.email.clone();
                                                let phone = user.phone.clone();
                                                let is_admin = user.is_admin();
                                                let is_active = user.is_active();
                                                view! {
                                                    <TableRow>
                                                        <TableCell>{id}</TableCell>
                                                        <TableCell>{dni}</TableCell>
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                <span style="font-weight: 500;">{full_name}</span>
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>{email}</TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>{phone}</TableCell>
                                                        <TableCell>
                                                            {if is_admin {
                                                                view! { <span class="badge badge--warning">"Admin"</span> }.into_any()
                                                            } else {
                                                                view! { <span class="badge badge--neutral">"Cliente"</span> }.into_any()
                                                            }}
                                                        </TableCell>
                                                        <TableCell>
                                                            {if is_active {
                                                                view! { <span class="badge badge--success">"Activo"</span> }.into_any()
                                                            } else {
                                                                view! { <span class="badge badge--error">"Inactivo"</span> }.into_any()
                                                            }}
                                                        </TableCell>
                                                        <TableCell>
                                                            <Button
                                                                appearance=ButtonAppearance::Secondary
                                                                on_click=move |_| password_target.set(Some(user.clone()))
                                                            >
                                                                "Cambiar contraseña"
                                                            </Button>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                            }
                                        />
                                    }.into_any()
                                }
                            }}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    query=query
                    total_pages=remote.total_pages()
                    total_count=total
                />

                {move || password_target.get().map(|user| view! {
                    <ChangePasswordDialog
                        user_id=user.id
                        user_name=user.full_name()
                        on_close=Callback::new(move |_| password_target.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}
