//! Sidebar navigation, grouped into the storefront and the back office.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "shop",
            label: "Tienda",
            items: vec![
                ("/shop", "Productos", "store"),
                ("/shop/cart", "Carrito", "cart"),
            ],
        },
        MenuGroup {
            id: "admin",
            label: "Administración",
            items: vec![
                ("/admin/inventory", "Inventario", "inventory"),
                ("/admin/orders", "Órdenes", "orders"),
                ("/admin/sales", "Ventas", "payments"),
                ("/admin/users", "Usuarios", "users"),
            ],
        },
    ]
}

/// Whether the menu entry `href` owns the current `pathname`.
/// Nested pages (e.g. `/admin/users/create`) keep their section highlighted;
/// `/shop` is matched exactly so the cart does not light up the catalog.
fn is_active(pathname: &str, href: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    if href == "/shop" {
        return pathname == href;
    }
    pathname == href || pathname.starts_with(&format!("{}/", href))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group" data-group=group.id>
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|(href, label, icon_name)| {
                            view! {
                                <A
                                    href=href
                                    attr:class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || {
                                        location.pathname.with(|p| is_active(p, href))
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </div>
                                </A>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(is_active("/admin/users", "/admin/users"));
        assert!(is_active("/admin/users/create", "/admin/users"));
        assert!(is_active("/admin/inventory/", "/admin/inventory"));
        assert!(!is_active("/admin/usersx", "/admin/users"));
        assert!(is_active("/shop", "/shop"));
        assert!(!is_active("/shop/cart", "/shop"));
        assert!(is_active("/shop/cart", "/shop/cart"));
    }

    #[test]
    fn test_menu_covers_every_section() {
        let hrefs: Vec<&str> = get_menu_groups()
            .iter()
            .flat_map(|g| g.items.iter().map(|(href, _, _)| *href))
            .collect();
        assert_eq!(hrefs.len(), 6);
        assert!(hrefs.contains(&"/admin/sales"));
    }
}
