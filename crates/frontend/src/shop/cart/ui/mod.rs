mod cart_details;
mod cart_table;
mod page;
mod pay_order_button;
mod payment_method_selector;
mod quantity_selector;

pub use page::CartPage;
