pub mod address;
pub mod cancel_order;
pub mod depth;
pub mod get_orders;
pub mod info;
pub mod new_order;
pub mod ticker;
pub mod trades;
pub mod withdraw;
