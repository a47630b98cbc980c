pub mod browse_modal;
pub mod date_field;
pub mod pagination_controls;
