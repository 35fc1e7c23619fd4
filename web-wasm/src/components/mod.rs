pub mod header;
pub mod login_panel;
pub mod application_form;
pub mod dashboard_panel;
pub mod notice;
