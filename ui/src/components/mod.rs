pub mod app;
pub mod dashboard_view;
pub mod landing;
pub mod sales_chart;
pub mod shared_state;
pub mod slip_detail;
pub mod slips_view;
