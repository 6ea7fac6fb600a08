pub mod fetch_all_data;
pub mod fetch_data;
pub mod fetch_summary;
