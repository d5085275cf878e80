pub mod health_route;
pub mod pr_merged_route;
