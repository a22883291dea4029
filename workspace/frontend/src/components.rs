pub mod forecast;
pub mod status;
