mod api;
mod resolution;
