pub mod maps;
pub mod photos;
pub mod routes;
pub mod sessions;
