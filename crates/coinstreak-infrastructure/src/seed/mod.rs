mod json_seed_repo;
mod static_seed_repo;

pub use json_seed_repo::JsonSeedRepository;
pub use static_seed_repo::StaticSeedRepository;
