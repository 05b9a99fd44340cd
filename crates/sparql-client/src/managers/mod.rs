mod health;

pub use health::HealthManager;
