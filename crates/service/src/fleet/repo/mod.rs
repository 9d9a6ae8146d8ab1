pub mod seaorm;

pub use seaorm::SeaOrmFleetRepository;
