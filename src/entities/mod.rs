pub mod awards;
pub mod companies;
pub mod movie_actors;
pub mod movie_awards;
pub mod movie_companies;
pub mod movies;
pub mod operation_logs;
pub mod people;
pub mod people_awards;
pub mod ui_settings;
