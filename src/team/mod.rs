pub mod team_model;
