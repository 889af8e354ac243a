pub mod flow;
pub mod predictor;
pub mod presentation;
