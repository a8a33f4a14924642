pub mod assessment;
pub mod history;
pub mod intervention;
pub mod risk;
pub mod subject;
pub mod trend;
pub mod wellness;
