pub mod bmi;
pub mod lunch;
pub mod student;

pub use bmi::{BmiCategory, BmiResult};
pub use lunch::LunchIdea;
pub use student::{Country, Sex, StudentInput};
