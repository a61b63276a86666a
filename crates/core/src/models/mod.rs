pub mod lesson;
pub mod reference;
