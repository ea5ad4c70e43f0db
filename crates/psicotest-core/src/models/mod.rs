pub mod answers;
pub mod interpretation;
pub mod orientation;
pub mod report;
pub mod result;
