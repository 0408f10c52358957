pub mod scopy;
