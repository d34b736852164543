pub mod ast;
pub mod demo;
pub mod run;
