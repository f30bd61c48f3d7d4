mod boundaries;
mod common;
