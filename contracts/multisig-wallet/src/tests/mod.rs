
mod initialize_test;
