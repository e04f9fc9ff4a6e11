mod intensity_test;
mod user_test;
