
mod orders_test;
mod seed_test;
mod users_test;
