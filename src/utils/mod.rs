pub mod client_ip;
pub mod db_error;
pub mod token_generator;
